use thiserror::Error;

/// Errors surfaced by ledger construction and capped mining.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("difficulty must be at least 1 (got {0})")]
    InvalidDifficulty(u32),

    /// Only returned by the budgeted mining variant; the reference search
    /// loops until it wins.
    #[error("mining aborted after {attempts} attempts without meeting the target")]
    MiningExhausted { attempts: u64 },
}

/// First failing check found while walking the chain.
///
/// `Ledger::is_chain_valid` collapses this to a boolean; the diagnostic
/// variant exists so callers and tests can tell tampering, broken linkage
/// and forged (never-mined) hashes apart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainFault {
    #[error("block {index}: stored hash does not match its recomputed hash")]
    HashMismatch { index: u64 },

    #[error("block {index}: previous_hash does not match the predecessor's hash")]
    BrokenLink { index: u64 },

    #[error("block {index}: hash lacks the {difficulty} required leading zeros")]
    InsufficientWork { index: u64, difficulty: u32 },
}
