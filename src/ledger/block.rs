use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::GENESIS_PREVIOUS_HASH;
use crate::error::LedgerError;
use crate::transaction::Transaction;

/// A single block in the ledger holding a list of transactions.
///
/// Field declaration order is the exported snapshot shape; consumers depend
/// on it, so it must not change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    pub timestamp: i64, // Unix timestamp (UTC)
    pub previous_hash: String,
    pub nonce: u64,   // Proof-of-Work nonce
    pub hash: String, // Cached hash of the block
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Create the genesis block (first block in the chain).
    pub fn genesis(timestamp: i64) -> Self {
        let mut block = Self {
            index: 0,
            timestamp,
            previous_hash: String::from(GENESIS_PREVIOUS_HASH),
            nonce: 0,
            hash: String::new(),
            transactions: Vec::new(),
        };
        block.hash = block.compute_hash();
        block
    }

    /// Create a new block (not mined yet) with `nonce = 0` and the hash of
    /// its initial field set. Run it through [`mine`] to satisfy the
    /// difficulty target.
    pub fn new(
        index: u64,
        previous_hash: String,
        transactions: Vec<Transaction>,
        timestamp: i64,
    ) -> Self {
        let mut block = Self {
            index,
            timestamp,
            previous_hash,
            nonce: 0,
            hash: String::new(),
            transactions,
        };
        block.hash = block.compute_hash();
        block
    }

    /// Compute the SHA-256 hash of this block using its fields (excluding
    /// the cached `hash` itself). Transactions are serialized as JSON with
    /// serde's fixed struct field order, and the fields enter the preimage
    /// in a fixed order, so identical field values always yield identical
    /// digests.
    pub fn compute_hash(&self) -> String {
        let txs_json = serde_json::to_string(&self.transactions).expect("serialize txs");
        let preimage = format!(
            "{}:{}:{}:{}:{}",
            self.index, self.timestamp, self.previous_hash, self.nonce, txs_json
        );
        let mut hasher = Sha256::new();
        hasher.update(preimage.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Validate that the cached `hash` matches the block's content and
    /// satisfies the PoW difficulty. (Does NOT validate chain linkage.)
    pub fn is_valid(&self, difficulty: u32) -> bool {
        self.hash == self.compute_hash() && meets_difficulty(&self.hash, difficulty)
    }
}

/// Whether `hash` starts with `difficulty` zero characters.
pub(crate) fn meets_difficulty(hash: &str, difficulty: u32) -> bool {
    let prefix_len = difficulty as usize;
    hash.len() >= prefix_len && hash.as_bytes()[..prefix_len].iter().all(|&b| b == b'0')
}

/// Proof-of-Work search: starting from the block's current nonce, find the
/// first `(nonce, hash)` pair whose hash carries `difficulty` leading zeros.
///
/// Pure with respect to the input block; the caller applies the winning pair.
/// Unbounded: expected cost grows as 16^difficulty and the calling thread is
/// occupied for the whole search.
pub fn mine(block: &Block, difficulty: u32) -> (u64, String) {
    let mut candidate = block.clone();
    loop {
        let hash = candidate.compute_hash();
        if meets_difficulty(&hash, difficulty) {
            return (candidate.nonce, hash);
        }
        candidate.nonce = candidate.nonce.wrapping_add(1);
    }
}

/// Budgeted variant of [`mine`]: gives up after `max_attempts` digests
/// instead of looping forever.
pub fn mine_capped(
    block: &Block,
    difficulty: u32,
    max_attempts: u64,
) -> Result<(u64, String), LedgerError> {
    let mut candidate = block.clone();
    for _ in 0..max_attempts {
        let hash = candidate.compute_hash();
        if meets_difficulty(&hash, difficulty) {
            return Ok((candidate.nonce, hash));
        }
        candidate.nonce = candidate.nonce.wrapping_add(1);
    }
    Err(LedgerError::MiningExhausted {
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::{Block, meets_difficulty, mine, mine_capped};
    use crate::error::LedgerError;
    use crate::transaction::Transaction;

    fn sample_txs() -> Vec<Transaction> {
        vec![
            Transaction::new("Alice", "Bob", 50.0),
            Transaction::new("Bob", "Charlie", 30.0),
        ]
    }

    #[test]
    fn genesis_has_sentinel_and_valid_hash() {
        let b = Block::genesis(1_600_000_000);
        assert_eq!(b.index, 0);
        assert_eq!(b.previous_hash, "0");
        assert_eq!(b.nonce, 0);
        assert!(b.transactions.is_empty());
        assert_eq!(b.hash, b.compute_hash());
        assert_eq!(b.hash.len(), 64);
    }

    #[test]
    fn hash_is_deterministic() {
        let b = Block::new(1, "prev".into(), sample_txs(), 1_600_000_000);
        assert_eq!(b.compute_hash(), b.compute_hash());
        assert_eq!(b.hash, b.compute_hash());
    }

    #[test]
    fn any_single_field_change_flips_the_digest() {
        let base = Block::new(1, "prev".into(), sample_txs(), 1_600_000_000);
        let reference = base.compute_hash();

        let mut b = base.clone();
        b.index = 2;
        assert_ne!(b.compute_hash(), reference);

        let mut b = base.clone();
        b.transactions[0].amount = 51.0;
        assert_ne!(b.compute_hash(), reference);

        let mut b = base.clone();
        b.timestamp += 1;
        assert_ne!(b.compute_hash(), reference);

        let mut b = base.clone();
        b.previous_hash = "other".into();
        assert_ne!(b.compute_hash(), reference);

        let mut b = base.clone();
        b.nonce += 1;
        assert_ne!(b.compute_hash(), reference);
    }

    #[test]
    fn mining_finds_a_qualifying_pair_without_mutating_input() {
        let b = Block::new(1, "prev".into(), sample_txs(), 1_600_000_000);
        let before = b.clone();

        let (nonce, hash) = mine(&b, 2);
        assert!(hash.starts_with("00"));

        // Input untouched.
        assert_eq!(b.nonce, before.nonce);
        assert_eq!(b.hash, before.hash);

        // The pair is the real digest of the final field set.
        let mut sealed = b;
        sealed.nonce = nonce;
        sealed.hash = hash;
        assert_eq!(sealed.hash, sealed.compute_hash());
        assert!(sealed.is_valid(2));
    }

    #[test]
    fn capped_mining_reports_exhaustion() {
        let b = Block::new(1, "prev".into(), sample_txs(), 1_600_000_000);
        // 64 leading zeros is the all-zero digest; three attempts won't find it.
        let err = mine_capped(&b, 64, 3).unwrap_err();
        match err {
            LedgerError::MiningExhausted { attempts } => assert_eq!(attempts, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn capped_mining_succeeds_within_a_generous_budget() {
        let b = Block::new(1, "prev".into(), sample_txs(), 1_600_000_000);
        let (nonce, hash) = mine_capped(&b, 1, 1_000_000).unwrap();
        assert!(hash.starts_with('0'));
        assert_eq!(mine(&b, 1), (nonce, hash));
    }

    #[test]
    fn difficulty_prefix_check() {
        assert!(meets_difficulty("00ab", 2));
        assert!(!meets_difficulty("0a0b", 2));
        assert!(meets_difficulty("anything", 0));
        // Prefix longer than the digest can never match.
        assert!(!meets_difficulty("000", 4));
    }

    #[test]
    fn invalid_when_mutated_after_mining() {
        let mut b = Block::new(2, "prev".into(), sample_txs(), 1_600_000_000);
        let (nonce, hash) = mine(&b, 2);
        b.nonce = nonce;
        b.hash = hash.clone();
        assert!(b.is_valid(2));

        b.transactions.push(Transaction::new("Mallory", "Mallory", 1e9));
        assert_ne!(hash, b.compute_hash());
        assert!(!b.is_valid(2));
    }
}
