use log::{debug, info};

use super::block::{Block, meets_difficulty, mine};
use super::clock::{Clock, SystemClock};
use crate::error::{ChainFault, LedgerError};
use crate::transaction::Transaction;

/// In-memory append-only ledger with Proof-of-Work.
///
/// Single-writer by design: one caller owns and mutates the ledger, and
/// `add_block` occupies the calling thread for the full mining search.
/// `chain` is public and append-only by convention; any out-of-band mutation
/// of an appended block is caught by [`Ledger::validate`].
pub struct Ledger {
    pub chain: Vec<Block>,
    difficulty: u32,
    pending_transactions: Vec<Transaction>,
    clock: Box<dyn Clock>,
}

impl Ledger {
    /// Initialize a ledger with a genesis block, using wall-clock time.
    ///
    /// `difficulty` is fixed for the lifetime of the ledger and must be at
    /// least 1.
    pub fn new(difficulty: u32) -> Result<Self, LedgerError> {
        Self::with_clock(difficulty, Box::new(SystemClock))
    }

    /// Same as [`Ledger::new`] with an injected time source.
    pub fn with_clock(difficulty: u32, clock: Box<dyn Clock>) -> Result<Self, LedgerError> {
        if difficulty == 0 {
            return Err(LedgerError::InvalidDifficulty(difficulty));
        }
        let genesis = Block::genesis(clock.now());
        Ok(Self {
            chain: vec![genesis],
            difficulty,
            pending_transactions: Vec::new(),
            clock,
        })
    }

    /// Return the most recent block in the chain.
    pub fn latest_block(&self) -> &Block {
        self.chain
            .last()
            .expect("ledger always holds at least the genesis block")
    }

    /// Queue a transaction for inclusion in the next mined block. The core
    /// accepts any payload; validation belongs at the ingestion boundary.
    pub fn add_transaction(
        &mut self,
        sender: impl Into<String>,
        recipient: impl Into<String>,
        amount: f64,
    ) {
        let tx = Transaction::new(sender, recipient, amount);
        debug!(
            "tx queued: {} -> {} ({}), pending={}",
            tx.sender,
            tx.recipient,
            tx.amount,
            self.pending_transactions.len() + 1
        );
        self.pending_transactions.push(tx);
    }

    /// Mine a new block carrying `transactions` and append it to the chain.
    ///
    /// The pending buffer is cleared unconditionally afterwards; callers are
    /// expected to pass the pending buffer itself (see [`Ledger::mine_pending`]
    /// for the contract that enforces this).
    pub fn add_block(&mut self, transactions: Vec<Transaction>) -> &Block {
        let index = self.chain.len() as u64;
        let previous_hash = self.latest_block().hash.clone();
        let mut block = Block::new(index, previous_hash, transactions, self.clock.now());

        let (nonce, hash) = mine(&block, self.difficulty);
        block.nonce = nonce;
        block.hash = hash;
        info!(
            "sealed block #{} (hash={}, nonce={})",
            block.index, block.hash, block.nonce
        );

        self.chain.push(block);
        self.pending_transactions.clear();
        self.latest_block()
    }

    /// Mine exactly the current pending buffer.
    pub fn mine_pending(&mut self) -> &Block {
        let transactions = std::mem::take(&mut self.pending_transactions);
        self.add_block(transactions)
    }

    /// Walk the chain and report the first failing check, if any.
    ///
    /// Genesis is trusted by construction; every later block must hash to its
    /// stored digest, link to its predecessor, and carry the difficulty
    /// prefix proving it was actually mined.
    pub fn validate(&self) -> Result<(), ChainFault> {
        for i in 1..self.chain.len() {
            let current = &self.chain[i];
            let previous = &self.chain[i - 1];

            if current.hash != current.compute_hash() {
                return Err(ChainFault::HashMismatch {
                    index: current.index,
                });
            }
            if current.previous_hash != previous.hash {
                return Err(ChainFault::BrokenLink {
                    index: current.index,
                });
            }
            if !meets_difficulty(&current.hash, self.difficulty) {
                return Err(ChainFault::InsufficientWork {
                    index: current.index,
                    difficulty: self.difficulty,
                });
            }
        }
        Ok(())
    }

    /// Validate the entire chain: hashes, linkage and PoW.
    pub fn is_chain_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// The chain in ascending index order, genesis included, for handoff to
    /// external consumers. Serializing the slice yields the exported record
    /// shape directly.
    pub fn snapshot(&self) -> &[Block] {
        debug!("snapshot requested: {} block(s)", self.chain.len());
        &self.chain
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    pub fn pending_transactions(&self) -> &[Transaction] {
        &self.pending_transactions
    }
}
