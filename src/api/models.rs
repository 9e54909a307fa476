use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::error::LedgerError;
use crate::ledger::{Block, DEFAULT_DIFFICULTY, Ledger};
use crate::transaction::Transaction;

/// Shared application state owning the in-memory ledger.
///
/// A single mutex matches the ledger's single-writer model: mining holds the
/// lock for the whole Proof-of-Work search, so concurrent requests queue up
/// behind it rather than racing the chain.
pub struct AppState {
    pub ledger: Mutex<Ledger>,
}

impl AppState {
    pub fn new(difficulty: u32) -> Result<Self, LedgerError> {
        Ok(Self {
            ledger: Mutex::new(Ledger::new(difficulty)?),
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_DIFFICULTY).expect("default difficulty is positive")
    }
}

/* ---------- Chain API Models ---------- */

#[derive(Serialize)]
pub struct ChainResponse<'a> {
    pub length: usize,
    pub difficulty: u32,
    pub chain: &'a [Block],
}

#[derive(Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub length: usize,
    pub difficulty: u32,
    /// Human-readable description of the first failing check, if any.
    pub fault: Option<String>,
}

#[derive(Serialize)]
pub struct MineResponse {
    pub mined_index: u64,
    pub hash: String,
    pub nonce: u64,
    pub difficulty: u32,
}

#[derive(Serialize)]
pub struct DifficultyResponse {
    pub difficulty: u32,
}

/* ---------- TX API Models ---------- */

#[derive(Deserialize)]
pub struct NewTxRequest {
    pub sender: String,
    pub recipient: String,
    pub amount: f64,
}

#[derive(Serialize)]
pub struct NewTxResponse {
    pub pending_size: usize,
}

#[derive(Serialize)]
pub struct PendingResponse {
    pub size: usize,
    pub transactions: Vec<Transaction>,
}

/* ---------- Stats API Models ---------- */

#[derive(Serialize)]
pub struct StatsResponse {
    pub height: usize,
    pub difficulty: u32,
    pub pending_size: usize,
    pub last_interval_secs: Option<i64>,
}
