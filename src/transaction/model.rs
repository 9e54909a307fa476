use serde::{Deserialize, Serialize};

/// An opaque transfer record carried inside a block.
///
/// The ledger core treats transactions as pure payload: no signatures, no
/// balance checks, no uniqueness. Empty names and zero or negative amounts
/// are stored as-is; rejecting them is an ingestion-boundary concern.
///
/// Field declaration order doubles as the canonical serialization order for
/// block hashing, so it must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: String,
    pub recipient: String,
    pub amount: f64,
}

impl Transaction {
    pub fn new(sender: impl Into<String>, recipient: impl Into<String>, amount: f64) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            amount,
        }
    }
}
