//! A minimal append-only ledger: hash-chained blocks secured by a
//! Proof-of-Work puzzle, with an HTTP API and a console demo as thin
//! wrappers around the in-memory core.

pub mod api;
pub mod error;
pub mod ledger;
pub mod transaction;
