//! Console walkthrough: build a small chain, export it to JSON, print block
//! summaries and the validation verdict.

use std::env;
use std::fs::File;
use std::io::BufWriter;

use dotenvy::dotenv;

use pow_ledger::ledger::{DEFAULT_DIFFICULTY, Ledger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv();
    env_logger::init();

    let difficulty: u32 = env::var("DIFFICULTY")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_DIFFICULTY);
    let mut ledger = Ledger::new(difficulty)?;

    ledger.add_transaction("Alice", "Bob", 50.0);
    ledger.add_transaction("Bob", "Charlie", 30.0);

    println!("Mining block 1...");
    ledger.mine_pending();

    ledger.add_transaction("Charlie", "Alice", 20.0);

    println!("Mining block 2...");
    ledger.mine_pending();

    // Export the snapshot for external consumers (e.g. a web viewer).
    let file = File::create("blockchain_data.json")?;
    serde_json::to_writer_pretty(BufWriter::new(file), ledger.snapshot())?;

    for block in ledger.snapshot() {
        println!("\nBlock #{}", block.index);
        println!("Timestamp: {}", block.timestamp);
        println!("Transactions: {}", serde_json::to_string(&block.transactions)?);
        println!("Previous Hash: {}", block.previous_hash);
        println!("Hash: {}", block.hash);
        println!("Nonce: {}", block.nonce);
    }

    println!("\nIs blockchain valid? {}", ledger.is_chain_valid());
    Ok(())
}
