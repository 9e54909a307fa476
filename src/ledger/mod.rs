pub mod block;
pub mod clock;
pub mod model;

pub use block::{Block, mine, mine_capped};
pub use clock::{Clock, FixedClock, SystemClock};
pub use model::Ledger;

/// Default Proof-of-Work difficulty (number of leading zero hex digits).
pub const DEFAULT_DIFFICULTY: u32 = 4;

/// Sentinel `previous_hash` of the genesis block, distinguishable from any
/// real 64-character digest.
pub const GENESIS_PREVIOUS_HASH: &str = "0";
