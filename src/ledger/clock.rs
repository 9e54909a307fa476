use chrono::Utc;

/// Time source for block timestamps.
///
/// Injected into the ledger so tests can pin timestamps instead of depending
/// on wall-clock reads.
pub trait Clock: Send {
    /// Current Unix timestamp in seconds (UTC).
    fn now(&self) -> i64;
}

/// Wall-clock time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// Always returns the same instant. Deterministic hashes for tests.
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0
    }
}
