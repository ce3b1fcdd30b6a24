pub mod in_memory;

use chrono::Utc;

pub trait Clock {
    /// Current wall-clock time in epoch milliseconds.
    fn now_millis(&self) -> i64;
}

/// Wall clock. On wasm chrono reads `Date.now()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
