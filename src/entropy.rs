//! Seeds for randomized generation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Produces a fresh seed on every call.
pub trait SeedSource: Send + Sync {
    fn next_seed(&self) -> String;
}

/// Monotonic counter paired with wall-clock nanoseconds.
///
/// The counter strictly increases across all callers, so two seeds taken from
/// the same `Entropy` never match even if the clock stalls or steps back.
#[derive(Debug, Default)]
pub struct Entropy {
    counter: AtomicU64,
}

static GLOBAL: Entropy = Entropy::new();

impl Entropy {
    pub const fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// The process-wide source used by `generate_random`.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Atomically bump the counter and return the new value.
    pub fn increment(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst).wrapping_add(1)
    }
}

impl SeedSource for Entropy {
    fn next_seed(&self) -> String {
        let count = self.increment();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos())
            .unwrap_or_default();
        format!("{}-{}", nanos, count)
    }
}
