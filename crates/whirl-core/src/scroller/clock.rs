//! Animation time sources.
//!
//! The engine never reads system time directly; it samples a clock
//! collaborator that reports elapsed milliseconds since an arbitrary epoch.
//! Readings must be monotonic and consistent for the lifetime of one motion.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Monotonic animation clock.
///
/// Implementations report milliseconds since an arbitrary epoch. The epoch
/// itself is meaningless; only differences between readings are used.
pub trait AnimationClock {
    /// Current reading in milliseconds.
    fn now_ms(&self) -> u64;
}

/// Default clock backed by [`Instant`], with the epoch fixed at construction.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationClock for MonotonicClock {
    #[inline]
    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}

/// Clock advanced explicitly by the caller.
///
/// Makes engine behavior deterministic in tests and lets headless drivers
/// (e.g. frame-by-frame renderers) step animation time themselves. Clones
/// share the same reading, so a test can hand one clone to the engine and
/// keep another to drive time forward.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `ms` milliseconds.
    pub fn advance(&self, ms: u64) {
        self.now.fetch_add(ms, Ordering::Relaxed);
    }

    /// Set the clock to an absolute reading.
    pub fn set(&self, ms: u64) {
        self.now.store(ms, Ordering::Relaxed);
    }
}

impl AnimationClock for ManualClock {
    #[inline]
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::Relaxed)
    }
}
