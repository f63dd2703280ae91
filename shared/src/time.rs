//! Monotonic timestamps for press history

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Milliseconds on a monotonic clock.
///
/// Only ordering matters: the tracker compares two timestamps to decide
/// which key of a pair was pressed last. `Timestamp::ZERO` is the value of
/// a channel that has never been pressed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub const ZERO: Self = Self(0);

    pub fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    pub fn as_millis(self) -> u64 {
        self.0
    }
}

/// Clock that reports milliseconds elapsed since it was created.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now(&self) -> Timestamp {
        // u64 milliseconds covers several hundred million years of uptime
        Timestamp(self.origin.elapsed().as_millis() as u64)
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}
