//! Drop clock - turns frame time into gravity steps.

use crate::types::BASE_DROP_MS;

/// Accumulates elapsed frame time and fires once the gravity interval is exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropClock {
    interval_ms: u32,
    accumulated_ms: u32,
}

impl DropClock {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
        }
    }

    /// Add `elapsed_ms`; returns true when a gravity step is due.
    ///
    /// The accumulator resets to zero when it fires, so a long stall yields a
    /// single step rather than a burst.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);
        if self.accumulated_ms > self.interval_ms {
            self.accumulated_ms = 0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn accumulated_ms(&self) -> u32 {
        self.accumulated_ms
    }
}

impl Default for DropClock {
    fn default() -> Self {
        Self::new(BASE_DROP_MS)
    }
}
