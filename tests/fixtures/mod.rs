//! Test fixtures and utilities for tick-timer testing.
//!
//! Provides:
//! - `MockClock<T>`: Manually-advanced clock at any supported tick width
//!
//! Timers hold a shared reference to the clock while the test advances it
//! through the same reference, mirroring how a hardware counter feeds timers
//! in firmware.

#![allow(dead_code)]

use core::cell::Cell;
use tick_timer::{Clock, Ticks};

// ============================================================================
// MockClock - Manually-Advanced Clock
// ============================================================================

/// Mock millisecond clock for deterministic timer tests.
///
/// Wraps the counter in a `Cell` so tests can move time forward through a
/// shared reference. `advance` uses wrapping addition, so tests can drive the
/// counter across its wraparound boundary.
#[derive(Debug)]
pub struct MockClock<T: Ticks> {
    now: Cell<T>,
}

impl<T: Ticks> MockClock<T> {
    /// Create a clock whose counter starts at `start`.
    pub fn new(start: T) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Set the counter to an absolute reading.
    pub fn set(&self, now: T) {
        self.now.set(now);
    }

    /// Advance the counter by `ms`, wrapping at the width boundary.
    pub fn advance(&self, ms: T) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl<T: Ticks> Clock for MockClock<T> {
    type Ticks = T;

    fn now(&self) -> T {
        self.now.get()
    }
}
