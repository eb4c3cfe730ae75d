//! Monotonic millisecond clock abstraction.
//!
//! The `Clock` trait is the injection point for the host environment's tick
//! source (hardware counter, SysTick, RTC, ...). The library never owns or
//! defines the tick source; it only reads it. Implementing the trait on a
//! shared reference or an interior-mutability wrapper lets one hardware
//! counter feed any number of timers - and lets tests substitute a manually
//! advanced clock.

use crate::tick::Ticks;

/// Monotonic millisecond tick source supplied by the host environment.
///
/// `now()` must return a counter that increases by one per millisecond and
/// wraps to zero at its bit-width boundary. Timer arithmetic stays correct
/// across a single wraparound; if more than one full wraparound period can
/// pass between polls, use a wider tick type.
pub trait Clock {
    /// Counter width of this clock source.
    type Ticks: Ticks;

    /// Current counter reading.
    ///
    /// Takes `&self` so zero-sized hardware clocks, shared references and
    /// interior-mutability test clocks all fit.
    fn now(&self) -> Self::Ticks;
}

/// One clock source can feed multiple timers through shared references.
impl<C: Clock> Clock for &C {
    type Ticks = C::Ticks;

    fn now(&self) -> Self::Ticks {
        (**self).now()
    }
}

/// Millisecond clock for hosted targets, built on `std::time::Instant`.
///
/// Ticks are `u64` milliseconds measured from an epoch captured at
/// construction. Intended for host-side examples and tests; embedded targets
/// implement [`Clock`] on their own hardware counter instead.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    epoch: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Creates a clock whose counter starts at zero now.
    pub fn new() -> Self {
        Self {
            epoch: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    type Ticks = u64;

    fn now(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}
