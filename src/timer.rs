//! The interval timer itself.
//!
//! `IntervalTimer` answers "has at least `interval` milliseconds passed since
//! the last reset?" without ever blocking. It stores two values - the
//! configured interval and the clock reading at the last reset - and
//! recomputes every query from the current clock reading using wrapping
//! unsigned arithmetic, so answers stay correct across a single clock
//! wraparound.

use core::fmt;

use crate::clock::Clock;
use crate::tick::Ticks;

/// Non-blocking interval timer over an injected millisecond clock.
///
/// The interval is fixed at construction; `reset()` rebases the window's
/// origin to the current clock reading. `expired()` never auto-resets -
/// calling code resets explicitly when a repeating interval is desired:
///
/// ```
/// use core::cell::Cell;
/// use tick_timer::{Clock, IntervalTimer};
///
/// struct SysTick(Cell<u32>);
///
/// impl Clock for SysTick {
///     type Ticks = u32;
///     fn now(&self) -> u32 {
///         self.0.get()
///     }
/// }
///
/// let tick = SysTick(Cell::new(0));
/// let mut blink = IntervalTimer::new(&tick, 500);
///
/// tick.0.set(499);
/// assert!(!blink.expired());
///
/// tick.0.set(500);
/// assert!(blink.expired());
/// blink.reset(); // start the next window
/// assert_eq!(blink.elapsed(), 0);
/// ```
///
/// All queries are O(1) arithmetic with no allocation and no side effects
/// (only `reset` mutates). The timer assumes single-owner access; sharing one
/// instance between a main loop and an interrupt handler requires external
/// synchronization.
#[derive(Clone, Copy)]
pub struct IntervalTimer<C: Clock> {
    clock: C,
    interval: C::Ticks,
    start: C::Ticks,
}

impl<C: Clock> IntervalTimer<C> {
    /// Creates a timer and starts its first window at the current clock reading.
    ///
    /// Any interval is valid, including zero - a zero interval is always
    /// expired.
    pub fn new(clock: C, interval: C::Ticks) -> Self {
        let start = clock.now();
        Self {
            clock,
            interval,
            start,
        }
    }

    /// Rebases the window's origin to the current clock reading.
    pub fn reset(&mut self) {
        self.start = self.clock.now();
    }

    /// Returns true iff at least `interval` milliseconds have passed since the
    /// last reset.
    ///
    /// Pure query - never auto-resets. Once expired, stays expired until the
    /// next `reset()`.
    pub fn expired(&self) -> bool {
        self.elapsed() >= self.interval
    }

    /// Milliseconds passed since the last reset.
    ///
    /// Grows without bound (modulo the counter width) until the next reset;
    /// past expiry it keeps increasing beyond `interval`. Correct across a
    /// single clock wraparound.
    pub fn elapsed(&self) -> C::Ticks {
        self.clock.now().wrapping_sub(self.start)
    }

    /// Milliseconds until expiry, computed as `interval - elapsed()` with
    /// wrapping subtraction.
    ///
    /// Once `elapsed() >= interval` this subtraction underflows and wraps to a
    /// very large value instead of clamping at zero. Kept verbatim for
    /// compatibility with existing callers; use [`remaining_clamped`] when a
    /// floor at zero is wanted.
    ///
    /// [`remaining_clamped`]: IntervalTimer::remaining_clamped
    pub fn remaining(&self) -> C::Ticks {
        self.interval.wrapping_sub(self.elapsed())
    }

    /// Milliseconds until expiry, clamped at zero once expired.
    pub fn remaining_clamped(&self) -> C::Ticks {
        self.interval.saturating_sub(self.elapsed())
    }

    /// The configured interval in milliseconds.
    pub fn interval(&self) -> C::Ticks {
        self.interval
    }
}

impl<C: Clock> fmt::Debug for IntervalTimer<C>
where
    C::Ticks: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalTimer")
            .field("interval", &self.interval)
            .field("start", &self.start)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "defmt")]
impl<C: Clock> defmt::Format for IntervalTimer<C>
where
    C::Ticks: defmt::Format,
{
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "IntervalTimer {{ interval: {}, start: {} }}",
            self.interval,
            self.start
        );
    }
}
