//! `embedded-hal` 0.2 `CountDown` adapter.
//!
//! Wraps a [`Clock`] source so it can drive HAL APIs that expect an
//! `embedded_hal::timer::CountDown`. Unlike [`IntervalTimer`], whose interval
//! is fixed at construction, the HAL contract requires `start()` to load a new
//! duration each time - so the adapter is a separate type rather than an impl
//! on the timer itself.
//!
//! [`IntervalTimer`]: crate::IntervalTimer

use core::fmt;

use embedded_hal::timer::CountDown;

use crate::clock::Clock;
use crate::tick::Ticks;

/// `nb`-style countdown over an injected millisecond clock.
///
/// Created idle (zero duration, immediately ready); `start()` loads a
/// duration and rebases. `wait()` polls without blocking, returning
/// `nb::Error::WouldBlock` until the duration has passed, then `Ok(())` -
/// and stays ready until the next `start()`.
pub struct CountDownTimer<C: Clock> {
    clock: C,
    duration: C::Ticks,
    start: C::Ticks,
}

impl<C: Clock> CountDownTimer<C> {
    /// Creates an idle countdown over the given clock source.
    pub fn new(clock: C) -> Self {
        let start = clock.now();
        Self {
            clock,
            duration: C::Ticks::ZERO,
            start,
        }
    }
}

impl<C: Clock> fmt::Debug for CountDownTimer<C>
where
    C::Ticks: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountDownTimer")
            .field("duration", &self.duration)
            .field("start", &self.start)
            .finish_non_exhaustive()
    }
}

impl<C: Clock> CountDown for CountDownTimer<C> {
    type Time = C::Ticks;

    fn start<T>(&mut self, count: T)
    where
        T: Into<Self::Time>,
    {
        self.duration = count.into();
        self.start = self.clock.now();
    }

    fn wait(&mut self) -> nb::Result<(), void::Void> {
        if self.clock.now().wrapping_sub(self.start) >= self.duration {
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }
}
