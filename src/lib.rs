//! # tick-timer
//!
//! Non-blocking interval timer for embedded systems with zero heap allocation.
//!
//! **Key features:**
//! - **Non-blocking** - Poll for expiry from a cooperative main loop; no `sleep`, no busy-wait
//! - **Injected clock** - Any monotonic millisecond counter works; tests use a fake clock
//! - **Wraparound-safe** - Unsigned wrapping arithmetic stays correct across counter overflow
//! - **Width-generic** - `u16`, `u32` or `u64` ticks to match the host counter
//! - **Optional features** - `std` host clock, `defmt` formatting, `embedded-hal` CountDown adapter
//!
//! The dominant usage pattern is poll-and-reset:
//!
//! ```
//! use core::cell::Cell;
//! use tick_timer::{Clock, IntervalTimer};
//!
//! // Host environment supplies the tick source (e.g. a hardware counter).
//! struct Millis(Cell<u32>);
//!
//! impl Clock for Millis {
//!     type Ticks = u32;
//!     fn now(&self) -> u32 {
//!         self.0.get()
//!     }
//! }
//!
//! let clock = Millis(Cell::new(0));
//! let mut heartbeat = IntervalTimer::new(&clock, 1000);
//!
//! // ... in the main loop:
//! if heartbeat.expired() {
//!     heartbeat.reset();
//!     // send the heartbeat
//! }
//! ```
//!
//! ## Optional Features
//!
//! - `std` - `StdClock`, a host-side clock built on `std::time::Instant`
//! - `defmt` - `defmt::Format` output for timer state
//! - `embedded-hal` - `CountDownTimer`, an `embedded_hal::timer::CountDown` adapter
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

#[cfg(feature = "std")]
extern crate std;

// ============================================================================
// Module Declarations
// ============================================================================

// Tick arithmetic foundation
pub mod tick;

// Clock source abstraction
pub mod clock;

// The timer itself
pub mod timer;

// embedded-hal 0.2 adapter
#[cfg(feature = "embedded-hal")]
pub mod countdown;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Tick arithmetic
pub use tick::Ticks;

// Clock sources
pub use clock::Clock;

#[cfg(feature = "std")]
pub use clock::StdClock;

// Timer
pub use timer::IntervalTimer;

// Optional feature re-exports
#[cfg(feature = "embedded-hal")]
pub use countdown::CountDownTimer;

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    // No tests needed - all public APIs tested in their respective modules
    // and in the integration suite under tests/
}
