//! Integration tests for the hosted StdClock source.

#![cfg(feature = "std")]

use std::thread;
use std::time::Duration;

use tick_timer::{Clock, IntervalTimer, StdClock};

#[test]
fn test_std_clock_starts_near_zero_and_never_decreases() {
    let clock = StdClock::new();
    let first = clock.now();

    let mut previous = first;
    for _ in 0..100 {
        let reading = clock.now();
        assert!(reading >= previous);
        previous = reading;
    }
}

#[test]
fn test_timer_over_std_clock() {
    let clock = StdClock::new();
    let timer = IntervalTimer::new(&clock, 5);

    // std::thread::sleep guarantees at least the requested duration
    thread::sleep(Duration::from_millis(10));

    assert!(timer.expired());
    assert!(timer.elapsed() >= 5);
    assert_eq!(timer.remaining_clamped(), 0);
}
