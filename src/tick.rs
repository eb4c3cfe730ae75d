//! Fixed-width tick arithmetic.
//!
//! The `Ticks` trait abstracts over the unsigned counter width of the host
//! clock (`u16`, `u32` or `u64`) and exposes exactly the wraparound-safe
//! arithmetic the timer needs. Durations are always computed with wrapping
//! subtraction so results stay correct across a single counter wraparound.

/// Unsigned tick count at the host clock's counter width.
///
/// Sealed - implemented for `u16`, `u32` and `u64` only. The timer never uses
/// signed arithmetic; wraparound correctness relies on unsigned wrapping
/// subtraction at the exact width of the underlying counter.
pub trait Ticks: Copy + Eq + Ord + sealed::Sealed {
    /// Zero ticks.
    const ZERO: Self;

    /// Largest representable tick count; the counter wraps to zero past this.
    const MAX: Self;

    /// Wrapping addition, for advancing a counter across the wraparound boundary.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Wrapping subtraction, for measuring the advance between two counter readings.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Saturating subtraction, clamping at zero instead of underflowing.
    fn saturating_sub(self, rhs: Self) -> Self;
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

macro_rules! impl_ticks {
    ($($ty:ty),*) => {
        $(
            impl Ticks for $ty {
                const ZERO: Self = 0;
                const MAX: Self = <$ty>::MAX;

                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(self, rhs)
                }

                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$ty>::wrapping_sub(self, rhs)
                }

                fn saturating_sub(self, rhs: Self) -> Self {
                    <$ty>::saturating_sub(self, rhs)
                }
            }
        )*
    };
}

impl_ticks!(u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapping_sub_across_boundary() {
        // u16 counter wraps from 65535 to 0; the advance is still correct
        let before: u16 = u16::MAX - 10;
        let after: u16 = before.wrapping_add(25);
        assert_eq!(after, 14);
        assert_eq!(Ticks::wrapping_sub(after, before), 25);
    }

    #[test]
    fn test_saturating_sub_clamps_at_zero() {
        assert_eq!(Ticks::saturating_sub(100u32, 250u32), 0);
        assert_eq!(Ticks::saturating_sub(250u32, 100u32), 150);
    }

    #[test]
    fn test_constants() {
        assert_eq!(<u32 as Ticks>::ZERO, 0);
        assert_eq!(<u16 as Ticks>::MAX, 65535);
        assert_eq!(<u64 as Ticks>::MAX, u64::MAX);
    }
}
