//! Time abstraction traits for platform-agnostic timing.
//!
//! Instants are expected to come from a free-running monotonic counter that
//! may wrap. Implement [`TimeInstant::duration_since`] with wrapping
//! subtraction and the handler never compares absolute timestamps.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;

    /// Saturating subtraction (returns ZERO on underflow).
    fn saturating_sub(self, other: Self) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;

    /// Adds duration to instant, returns None on overflow.
    fn checked_add(self, duration: Self::Duration) -> Option<Self>;
}

#[cfg(feature = "std")]
pub use self::std_clock::{StdClock, StdInstant};

#[cfg(feature = "std")]
mod std_clock {
    use super::{TimeDuration, TimeInstant, TimeSource};
    use std::time::{Duration, Instant};

    impl TimeDuration for Duration {
        const ZERO: Self = Duration::ZERO;

        fn as_millis(&self) -> u64 {
            Duration::as_millis(self) as u64
        }

        fn from_millis(millis: u64) -> Self {
            Duration::from_millis(millis)
        }

        fn saturating_sub(self, other: Self) -> Self {
            Duration::saturating_sub(self, other)
        }
    }

    /// Newtype wrapper for `std::time::Instant`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    pub struct StdInstant(pub Instant);

    impl TimeInstant for StdInstant {
        type Duration = Duration;

        fn duration_since(&self, earlier: Self) -> Self::Duration {
            self.0.saturating_duration_since(earlier.0)
        }

        fn checked_add(self, duration: Self::Duration) -> Option<Self> {
            self.0.checked_add(duration).map(StdInstant)
        }
    }

    /// Time source backed by the host's monotonic clock.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct StdClock;

    impl TimeSource<StdInstant> for StdClock {
        fn now(&self) -> StdInstant {
            StdInstant(Instant::now())
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn std_clock_is_monotonic() {
        let clock = StdClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second.duration_since(first).as_millis() < 1_000);
        assert_eq!(first.duration_since(second), std::time::Duration::ZERO);
    }
}
