//! Injectable wall-clock time source.
//!
//! The reward engine is a function of elapsed time: every accrual read
//! projects the reward-per-share accumulator forward to "now".  To keep
//! that logic deterministic under test, time is an injected capability
//! rather than an ambient call.  Production code uses [`SystemClock`];
//! tests drive a [`ManualClock`] forward by hand.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::Timestamp;

/// A source of the current wall-clock time in whole seconds.
pub trait Clock {
    /// Returns the current time.
    fn now(&self) -> Timestamp;
}

/// The real system clock.
///
/// Reads [`SystemTime::now`] relative to the Unix epoch.  A system clock
/// set before the epoch degrades to [`Timestamp::ZERO`] rather than
/// failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => Timestamp::new(elapsed.as_secs()),
            Err(_) => Timestamp::ZERO,
        }
    }
}

/// A hand-driven clock for deterministic tests.
///
/// The current time lives behind an [`Arc`], so a test can keep one
/// handle while the reward engine owns a clone; advancing either handle
/// is visible through both.
///
/// # Examples
///
/// ```
/// use naiad_dex::domain::Timestamp;
/// use naiad_dex::traits::{Clock, ManualClock};
///
/// let clock = ManualClock::new(Timestamp::new(1_000));
/// let handle = clock.clone();
/// handle.advance(500);
/// assert_eq!(clock.now(), Timestamp::new(1_500));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    seconds: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a manual clock starting at `start`.
    #[must_use]
    pub fn new(start: Timestamp) -> Self {
        Self {
            seconds: Arc::new(AtomicU64::new(start.get())),
        }
    }

    /// Moves the clock to an absolute time.
    pub fn set(&self, to: Timestamp) {
        self.seconds.store(to.get(), Ordering::Relaxed);
    }

    /// Advances the clock by `seconds`.
    pub fn advance(&self, seconds: u64) {
        self.seconds.fetch_add(seconds, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::new(self.seconds.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_past_the_epoch() {
        let now = SystemClock.now();
        assert!(now > Timestamp::ZERO);
    }

    #[test]
    fn manual_clock_starts_where_told() {
        let clock = ManualClock::new(Timestamp::new(1_661_006_947));
        assert_eq!(clock.now(), Timestamp::new(1_661_006_947));
    }

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new(Timestamp::new(100));
        clock.advance(50);
        assert_eq!(clock.now(), Timestamp::new(150));
        clock.advance(0);
        assert_eq!(clock.now(), Timestamp::new(150));
    }

    #[test]
    fn manual_clock_set_is_absolute() {
        let clock = ManualClock::new(Timestamp::new(100));
        clock.set(Timestamp::new(5));
        assert_eq!(clock.now(), Timestamp::new(5));
    }

    #[test]
    fn clones_share_the_same_time() {
        let clock = ManualClock::new(Timestamp::new(10));
        let handle = clock.clone();
        handle.advance(90);
        assert_eq!(clock.now(), Timestamp::new(100));
        clock.set(Timestamp::new(7));
        assert_eq!(handle.now(), Timestamp::new(7));
    }

    #[test]
    fn default_manual_clock_starts_at_the_epoch() {
        assert_eq!(ManualClock::default().now(), Timestamp::ZERO);
    }
}
