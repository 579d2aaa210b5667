//! Wall-clock timestamp in whole seconds.

use core::fmt;

/// A point in time, expressed as whole seconds since the Unix epoch.
///
/// The reward engine schedules accrual windows in seconds, so sub-second
/// precision is never needed.  Arithmetic saturates rather than wrapping:
/// an elapsed-time query against a later timestamp yields zero, and an
/// offset past `u64::MAX` clamps.
///
/// # Examples
///
/// ```
/// use naiad_dex::domain::Timestamp;
///
/// let start = Timestamp::new(1_000);
/// let finish = start.saturating_add(500);
/// assert_eq!(finish.elapsed_since(start), 500);
/// assert_eq!(start.elapsed_since(finish), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Timestamp(u64);

impl Timestamp {
    /// The Unix epoch itself.
    pub const ZERO: Self = Self(0);

    /// Creates a timestamp from whole seconds since the Unix epoch.
    pub const fn new(seconds: u64) -> Self {
        Self(seconds)
    }

    /// Returns the underlying seconds value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns this timestamp shifted `seconds` into the future, clamping
    /// at `u64::MAX`.
    pub const fn saturating_add(self, seconds: u64) -> Self {
        Self(self.0.saturating_add(seconds))
    }

    /// Returns the whole seconds elapsed since `earlier`, or zero if
    /// `earlier` is actually later than this timestamp.
    #[must_use]
    pub const fn elapsed_since(self, earlier: Self) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_get_round_trip() {
        assert_eq!(Timestamp::new(1_661_006_947).get(), 1_661_006_947);
    }

    #[test]
    fn zero_and_default() {
        assert_eq!(Timestamp::ZERO.get(), 0);
        assert_eq!(Timestamp::default(), Timestamp::ZERO);
    }

    #[test]
    fn saturating_add_moves_forward() {
        let start = Timestamp::new(100);
        assert_eq!(start.saturating_add(31_536_000).get(), 31_536_100);
    }

    #[test]
    fn saturating_add_clamps_at_max() {
        let late = Timestamp::new(u64::MAX - 1);
        assert_eq!(late.saturating_add(10).get(), u64::MAX);
    }

    #[test]
    fn elapsed_since_counts_forward_only() {
        let start = Timestamp::new(1_000);
        let finish = Timestamp::new(1_500);
        assert_eq!(finish.elapsed_since(start), 500);
        assert_eq!(start.elapsed_since(finish), 0);
        assert_eq!(start.elapsed_since(start), 0);
    }

    #[test]
    fn ordering_follows_seconds() {
        assert!(Timestamp::new(1) < Timestamp::new(2));
        assert_eq!(Timestamp::new(5).min(Timestamp::new(3)), Timestamp::new(3));
    }

    #[test]
    fn display_format() {
        assert_eq!(Timestamp::new(1234).to_string(), "1234");
    }
}
