//! Raw token amount backed by a double-precision float.

use core::fmt;

use crate::error::{DexError, Result};

/// A raw token amount, carried as an `f64`.
///
/// The exchange runs its entire balance model on IEEE-754 doubles: custody
/// totals, reserves, and reward payouts are all `f64` quantities, and the
/// conservation checks in the pool compare them with exact `==`.  `Amount`
/// exists to keep token quantities from mixing silently with liquidity
/// [`Shares`](super::Shares), not to re-interpret the float.
///
/// Construction is infallible; operations that consume amounts reject
/// NaN and infinities at their boundary via [`Amount::is_finite`].
///
/// # Examples
///
/// ```
/// use naiad_dex::domain::Amount;
///
/// let a = Amount::new(100.0);
/// assert_eq!(a.get(), 100.0);
/// assert!(a.is_finite());
/// assert!(!a.is_zero());
/// assert!(Amount::ZERO.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[must_use]
pub struct Amount(f64);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Amount` from a raw `f64` value.
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Returns `true` if the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Returns `true` if the amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Returns `true` if the amount is neither NaN nor infinite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Checks that the amount is finite.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::NonFinite`] carrying `context` if the amount is
    /// NaN or infinite.
    pub fn ensure_finite(&self, context: &'static str) -> Result<()> {
        if self.0.is_finite() {
            Ok(())
        } else {
            Err(DexError::NonFinite(context))
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_get_round_trip() {
        let amount = Amount::new(123.5);
        assert_eq!(amount.get(), 123.5);
    }

    #[test]
    fn zero_constant() {
        assert_eq!(Amount::ZERO.get(), 0.0);
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::ZERO.is_positive());
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn positivity() {
        assert!(Amount::new(0.001).is_positive());
        assert!(!Amount::new(-0.001).is_positive());
        assert!(!Amount::new(0.0).is_positive());
    }

    #[test]
    fn finiteness() {
        assert!(Amount::new(1.0).is_finite());
        assert!(!Amount::new(f64::NAN).is_finite());
        assert!(!Amount::new(f64::INFINITY).is_finite());
        assert!(!Amount::new(f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn ensure_finite_accepts_finite_values() {
        assert_eq!(Amount::new(42.0).ensure_finite("amount"), Ok(()));
        assert_eq!(Amount::new(-1.0).ensure_finite("amount"), Ok(()));
    }

    #[test]
    fn ensure_finite_rejects_nan_and_infinities() {
        assert_eq!(
            Amount::new(f64::NAN).ensure_finite("deposit"),
            Err(DexError::NonFinite("deposit"))
        );
        assert_eq!(
            Amount::new(f64::INFINITY).ensure_finite("deposit"),
            Err(DexError::NonFinite("deposit"))
        );
    }

    #[test]
    fn ordering_follows_the_float() {
        assert!(Amount::new(1.0) < Amount::new(2.0));
        assert!(Amount::new(-1.0) < Amount::ZERO);
    }

    #[test]
    fn display_format() {
        assert_eq!(Amount::new(47.5).to_string(), "47.5");
        assert_eq!(Amount::ZERO.to_string(), "0");
    }
}
