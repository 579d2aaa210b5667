//! Liquidity share balance backed by a double-precision float.

use core::fmt;

use crate::error::{DexError, Result};

/// A liquidity share balance, carried as an `f64`.
///
/// Shares are the pool's proportional ownership unit: they are minted on
/// deposit, burned on withdrawal, and staked into the reward engine.  They
/// deliberately have their own type so a share count is never passed where
/// a token [`Amount`](super::Amount) is expected, even though both wrap the
/// same float representation.
///
/// # Examples
///
/// ```
/// use naiad_dex::domain::Shares;
///
/// let shares = Shares::new(49_990.0);
/// assert_eq!(shares.get(), 49_990.0);
/// assert!(Shares::ZERO.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[must_use]
pub struct Shares(f64);

impl Shares {
    /// Zero shares.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Shares` from a raw `f64` value.
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Returns `true` if the balance is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Returns `true` if the balance is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Returns `true` if the balance is neither NaN nor infinite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Checks that the balance is finite.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::NonFinite`] carrying `context` if the balance is
    /// NaN or infinite.
    pub fn ensure_finite(&self, context: &'static str) -> Result<()> {
        if self.0.is_finite() {
            Ok(())
        } else {
            Err(DexError::NonFinite(context))
        }
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
