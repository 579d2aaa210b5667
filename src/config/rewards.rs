//! Configuration for the reward-accrual schedule.

use crate::error::{DexError, Result};

/// Default accrual window: 365 days in seconds.
pub const DEFAULT_REWARDS_DURATION: u64 = 31_536_000;

/// Configuration for a [`RewardAccrual`](crate::rewards::RewardAccrual)
/// engine.
///
/// The only tunable is the accrual window: every budget added through the
/// default funding path is streamed linearly over `rewards_duration`
/// seconds.  The default window is one year, matching the canonical
/// staking-rewards schedule.
///
/// # Examples
///
/// ```
/// use naiad_dex::config::{RewardConfig, DEFAULT_REWARDS_DURATION};
///
/// let config = RewardConfig::default();
/// assert_eq!(config.rewards_duration(), DEFAULT_REWARDS_DURATION);
///
/// let weekly = RewardConfig::new(7 * 24 * 3_600)?;
/// assert_eq!(weekly.rewards_duration(), 604_800);
/// # Ok::<(), naiad_dex::DexError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardConfig {
    rewards_duration: u64,
}

impl RewardConfig {
    /// Creates a new `RewardConfig` with an explicit accrual window in
    /// seconds.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidConfiguration`] if `rewards_duration`
    /// is zero.
    pub fn new(rewards_duration: u64) -> Result<Self> {
        let config = Self { rewards_duration };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidConfiguration`] if `rewards_duration`
    /// is zero.
    pub fn validate(&self) -> Result<()> {
        if self.rewards_duration == 0 {
            return Err(DexError::InvalidConfiguration(
                "rewards duration must be positive",
            ));
        }
        Ok(())
    }

    /// Returns the accrual window in seconds.
    #[must_use]
    pub const fn rewards_duration(&self) -> u64 {
        self.rewards_duration
    }
}

impl Default for RewardConfig {
    /// A one-year accrual window.
    fn default() -> Self {
        Self {
            rewards_duration: DEFAULT_REWARDS_DURATION,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_window_is_one_year() {
        let config = RewardConfig::default();
        assert_eq!(config.rewards_duration(), 31_536_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn explicit_window() {
        let Ok(config) = RewardConfig::new(86_400) else {
            panic!("expected Ok");
        };
        assert_eq!(config.rewards_duration(), 86_400);
    }

    #[test]
    fn zero_window_rejected() {
        assert_eq!(
            RewardConfig::new(0),
            Err(DexError::InvalidConfiguration(
                "rewards duration must be positive"
            ))
        );
    }
}
