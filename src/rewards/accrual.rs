//! Reward accrual engine (Synthetix `StakingRewards` style).
//!
//! A fixed reward budget is streamed at `reward_rate` units per second
//! until `period_finish`.  Accrual is tracked through a single global
//! accumulator:
//!
//! `reward_per_share(now) = stored + (elapsed × rate) / total_staked`
//!
//! where `elapsed` runs from the last checkpoint to `min(now,
//! period_finish)`.  Each staker's earnings are the accumulator delta
//! since they last touched the engine, scaled by their stake:
//!
//! `earned(staker) = staked × (reward_per_share − paid) + owed`
//!
//! Every mutating operation checkpoints the accumulator to "now" before
//! applying its own effect, converting continuous accrual into discrete
//! ledger entries at every touch-point.  Reads (`earned`,
//! `reward_per_share`) project the accumulator without storing it.
//!
//! Time is read through an injected [`Clock`], so tests drive the
//! schedule with a [`ManualClock`](crate::traits::ManualClock) instead
//! of waiting out real seconds.

use std::collections::BTreeMap;

use crate::config::RewardConfig;
use crate::domain::{Address, Amount, Shares, Timestamp};
use crate::error::{DexError, Result};
use crate::traits::{Clock, FromConfig, LiquiditySource, SystemClock};

/// Reserved identity checkpointed when a reward schedule is (re-)armed.
///
/// The deployer never stakes; checkpointing it simply settles the global
/// accumulator before the rate changes.
pub const DEPLOYER: Address = Address::from_bytes([0xDE; 32]);

/// Per-staker accrual record.
///
/// Records are created lazily on first touch and persist afterwards,
/// possibly at zero — a missing record and a zeroed record read the
/// same through [`RewardAccrual::earned`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct StakerRecord {
    staked: Shares,
    reward_per_share_paid: f64,
    owed: Amount,
}

/// Streams a reward budget to stakers pro rata to stake-time.
///
/// The engine is bound to a liquidity source (normally a
/// [`Pool`](crate::pool::Pool)) only at the [`stake`](Self::stake) call
/// site: it reads the staker's provided liquidity to enforce the stake
/// ceiling and never mutates the pool.
///
/// # Example
///
/// ```rust
/// use naiad_dex::config::RewardConfig;
/// use naiad_dex::domain::{Address, Amount, Shares, Timestamp};
/// use naiad_dex::rewards::RewardAccrual;
/// use naiad_dex::traits::{LiquiditySource, ManualClock};
///
/// struct Fixed(f64);
/// impl LiquiditySource for Fixed {
///     fn provided_liquidity(&self, _provider: &Address) -> Shares {
///         Shares::new(self.0)
///     }
/// }
///
/// let clock = ManualClock::new(Timestamp::new(1_661_006_947));
/// let mut rewards = RewardAccrual::with_clock(clock.clone(), &RewardConfig::default())?;
/// rewards.add_rewards(Amount::new(1_000_000.0))?;
///
/// let staker = Address::from_bytes([0xAA; 32]);
/// rewards.stake(&Fixed(49_990.0), staker, Shares::new(49_990.0))?;
///
/// // The sole staker collects the whole budget over the full year.
/// clock.advance(31_536_000);
/// assert_eq!(rewards.earned(&staker), Amount::new(1_000_000.0));
/// assert_eq!(rewards.get_reward(staker), Amount::new(1_000_000.0));
/// assert_eq!(rewards.earned(&staker), Amount::ZERO);
/// # Ok::<(), naiad_dex::DexError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RewardAccrual<C: Clock = SystemClock> {
    clock: C,
    reward_rate: f64,
    period_finish: Timestamp,
    reward_per_share_stored: f64,
    last_update_time: Timestamp,
    rewards_duration: u64,
    stakers: Vec<StakerRecord>,
    index: BTreeMap<Address, usize>,
    total_staked: Shares,
}

impl RewardAccrual {
    /// Creates an idle engine on the system clock.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`RewardConfig::validate`].
    pub fn new(config: &RewardConfig) -> Result<Self> {
        Self::with_clock(SystemClock, config)
    }
}

impl<C: Clock> RewardAccrual<C> {
    /// Creates an idle engine reading time from `clock`.
    ///
    /// The engine starts with no schedule armed: the rate is zero and
    /// nothing accrues until [`add_rewards`](Self::add_rewards) runs.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`RewardConfig::validate`].
    pub fn with_clock(clock: C, config: &RewardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            clock,
            reward_rate: 0.0,
            period_finish: Timestamp::ZERO,
            reward_per_share_stored: 0.0,
            last_update_time: Timestamp::ZERO,
            rewards_duration: config.rewards_duration(),
            stakers: Vec::new(),
            index: BTreeMap::new(),
            total_staked: Shares::ZERO,
        })
    }

    /// Creates an engine on `clock` with `initial_budget` armed immediately.
    ///
    /// Shorthand for [`with_clock`](Self::with_clock) followed by
    /// [`add_rewards`](Self::add_rewards); the schedule starts at the
    /// clock's current time.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`RewardConfig::validate`] or
    /// [`add_rewards`](Self::add_rewards).
    pub fn funded(clock: C, config: &RewardConfig, initial_budget: Amount) -> Result<Self> {
        let mut engine = Self::with_clock(clock, config)?;
        engine.add_rewards(initial_budget)?;
        Ok(engine)
    }

    // -- accessors ------------------------------------------------------------

    /// Returns the reward units distributed per second.
    #[must_use]
    pub const fn reward_rate(&self) -> f64 {
        self.reward_rate
    }

    /// Returns the end of the current reward schedule.
    #[must_use]
    pub const fn period_finish(&self) -> Timestamp {
        self.period_finish
    }

    /// Returns the time of the last accumulator checkpoint.
    #[must_use]
    pub const fn last_update_time(&self) -> Timestamp {
        self.last_update_time
    }

    /// Returns the schedule length used by [`add_rewards`](Self::add_rewards).
    #[must_use]
    pub const fn rewards_duration(&self) -> u64 {
        self.rewards_duration
    }

    /// Returns the sum of all staked shares.
    #[must_use]
    pub const fn total_staked(&self) -> Shares {
        self.total_staked
    }

    /// Returns the shares `staker` has staked, zero if unknown.
    #[must_use]
    pub fn staked_of(&self, staker: &Address) -> Shares {
        self.index
            .get(staker)
            .map_or(Shares::ZERO, |&idx| self.stakers[idx].staked)
    }

    /// Returns the number of staker records on file, the deployer's
    /// included once a schedule has been armed.
    #[must_use]
    pub fn staker_count(&self) -> usize {
        self.stakers.len()
    }

    /// Returns the clock reading capped at the schedule end.
    #[must_use]
    pub fn last_time_reward_applicable(&self) -> Timestamp {
        self.clock.now().min(self.period_finish)
    }

    /// Projects the reward-per-share accumulator to the current time
    /// without storing it.
    #[must_use]
    pub fn reward_per_share(&self) -> f64 {
        self.projected_reward_per_share(self.clock.now())
    }

    /// Projects `staker`'s total unclaimed earnings to the current time.
    ///
    /// Unknown stakers read as zero; no record is created.
    #[must_use]
    pub fn earned(&self, staker: &Address) -> Amount {
        let Some(&idx) = self.index.get(staker) else {
            return Amount::ZERO;
        };
        let record = &self.stakers[idx];
        let projected = self.projected_reward_per_share(self.clock.now());
        Amount::new(
            record.staked.get() * (projected - record.reward_per_share_paid) + record.owed.get(),
        )
    }

    // -- schedule -------------------------------------------------------------

    /// Arms a reward schedule of `amount` over the configured duration.
    ///
    /// See [`add_rewards_over`](Self::add_rewards_over).
    ///
    /// # Errors
    ///
    /// Same as [`add_rewards_over`](Self::add_rewards_over).
    pub fn add_rewards(&mut self, amount: Amount) -> Result<()> {
        self.add_rewards_over(amount, self.rewards_duration)
    }

    /// Arms a reward schedule of `amount` over `duration` seconds.
    ///
    /// If the previous schedule has already finished, the new rate is
    /// simply `amount / duration`.  If it is still running, its
    /// undistributed remainder is folded in:
    ///
    /// `rate = (amount + remaining × old_rate) / duration`
    ///
    /// Either way the schedule restarts from now and runs for the full
    /// `duration`.
    ///
    /// # Errors
    ///
    /// - [`DexError::NonFinite`] if `amount` is NaN or infinite.
    /// - [`DexError::InvalidConfiguration`] if `amount` is negative or
    ///   `duration` is zero.
    pub fn add_rewards_over(&mut self, amount: Amount, duration: u64) -> Result<()> {
        amount.ensure_finite("reward amount")?;
        if amount.get() < 0.0 {
            return Err(DexError::InvalidConfiguration(
                "reward amount cannot be negative",
            ));
        }
        if duration == 0 {
            return Err(DexError::InvalidConfiguration(
                "rewards duration must be positive",
            ));
        }

        let now = self.clock.now();
        self.checkpoint_at(now, DEPLOYER);
        if now >= self.period_finish {
            self.reward_rate = amount.get() / duration as f64;
        } else {
            let remaining = self.period_finish.elapsed_since(now);
            self.reward_rate =
                (amount.get() + remaining as f64 * self.reward_rate) / duration as f64;
        }
        self.last_update_time = now;
        self.period_finish = now.saturating_add(duration);
        Ok(())
    }

    // -- staking --------------------------------------------------------------

    /// Stakes `amount` shares for `staker`.
    ///
    /// The staker's combined stake may not exceed the liquidity `source`
    /// currently reports for them.
    ///
    /// # Errors
    ///
    /// - [`DexError::NonFinite`] if `amount` is NaN or infinite.
    /// - [`DexError::ZeroAmount`] if `amount` is not positive.
    /// - [`DexError::InsufficientStakedLiquidity`] if the combined stake
    ///   would exceed the staker's provided liquidity.
    pub fn stake<S>(&mut self, source: &S, staker: Address, amount: Shares) -> Result<()>
    where
        S: LiquiditySource + ?Sized,
    {
        amount.ensure_finite("stake amount")?;
        if amount.get() <= 0.0 {
            return Err(DexError::ZeroAmount("cannot stake zero"));
        }
        let staked = self.staked_of(&staker).get();
        if staked + amount.get() > source.provided_liquidity(&staker).get() {
            return Err(DexError::InsufficientStakedLiquidity);
        }

        let idx = self.checkpoint_at(self.clock.now(), staker);
        let record = &mut self.stakers[idx];
        record.staked = Shares::new(record.staked.get() + amount.get());
        self.total_staked = Shares::new(self.total_staked.get() + amount.get());
        Ok(())
    }

    /// Withdraws `amount` staked shares for `staker`.
    ///
    /// Earnings accrued up to this moment stay owed and can still be
    /// claimed via [`get_reward`](Self::get_reward).
    ///
    /// # Errors
    ///
    /// - [`DexError::NonFinite`] if `amount` is NaN or infinite.
    /// - [`DexError::ZeroAmount`] if `amount` is not positive.
    /// - [`DexError::InsufficientStakeBalance`] if `amount` exceeds the
    ///   staker's staked balance.
    pub fn withdraw(&mut self, staker: Address, amount: Shares) -> Result<()> {
        amount.ensure_finite("withdrawal amount")?;
        if amount.get() <= 0.0 {
            return Err(DexError::ZeroAmount("cannot withdraw zero"));
        }
        if amount.get() > self.staked_of(&staker).get() {
            return Err(DexError::InsufficientStakeBalance);
        }

        let idx = self.checkpoint_at(self.clock.now(), staker);
        let record = &mut self.stakers[idx];
        record.staked = Shares::new(record.staked.get() - amount.get());
        self.total_staked = Shares::new(self.total_staked.get() - amount.get());
        Ok(())
    }

    /// Claims `staker`'s accrued rewards and zeroes what is owed.
    ///
    /// Claiming is exactly-once: a repeat call before further accrual
    /// returns zero.
    pub fn get_reward(&mut self, staker: Address) -> Amount {
        let idx = self.checkpoint_at(self.clock.now(), staker);
        let record = &mut self.stakers[idx];
        let payout = record.owed;
        record.owed = Amount::ZERO;
        payout
    }

    // -- internals ------------------------------------------------------------

    /// Accumulator value at `now`.  While nobody is staked the stored
    /// value is returned unchanged, so idle periods never drift.
    fn projected_reward_per_share(&self, now: Timestamp) -> f64 {
        if self.total_staked.is_zero() {
            return self.reward_per_share_stored;
        }
        let applicable = now.min(self.period_finish);
        let elapsed = applicable.elapsed_since(self.last_update_time);
        self.reward_per_share_stored + (elapsed as f64 * self.reward_rate) / self.total_staked.get()
    }

    /// Settles the accumulator at `now` and folds `staker`'s pending
    /// earnings into their record.  Returns the staker's record index.
    fn checkpoint_at(&mut self, now: Timestamp, staker: Address) -> usize {
        self.reward_per_share_stored = self.projected_reward_per_share(now);
        self.last_update_time = now.min(self.period_finish);

        let stored = self.reward_per_share_stored;
        let idx = self.record_index(staker);
        let record = &mut self.stakers[idx];
        record.owed = Amount::new(
            record.staked.get() * (stored - record.reward_per_share_paid) + record.owed.get(),
        );
        record.reward_per_share_paid = stored;
        idx
    }

    /// Index of `staker`'s record, creating a zeroed one on first touch.
    fn record_index(&mut self, staker: Address) -> usize {
        if let Some(&idx) = self.index.get(&staker) {
            return idx;
        }
        let idx = self.stakers.len();
        self.stakers.push(StakerRecord::default());
        self.index.insert(staker, idx);
        idx
    }
}

impl FromConfig<RewardConfig> for RewardAccrual {
    /// Creates an idle engine on the system clock.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`RewardConfig::validate`].
    fn from_config(config: &RewardConfig) -> Result<Self> {
        Self::new(config)
    }
}
