//! Time-weighted reward distribution for staked liquidity shares.
//!
//! The [`RewardAccrual`] engine streams a fixed reward budget to stakers
//! pro rata to stake-time, Synthetix `StakingRewards` style: a global
//! reward-per-share accumulator advances with the clock, and every
//! mutating operation checkpoints it before applying its own effect.

mod accrual;

pub use accrual::{RewardAccrual, DEPLOYER};
