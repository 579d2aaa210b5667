//! Configuration structs for pools and the reward engine.
//!
//! This module contains the declarative blueprints the rest of the crate
//! is constructed from: [`PoolConfig`] describes a constant-product pool
//! (asset pair plus registry metadata) and [`RewardConfig`] describes a
//! reward-accrual schedule.  Both validate at construction time, so a
//! config value that exists is a config value that is usable.

mod pool;
mod rewards;

pub use pool::PoolConfig;
pub use rewards::{RewardConfig, DEFAULT_REWARDS_DURATION};
