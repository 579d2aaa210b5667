//! # Naiad DEX
//!
//! Zero-fee constant-product market making with staked-liquidity reward
//! streaming.
//!
//! This crate provides domain types, core traits, configuration
//! structures, and two coupled state machines:
//!
//! - **Pool** — a constant-product AMM (`x · y = k`, Uniswap V2 style)
//!   with the trading fee disabled, custodying one balance ledger per
//!   asset and minting pro-rata liquidity shares.
//! - **RewardAccrual** — a time-weighted reward engine (Synthetix
//!   `StakingRewards` style) that streams a fixed budget to stakers of a
//!   pool's liquidity shares, pro rata to stake-time.
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! naiad-dex = "0.1"
//! ```
//!
//! ## Register a pool, trade on it, stream rewards to its providers
//!
//! ```rust
//! use naiad_dex::config::{PoolConfig, RewardConfig};
//! use naiad_dex::domain::{Address, Amount, AssetPair, Shares, Timestamp};
//! use naiad_dex::registry::PoolRegistry;
//! use naiad_dex::rewards::RewardAccrual;
//! use naiad_dex::traits::ManualClock;
//!
//! // 1. Register a pool for a pair of assets
//! let coin = Address::from_bytes([1u8; 32]);
//! let eth = Address::from_bytes([2u8; 32]);
//! let pair = AssetPair::new(coin, eth)?;
//! let config = PoolConfig::new(pair, "test-coin/ETH", "TST1")?;
//!
//! let mut registry = PoolRegistry::new();
//! let pool = registry.create_pool(&config)?;
//!
//! // 2. Provide liquidity (10 shares stay locked in the pool forever)
//! let provider = Address::from_bytes([0xAA; 32]);
//! pool.add_liquidity(
//!     provider,
//!     Amount::new(1_000.0),
//!     Amount::new(1_000.0),
//!     Amount::new(1_000.0),
//!     Amount::new(1_000.0),
//! )?;
//! assert_eq!(pool.shares_of(&provider), Shares::new(990.0));
//!
//! // 3. Swap 600 A for B at the zero-fee constant-product price
//! let trader = Address::from_bytes([0xBB; 32]);
//! let out = pool.swap_exact_in(Amount::new(600.0), Amount::new(375.0), trader)?;
//! assert_eq!(out, Amount::new(375.0));
//!
//! // 4. Stake the liquidity shares and stream a budget to them
//! let clock = ManualClock::new(Timestamp::new(1_661_006_947));
//! let mut rewards = RewardAccrual::with_clock(clock.clone(), &RewardConfig::default())?;
//! rewards.add_rewards(Amount::new(1_000_000.0))?;
//! rewards.stake(&*pool, provider, Shares::new(990.0))?;
//!
//! clock.advance(31_536_000);
//! assert_eq!(rewards.earned(&provider), Amount::new(1_000_000.0));
//! # Ok::<(), naiad_dex::DexError>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer   │  uses PoolConfig + PoolRegistry
//! └──────┬───────┘
//!        │ create_pool(&config)
//!        ▼
//! ┌──────────────┐
//! │   Registry   │  validates config, indexes pools by asset
//! └──────┬───────┘
//!        │ &mut Pool
//!        ▼
//! ┌──────────────┐     provided_liquidity()     ┌───────────────┐
//! │     Pool     │◄─────────────────────────────│ RewardAccrual │
//! │  (x · y = k) │      (LiquiditySource)       │  (stake-time) │
//! └──────┬───────┘                              └───────┬───────┘
//!        │ deposit / transfer                           │ now()
//!        ▼                                              ▼
//! ┌──────────────┐                              ┌───────────────┐
//! │BalanceLedger │  one per custodied asset     │     Clock     │
//! └──────────────┘                              └───────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Address`](domain::Address), [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`Timestamp`](domain::Timestamp), [`AssetPair`](domain::AssetPair) |
//! | [`traits`] | Core abstractions: [`Clock`](traits::Clock), [`LiquiditySource`](traits::LiquiditySource), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | Declarative blueprints: [`PoolConfig`](config::PoolConfig), [`RewardConfig`](config::RewardConfig) |
//! | [`ledger`] | [`BalanceLedger`](ledger::BalanceLedger) per-asset custody totals |
//! | [`pool`] | [`Pool`](pool::Pool) constant-product implementation |
//! | [`registry`] | [`PoolRegistry`](registry::PoolRegistry) for config-driven pool construction and lookup |
//! | [`rewards`] | [`RewardAccrual`](rewards::RewardAccrual) staking reward engine |
//! | [`error`] | [`DexError`](error::DexError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod pool;
pub mod prelude;
pub mod registry;
pub mod rewards;
pub mod traits;

pub use error::{DexError, Result};
