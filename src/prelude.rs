//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use naiad_dex::prelude::*;
//! ```
//!
//! This re-exports the most frequently used domain types, core traits,
//! configuration types, error types, and the registry so that consumers
//! don't need to import from individual submodules.

// Re-export domain types
pub use crate::domain::{Address, Amount, AssetPair, Shares, Timestamp};

// Re-export core traits
pub use crate::traits::{Clock, FromConfig, LiquiditySource, ManualClock, SystemClock};

// Re-export configuration
pub use crate::config::{PoolConfig, RewardConfig};

// Re-export error types
pub use crate::error::{DexError, Result};

// Re-export the custody ledger
pub use crate::ledger::BalanceLedger;

// Re-export the pool and registry
pub use crate::pool::Pool;
pub use crate::registry::PoolRegistry;

// Re-export the reward engine
pub use crate::rewards::RewardAccrual;
