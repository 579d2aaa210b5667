//! Pool instantiation and lookup.
//!
//! The [`PoolRegistry`] creates [`Pool`] instances from [`PoolConfig`]
//! values, validating configuration and indexing each pool under the
//! address of its first asset so one venue can carry many markets.
//!
//! # Usage
//!
//! ```rust
//! use naiad_dex::config::PoolConfig;
//! use naiad_dex::domain::{Address, Amount, AssetPair};
//! use naiad_dex::registry::PoolRegistry;
//!
//! let coin = Address::from_bytes([1u8; 32]);
//! let eth = Address::from_bytes([2u8; 32]);
//! let pair = AssetPair::new(coin, eth)?;
//! let config = PoolConfig::new(pair, "test-coin/ETH", "TST1")?;
//!
//! let mut registry = PoolRegistry::new();
//! registry.create_pool(&config)?;
//! assert!(registry.get_pool(&coin).is_some());
//! # Ok::<(), naiad_dex::DexError>(())
//! ```

use std::collections::BTreeMap;

use crate::config::PoolConfig;
use crate::domain::Address;
use crate::error::{DexError, Result};
use crate::pool::Pool;
use crate::traits::FromConfig;

/// Registry of live pools, one per leading asset address.
///
/// The registry is the single entry point for constructing pools.  It
/// validates the configuration, delegates to the pool's [`FromConfig`]
/// implementation, and refuses to overwrite an existing market: a second
/// pool whose pair leads with an already-registered asset is rejected
/// with [`DexError::PoolAlreadyExists`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoolRegistry {
    pools: BTreeMap<Address, Pool>,
}

impl PoolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pools: BTreeMap::new(),
        }
    }

    /// Creates a pool from `config` and registers it under the address
    /// of the pair's first asset.
    ///
    /// Returns a mutable reference to the freshly registered pool.
    ///
    /// # Errors
    ///
    /// - [`DexError::PoolAlreadyExists`] if a pool is already registered
    ///   under that asset address.
    /// - Any error propagated from [`PoolConfig::validate`] via the
    ///   pool's `from_config`.
    pub fn create_pool(&mut self, config: &PoolConfig) -> Result<&mut Pool> {
        let key = config.assets().asset_a();
        if self.pools.contains_key(&key) {
            return Err(DexError::PoolAlreadyExists(key));
        }
        let pool = Pool::from_config(config)?;
        Ok(self.pools.entry(key).or_insert(pool))
    }

    /// Looks up the pool registered under `asset`, if any.
    #[must_use]
    pub fn get_pool(&self, asset: &Address) -> Option<&Pool> {
        self.pools.get(asset)
    }

    /// Looks up the pool registered under `asset` for mutation.
    #[must_use]
    pub fn get_pool_mut(&mut self, asset: &Address) -> Option<&mut Pool> {
        self.pools.get_mut(asset)
    }

    /// Returns the number of registered pools.
    #[must_use]
    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }

    /// Returns `true` if no pools have been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Iterates over all registered pools in asset-address order.
    pub fn pools(&self) -> impl Iterator<Item = (&Address, &Pool)> {
        self.pools.iter()
    }
}
