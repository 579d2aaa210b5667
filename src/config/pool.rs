//! Configuration for constant-product pools.

use crate::domain::AssetPair;
use crate::error::{DexError, Result};

/// Configuration for a constant-product pool (`x · y = k`).
///
/// Defines the immutable identity of a pool: the ordered asset pair it
/// custodies plus the registry metadata (a human-readable pair name such
/// as `"test-coin/ETH"` and a short share-token symbol such as `"TST1"`).
/// Pools always start empty — reserves exist only once liquidity is
/// deposited — so no initial balances appear here.
///
/// # Validation
///
/// - The asset pair is validated at [`AssetPair`] construction time.
/// - `name` and `symbol` must be non-empty.
///
/// # Examples
///
/// ```
/// use naiad_dex::config::PoolConfig;
/// use naiad_dex::domain::{Address, AssetPair};
///
/// let pair = AssetPair::new(
///     Address::from_bytes([1u8; 32]),
///     Address::from_bytes([2u8; 32]),
/// )?;
/// let config = PoolConfig::new(pair, "test-coin/ETH", "TST1")?;
/// assert_eq!(config.symbol(), "TST1");
/// # Ok::<(), naiad_dex::DexError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    assets: AssetPair,
    name: String,
    symbol: String,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidConfiguration`] if `name` or `symbol`
    /// is empty.
    pub fn new(
        assets: AssetPair,
        name: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Result<Self> {
        let config = Self {
            assets,
            name: name.into(),
            symbol: symbol.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidConfiguration`] if `name` or `symbol`
    /// is empty.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(DexError::InvalidConfiguration(
                "pool name must not be empty",
            ));
        }
        if self.symbol.is_empty() {
            return Err(DexError::InvalidConfiguration(
                "pool symbol must not be empty",
            ));
        }
        Ok(())
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn assets(&self) -> &AssetPair {
        &self.assets
    }

    /// Returns the human-readable pair name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the share-token symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}
