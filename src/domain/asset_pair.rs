//! Ordered pair of distinct custody assets.

use crate::domain::Address;
use crate::error::{DexError, Result};

/// The two assets a pool holds in custody, in pool order.
///
/// The pair is **positional**: `asset_a` is the side swaps sell into and
/// `asset_b` is the side they buy out of.  Construction validates only
/// distinctness — no canonical reordering is applied, so the caller's
/// `(a, b)` order is the pool's `(a, b)` order for its whole lifetime.
///
/// # Examples
///
/// ```
/// use naiad_dex::domain::{Address, AssetPair};
///
/// let coin = Address::from_bytes([1u8; 32]);
/// let eth = Address::from_bytes([2u8; 32]);
/// let pair = AssetPair::new(coin, eth)?;
/// assert_eq!(pair.asset_a(), coin);
/// assert_eq!(pair.asset_b(), eth);
/// # Ok::<(), naiad_dex::DexError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetPair {
    asset_a: Address,
    asset_b: Address,
}

impl AssetPair {
    /// Creates a pair from two distinct asset addresses, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidAsset`] if both addresses are equal.
    pub fn new(asset_a: Address, asset_b: Address) -> Result<Self> {
        if asset_a == asset_b {
            return Err(DexError::InvalidAsset(
                "asset pair requires two distinct addresses",
            ));
        }
        Ok(Self { asset_a, asset_b })
    }

    /// Returns the A-side asset address.
    #[must_use]
    pub const fn asset_a(&self) -> Address {
        self.asset_a
    }

    /// Returns the B-side asset address.
    #[must_use]
    pub const fn asset_b(&self) -> Address {
        self.asset_b
    }

    /// Returns `true` if `asset` is one of the two pair members.
    #[must_use]
    pub fn contains(&self, asset: &Address) -> bool {
        self.asset_a == *asset || self.asset_b == *asset
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn asset(tag: u8) -> Address {
        Address::from_bytes([tag; 32])
    }

    #[test]
    fn construction_preserves_caller_order() {
        let Ok(pair) = AssetPair::new(asset(9), asset(1)) else {
            panic!("distinct assets must form a pair");
        };
        assert_eq!(pair.asset_a(), asset(9));
        assert_eq!(pair.asset_b(), asset(1));
    }

    #[test]
    fn identical_assets_are_rejected() {
        assert_eq!(
            AssetPair::new(asset(3), asset(3)),
            Err(DexError::InvalidAsset(
                "asset pair requires two distinct addresses"
            ))
        );
    }

    #[test]
    fn zero_address_is_a_valid_member() {
        let Ok(pair) = AssetPair::new(Address::ZERO, asset(1)) else {
            panic!("zero address must be accepted as a pair member");
        };
        assert_eq!(pair.asset_a(), Address::ZERO);
    }

    #[test]
    fn contains_matches_both_members() {
        let Ok(pair) = AssetPair::new(asset(1), asset(2)) else {
            panic!("distinct assets must form a pair");
        };
        assert!(pair.contains(&asset(1)));
        assert!(pair.contains(&asset(2)));
        assert!(!pair.contains(&asset(3)));
    }
}
