//! Chain-agnostic account and asset address.

use core::fmt;

/// A generic, chain-agnostic address identifying an account or an asset.
///
/// Wraps a fixed-size `[u8; 32]` byte array.  All 32-byte sequences are
/// considered valid addresses, so construction is infallible.  The same
/// type identifies liquidity providers, swap recipients, stakers, and the
/// assets held in custody — the exchange never distinguishes between
/// "contract" and "wallet" addresses.
///
/// # Examples
///
/// ```
/// use naiad_dex::domain::Address;
///
/// let addr = Address::from_bytes([1u8; 32]);
/// assert_eq!(addr.as_bytes(), [1u8; 32]);
/// assert!(!addr.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; 32]);

impl Address {
    /// The all-zero address.
    ///
    /// Reserved as the identity that holds permanently locked pool shares;
    /// no real participant should use it.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns `true` if this is the all-zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Display for Address {
    /// Formats the address as 64 lowercase hex characters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_round_trip() {
        let bytes = [42u8; 32];
        let addr = Address::from_bytes(bytes);
        assert_eq!(addr.as_bytes(), bytes);
    }

    #[test]
    fn zero_is_all_zeros() {
        assert_eq!(Address::ZERO.as_bytes(), [0u8; 32]);
        assert!(Address::ZERO.is_zero());
        assert!(!Address::from_bytes([1u8; 32]).is_zero());
    }

    #[test]
    fn equality_same_bytes() {
        let a = Address::from_bytes([1u8; 32]);
        let b = Address::from_bytes([1u8; 32]);
        assert_eq!(a, b);
    }

    #[test]
    fn inequality_different_bytes() {
        let a = Address::from_bytes([1u8; 32]);
        let b = Address::from_bytes([2u8; 32]);
        assert_ne!(a, b);
    }

    #[test]
    fn ordering_is_lexicographic() {
        let lo = Address::from_bytes([0u8; 32]);
        let hi = Address::from_bytes([1u8; 32]);
        assert!(lo < hi);
    }

    #[test]
    fn display_is_lowercase_hex() {
        let addr = Address::from_bytes([0xAB; 32]);
        let rendered = addr.to_string();
        assert_eq!(rendered.len(), 64);
        assert_eq!(rendered, "ab".repeat(32));
    }

    #[test]
    fn display_of_zero() {
        assert_eq!(Address::ZERO.to_string(), "0".repeat(64));
    }
}
