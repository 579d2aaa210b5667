//! Read-only view of provided pool liquidity.
//!
//! The reward engine caps each staker at the liquidity they actually
//! provided, but it must never mutate (or even exclusively borrow) the
//! pool it observes.  [`LiquiditySource`] is that one-way seam: the pool
//! implements it, the engine consumes it, and nothing about reward
//! accounting leaks back into swap or share bookkeeping.

use crate::domain::{Address, Shares};

/// A read-only source of per-provider liquidity share balances.
///
/// # Implementors
///
/// [`Pool`](crate::pool::Pool) implements this trait over its provider
/// share map.  Tests may implement it with a fixed stub to exercise the
/// reward engine in isolation.
pub trait LiquiditySource {
    /// Returns the liquidity shares `provider` currently holds.
    ///
    /// Unknown providers hold zero shares; this query never fails and
    /// never allocates bookkeeping for the queried identity.
    fn provided_liquidity(&self, provider: &Address) -> Shares;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLiquidity(f64);

    impl LiquiditySource for FixedLiquidity {
        fn provided_liquidity(&self, _provider: &Address) -> Shares {
            Shares::new(self.0)
        }
    }

    #[test]
    fn trait_object_safe_queries() {
        let source: &dyn LiquiditySource = &FixedLiquidity(12.5);
        let anyone = Address::from_bytes([7u8; 32]);
        assert_eq!(source.provided_liquidity(&anyone), Shares::new(12.5));
    }
}
