//! Constant-product pool implementation.
//!
//! This module contains [`Pool`], the exchange's single pool family: a
//! zero-fee constant-product market maker (`x · y = k`) that custodies
//! two assets in its own [`BalanceLedger`](crate::ledger::BalanceLedger)
//! instances and tracks proportional ownership through liquidity shares.

mod constant_product;

#[cfg(test)]
mod proptest_properties;

pub use constant_product::Pool;
