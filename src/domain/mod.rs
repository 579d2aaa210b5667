//! Fundamental domain value types used throughout the exchange.
//!
//! This module contains the core value types that model the domain:
//! asset addresses, token amounts, liquidity shares, asset pairs, and
//! wall-clock timestamps.  All types are newtypes; the ones that carry
//! invariants (such as [`AssetPair`] distinctness) use validated
//! constructors to enforce them.

mod address;
mod amount;
mod asset_pair;
mod shares;
mod timestamp;

pub use address::Address;
pub use amount::Amount;
pub use asset_pair::AssetPair;
pub use shares::Shares;
pub use timestamp::Timestamp;
