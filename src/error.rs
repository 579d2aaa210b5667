//! Unified error type for every fallible operation in the crate.
//!
//! All pool, registry, and reward operations report failures through
//! [`DexError`] and the crate-wide [`Result`] alias.  Variants mirror the
//! guard that raised them: the quoting helpers raise the
//! `Insufficient*Amount` family, share accounting raises the
//! `InsufficientLiquidity*` family, and the reward engine raises the
//! staking variants.
//!
//! Every guard runs before state is touched, so an `Err` from a public
//! operation means the pool, registry, or reward engine is exactly as it
//! was before the call.  The single exception is
//! [`DexError::InvariantViolated`], which reports that internal bookkeeping
//! has already diverged from the custody ledgers and the instance should be
//! discarded.

use thiserror::Error;

use crate::domain::Address;

/// Errors returned by pool, registry, and reward operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DexError {
    /// A quoted amount was zero or negative.
    #[error("insufficient amount")]
    InsufficientAmount,

    /// Pool reserves are too low (or empty) to serve the request.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// The accepted A-side deposit or payout fell below the caller's bound.
    #[error("insufficient A-side amount")]
    InsufficientAAmount,

    /// The accepted B-side deposit or payout fell below the caller's bound.
    #[error("insufficient B-side amount")]
    InsufficientBAmount,

    /// A deposit was too small to mint a positive share amount.
    #[error("insufficient liquidity minted")]
    InsufficientLiquidityMinted,

    /// A share redemption was empty or redeemed to a zero payout.
    #[error("insufficient liquidity burned")]
    InsufficientLiquidityBurned,

    /// A swap produced (or was asked for) less output than required.
    #[error("insufficient output amount")]
    InsufficientOutputAmount,

    /// A swap was attempted without any input having been provided.
    #[error("insufficient input amount")]
    InsufficientInputAmount,

    /// The swap recipient is one of the pool's own custody identities.
    #[error("invalid swap recipient")]
    InvalidRecipient,

    /// Internal bookkeeping diverged from the custody ledgers.
    #[error("invariant violated: {0}")]
    InvariantViolated(&'static str),

    /// A pool keyed by this asset is already registered.
    #[error("pool already exists for asset {0}")]
    PoolAlreadyExists(Address),

    /// An operation that requires a positive amount received zero or less.
    #[error("zero amount: {0}")]
    ZeroAmount(&'static str),

    /// A stake would exceed the staker's provided pool liquidity.
    #[error("stake exceeds provided liquidity")]
    InsufficientStakedLiquidity,

    /// A withdrawal would exceed the staker's staked balance.
    #[error("withdrawal exceeds staked balance")]
    InsufficientStakeBalance,

    /// A configuration value failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// An asset identifier was rejected.
    #[error("invalid asset: {0}")]
    InvalidAsset(&'static str),

    /// A numeric input was NaN or infinite.
    #[error("non-finite value: {0}")]
    NonFinite(&'static str),
}

/// Crate-wide result alias used by every fallible operation.
pub type Result<T> = core::result::Result<T, DexError>;
