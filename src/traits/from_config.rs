//! Generic construction trait for instantiation from configuration.
//!
//! [`FromConfig`] provides a uniform interface for creating component
//! instances from their configuration structs, enabling the registry to
//! dispatch construction without `dyn` trait objects.
//!
//! # Validation Contract
//!
//! Implementations **must** validate all configuration invariants during
//! construction.  A successfully constructed component is guaranteed to
//! be in a valid initial state.  Common validations include:
//!
//! - Asset pair has two distinct addresses
//! - Registry metadata (name, symbol) is non-empty
//!
//! # Registry Integration
//!
//! [`PoolRegistry`](crate::registry::PoolRegistry) uses `FromConfig` to
//! construct pools from validated [`PoolConfig`](crate::config::PoolConfig)
//! values before inserting them under their A-side asset key.

use crate::error::Result;

/// Generic construction trait for building a component from a
/// configuration.
///
/// Each component implements this trait for its own configuration struct,
/// enabling type-safe construction with full validation.
///
/// # Type Parameters
///
/// - `C` — the configuration type that fully describes the component's
///   immutable parameters.
///
/// # Errors
///
/// Returns [`DexError::InvalidConfiguration`](crate::error::DexError)
/// (or a more specific variant) if the configuration is invalid.
pub trait FromConfig<C> {
    /// Creates a new instance from the given configuration.
    ///
    /// The implementation validates all configuration invariants and
    /// returns a fully initialized value on success.  The configuration
    /// is taken by reference because it may be reused.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any configuration parameter is out
    /// of range or inconsistent.
    fn from_config(config: &C) -> Result<Self>
    where
        Self: Sized;
}
