//! Core trait abstractions shared across the exchange.
//!
//! This module defines the seams between components: [`FromConfig`] for
//! configuration-driven construction, [`LiquiditySource`] for read-only
//! views of provided pool liquidity, and [`Clock`] for injectable time so
//! the reward engine can be driven deterministically in tests.

mod clock;
mod from_config;
mod liquidity_source;

pub use clock::{Clock, ManualClock, SystemClock};
pub use from_config::FromConfig;
pub use liquidity_source::LiquiditySource;
