//! Core valuation types.
//!
//! This module provides:
//! - `params`: The `(S, K, T, r, σ, b)` tuple and its slot selector
//! - `error`: Structured error types for the pricer crates
//!
//! # Re-exports
//!
//! - [`BaseParameters`], [`ParameterSlot`], [`substitute`] from `params`
//! - [`PricingError`], [`PricingResult`] from `error`

pub mod error;
pub mod params;

pub use error::{PricingError, PricingResult};
pub use params::{substitute, BaseParameters, ParameterSlot};
