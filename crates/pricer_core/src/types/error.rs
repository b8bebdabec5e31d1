//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Failures raised by mesh construction, dispatch and
//!   finite-difference configuration
//!
//! Degenerate numerical results (NaN, ±∞) are never errors. Formulas return
//! them as ordinary values and every layer propagates them unchanged.

use thiserror::Error;

/// Categorised pricing errors.
///
/// # Variants
/// - `InvalidArgument`: Caller passed something the engine cannot interpret
///   (unknown valuation kind or parameter, absent sweep axis, zero mesh step)
/// - `ConfigurationMisuse`: A numerical setting is outside its valid domain
///   (non-positive finite-difference step, zero batch size)
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidArgument("Unknown valuation kind: rho2".to_string());
/// assert_eq!(format!("{}", err), "Invalid argument: Unknown valuation kind: rho2");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Unrecognised or structurally malformed input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Numerical configuration outside its valid domain.
    #[error("Configuration misuse: {0}")]
    ConfigurationMisuse(String),
}

impl PricingError {
    /// Creates an `InvalidArgument` error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates a `ConfigurationMisuse` error.
    pub fn configuration_misuse(msg: impl Into<String>) -> Self {
        Self::ConfigurationMisuse(msg.into())
    }
}

/// Result alias used throughout the pricer crates.
pub type PricingResult<T> = Result<T, PricingError>;
