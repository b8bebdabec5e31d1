//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form option formulas and the textbook data they are validated
//! against.
//!
//! This crate provides:
//! - Generalised Black-Scholes call and put prices with cost of carry
//! - Analytic Greeks (delta, gamma, vega, theta)
//! - Perpetual American call and put approximations
//! - Put-call parity helpers
//! - Textbook reference batches
//!
//! ## Design Principles
//!
//! - **Uniform signature**: every valuation function is
//!   `fn(S, K, T, r, σ, b) -> f64`, so it is a
//!   [`PricingFormula`](pricer_core::traits::PricingFormula) as-is
//! - **Total functions**: no branching on degenerate inputs; `NaN` and `±∞`
//!   propagate to the caller
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::traits::PricingFormula;
//! use pricer_core::types::BaseParameters;
//! use pricer_models::analytical::call_price;
//!
//! let params = BaseParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.05);
//! let price = call_price.value(&params);
//! assert!((price - 10.4506).abs() < 1e-4);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod reference;
