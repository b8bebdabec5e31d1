//! Core traits for valuation formulas.
//!
//! This module defines the single abstraction shared by the sweep engine and
//! the finite-difference oracle:
//! - Scalar valuation of a parameter tuple (`PricingFormula` trait)
//!
//! Formula selection elsewhere in the workspace is an enum with one `match`
//! arm per formula. The trait exists so that the engines stay agnostic of
//! which formula they drive.

pub mod formula;

pub use formula::PricingFormula;
