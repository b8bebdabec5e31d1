//! # pricer_core: Foundation for the Sweep Valuation Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - The valuation tuple `BaseParameters` and its selector `ParameterSlot` (`types::params`)
//! - Linearly spaced sweep axes: `Mesh` (`math::mesh`)
//! - The formula seam: `PricingFormula` (`traits::formula`)
//! - Error types: `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::mesh::Mesh;
//! use pricer_core::traits::PricingFormula;
//! use pricer_core::types::{BaseParameters, ParameterSlot};
//!
//! let base = BaseParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.05);
//! let spots = Mesh::generate(90.0, 110.0, 10.0).unwrap();
//!
//! let intrinsic = |s: f64, k: f64, _t: f64, _r: f64, _sig: f64, _b: f64| (s - k).max(0.0);
//! let values: Vec<f64> = spots
//!     .iter()
//!     .map(|&s| intrinsic.value(&base.with(ParameterSlot::Spot, s)))
//!     .collect();
//!
//! assert_eq!(values, vec![0.0, 0.0, 10.0]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for parameters, slots and meshes

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
