//! # Pricer Risk (L3: Application)
//!
//! Parameter sweeps and sensitivity checks on top of the closed-form
//! formulas in `pricer_models`.
//!
//! This crate provides:
//! - Valuation kind dispatch (`ValuationKind`)
//! - 1-D and 2-D parameter sweeps with rectangular result matrices
//! - Rayon row-parallel grid evaluation above a configurable threshold
//! - Name-based sweep requests for configuration files and the CLI
//! - Finite-difference Greeks and step-size convergence studies
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L3)             │
//! ├─────────────────────────────────────────┤
//! │  sweep/     - kinds, engine, requests   │
//! │  greeks/    - finite differences        │
//! │  parallel/  - Rayon utilities           │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_models (L2)            │
//! │  closed-form prices and Greeks          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_core::math::Mesh;
//! use pricer_core::types::{BaseParameters, ParameterSlot};
//! use pricer_risk::sweep::{SweepAxis, SweepEngine, ValuationKind};
//!
//! let base = BaseParameters::new(0.0, 0.0, 1.0, 0.05, 0.2, 0.05);
//! let spots = Mesh::generate(10.0, 50.0, 1.0).unwrap();
//! let strikes = Mesh::generate(20.0, 40.0, 2.0).unwrap();
//!
//! let engine = SweepEngine::default();
//! let matrix = engine.sweep_kind_2d(
//!     ValuationKind::Price,
//!     SweepAxis::new(&spots, ParameterSlot::Spot),
//!     SweepAxis::new(&strikes, ParameterSlot::Strike),
//!     &base,
//! );
//!
//! assert_eq!(matrix.rows(), 41);
//! assert_eq!(matrix.cols(), 11);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod greeks;
pub mod parallel;
pub mod sweep;
