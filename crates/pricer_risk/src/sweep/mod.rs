//! Parameter sweeps over one or two mesh axes.
//!
//! - [`kind`]: the closed set of valuation kinds and their dispatch
//! - [`engine`]: `sweep_1d` / `sweep_2d`, [`ResultMatrix`] and the
//!   Rayon-aware [`SweepEngine`]
//! - [`request`]: name-based sweep descriptions validated into typed inputs

pub mod engine;
pub mod kind;
pub mod request;

pub use engine::{sweep_1d, sweep_2d, ResultMatrix, SweepAxis, SweepEngine};
pub use kind::{Formula, ValuationKind};
pub use request::{AxisSpec, SweepOutput, SweepRequest};
