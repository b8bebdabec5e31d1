//! Numerical Greeks used to cross-check the closed forms.

pub mod convergence;
pub mod finite_difference;

pub use convergence::{convergence_study, ConvergenceRow, DEFAULT_STUDY_STEPS};
pub use finite_difference::{
    FiniteDifference, FiniteDifferenceGreek, NumericalGreeks, DEFAULT_STEP_SIZE,
};
