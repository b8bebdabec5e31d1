//! Step-size convergence of finite-difference Greeks against closed forms.

use pricer_core::traits::PricingFormula;
use pricer_core::types::{BaseParameters, PricingResult};

#[cfg(feature = "serde")]
use serde::Serialize;

use super::finite_difference::{FiniteDifference, FiniteDifferenceGreek};

/// Step sizes reported by default.
pub const DEFAULT_STUDY_STEPS: [f64; 4] = [0.1, 0.01, 0.001, 0.0001];

/// One step size of a convergence study.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ConvergenceRow {
    /// Step size.
    pub step: f64,
    /// Finite-difference estimate.
    pub numerical: f64,
    /// Closed-form value.
    pub analytic: f64,
    /// `|numerical - analytic|`.
    pub abs_error: f64,
}

/// Evaluates `greek` at each step in `steps` and compares with `analytic`.
///
/// The oracle's step size is restored before returning, including on error.
///
/// # Errors
///
/// `ConfigurationMisuse` if any step is not a positive finite number.
///
/// # Examples
/// ```
/// use pricer_core::types::BaseParameters;
/// use pricer_models::analytical::{call_delta, call_price};
/// use pricer_risk::greeks::{convergence_study, FiniteDifference, FiniteDifferenceGreek};
///
/// let params = BaseParameters::new(105.0, 100.0, 0.5, 0.1, 0.36, 0.0);
/// let mut oracle = FiniteDifference::with_default_step(call_price);
/// let rows = convergence_study(
///     &mut oracle,
///     FiniteDifferenceGreek::Delta,
///     &call_delta,
///     &params,
///     &[0.1, 0.01],
/// )
/// .unwrap();
///
/// assert!(rows[1].abs_error < rows[0].abs_error);
/// assert_eq!(oracle.step_size(), 0.01);
/// ```
pub fn convergence_study<F, A>(
    oracle: &mut FiniteDifference<F>,
    greek: FiniteDifferenceGreek,
    analytic: &A,
    params: &BaseParameters,
    steps: &[f64],
) -> PricingResult<Vec<ConvergenceRow>>
where
    F: PricingFormula,
    A: PricingFormula + ?Sized,
{
    let original = oracle.step_size();
    let exact = analytic.value(params);

    let rows = steps
        .iter()
        .map(|&h| {
            oracle.set_step_size(h)?;
            let numerical = oracle.compute(greek, params);
            Ok(ConvergenceRow {
                step: h,
                numerical,
                analytic: exact,
                abs_error: (numerical - exact).abs(),
            })
        })
        .collect::<PricingResult<Vec<_>>>();

    oracle.set_step_size(original)?;
    rows
}
