//! Bump-and-revalue Greeks.
//!
//! | Greek | Scheme |
//! |-------|--------|
//! | Delta | central: (f(S+h) - f(S-h)) / 2h |
//! | Gamma | central: (f(S+h) - 2f(S) + f(S-h)) / h² |
//! | Theta | backward: (f(T-h) - f(T)) / h |
//! | Vega  | central: (f(σ+h) - f(σ-h)) / 2h |
//!
//! Theta uses a one-sided difference so that it never evaluates past `T`
//! into a longer-dated option; it is therefore only first-order accurate.

use pricer_core::traits::PricingFormula;
use pricer_core::types::{BaseParameters, ParameterSlot, PricingError, PricingResult};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Default bump size.
pub const DEFAULT_STEP_SIZE: f64 = 0.01;

/// Finite-difference Greeks of a single formula.
///
/// The step size is the only mutable state; changing it with
/// [`set_step_size`](Self::set_step_size) affects later calls only. The
/// oracle is `Clone` when its formula is, so parallel workers each own one.
///
/// # Examples
/// ```
/// use pricer_core::types::BaseParameters;
/// use pricer_models::analytical::{call_delta, call_price};
/// use pricer_risk::greeks::FiniteDifference;
///
/// let params = BaseParameters::new(105.0, 100.0, 0.5, 0.1, 0.36, 0.0);
/// let oracle = FiniteDifference::new(call_price, 0.01).unwrap();
///
/// let exact = call_delta(105.0, 100.0, 0.5, 0.1, 0.36, 0.0);
/// assert!((oracle.delta(&params) - exact).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct FiniteDifference<F> {
    formula: F,
    step_size: f64,
}

fn check_step_size(h: f64) -> PricingResult<()> {
    if h.is_finite() && h > 0.0 {
        Ok(())
    } else {
        Err(PricingError::configuration_misuse(format!(
            "Step size must be positive and finite, got {}",
            h
        )))
    }
}

impl<F: PricingFormula> FiniteDifference<F> {
    /// Creates an oracle with step `h`.
    ///
    /// # Errors
    ///
    /// `ConfigurationMisuse` when `h` is not a positive finite number.
    pub fn new(formula: F, h: f64) -> PricingResult<Self> {
        check_step_size(h)?;
        Ok(Self {
            formula,
            step_size: h,
        })
    }

    /// Creates an oracle with [`DEFAULT_STEP_SIZE`].
    pub fn with_default_step(formula: F) -> Self {
        Self {
            formula,
            step_size: DEFAULT_STEP_SIZE,
        }
    }

    /// Current step size.
    #[inline]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Changes the step size for subsequent calls.
    ///
    /// A rejected value leaves the previous step in place.
    pub fn set_step_size(&mut self, h: f64) -> PricingResult<()> {
        check_step_size(h)?;
        self.step_size = h;
        Ok(())
    }

    /// The wrapped formula.
    pub fn formula(&self) -> &F {
        &self.formula
    }

    #[inline]
    fn bumped(&self, params: &BaseParameters, slot: ParameterSlot, shift: f64) -> f64 {
        self.formula.value(&params.with(slot, params.get(slot) + shift))
    }

    /// Central-difference delta.
    pub fn delta(&self, params: &BaseParameters) -> f64 {
        let h = self.step_size;
        let up = self.bumped(params, ParameterSlot::Spot, h);
        let down = self.bumped(params, ParameterSlot::Spot, -h);
        (up - down) / (2.0 * h)
    }

    /// Central second-difference gamma.
    pub fn gamma(&self, params: &BaseParameters) -> f64 {
        let h = self.step_size;
        let up = self.bumped(params, ParameterSlot::Spot, h);
        let mid = self.formula.value(params);
        let down = self.bumped(params, ParameterSlot::Spot, -h);
        (up - 2.0 * mid + down) / (h * h)
    }

    /// Backward-difference theta, the value change as one step of time passes.
    pub fn theta(&self, params: &BaseParameters) -> f64 {
        let h = self.step_size;
        let earlier = self.bumped(params, ParameterSlot::TimeToExpiry, -h);
        let now = self.formula.value(params);
        (earlier - now) / h
    }

    /// Central-difference vega.
    pub fn vega(&self, params: &BaseParameters) -> f64 {
        let h = self.step_size;
        let up = self.bumped(params, ParameterSlot::Volatility, h);
        let down = self.bumped(params, ParameterSlot::Volatility, -h);
        (up - down) / (2.0 * h)
    }

    /// Computes one Greek.
    pub fn compute(&self, greek: FiniteDifferenceGreek, params: &BaseParameters) -> f64 {
        match greek {
            FiniteDifferenceGreek::Delta => self.delta(params),
            FiniteDifferenceGreek::Gamma => self.gamma(params),
            FiniteDifferenceGreek::Theta => self.theta(params),
            FiniteDifferenceGreek::Vega => self.vega(params),
        }
    }

    /// All four Greeks at the current step.
    pub fn greeks(&self, params: &BaseParameters) -> NumericalGreeks {
        NumericalGreeks {
            step_size: self.step_size,
            delta: self.delta(params),
            gamma: self.gamma(params),
            theta: self.theta(params),
            vega: self.vega(params),
        }
    }
}

/// Greeks the oracle can approximate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FiniteDifferenceGreek {
    /// ∂V/∂S
    Delta,
    /// ∂²V/∂S²
    Gamma,
    /// -∂V/∂T
    Theta,
    /// ∂V/∂σ
    Vega,
}

impl FiniteDifferenceGreek {
    /// All supported Greeks.
    pub const ALL: [FiniteDifferenceGreek; 4] = [
        FiniteDifferenceGreek::Delta,
        FiniteDifferenceGreek::Gamma,
        FiniteDifferenceGreek::Theta,
        FiniteDifferenceGreek::Vega,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            FiniteDifferenceGreek::Delta => "Delta",
            FiniteDifferenceGreek::Gamma => "Gamma",
            FiniteDifferenceGreek::Theta => "Theta",
            FiniteDifferenceGreek::Vega => "Vega",
        }
    }
}

/// Snapshot of all finite-difference Greeks at one step size.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct NumericalGreeks {
    /// Step size used.
    pub step_size: f64,
    /// Delta.
    pub delta: f64,
    /// Gamma.
    pub gamma: f64,
    /// Theta.
    pub theta: f64,
    /// Vega.
    pub vega: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::sweep::Formula;
    use pricer_models::analytical::{call_delta, call_price, call_theta, gamma, vega};

    fn params() -> BaseParameters {
        BaseParameters::new(105.0, 100.0, 0.5, 0.1, 0.36, 0.0)
    }

    fn oracle(h: f64) -> FiniteDifference<Formula> {
        FiniteDifference::new(call_price as Formula, h).unwrap()
    }

    #[test]
    fn test_default_step() {
        let fd = FiniteDifference::with_default_step(call_price);
        assert_eq!(fd.step_size(), DEFAULT_STEP_SIZE);
    }

    #[test]
    fn test_greeks_near_analytic() {
        let p = params();
        let [s, k, t, r, v, b] = p.to_array();
        let fd = oracle(0.01);
        assert_relative_eq!(fd.delta(&p), call_delta(s, k, t, r, v, b), epsilon = 1e-7);
        assert_relative_eq!(fd.gamma(&p), gamma(s, k, t, r, v, b), epsilon = 1e-8);
        assert_relative_eq!(fd.theta(&p), call_theta(s, k, t, r, v, b), epsilon = 0.1);
        assert_relative_eq!(fd.vega(&p), vega(s, k, t, r, v, b), epsilon = 1e-2);
    }

    #[test]
    fn test_theta_is_backward_difference() {
        let p = params();
        let fd = oracle(0.05);
        let expected = (call_price(105.0, 100.0, 0.45, 0.1, 0.36, 0.0)
            - call_price(105.0, 100.0, 0.5, 0.1, 0.36, 0.0))
            / 0.05;
        assert_relative_eq!(fd.theta(&p), expected, epsilon = 1e-10);
    }

    #[test]
    fn test_set_step_size_affects_later_calls() {
        let p = params();
        let mut fd = oracle(0.1);
        let coarse = fd.delta(&p);
        fd.set_step_size(0.001).unwrap();
        assert_eq!(fd.step_size(), 0.001);
        let fine = fd.delta(&p);
        let exact = call_delta(105.0, 100.0, 0.5, 0.1, 0.36, 0.0);
        assert!((fine - exact).abs() < (coarse - exact).abs());
    }

    #[test]
    fn test_invalid_step_rejected() {
        for h in [0.0, -0.01, f64::NAN, f64::INFINITY] {
            let err = FiniteDifference::new(call_price as Formula, h).unwrap_err();
            assert!(matches!(err, PricingError::ConfigurationMisuse(_)));
            assert!(matches!(
                FiniteDifference::new(call_price, h),
                Err(PricingError::ConfigurationMisuse(_))
            ));
        }
    }

    #[test]
    fn test_rejected_step_keeps_previous() {
        let mut fd = oracle(0.01);
        assert!(fd.set_step_size(0.0).is_err());
        assert!(fd.set_step_size(-1.0).is_err());
        assert_eq!(fd.step_size(), 0.01);
    }

    #[test]
    fn test_large_step_accepted() {
        let fd = oracle(50.0);
        assert!(fd.delta(&params()).is_finite());
    }

    #[test]
    fn test_non_finite_values_propagate() {
        let fd = oracle(0.01);
        let undefined_vol = BaseParameters::new(105.0, 100.0, 0.5, 0.1, f64::NAN, 0.0);
        assert!(fd.delta(&undefined_vol).is_nan());
        assert!(fd.theta(&undefined_vol).is_nan());
    }

    #[test]
    fn test_greeks_snapshot_matches_individual_calls() {
        let p = params();
        let fd = oracle(0.01);
        let g = fd.greeks(&p);
        assert_eq!(g.step_size, 0.01);
        assert_eq!(g.delta, fd.compute(FiniteDifferenceGreek::Delta, &p));
        assert_eq!(g.gamma, fd.compute(FiniteDifferenceGreek::Gamma, &p));
        assert_eq!(g.theta, fd.compute(FiniteDifferenceGreek::Theta, &p));
        assert_eq!(g.vega, fd.compute(FiniteDifferenceGreek::Vega, &p));
    }

    #[test]
    fn test_clone_is_independent() {
        let fd = oracle(0.01);
        let mut worker = fd.clone();
        worker.set_step_size(0.1).unwrap();
        assert_eq!(fd.step_size(), 0.01);
        assert_eq!(worker.step_size(), 0.1);
    }
}
