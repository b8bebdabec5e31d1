//! The pricing-formula seam.
//!
//! Sweeps and the finite-difference oracle only ever need "six inputs in,
//! one number out". [`PricingFormula`] captures exactly that, and is
//! implemented for every `Fn(f64, f64, f64, f64, f64, f64) -> f64`, so plain
//! functions such as `call_price` plug in without wrappers.

use crate::types::BaseParameters;

/// A pure valuation function of the `(S, K, T, r, σ, b)` tuple.
///
/// # Contract
///
/// - Deterministic and free of side effects.
/// - Total over `f64`: degenerate inputs return `NaN` or `±∞`, never panic.
///
/// # Examples
/// ```
/// use pricer_core::traits::PricingFormula;
/// use pricer_core::types::BaseParameters;
///
/// let intrinsic = |s: f64, k: f64, _t: f64, _r: f64, _sig: f64, _b: f64| (s - k).max(0.0);
/// let params = BaseParameters::new(110.0, 100.0, 1.0, 0.05, 0.2, 0.05);
///
/// assert_eq!(intrinsic.value(&params), 10.0);
/// ```
pub trait PricingFormula {
    /// Evaluates the formula at `params`.
    fn value(&self, params: &BaseParameters) -> f64;
}

impl<F> PricingFormula for F
where
    F: Fn(f64, f64, f64, f64, f64, f64) -> f64,
{
    #[inline]
    fn value(&self, params: &BaseParameters) -> f64 {
        self(
            params.spot,
            params.strike,
            params.expiry,
            params.rate,
            params.volatility,
            params.cost_of_carry,
        )
    }
}
