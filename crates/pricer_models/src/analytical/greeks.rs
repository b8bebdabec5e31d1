//! Analytic Greeks for the generalised Black-Scholes model.
//!
//! Every function shares the `(S, K, T, r, σ, b)` signature of the price
//! formulas, so Greeks can be swept and cross-checked exactly like prices.
//!
//! ## Formulas
//!
//! With c = e^((b-r)T):
//! - Call Delta = c·N(d₁), Put Delta = c·(N(d₁) - 1)
//! - Gamma = c·φ(d₁) / (S·σ·√T)
//! - Vega = S·c·φ(d₁)·√T
//! - Call Theta = -S·c·φ(d₁)·σ/(2√T) - (b-r)·S·c·N(d₁) - r·K·e^(-rT)·N(d₂)
//! - Put Theta = -S·c·φ(d₁)·σ/(2√T) + (b-r)·S·c·N(-d₁) + r·K·e^(-rT)·N(-d₂)
//!
//! Theta is the value change per unit of calendar time, i.e. -∂V/∂T.

use super::black_scholes::{d1, d2};
use super::distributions::{norm_cdf, norm_pdf};

/// Call delta, ∂C/∂S.
///
/// # Examples
/// ```
/// use pricer_models::analytical::greeks::call_delta;
///
/// let delta = call_delta(105.0, 100.0, 0.5, 0.1, 0.36, 0.0);
/// assert!((delta - 0.5946).abs() < 1e-4);
/// ```
#[inline]
pub fn call_delta(spot: f64, strike: f64, expiry: f64, rate: f64, vol: f64, carry: f64) -> f64 {
    let d1 = d1(spot, strike, expiry, rate, vol, carry);
    ((carry - rate) * expiry).exp() * norm_cdf(d1)
}

/// Put delta, ∂P/∂S.
///
/// # Examples
/// ```
/// use pricer_models::analytical::greeks::put_delta;
///
/// let delta = put_delta(105.0, 100.0, 0.5, 0.1, 0.36, 0.0);
/// assert!((delta + 0.3566).abs() < 1e-4);
/// ```
#[inline]
pub fn put_delta(spot: f64, strike: f64, expiry: f64, rate: f64, vol: f64, carry: f64) -> f64 {
    let d1 = d1(spot, strike, expiry, rate, vol, carry);
    ((carry - rate) * expiry).exp() * (norm_cdf(d1) - 1.0)
}

/// Gamma, ∂²V/∂S² (identical for calls and puts).
#[inline]
pub fn gamma(spot: f64, strike: f64, expiry: f64, rate: f64, vol: f64, carry: f64) -> f64 {
    let d1 = d1(spot, strike, expiry, rate, vol, carry);
    norm_pdf(d1) * ((carry - rate) * expiry).exp() / (spot * vol * expiry.sqrt())
}

/// Vega, ∂V/∂σ (identical for calls and puts).
#[inline]
pub fn vega(spot: f64, strike: f64, expiry: f64, rate: f64, vol: f64, carry: f64) -> f64 {
    let d1 = d1(spot, strike, expiry, rate, vol, carry);
    spot * ((carry - rate) * expiry).exp() * norm_pdf(d1) * expiry.sqrt()
}

/// Call theta, -∂C/∂T.
#[inline]
pub fn call_theta(spot: f64, strike: f64, expiry: f64, rate: f64, vol: f64, carry: f64) -> f64 {
    let d1 = d1(spot, strike, expiry, rate, vol, carry);
    let d2 = d2(d1, vol, expiry);
    let carry_factor = ((carry - rate) * expiry).exp();
    let discount = (-rate * expiry).exp();

    let decay = -spot * carry_factor * norm_pdf(d1) * vol / (2.0 * expiry.sqrt());
    decay - (carry - rate) * spot * carry_factor * norm_cdf(d1)
        - rate * strike * discount * norm_cdf(d2)
}

/// Put theta, -∂P/∂T.
#[inline]
pub fn put_theta(spot: f64, strike: f64, expiry: f64, rate: f64, vol: f64, carry: f64) -> f64 {
    let d1 = d1(spot, strike, expiry, rate, vol, carry);
    let d2 = d2(d1, vol, expiry);
    let carry_factor = ((carry - rate) * expiry).exp();
    let discount = (-rate * expiry).exp();

    let decay = -spot * carry_factor * norm_pdf(d1) * vol / (2.0 * expiry.sqrt());
    decay
        + (carry - rate) * spot * carry_factor * norm_cdf(-d1)
        + rate * strike * discount * norm_cdf(-d2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::black_scholes::{call_price, put_price};
    use approx::assert_relative_eq;

    const S: f64 = 105.0;
    const K: f64 = 100.0;
    const T: f64 = 0.5;
    const R: f64 = 0.1;
    const SIG: f64 = 0.36;
    const B: f64 = 0.0;

    // ==========================================================
    // Reference Values
    // ==========================================================

    #[test]
    fn test_delta_reference_values() {
        assert_relative_eq!(call_delta(S, K, T, R, SIG, B), 0.5946, epsilon = 1e-4);
        assert_relative_eq!(put_delta(S, K, T, R, SIG, B), -0.3566, epsilon = 1e-4);
    }

    #[test]
    fn test_gamma_reference_value() {
        assert_relative_eq!(gamma(S, K, T, R, SIG, B), 0.0134936, epsilon = 1e-6);
    }

    #[test]
    fn test_vega_reference_value() {
        assert_relative_eq!(vega(S, K, T, R, SIG, B), 26.77812, epsilon = 1e-4);
    }

    #[test]
    fn test_theta_reference_values() {
        assert_relative_eq!(call_theta(S, K, T, R, SIG, B), -8.39684, epsilon = 1e-4);
        assert_relative_eq!(put_theta(S, K, T, R, SIG, B), -8.87245, epsilon = 1e-4);
    }

    // ==========================================================
    // Structural Relationships
    // ==========================================================

    #[test]
    fn test_call_put_delta_gap_is_carry_factor() {
        for carry in [0.0, 0.05, 0.1] {
            let gap = call_delta(S, K, T, R, SIG, carry) - put_delta(S, K, T, R, SIG, carry);
            assert_relative_eq!(gap, ((carry - R) * T).exp(), epsilon = 1e-14);
        }
    }

    #[test]
    fn test_vega_equals_gamma_scaled() {
        // Vega = Gamma · σ · S² · T
        let g = gamma(S, K, T, R, SIG, B);
        assert_relative_eq!(vega(S, K, T, R, SIG, B), g * SIG * S * S * T, epsilon = 1e-10);
    }

    #[test]
    fn test_gamma_non_negative() {
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            assert!(gamma(100.0, strike, 1.0, 0.05, 0.2, 0.05) >= 0.0);
        }
    }

    // ==========================================================
    // Greeks vs Finite Difference Tests
    // ==========================================================

    #[test]
    fn test_delta_vs_finite_diff() {
        let h = 0.01;
        let fd = (call_price(S + h, K, T, R, SIG, B) - call_price(S - h, K, T, R, SIG, B))
            / (2.0 * h);
        assert_relative_eq!(call_delta(S, K, T, R, SIG, B), fd, epsilon = 1e-7);

        let fd = (put_price(S + h, K, T, R, SIG, B) - put_price(S - h, K, T, R, SIG, B))
            / (2.0 * h);
        assert_relative_eq!(put_delta(S, K, T, R, SIG, B), fd, epsilon = 1e-7);
    }

    #[test]
    fn test_vega_vs_finite_diff() {
        let h = 1e-4;
        let fd = (call_price(S, K, T, R, SIG + h, B) - call_price(S, K, T, R, SIG - h, B))
            / (2.0 * h);
        assert_relative_eq!(vega(S, K, T, R, SIG, B), fd, epsilon = 1e-5);
    }

    #[test]
    fn test_theta_vs_central_diff_in_expiry() {
        let h = 1e-5;
        let fd = -(put_price(S, K, T + h, R, SIG, 0.03) - put_price(S, K, T - h, R, SIG, 0.03))
            / (2.0 * h);
        assert_relative_eq!(put_theta(S, K, T, R, SIG, 0.03), fd, epsilon = 1e-5);
    }

    // ==========================================================
    // Degenerate Inputs
    // ==========================================================

    #[test]
    fn test_gamma_at_expiry_is_not_finite() {
        assert!(!gamma(100.0, 100.0, 0.0, 0.05, 0.2, 0.05).is_finite());
        assert!(!gamma(110.0, 100.0, 0.0, 0.05, 0.2, 0.05).is_finite());
    }

    #[test]
    fn test_zero_volatility_gamma_is_not_finite() {
        assert!(!gamma(100.0, 100.0, 1.0, 0.05, 0.0, 0.05).is_finite());
    }
}
