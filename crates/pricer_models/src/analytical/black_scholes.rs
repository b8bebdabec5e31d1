//! Generalised Black-Scholes pricing for European options.
//!
//! The cost-of-carry parameter `b` selects the underlying:
//! - `b = r`: non-dividend stock (Black-Scholes 1973)
//! - `b = r - q`: stock with continuous dividend yield `q` (Merton 1973)
//! - `b = 0`: futures option (Black 1976)
//! - `b = r - r_f`: currency option (Garman-Kohlhagen 1983)
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^((b-r)T)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^((b-r)T)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (b + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Degenerate Inputs
//!
//! No limiting cases are special-cased. With `T = 0` or `σ = 0` the terms
//! d₁ and d₂ become `±∞` or `NaN` and the result follows IEEE arithmetic;
//! callers decide what to do with non-finite values.

use super::distributions::norm_cdf;

/// Computes the d₁ term.
///
/// d₁ = (ln(S/K) + (b + σ²/2)T) / (σ√T)
///
/// The rate `r` does not enter d₁; it is accepted so that every formula in
/// this module shares the `(S, K, T, r, σ, b)` signature.
#[inline]
pub fn d1(spot: f64, strike: f64, expiry: f64, _rate: f64, vol: f64, carry: f64) -> f64 {
    ((spot / strike).ln() + (carry + 0.5 * vol * vol) * expiry) / (vol * expiry.sqrt())
}

/// Computes the d₂ term from d₁.
///
/// d₂ = d₁ - σ√T
#[inline]
pub fn d2(d1: f64, vol: f64, expiry: f64) -> f64 {
    d1 - vol * expiry.sqrt()
}

/// European call price under the generalised Black-Scholes model.
///
/// C = S·e^((b-r)T)·N(d₁) - K·e^(-rT)·N(d₂)
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes::call_price;
///
/// // Hull, S = 60, K = 65, T = 0.25, r = b = 8%, σ = 30%
/// let c = call_price(60.0, 65.0, 0.25, 0.08, 0.30, 0.08);
/// assert!((c - 2.13337).abs() < 1e-4);
/// ```
#[inline]
pub fn call_price(spot: f64, strike: f64, expiry: f64, rate: f64, vol: f64, carry: f64) -> f64 {
    let d1 = d1(spot, strike, expiry, rate, vol, carry);
    let d2 = d2(d1, vol, expiry);
    let carry_factor = ((carry - rate) * expiry).exp();
    let discount = (-rate * expiry).exp();

    spot * carry_factor * norm_cdf(d1) - strike * discount * norm_cdf(d2)
}

/// European put price under the generalised Black-Scholes model.
///
/// P = K·e^(-rT)·N(-d₂) - S·e^((b-r)T)·N(-d₁)
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes::put_price;
///
/// let p = put_price(60.0, 65.0, 0.25, 0.08, 0.30, 0.08);
/// assert!((p - 5.84628).abs() < 1e-4);
/// ```
#[inline]
pub fn put_price(spot: f64, strike: f64, expiry: f64, rate: f64, vol: f64, carry: f64) -> f64 {
    let d1 = d1(spot, strike, expiry, rate, vol, carry);
    let d2 = d2(d1, vol, expiry);
    let carry_factor = ((carry - rate) * expiry).exp();
    let discount = (-rate * expiry).exp();

    strike * discount * norm_cdf(-d2) - spot * carry_factor * norm_cdf(-d1)
}
