//! Perpetual American option approximations.
//!
//! Closed-form values for American options with no expiry, driven by the
//! roots of the characteristic quadratic of the perpetual ODE:
//!
//! - y₁ = ½ - b/σ² + √((b/σ² - ½)² + 2r/σ²)
//! - y₂ = ½ - b/σ² - √((b/σ² - ½)² + 2r/σ²)
//!
//! **Call**: C = K/(y₁-1) · ((y₁-1)/y₁ · S/K)^y₁
//! **Put**: P = K/(1-y₂) · ((y₂-1)/y₂ · S/K)^y₂
//!
//! The functions share the `(S, K, T, r, σ, b)` signature of the European
//! formulas so that they can be swept the same way; `T` is accepted and
//! ignored. The call is only finite for `b < r`.

/// Positive root y₁ of the perpetual characteristic equation.
#[inline]
pub fn y1(rate: f64, vol: f64, carry: f64) -> f64 {
    let var = vol * vol;
    let shift = carry / var - 0.5;
    0.5 - carry / var + (shift * shift + 2.0 * rate / var).sqrt()
}

/// Negative root y₂ of the perpetual characteristic equation.
#[inline]
pub fn y2(rate: f64, vol: f64, carry: f64) -> f64 {
    let var = vol * vol;
    let shift = carry / var - 0.5;
    0.5 - carry / var - (shift * shift + 2.0 * rate / var).sqrt()
}

/// Perpetual American call. `_expiry` is ignored.
///
/// # Examples
/// ```
/// use pricer_models::analytical::american::american_call;
///
/// let c = american_call(110.0, 100.0, 0.5, 0.1, 0.1, 0.02);
/// assert!((c - 18.5035).abs() < 1e-4);
/// ```
#[inline]
pub fn american_call(
    spot: f64,
    strike: f64,
    _expiry: f64,
    rate: f64,
    vol: f64,
    carry: f64,
) -> f64 {
    let y = y1(rate, vol, carry);
    strike / (y - 1.0) * ((y - 1.0) / y * spot / strike).powf(y)
}

/// Perpetual American put. `_expiry` is ignored.
///
/// # Examples
/// ```
/// use pricer_models::analytical::american::american_put;
///
/// let p = american_put(110.0, 100.0, 0.5, 0.1, 0.1, 0.02);
/// assert!((p - 3.03106).abs() < 1e-4);
/// ```
#[inline]
pub fn american_put(
    spot: f64,
    strike: f64,
    _expiry: f64,
    rate: f64,
    vol: f64,
    carry: f64,
) -> f64 {
    let y = y2(rate, vol, carry);
    strike / (1.0 - y) * ((y - 1.0) / y * spot / strike).powf(y)
}
