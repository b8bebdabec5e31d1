//! Put-call parity for European options on a non-dividend underlying.
//!
//! C - P = S - K·e^(-rT)
//!
//! These helpers assume `b = r`; for a general cost of carry the spot term
//! becomes S·e^((b-r)T).

/// Default tolerance for [`satisfies_parity`].
pub const DEFAULT_PARITY_TOLERANCE: f64 = 1e-6;

/// Call price implied by a put price.
///
/// C = P + S - K·e^(-rT)
#[inline]
pub fn call_from_put(put: f64, spot: f64, strike: f64, expiry: f64, rate: f64) -> f64 {
    put + spot - strike * (-rate * expiry).exp()
}

/// Put price implied by a call price.
///
/// P = C - S + K·e^(-rT)
#[inline]
pub fn put_from_call(call: f64, spot: f64, strike: f64, expiry: f64, rate: f64) -> f64 {
    call - spot + strike * (-rate * expiry).exp()
}

/// Whether `call` and `put` agree with parity to within `tolerance`.
///
/// Returns `false` when either price is `NaN`.
///
/// # Examples
/// ```
/// use pricer_models::analytical::parity::{satisfies_parity, DEFAULT_PARITY_TOLERANCE};
///
/// assert!(satisfies_parity(2.13337, 5.84628, 60.0, 65.0, 0.25, 0.08, 1e-4));
/// assert!(!satisfies_parity(3.0, 5.84628, 60.0, 65.0, 0.25, 0.08, DEFAULT_PARITY_TOLERANCE));
/// ```
#[inline]
pub fn satisfies_parity(
    call: f64,
    put: f64,
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    tolerance: f64,
) -> bool {
    let lhs = call - put;
    let rhs = spot - strike * (-rate * expiry).exp();
    (lhs - rhs).abs() < tolerance
}
