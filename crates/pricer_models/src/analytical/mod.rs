//! Closed-form option formulas.
//!
//! Every valuation function takes the six scalars `(S, K, T, r, σ, b)` and
//! returns an `f64`. The functions are total: degenerate inputs produce
//! `NaN` or `±∞` rather than panics, and nothing here returns an error.
//!
//! - [`black_scholes`]: generalised Black-Scholes call/put with cost of carry
//! - [`greeks`]: analytic delta, gamma, vega, theta
//! - [`american`]: perpetual American call/put
//! - [`parity`]: put-call parity helpers
//! - [`distributions`]: standard normal CDF/PDF

pub mod american;
pub mod black_scholes;
pub mod distributions;
pub mod greeks;
pub mod parity;

pub use american::{american_call, american_put};
pub use black_scholes::{call_price, put_price};
pub use distributions::{norm_cdf, norm_pdf};
pub use greeks::{call_delta, call_theta, gamma, put_delta, put_theta, vega};
pub use parity::{call_from_put, put_from_call, satisfies_parity, DEFAULT_PARITY_TOLERANCE};
