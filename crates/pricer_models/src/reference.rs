//! Textbook reference data used to validate the closed-form formulas.
//!
//! The European batches are priced with `b = r` (non-dividend stock); the
//! expected prices are quoted to the precision of the source tables.

use pricer_core::types::BaseParameters;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One European validation batch with its quoted call and put prices.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OptionBatch {
    /// Time to expiry in years.
    pub expiry: f64,
    /// Strike price.
    pub strike: f64,
    /// Volatility.
    pub volatility: f64,
    /// Risk-free rate (also used as cost of carry).
    pub rate: f64,
    /// Spot price.
    pub spot: f64,
    /// Quoted call price.
    pub call: f64,
    /// Quoted put price.
    pub put: f64,
}

impl OptionBatch {
    /// Parameters for this batch, with `b = r`.
    pub fn parameters(&self) -> BaseParameters {
        BaseParameters::new(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
            self.rate,
        )
    }
}

/// The four textbook batches.
pub fn textbook_batches() -> [OptionBatch; 4] {
    [
        OptionBatch {
            expiry: 0.25,
            strike: 65.0,
            volatility: 0.30,
            rate: 0.08,
            spot: 60.0,
            call: 2.13337,
            put: 5.84628,
        },
        OptionBatch {
            expiry: 1.0,
            strike: 100.0,
            volatility: 0.2,
            rate: 0.0,
            spot: 100.0,
            call: 7.96557,
            put: 7.96557,
        },
        OptionBatch {
            expiry: 1.0,
            strike: 10.0,
            volatility: 0.50,
            rate: 0.12,
            spot: 5.0,
            call: 0.204058,
            put: 4.07326,
        },
        OptionBatch {
            expiry: 30.0,
            strike: 100.0,
            volatility: 0.30,
            rate: 0.08,
            spot: 100.0,
            call: 92.17570,
            put: 1.24750,
        },
    ]
}

/// Expected Greek values for a fixed parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GreeksReference {
    /// Parameters the Greeks are quoted at.
    pub params: BaseParameters,
    /// Quoted call delta.
    pub call_delta: f64,
    /// Quoted put delta.
    pub put_delta: f64,
}

/// Delta reference: S = 105, K = 100, T = 0.5, r = 0.1, b = 0, σ = 0.36.
pub fn greeks_reference() -> GreeksReference {
    GreeksReference {
        params: BaseParameters::new(105.0, 100.0, 0.5, 0.1, 0.36, 0.0),
        call_delta: 0.5946,
        put_delta: -0.3566,
    }
}

/// Expected perpetual American values for a fixed parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AmericanReference {
    /// Parameters the prices are quoted at (expiry unused).
    pub params: BaseParameters,
    /// Quoted perpetual call.
    pub call: f64,
    /// Quoted perpetual put.
    pub put: f64,
}

/// Perpetual reference: S = 110, K = 100, r = 0.1, b = 0.02, σ = 0.1.
pub fn american_reference() -> AmericanReference {
    AmericanReference {
        params: BaseParameters::new(110.0, 100.0, 0.0, 0.1, 0.1, 0.02),
        call: 18.5035,
        put: 3.03106,
    }
}
