//! Valuation kinds: the closed set of quantities a sweep can compute.

use std::fmt;
use std::str::FromStr;

use pricer_core::traits::PricingFormula;
use pricer_core::types::{BaseParameters, ParameterSlot, PricingError};
use pricer_models::analytical::{
    american_call, american_put, call_delta, call_price, call_theta, gamma, put_delta, put_price,
    put_theta, vega,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Signature shared by every closed-form formula.
pub type Formula = fn(f64, f64, f64, f64, f64, f64) -> f64;

/// What a sweep evaluates at each grid point.
///
/// # Examples
/// ```
/// use pricer_core::types::BaseParameters;
/// use pricer_risk::sweep::ValuationKind;
///
/// let kind: ValuationKind = "call-delta".parse().unwrap();
/// let params = BaseParameters::new(105.0, 100.0, 0.5, 0.1, 0.36, 0.0);
/// assert!((kind.evaluate(&params) - 0.5946).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ValuationKind {
    /// European call price.
    Price,
    /// European put price.
    PutPrice,
    /// Call delta.
    CallDelta,
    /// Put delta.
    PutDelta,
    /// Gamma.
    Gamma,
    /// Vega.
    Vega,
    /// Call theta.
    CallTheta,
    /// Put theta.
    PutTheta,
    /// Perpetual American call.
    AmericanCall,
    /// Perpetual American put.
    AmericanPut,
}

impl ValuationKind {
    /// Every kind, in declaration order.
    pub const ALL: [ValuationKind; 10] = [
        ValuationKind::Price,
        ValuationKind::PutPrice,
        ValuationKind::CallDelta,
        ValuationKind::PutDelta,
        ValuationKind::Gamma,
        ValuationKind::Vega,
        ValuationKind::CallTheta,
        ValuationKind::PutTheta,
        ValuationKind::AmericanCall,
        ValuationKind::AmericanPut,
    ];

    /// The closed-form function behind this kind.
    #[inline]
    pub fn formula(self) -> Formula {
        match self {
            ValuationKind::Price => call_price,
            ValuationKind::PutPrice => put_price,
            ValuationKind::CallDelta => call_delta,
            ValuationKind::PutDelta => put_delta,
            ValuationKind::Gamma => gamma,
            ValuationKind::Vega => vega,
            ValuationKind::CallTheta => call_theta,
            ValuationKind::PutTheta => put_theta,
            ValuationKind::AmericanCall => american_call,
            ValuationKind::AmericanPut => american_put,
        }
    }

    /// Evaluates this kind at `params`.
    #[inline]
    pub fn evaluate(self, params: &BaseParameters) -> f64 {
        self.formula().value(params)
    }

    /// Whether the value of this kind varies with `slot`.
    ///
    /// Perpetual American values do not depend on time to expiry.
    pub fn depends_on(self, slot: ParameterSlot) -> bool {
        !matches!(
            (self, slot),
            (
                ValuationKind::AmericanCall | ValuationKind::AmericanPut,
                ParameterSlot::TimeToExpiry
            )
        )
    }

    /// Canonical kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            ValuationKind::Price => "price",
            ValuationKind::PutPrice => "put-price",
            ValuationKind::CallDelta => "call-delta",
            ValuationKind::PutDelta => "put-delta",
            ValuationKind::Gamma => "gamma",
            ValuationKind::Vega => "vega",
            ValuationKind::CallTheta => "call-theta",
            ValuationKind::PutTheta => "put-theta",
            ValuationKind::AmericanCall => "american-call",
            ValuationKind::AmericanPut => "american-put",
        }
    }

    /// Human-readable label for table headers.
    pub fn label(self) -> &'static str {
        match self {
            ValuationKind::Price => "Call Price",
            ValuationKind::PutPrice => "Put Price",
            ValuationKind::CallDelta => "Call Delta",
            ValuationKind::PutDelta => "Put Delta",
            ValuationKind::Gamma => "Gamma",
            ValuationKind::Vega => "Vega",
            ValuationKind::CallTheta => "Call Theta",
            ValuationKind::PutTheta => "Put Theta",
            ValuationKind::AmericanCall => "American Call",
            ValuationKind::AmericanPut => "American Put",
        }
    }
}

impl PricingFormula for ValuationKind {
    #[inline]
    fn value(&self, params: &BaseParameters) -> f64 {
        self.evaluate(params)
    }
}

impl fmt::Display for ValuationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValuationKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase().replace('_', "-");
        match normalised.as_str() {
            "price" | "call" | "call-price" => Ok(ValuationKind::Price),
            "put-price" | "put" => Ok(ValuationKind::PutPrice),
            "call-delta" | "delta" => Ok(ValuationKind::CallDelta),
            "put-delta" => Ok(ValuationKind::PutDelta),
            "gamma" => Ok(ValuationKind::Gamma),
            "vega" => Ok(ValuationKind::Vega),
            "call-theta" | "theta" => Ok(ValuationKind::CallTheta),
            "put-theta" => Ok(ValuationKind::PutTheta),
            "american-call" => Ok(ValuationKind::AmericanCall),
            "american-put" => Ok(ValuationKind::AmericanPut),
            _ => Err(PricingError::invalid_argument(format!(
                "Unknown valuation kind: {}",
                s
            ))),
        }
    }
}
