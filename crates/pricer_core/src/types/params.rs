//! Valuation inputs: the six-parameter tuple and its slot selector.
//!
//! Every closed-form formula in the workspace is a function of the same
//! ordered tuple `(S, K, T, r, σ, b)`. [`BaseParameters`] holds one fully
//! specified scenario and [`ParameterSlot`] names one of its fields, so that
//! sweeps can override a field without knowing anything about the formula.

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// Selector for one of the six scalar valuation inputs.
///
/// Parsing accepts the short symbols used in textbook tables (`S`, `K`, `T`,
/// `r`, `sig`, `b`) as well as descriptive names, case-insensitively.
///
/// # Examples
/// ```
/// use pricer_core::types::ParameterSlot;
///
/// let slot: ParameterSlot = "sig".parse().unwrap();
/// assert_eq!(slot, ParameterSlot::Volatility);
/// assert!("theta".parse::<ParameterSlot>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ParameterSlot {
    /// Spot price of the underlying (S).
    Spot,
    /// Strike price (K).
    Strike,
    /// Time to expiry in years (T).
    TimeToExpiry,
    /// Continuously compounded risk-free rate (r).
    RiskFreeRate,
    /// Volatility of the underlying (σ).
    Volatility,
    /// Cost of carry (b).
    CostOfCarry,
}

impl ParameterSlot {
    /// All slots in tuple order.
    pub const ALL: [ParameterSlot; 6] = [
        ParameterSlot::Spot,
        ParameterSlot::Strike,
        ParameterSlot::TimeToExpiry,
        ParameterSlot::RiskFreeRate,
        ParameterSlot::Volatility,
        ParameterSlot::CostOfCarry,
    ];

    /// Position of the slot in the `(S, K, T, r, σ, b)` tuple.
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            ParameterSlot::Spot => 0,
            ParameterSlot::Strike => 1,
            ParameterSlot::TimeToExpiry => 2,
            ParameterSlot::RiskFreeRate => 3,
            ParameterSlot::Volatility => 4,
            ParameterSlot::CostOfCarry => 5,
        }
    }

    /// Short textbook symbol, used for table labels.
    pub fn symbol(&self) -> &'static str {
        match self {
            ParameterSlot::Spot => "S",
            ParameterSlot::Strike => "K",
            ParameterSlot::TimeToExpiry => "T",
            ParameterSlot::RiskFreeRate => "r",
            ParameterSlot::Volatility => "sig",
            ParameterSlot::CostOfCarry => "b",
        }
    }
}

impl fmt::Display for ParameterSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ParameterSlot {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "s" | "spot" => Ok(ParameterSlot::Spot),
            "k" | "strike" => Ok(ParameterSlot::Strike),
            "t" | "expiry" | "time" | "time_to_expiry" => Ok(ParameterSlot::TimeToExpiry),
            "r" | "rate" | "risk_free_rate" => Ok(ParameterSlot::RiskFreeRate),
            "sig" | "sigma" | "vol" | "volatility" => Ok(ParameterSlot::Volatility),
            "b" | "carry" | "cost_of_carry" => Ok(ParameterSlot::CostOfCarry),
            other => Err(PricingError::invalid_argument(format!(
                "Unknown parameter: {}. Expected one of S, K, T, r, sig, b",
                other
            ))),
        }
    }
}

/// One fully specified valuation scenario `(S, K, T, r, σ, b)`.
///
/// The struct is `Copy`: substitution always yields a fresh value, so two
/// grid cells can never observe each other's overrides.
///
/// # Examples
/// ```
/// use pricer_core::types::{BaseParameters, ParameterSlot};
///
/// let base = BaseParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, 0.05);
/// let bumped = base.with(ParameterSlot::Spot, 105.0);
///
/// assert_eq!(bumped.spot, 105.0);
/// assert_eq!(base.spot, 100.0);
/// assert_eq!(bumped.strike, base.strike);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseParameters {
    /// Spot price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to expiry in years (T)
    pub expiry: f64,
    /// Risk-free rate (r)
    pub rate: f64,
    /// Volatility (σ)
    pub volatility: f64,
    /// Cost of carry (b)
    pub cost_of_carry: f64,
}

impl BaseParameters {
    /// Creates a parameter tuple in `(S, K, T, r, σ, b)` order.
    ///
    /// No validation is applied: degenerate values are legal inputs and
    /// produce non-finite formula outputs downstream.
    #[inline]
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
        cost_of_carry: f64,
    ) -> Self {
        Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            cost_of_carry,
        }
    }

    /// Creates a tuple from an array in `(S, K, T, r, σ, b)` order.
    #[inline]
    pub fn from_array(values: [f64; 6]) -> Self {
        let [spot, strike, expiry, rate, volatility, cost_of_carry] = values;
        Self::new(spot, strike, expiry, rate, volatility, cost_of_carry)
    }

    /// Returns the tuple as an array in `(S, K, T, r, σ, b)` order.
    #[inline]
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
            self.cost_of_carry,
        ]
    }

    /// Reads the field named by `slot`.
    #[inline]
    pub fn get(&self, slot: ParameterSlot) -> f64 {
        match slot {
            ParameterSlot::Spot => self.spot,
            ParameterSlot::Strike => self.strike,
            ParameterSlot::TimeToExpiry => self.expiry,
            ParameterSlot::RiskFreeRate => self.rate,
            ParameterSlot::Volatility => self.volatility,
            ParameterSlot::CostOfCarry => self.cost_of_carry,
        }
    }

    /// Returns a copy with the field named by `slot` replaced by `value`.
    #[inline]
    #[must_use]
    pub fn with(mut self, slot: ParameterSlot, value: f64) -> Self {
        match slot {
            ParameterSlot::Spot => self.spot = value,
            ParameterSlot::Strike => self.strike = value,
            ParameterSlot::TimeToExpiry => self.expiry = value,
            ParameterSlot::RiskFreeRate => self.rate = value,
            ParameterSlot::Volatility => self.volatility = value,
            ParameterSlot::CostOfCarry => self.cost_of_carry = value,
        }
        self
    }
}

/// Free-function form of [`BaseParameters::with`].
#[inline]
pub fn substitute(base: &BaseParameters, slot: ParameterSlot, value: f64) -> BaseParameters {
    base.with(slot, value)
}
