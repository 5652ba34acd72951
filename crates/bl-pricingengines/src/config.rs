//! Pricing requests loaded from TOML.
//!
//! ```toml
//! spot = 100.0
//! strike = 100.0
//! maturity = 1.0
//! rate = 0.06
//! steps = 3
//! up = 1.1
//! # down defaults to 1 / up
//! barrier = 125.0
//! option_type = "call"
//! strategy = "reference"
//! trace = true
//! ```

use bl_core::{errors::Error, errors::Result, InductionStrategy, OptionType, Rate, Real, Size, Time};
use bl_methods::LatticeParameters;
use serde::{Deserialize, Serialize};

use crate::binomial_engine::{BinomialLatticeEngine, LatticePricer, LatticeResults};

/// One pricing call described declaratively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricingRequest {
    /// Spot price of the underlying.
    pub spot: Real,
    /// Strike price.
    pub strike: Real,
    /// Time to maturity in years.
    pub maturity: Time,
    /// Continuously-compounded annual rate.
    pub rate: Rate,
    /// Number of lattice steps.
    pub steps: Size,
    /// Up factor.
    pub up: Real,
    /// Down factor; `1 / up` when omitted.
    #[serde(default)]
    pub down: Option<Real>,
    /// Up-and-out barrier level.
    #[serde(default)]
    pub barrier: Option<Real>,
    /// Call or put.
    pub option_type: OptionType,
    /// Induction strategy; the [`Settings`](bl_core::Settings) default when
    /// omitted.
    #[serde(default)]
    pub strategy: Option<InductionStrategy>,
    /// Record per-step values.
    #[serde(default)]
    pub trace: bool,
}

impl PricingRequest {
    /// Parse a request from TOML text.
    ///
    /// # Errors
    /// [`Error::Config`] on malformed TOML, unknown keys, or missing fields.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Serialize the request back to TOML.
    ///
    /// # Errors
    /// [`Error::Config`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Down factor after applying the `1 / up` default.
    pub fn effective_down(&self) -> Real {
        self.down.unwrap_or(1.0 / self.up)
    }

    /// Validate into lattice parameters.
    pub fn to_parameters(&self) -> Result<LatticeParameters> {
        let params = LatticeParameters::new(
            self.spot,
            self.strike,
            self.maturity,
            self.rate,
            self.steps,
            self.up,
            self.effective_down(),
            self.option_type,
        )?;
        match self.barrier {
            Some(h) => params.with_barrier(h),
            None => Ok(params),
        }
    }

    /// The engine this request selects.
    pub fn engine(&self) -> BinomialLatticeEngine {
        let engine = match self.strategy {
            Some(strategy) => BinomialLatticeEngine::new(strategy),
            None => BinomialLatticeEngine::default(),
        };
        engine.with_trace(self.trace)
    }

    /// Validate and price.
    pub fn price(&self) -> Result<LatticeResults> {
        self.engine().calculate(&self.to_parameters()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const BARRIER_CALL: &str = r#"
        spot = 100.0
        strike = 100.0
        maturity = 1.0
        rate = 0.06
        steps = 3
        up = 1.1
        barrier = 125.0
        option_type = "call"
        strategy = "reference"
        trace = true
    "#;

    #[test]
    fn parses_and_prices_barrier_request() {
        let request = PricingRequest::from_toml_str(BARRIER_CALL).unwrap();
        assert_eq!(request.option_type, OptionType::Call);
        assert_eq!(request.strategy, Some(InductionStrategy::Reference));
        assert_abs_diff_eq!(request.effective_down(), 1.0 / 1.1);

        let results = request.price().unwrap();
        assert_abs_diff_eq!(results.npv, 4.0003, epsilon = 1e-4);
        assert!(results.trace.is_some());
    }

    #[test]
    fn optional_fields_default() {
        let request = PricingRequest::from_toml_str(
            r#"
            spot = 100.0
            strike = 100.0
            maturity = 1.0
            rate = 0.06
            steps = 3
            up = 1.1
            down = 0.9090909090909091
            option_type = "put"
            "#,
        )
        .unwrap();
        assert_eq!(request.barrier, None);
        assert_eq!(request.strategy, None);
        assert!(!request.trace);
        assert!(request.to_parameters().unwrap().barrier().is_none());
    }

    #[test]
    fn malformed_requests_are_config_errors() {
        assert!(matches!(
            PricingRequest::from_toml_str("spot = 100.0"),
            Err(Error::Config(_))
        ));
        let typo = BARRIER_CALL.replace("strategy", "stratgey");
        assert!(matches!(
            PricingRequest::from_toml_str(&typo),
            Err(Error::Config(_))
        ));
        let bad_kind = BARRIER_CALL.replace("\"call\"", "\"straddle\"");
        assert!(matches!(
            PricingRequest::from_toml_str(&bad_kind),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn validation_errors_pass_through() {
        let request =
            PricingRequest::from_toml_str(&BARRIER_CALL.replace("steps = 3", "steps = 0")).unwrap();
        assert!(matches!(request.price(), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn round_trips_through_toml() {
        let request = PricingRequest::from_toml_str(BARRIER_CALL).unwrap();
        let text = request.to_toml_string().unwrap();
        assert_eq!(PricingRequest::from_toml_str(&text).unwrap(), request);
    }
}
