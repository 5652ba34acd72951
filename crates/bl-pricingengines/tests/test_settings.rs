//! The process-wide default strategy drives engines and requests that do not
//! name one.
//!
//! Kept in its own test binary: it mutates global [`Settings`].

use bl_core::{InductionStrategy, ScopedDefaultStrategy, Settings};
use bl_pricingengines::{BinomialLatticeEngine, PricingRequest};

const UNSPECIFIED_STRATEGY: &str = r#"
    spot = 100.0
    strike = 100.0
    maturity = 1.0
    rate = 0.06
    steps = 3
    up = 1.1
    barrier = 125.0
    option_type = "call"
"#;

#[test]
fn default_strategy_follows_settings() {
    let request = PricingRequest::from_toml_str(UNSPECIFIED_STRATEGY).unwrap();
    assert_eq!(request.strategy, None);

    {
        let _guard = ScopedDefaultStrategy::new(InductionStrategy::Reference);
        assert_eq!(
            BinomialLatticeEngine::default().strategy(),
            InductionStrategy::Reference
        );
        let results = request.price().unwrap();
        assert_eq!(results.strategy, InductionStrategy::Reference);

        Settings::instance().reset();
        assert_eq!(
            BinomialLatticeEngine::default().strategy(),
            InductionStrategy::Vectorized
        );
        assert_eq!(
            request.price().unwrap().strategy,
            InductionStrategy::Vectorized
        );
    }

    Settings::instance().set_default_strategy(InductionStrategy::Reference);
    assert_eq!(request.engine().strategy(), InductionStrategy::Reference);
    Settings::instance().reset();
    assert_eq!(request.engine().strategy(), InductionStrategy::Vectorized);
}
