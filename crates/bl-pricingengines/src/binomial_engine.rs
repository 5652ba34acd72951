//! Binomial lattice pricing engine and the two pricing entry points.
//!
//! Prices European options, optionally with an up-and-out barrier, on a
//! recombining multiplicative lattice:
//!
//! 1. [`calibrate`] derives `Δt`, `q` and the per-step discount factor;
//! 2. [`terminal_values`] builds the `N + 1` payoffs at maturity;
//! 3. [`roll_back`] discounts them back to the root with the configured
//!    [`InductionStrategy`].
//!
//! The strategy never changes the price, only how the lattice is traversed.

use bl_core::{ensure, errors::Result, InductionStrategy, OptionType, Rate, Real, Settings, Size, Time};
use bl_methods::lattice::{
    calibrate, roll_back, terminal_values, CalibratedLattice, InductionTrace, LatticeParameters,
};

/// Results of pricing on a lattice.
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeResults {
    /// Option value at the root node.
    pub npv: Real,
    /// Constants the induction ran with.
    pub lattice: CalibratedLattice,
    /// Strategy used for the induction.
    pub strategy: InductionStrategy,
    /// Per-step option values, if the engine was asked to record them.
    pub trace: Option<InductionTrace>,
}

/// Base trait for lattice pricing engines.
pub trait LatticePricer: std::fmt::Debug + Send + Sync {
    /// Price the option described by `params`.
    fn calculate(&self, params: &LatticeParameters) -> Result<LatticeResults>;
}

/// Binomial lattice engine for European and up-and-out barrier options.
///
/// # Example
/// ```
/// use bl_core::{InductionStrategy, OptionType};
/// use bl_methods::LatticeParameters;
/// use bl_pricingengines::{BinomialLatticeEngine, LatticePricer};
///
/// let params =
///     LatticeParameters::new(100.0, 100.0, 1.0, 0.06, 3, 1.1, 1.0 / 1.1, OptionType::Call)?;
/// let engine = BinomialLatticeEngine::new(InductionStrategy::Reference);
/// let results = engine.calculate(&params)?;
/// assert!((results.npv - 10.1457).abs() < 1e-4);
/// # Ok::<(), bl_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinomialLatticeEngine {
    strategy: InductionStrategy,
    record_trace: bool,
}

impl BinomialLatticeEngine {
    /// Create an engine using `strategy`.
    pub fn new(strategy: InductionStrategy) -> Self {
        Self {
            strategy,
            record_trace: false,
        }
    }

    /// Record every option value vector in [`LatticeResults::trace`].
    pub fn with_trace(mut self, record: bool) -> Self {
        self.record_trace = record;
        self
    }

    /// The configured induction strategy.
    pub fn strategy(&self) -> InductionStrategy {
        self.strategy
    }
}

impl Default for BinomialLatticeEngine {
    /// An engine using [`Settings::default_strategy`].
    fn default() -> Self {
        Self::new(Settings::instance().default_strategy())
    }
}

impl LatticePricer for BinomialLatticeEngine {
    fn calculate(&self, params: &LatticeParameters) -> Result<LatticeResults> {
        let lattice = calibrate(params)?;
        tracing::debug!(
            strategy = %self.strategy,
            steps = params.steps(),
            barrier = ?params.barrier(),
            option_type = %params.option_type(),
            "pricing on binomial lattice"
        );

        let terminal = terminal_values(params);
        let mut trace = self
            .record_trace
            .then(|| InductionTrace::new(params.steps()));
        let npv = roll_back(self.strategy, params, &lattice, terminal, trace.as_mut());
        ensure!(
            npv.is_finite(),
            InvalidLattice,
            "induction produced a non-finite value {npv}"
        );

        Ok(LatticeResults {
            npv,
            lattice,
            strategy: self.strategy,
            trace,
        })
    }
}

/// Price a European option on a binomial lattice.
///
/// # Errors
/// * [`Error::InvalidParameter`](bl_core::Error::InvalidParameter) for
///   non-positive `spot`/`strike`/`maturity` or `steps == 0`.
/// * [`Error::InvalidLattice`](bl_core::Error::InvalidLattice) unless
///   `d < 1 < u` and `u·d ≈ 1`.
/// * [`Error::InvalidRiskNeutralMeasure`](bl_core::Error::InvalidRiskNeutralMeasure)
///   if the implied up-probability falls outside `(0, 1)`.
#[allow(clippy::too_many_arguments)]
pub fn price_binomial(
    spot: Real,
    strike: Real,
    maturity: Time,
    rate: Rate,
    steps: Size,
    up: Real,
    down: Real,
    option_type: OptionType,
    strategy: InductionStrategy,
) -> Result<Real> {
    let params = LatticeParameters::new(spot, strike, maturity, rate, steps, up, down, option_type)?;
    Ok(BinomialLatticeEngine::new(strategy).calculate(&params)?.npv)
}

/// Price a European up-and-out barrier option on a binomial lattice.
///
/// The option is worthless at every node where the underlying is at or
/// above `barrier`, including the root: `spot >= barrier` prices to `0.0`.
///
/// # Errors
/// As [`price_binomial`], plus
/// [`Error::InvalidParameter`](bl_core::Error::InvalidParameter) for a
/// non-positive `barrier`.
#[allow(clippy::too_many_arguments)]
pub fn price_barrier_binomial(
    spot: Real,
    strike: Real,
    maturity: Time,
    barrier: Real,
    rate: Rate,
    steps: Size,
    up: Real,
    down: Real,
    option_type: OptionType,
    strategy: InductionStrategy,
) -> Result<Real> {
    let params = LatticeParameters::new(spot, strike, maturity, rate, steps, up, down, option_type)?
        .with_barrier(barrier)?;
    Ok(BinomialLatticeEngine::new(strategy).calculate(&params)?.npv)
}
