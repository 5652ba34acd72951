//! Validated inputs for a recombining multiplicative binomial lattice.

use bl_core::{ensure, errors::Result, OptionType, Rate, Real, Size, Time};

/// Input bundle for a lattice pricing call.
///
/// Construction validates the contract-level inputs (spot, strike, maturity,
/// rate, step count, barrier). Whether `up`/`down` recombine and admit a
/// risk-neutral measure is checked at calibration, see
/// [`calibrate`](super::calibrate).
///
/// Node `(i, j)` is the state after `j` up-moves and `i − j` down-moves:
///
/// $$S(i, j) = S_0 \, u^j \, d^{i-j}$$
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeParameters {
    spot: Real,
    strike: Real,
    maturity: Time,
    rate: Rate,
    steps: Size,
    up: Real,
    down: Real,
    option_type: OptionType,
    barrier: Option<Real>,
}

impl LatticeParameters {
    /// Create parameters for a plain European option.
    ///
    /// # Errors
    /// [`Error::InvalidParameter`](bl_core::Error::InvalidParameter) if
    /// `spot`, `strike` or `maturity` is not strictly positive and finite,
    /// if `rate`, `up` or `down` is not finite, or if `steps` is zero.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        spot: Real,
        strike: Real,
        maturity: Time,
        rate: Rate,
        steps: Size,
        up: Real,
        down: Real,
        option_type: OptionType,
    ) -> Result<Self> {
        ensure!(
            spot.is_finite() && spot > 0.0,
            InvalidParameter,
            "spot must be positive, got {spot}"
        );
        ensure!(
            strike.is_finite() && strike > 0.0,
            InvalidParameter,
            "strike must be positive, got {strike}"
        );
        ensure!(
            maturity.is_finite() && maturity > 0.0,
            InvalidParameter,
            "maturity must be positive, got {maturity}"
        );
        ensure!(rate.is_finite(), InvalidParameter, "rate must be finite, got {rate}");
        ensure!(steps >= 1, InvalidParameter, "steps must be >= 1, got {steps}");
        // node exponents are evaluated with `powi`
        ensure!(
            steps <= i32::MAX as Size,
            InvalidParameter,
            "steps must not exceed {}, got {steps}",
            i32::MAX
        );
        ensure!(
            up.is_finite() && down.is_finite(),
            InvalidParameter,
            "up/down factors must be finite, got u = {up}, d = {down}"
        );
        Ok(Self {
            spot,
            strike,
            maturity,
            rate,
            steps,
            up,
            down,
            option_type,
            barrier: None,
        })
    }

    /// Attach an up-and-out barrier at level `barrier`.
    ///
    /// An infinite barrier is accepted and never triggers.
    ///
    /// # Errors
    /// [`Error::InvalidParameter`](bl_core::Error::InvalidParameter) if
    /// `barrier` is not strictly positive.
    pub fn with_barrier(mut self, barrier: Real) -> Result<Self> {
        ensure!(
            barrier > 0.0,
            InvalidParameter,
            "barrier must be positive, got {barrier}"
        );
        self.barrier = Some(barrier);
        Ok(self)
    }

    /// Drop the barrier, if any.
    pub fn without_barrier(mut self) -> Self {
        self.barrier = None;
        self
    }

    /// Spot price of the underlying.
    pub fn spot(&self) -> Real {
        self.spot
    }

    /// Strike price.
    pub fn strike(&self) -> Real {
        self.strike
    }

    /// Time to maturity in years.
    pub fn maturity(&self) -> Time {
        self.maturity
    }

    /// Continuously-compounded annual risk-free rate.
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// Number of time steps `N`.
    pub fn steps(&self) -> Size {
        self.steps
    }

    /// Up factor `u`.
    pub fn up(&self) -> Real {
        self.up
    }

    /// Down factor `d`.
    pub fn down(&self) -> Real {
        self.down
    }

    /// Call or put.
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Up-and-out barrier level, if any.
    pub fn barrier(&self) -> Option<Real> {
        self.barrier
    }

    /// Underlying price at node `(i, j)`.
    ///
    /// Requires `j <= i`.
    #[inline]
    pub fn node_price(&self, i: Size, j: Size) -> Real {
        debug_assert!(j <= i, "node ({i}, {j}) is outside the lattice");
        self.spot * self.up.powi(j as i32) * self.down.powi((i - j) as i32)
    }

    /// All `i + 1` underlying prices at step `i`, ascending in `j`.
    pub fn level_prices(&self, i: Size) -> Vec<Real> {
        (0..=i).map(|j| self.node_price(i, j)).collect()
    }

    /// Whether the barrier is breached at node `(i, j)`.
    ///
    /// Always `false` without a barrier; the node price is only computed when
    /// a barrier is set.
    #[inline]
    pub fn is_knocked_out(&self, i: Size, j: Size) -> bool {
        self.barrier.is_some_and(|h| self.node_price(i, j) >= h)
    }
}
