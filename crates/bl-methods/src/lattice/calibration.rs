//! Risk-neutral calibration of a multiplicative binomial lattice.
//!
//! For a lattice with up factor `u`, down factor `d` and step `Δt = T/N`:
//!
//! | Quantity | Formula |
//! |---|---|
//! | up-probability | `q = (e^{rΔt} − d) / (u − d)` |
//! | per-step discount | `e^{−rΔt}` |

use bl_core::{ensure, errors::Result, DiscountFactor, Probability, Real, Size, Time};

use super::LatticeParameters;

/// Maximum tolerated `|u·d − 1|` for the lattice to count as recombining.
pub const RECOMBINATION_TOLERANCE: Real = 1e-10;

/// Constants derived once per pricing call and shared read-only by every
/// step of the backward induction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibratedLattice {
    steps: Size,
    dt: Time,
    q: Probability,
    discount: DiscountFactor,
}

impl CalibratedLattice {
    /// Number of time steps.
    pub fn steps(&self) -> Size {
        self.steps
    }

    /// Time increment per step.
    pub fn dt(&self) -> Time {
        self.dt
    }

    /// Risk-neutral up-probability `q`.
    pub fn q(&self) -> Probability {
        self.q
    }

    /// Down-probability `1 − q`.
    pub fn q_down(&self) -> Probability {
        1.0 - self.q
    }

    /// Per-step discount factor `e^{−rΔt}`.
    pub fn discount(&self) -> DiscountFactor {
        self.discount
    }
}

/// Derive `(Δt, q, disc)` from validated parameters.
///
/// # Errors
/// * [`Error::InvalidLattice`](bl_core::Error::InvalidLattice) if `u == d`,
///   `u <= 1`, `d >= 1`, `|u·d − 1| > RECOMBINATION_TOLERANCE`, or if the
///   top node price `S0·u^N` is not representable.
/// * [`Error::InvalidRiskNeutralMeasure`](bl_core::Error::InvalidRiskNeutralMeasure)
///   if `q` is not strictly inside `(0, 1)`.
pub fn calibrate(params: &LatticeParameters) -> Result<CalibratedLattice> {
    let (u, d) = (params.up(), params.down());

    ensure!(u != d, InvalidLattice, "zero-width lattice: u == d == {u}");
    ensure!(u > 1.0, InvalidLattice, "up factor must exceed 1, got {u}");
    ensure!(d < 1.0, InvalidLattice, "down factor must be below 1, got {d}");
    ensure!(
        (u * d - 1.0).abs() <= RECOMBINATION_TOLERANCE,
        InvalidLattice,
        "lattice does not recombine: u·d = {}",
        u * d
    );

    let steps = params.steps();
    // the widest node bounds every other price on the lattice
    let top = params.node_price(steps, steps);
    ensure!(
        top.is_finite(),
        InvalidLattice,
        "top node S(N, N) = S0·u^N overflows for N = {steps}, u = {u}"
    );

    let dt = params.maturity() / steps as Real;
    let growth = (params.rate() * dt).exp();
    let q = (growth - d) / (u - d);
    ensure!(
        q.is_finite() && q > 0.0 && q < 1.0,
        InvalidRiskNeutralMeasure,
        "up-probability q = {q} outside (0, 1) for r·dt = {}, u = {u}, d = {d}",
        params.rate() * dt
    );
    let discount = (-params.rate() * dt).exp();

    tracing::debug!(steps, dt, q, discount, "calibrated binomial lattice");

    Ok(CalibratedLattice {
        steps,
        dt,
        q,
        discount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bl_core::{Error, OptionType};

    fn params(rate: Real, steps: Size, up: Real, down: Real) -> LatticeParameters {
        LatticeParameters::new(100.0, 100.0, 1.0, rate, steps, up, down, OptionType::Call)
            .unwrap()
    }

    #[test]
    fn three_step_constants() {
        let lattice = calibrate(&params(0.06, 3, 1.1, 1.0 / 1.1)).unwrap();
        assert_relative_eq!(lattice.dt(), 1.0 / 3.0);
        assert_relative_eq!(lattice.discount(), (-0.02_f64).exp(), max_relative = 1e-15);
        let expected_q = ((0.02_f64).exp() - 1.0 / 1.1) / (1.1 - 1.0 / 1.1);
        assert_relative_eq!(lattice.q(), expected_q, max_relative = 1e-15);
        assert_relative_eq!(lattice.q() + lattice.q_down(), 1.0);
    }

    #[test]
    fn zero_width_lattice_is_rejected() {
        assert!(matches!(
            calibrate(&params(0.06, 3, 1.0, 1.0)),
            Err(Error::InvalidLattice(_))
        ));
    }

    #[test]
    fn factors_on_wrong_side_of_one_are_rejected() {
        for (u, d) in [(0.9, 1.0 / 0.9), (1.0, 1.0), (1.1, 1.05)] {
            assert!(matches!(
                calibrate(&params(0.06, 3, u, d)),
                Err(Error::InvalidLattice(_))
            ));
        }
    }

    #[test]
    fn non_recombining_lattice_is_rejected() {
        assert!(matches!(
            calibrate(&params(0.06, 3, 1.1, 0.9)),
            Err(Error::InvalidLattice(_))
        ));
    }

    #[test]
    fn overflowing_top_node_is_rejected() {
        // 5000·ln(1.2) ≈ 912 is past the f64 exponent range
        for (up, steps) in [(1.2, 5000), (1.4, 5000), (1.1, 8000)] {
            assert!(matches!(
                calibrate(&params(0.05, steps, up, 1.0 / up)),
                Err(Error::InvalidLattice(_))
            ));
        }
    }

    #[test]
    fn wide_but_representable_lattice_calibrates() {
        // 5000·ln(1.1) ≈ 477
        let p = params(0.05, 5000, 1.1, 1.0 / 1.1);
        let lattice = calibrate(&p).unwrap();
        assert!(lattice.q() > 0.0 && lattice.q() < 1.0);
        assert!(p.node_price(5000, 0) > 0.0);
        assert!(p.node_price(5000, 2500).is_finite());
    }

    #[test]
    fn arbitrage_inconsistent_rate_is_rejected() {
        // e^{rΔt} = e^{0.5} > u
        assert!(matches!(
            calibrate(&params(1.5, 3, 1.1, 1.0 / 1.1)),
            Err(Error::InvalidRiskNeutralMeasure(_))
        ));
        // e^{rΔt} < d
        assert!(matches!(
            calibrate(&params(-1.5, 3, 1.1, 1.0 / 1.1)),
            Err(Error::InvalidRiskNeutralMeasure(_))
        ));
    }
}
