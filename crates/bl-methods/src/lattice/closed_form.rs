//! Closed-form European value on a binomial lattice.
//!
//! Without a barrier the backward induction collapses to a discounted
//! expectation over the terminal nodes:
//!
//! $$C_0 = e^{-rT} \sum_{j=0}^{N} \binom{N}{j} q^j (1-q)^{N-j} \, \text{payoff}(S(N, j))$$
//!
//! Wraps the `statrs` crate's binomial distribution for the weights.

use bl_core::{ensure, errors::Error, errors::Result, Real};
use statrs::distribution::{Binomial, Discrete};

use super::{CalibratedLattice, LatticeParameters};

/// Price a plain European option as a terminal expectation.
///
/// # Errors
/// * [`Error::InvalidParameter`] if `params` carries a barrier; path
///   dependence makes the terminal expectation meaningless.
/// * [`Error::InvalidRiskNeutralMeasure`] if `statrs` rejects `q`.
pub fn terminal_expectation(
    params: &LatticeParameters,
    lattice: &CalibratedLattice,
) -> Result<Real> {
    ensure!(
        params.barrier().is_none(),
        InvalidParameter,
        "terminal expectation is undefined for barrier options"
    );

    let n = params.steps();
    let weights = Binomial::new(lattice.q(), n as u64)
        .map_err(|e| Error::InvalidRiskNeutralMeasure(e.to_string()))?;
    let option_type = params.option_type();
    let strike = params.strike();

    let expectation: Real = (0..=n)
        .map(|j| weights.pmf(j as u64) * option_type.intrinsic(params.node_price(n, j), strike))
        .sum();

    Ok(lattice.discount().powi(n as i32) * expectation)
}
