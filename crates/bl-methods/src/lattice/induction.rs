//! Backward induction from maturity to the root node.
//!
//! Two strategies evaluate the same recursion
//!
//! $$C_i[j] = \begin{cases} 0 & S(i,j) \ge H \\ e^{-r\Delta t}\,(q\,C_{i+1}[j+1] + (1-q)\,C_{i+1}[j]) & \text{otherwise} \end{cases}$$
//!
//! * [`roll_back_reference`] walks node by node, overwriting one buffer in
//!   place. Ascending `j` guarantees `C_{i+1}[j+1]` is read before it is
//!   overwritten.
//! * [`roll_back_vectorized`] builds each level from two shifted views of the
//!   previous level, then zeroes the knocked-out entries.
//!
//! Both combine the discounted children first and mask second, and both use
//! [`LatticeParameters::node_price`] for the barrier test, so they agree to
//! within floating-point rounding.

use bl_core::{InductionStrategy, Real, Size};
use nalgebra::DVector;

use super::{CalibratedLattice, LatticeParameters};

/// Every option value vector produced during a backward induction.
///
/// `level(i)` holds the `i + 1` values `C_i`, ascending in `j`; `level(N)`
/// is the terminal payoff and `level(0)` the single root value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InductionTrace {
    levels: Vec<Vec<Real>>,
}

impl InductionTrace {
    /// An empty trace for a lattice with `steps` steps.
    pub fn new(steps: Size) -> Self {
        Self {
            levels: vec![Vec::new(); steps + 1],
        }
    }

    fn record(&mut self, i: Size, values: &[Real]) {
        debug_assert!(i < self.levels.len(), "trace sized for fewer than {i} steps");
        self.levels[i] = values.to_vec();
    }

    /// Number of time steps covered.
    pub fn steps(&self) -> Size {
        self.levels.len().saturating_sub(1)
    }

    /// Option values at step `i`, or `None` past maturity.
    pub fn level(&self, i: Size) -> Option<&[Real]> {
        self.levels.get(i).map(Vec::as_slice)
    }

    /// All levels, indexed by time step.
    pub fn levels(&self) -> &[Vec<Real>] {
        &self.levels
    }

    /// The root value `C_0[0]`, if recorded.
    pub fn root(&self) -> Option<Real> {
        self.levels.first().and_then(|l| l.first().copied())
    }
}

/// Roll `terminal` back to the root with the chosen strategy.
///
/// `terminal` must hold the `N + 1` values from
/// [`terminal_values`](super::terminal_values).
pub fn roll_back(
    strategy: InductionStrategy,
    params: &LatticeParameters,
    lattice: &CalibratedLattice,
    terminal: Vec<Real>,
    trace: Option<&mut InductionTrace>,
) -> Real {
    match strategy {
        InductionStrategy::Reference => roll_back_reference(params, lattice, terminal, trace),
        InductionStrategy::Vectorized => roll_back_vectorized(params, lattice, terminal, trace),
    }
}

/// Node-by-node backward induction over a single in-place buffer.
#[allow(clippy::needless_range_loop)]
pub fn roll_back_reference(
    params: &LatticeParameters,
    lattice: &CalibratedLattice,
    mut values: Vec<Real>,
    mut trace: Option<&mut InductionTrace>,
) -> Real {
    let n = params.steps();
    debug_assert_eq!(values.len(), n + 1, "terminal level must have N + 1 nodes");

    let pu = lattice.q();
    let pd = lattice.q_down();
    let disc = lattice.discount();

    if let Some(t) = trace.as_deref_mut() {
        t.record(n, &values);
    }

    for i in (0..n).rev() {
        for j in 0..=i {
            values[j] = if params.is_knocked_out(i, j) {
                0.0
            } else {
                disc * (pu * values[j + 1] + pd * values[j])
            };
        }
        values.truncate(i + 1);
        tracing::trace!(step = i, "reference level rolled back");

        if let Some(t) = trace.as_deref_mut() {
            t.record(i, &values);
        }
    }

    values[0]
}

/// Whole-array backward induction.
///
/// Each step allocates the new level as
/// `disc · (q · C[1..=i+1] + (1 − q) · C[0..=i])` and then applies the barrier
/// mask against the full price vector of that level.
pub fn roll_back_vectorized(
    params: &LatticeParameters,
    lattice: &CalibratedLattice,
    terminal: Vec<Real>,
    mut trace: Option<&mut InductionTrace>,
) -> Real {
    let n = params.steps();
    debug_assert_eq!(terminal.len(), n + 1, "terminal level must have N + 1 nodes");

    let pu = lattice.q();
    let pd = lattice.q_down();
    let disc = lattice.discount();

    let mut values = DVector::from_vec(terminal);
    if let Some(t) = trace.as_deref_mut() {
        t.record(n, values.as_slice());
    }

    for i in (0..n).rev() {
        let len = i + 1;
        let mut next = (values.rows(1, len) * pu + values.rows(0, len) * pd) * disc;

        if let Some(barrier) = params.barrier() {
            let prices = DVector::from_vec(params.level_prices(i));
            for (value, price) in next.iter_mut().zip(prices.iter()) {
                if *price >= barrier {
                    *value = 0.0;
                }
            }
        }

        values = next;
        tracing::trace!(step = i, "vectorized level rolled back");

        if let Some(t) = trace.as_deref_mut() {
            t.record(i, values.as_slice());
        }
    }

    values[0]
}
