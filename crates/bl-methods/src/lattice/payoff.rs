//! Terminal payoff at maturity.

use bl_core::Real;

use super::LatticeParameters;

/// Option values at the final step `i = N`, ascending in `j`.
///
/// Each node pays the intrinsic value of the option at `S(N, j)`. With a
/// barrier, any node at or above the barrier is worth zero regardless of its
/// intrinsic value.
///
/// The returned vector always has exactly `N + 1` entries.
pub fn terminal_values(params: &LatticeParameters) -> Vec<Real> {
    let n = params.steps();
    let option_type = params.option_type();
    let strike = params.strike();
    (0..=n)
        .map(|j| {
            if params.is_knocked_out(n, j) {
                0.0
            } else {
                option_type.intrinsic(params.node_price(n, j), strike)
            }
        })
        .collect()
}
