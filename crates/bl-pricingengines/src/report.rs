//! Plain-text pricing report.
//!
//! Renders the inputs, calibrated constants and price of a lattice pricing
//! call. When the results carry an [`InductionTrace`](bl_methods::InductionTrace),
//! the option value ladder is printed one time step per line, root first.

use std::fmt;

use bl_methods::LatticeParameters;

use crate::binomial_engine::LatticeResults;

/// Maximum number of trace levels printed before the ladder is elided.
pub const MAX_LADDER_LEVELS: usize = 12;

/// A printable summary of one pricing call.
#[derive(Debug, Clone, Copy)]
pub struct PricingReport<'a> {
    params: &'a LatticeParameters,
    results: &'a LatticeResults,
}

impl<'a> PricingReport<'a> {
    /// Pair parameters with the results they produced.
    pub fn new(params: &'a LatticeParameters, results: &'a LatticeResults) -> Self {
        Self { params, results }
    }
}

impl fmt::Display for PricingReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.params;
        let r = self.results;

        let kind = match p.barrier() {
            Some(_) => "up-and-out barrier",
            None => "European",
        };
        writeln!(
            f,
            "{kind} {} on a {}-step binomial lattice",
            p.option_type(),
            p.steps()
        )?;
        writeln!(f, "  spot      {:>14.6}", p.spot())?;
        writeln!(f, "  strike    {:>14.6}", p.strike())?;
        if let Some(h) = p.barrier() {
            writeln!(f, "  barrier   {h:>14.6}")?;
        }
        writeln!(f, "  maturity  {:>14.6}", p.maturity())?;
        writeln!(f, "  rate      {:>14.6}", p.rate())?;
        writeln!(f, "  u / d     {:>14.6} / {:.6}", p.up(), p.down())?;
        writeln!(f, "  dt        {:>14.6}", r.lattice.dt())?;
        writeln!(f, "  q         {:>14.6}", r.lattice.q())?;
        writeln!(f, "  discount  {:>14.6}", r.lattice.discount())?;
        writeln!(f, "  strategy  {:>14}", r.strategy.to_string())?;
        write!(f, "  price     {:>14.6}", r.npv)?;

        if let Some(trace) = &r.trace {
            writeln!(f)?;
            write!(f, "  value ladder:")?;
            for (i, level) in trace.levels().iter().enumerate().take(MAX_LADDER_LEVELS) {
                write!(f, "\n    {i:>4}:")?;
                for v in level {
                    write!(f, " {v:.4}")?;
                }
            }
            if trace.levels().len() > MAX_LADDER_LEVELS {
                write!(
                    f,
                    "\n    ... {} more levels",
                    trace.levels().len() - MAX_LADDER_LEVELS
                )?;
            }
        }
        Ok(())
    }
}
