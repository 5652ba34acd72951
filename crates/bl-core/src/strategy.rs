//! Backward-induction strategy selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// How the backward induction walks the lattice.
///
/// Both strategies evaluate the same recursion and agree to within
/// floating-point tolerance; the choice only affects latency and memory
/// access pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InductionStrategy {
    /// Node-by-node traversal, updating a single buffer in place.
    Reference,
    /// Whole-array operations per time step.
    #[default]
    Vectorized,
}

impl InductionStrategy {
    /// Both strategies, reference first.
    pub const ALL: [InductionStrategy; 2] =
        [InductionStrategy::Reference, InductionStrategy::Vectorized];
}

impl fmt::Display for InductionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InductionStrategy::Reference => write!(f, "reference"),
            InductionStrategy::Vectorized => write!(f, "vectorized"),
        }
    }
}

impl FromStr for InductionStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reference" | "loop" => Ok(InductionStrategy::Reference),
            "vectorized" | "vectorised" => Ok(InductionStrategy::Vectorized),
            other => Err(Error::Config(format!(
                "unknown induction strategy `{other}`"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_vectorized() {
        assert_eq!(InductionStrategy::default(), InductionStrategy::Vectorized);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for s in InductionStrategy::ALL {
            assert_eq!(s.to_string().parse::<InductionStrategy>(), Ok(s));
        }
        assert!("simd".parse::<InductionStrategy>().is_err());
    }
}
