//! # bl-methods
//!
//! Numerical methods: recombining binomial lattice construction, risk-neutral
//! calibration, terminal payoffs and backward induction.
//!
//! # Modules
//!
//! * [`lattice`] — lattice parameters, calibration and both induction
//!   strategies

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Lattice methods: parameters, calibration, payoffs, backward induction.
pub mod lattice;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use lattice::{
    calibrate, roll_back, roll_back_reference, roll_back_vectorized, terminal_expectation,
    terminal_values, CalibratedLattice, InductionTrace, LatticeParameters,
};
