//! Lattice methods for option pricing.
//!
//! A recombining multiplicative binomial lattice stored one time step at a
//! time: step `i` is a 1-D vector of `i + 1` values, never a 2-D tree.
//!
//! # Overview
//!
//! * [`LatticeParameters`] — validated spot, strike, maturity, rate, steps,
//!   up/down factors, option type and optional up-and-out barrier
//! * [`calibrate`] — per-step `Δt`, risk-neutral `q` and discount factor
//! * [`terminal_values`] — payoffs at maturity with the barrier applied
//! * [`roll_back`] — backward induction, [`roll_back_reference`] or
//!   [`roll_back_vectorized`]
//! * [`InductionTrace`] — optional per-step value vectors for diagnostics
//! * [`terminal_expectation`] — closed-form European value on the same
//!   lattice, for cross-checking

pub mod calibration;
pub mod closed_form;
pub mod induction;
pub mod parameters;
pub mod payoff;

pub use calibration::{calibrate, CalibratedLattice, RECOMBINATION_TOLERANCE};
pub use closed_form::terminal_expectation;
pub use induction::{roll_back, roll_back_reference, roll_back_vectorized, InductionTrace};
pub use parameters::LatticeParameters;
pub use payoff::terminal_values;
