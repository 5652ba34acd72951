//! # bl-pricingengines
//!
//! Pricing engines for European and up-and-out barrier options on a
//! recombining binomial lattice.
//!
//! ## Entry points
//!
//! - [`price_binomial`] — European call or put
//! - [`price_barrier_binomial`] — European up-and-out call or put
//! - [`BinomialLatticeEngine`] — the engine behind both, with optional
//!   per-step trace recording
//!
//! ## Surrounding tooling
//!
//! - [`Timed`], [`ScopedTimer`], [`timed`] — wall-clock instrumentation
//! - [`PricingReport`] — plain-text presentation of a result
//! - [`PricingRequest`] — pricing calls loaded from TOML

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod binomial_engine;
pub mod config;
pub mod report;
pub mod timing;

pub use binomial_engine::{
    price_barrier_binomial, price_binomial, BinomialLatticeEngine, LatticePricer, LatticeResults,
};
pub use config::PricingRequest;
pub use report::PricingReport;
pub use timing::{timed, ScopedTimer, Timed};
