//! # binlat
//!
//! European and up-and-out barrier option pricing on a recombining
//! multiplicative binomial lattice.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `bl-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! binlat = "0.1"
//! ```
//!
//! ```rust
//! use binlat::{price_barrier_binomial, price_binomial, InductionStrategy, OptionType};
//!
//! let d = 1.0 / 1.1;
//! let call = price_binomial(
//!     100.0, 100.0, 1.0, 0.06, 3, 1.1, d, OptionType::Call, InductionStrategy::Vectorized,
//! )?;
//! let knock_out = price_barrier_binomial(
//!     100.0, 100.0, 1.0, 125.0, 0.06, 3, 1.1, d, OptionType::Call, InductionStrategy::Reference,
//! )?;
//! assert!((call - 10.1457).abs() < 1e-4);
//! assert!((knock_out - 4.0003).abs() < 1e-4);
//! # Ok::<(), binlat::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use bl_core as core;

/// Lattice construction, calibration and backward induction.
pub use bl_methods as methods;

/// Pricing engines, timing, reports and request configuration.
pub use bl_pricingengines as pricingengines;

pub use bl_core::{Error, InductionStrategy, OptionType, Result};
pub use bl_methods::LatticeParameters;
pub use bl_pricingengines::{
    price_barrier_binomial, price_binomial, BinomialLatticeEngine, LatticePricer, LatticeResults,
    PricingReport, PricingRequest,
};
