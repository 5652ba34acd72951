//! Error types for binlat.
//!
//! Every failure is a configuration or usage error detected eagerly, either
//! when lattice parameters are built or when the lattice is calibrated.
//! Nothing is discovered
//! mid-recursion, so a pricing call either returns a finite price or one of
//! the variants below.
//!
//! The [`ensure!`](crate::ensure) and [`fail!`](crate::fail) macros return
//! early with a named variant and a formatted message.

use thiserror::Error;

/// The top-level error type used throughout binlat.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// An input is out of its admissible domain (non-positive spot, strike,
    /// maturity or barrier, zero steps, non-finite rate).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The up/down factors do not describe a recombining lattice.
    #[error("invalid lattice: {0}")]
    InvalidLattice(String),

    /// The derived up-probability lies outside `(0, 1)`.
    #[error("invalid risk-neutral measure: {0}")]
    InvalidRiskNeutralMeasure(String),

    /// A pricing request could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand `Result` type used throughout binlat.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::$variant(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bl_core::{ensure, errors::Error};
/// fn positive(x: f64) -> bl_core::errors::Result<f64> {
///     ensure!(x > 0.0, InvalidParameter, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::InvalidParameter(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $variant:ident, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::$variant(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::$variant(...))` immediately.
///
/// # Example
/// ```
/// use bl_core::{fail, errors::Error};
/// fn always_err() -> bl_core::errors::Result<()> {
///     fail!(Config, "missing field `{}`", "spot");
/// }
/// assert_eq!(
///     always_err(),
///     Err(Error::Config("missing field `spot`".into()))
/// );
/// ```
#[macro_export]
macro_rules! fail {
    ($variant:ident, $($msg:tt)*) => {
        return Err($crate::errors::Error::$variant(format!($($msg)*)))
    };
}
