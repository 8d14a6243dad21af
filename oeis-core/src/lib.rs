//! OEIS Core - Fundamental types
//!
//! This crate provides the numeric substrate shared by every sequence:
//! - `Integer`: arbitrary precision signed integers
//! - `Rational`: exact fractions (used by the Bernoulli numbers)
//! - `Float`: binary floats fixed at `FLOAT_PRECISION` bits
//! - `Rounding`: floor / truncate / half-up conversion back to `Integer`
//! - `SequenceResult`: machine or exact terms plus their offset
//! - `SeqError`: structured errors and warnings

mod integer;
mod rational;
mod float;
mod convert;
mod sequence;
mod error;

pub use integer::{Integer, NumberError};
pub use rational::Rational;
pub use float::{Float, FLOAT_PRECISION};
pub use convert::Rounding;
pub use sequence::{SequenceResult, Terms};
pub use error::{SeqError, ErrorContext, Severity, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Integer, Rational, Float, Rounding, NumberError};
    pub use crate::{SequenceResult, Terms, SeqError, Severity};
    pub use crate::error::codes;
}
