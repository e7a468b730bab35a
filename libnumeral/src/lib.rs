//! Exact arithmetic built up from decimal digits.
//!
//! libnumeral is layered: [Natural] numbers are sequences of decimal digits, an [Integer] is a sign
//! over a natural magnitude, a [Rational] is an integer over a nonzero natural, and a [Poly] is a
//! single-variable polynomial with rational coefficients. Each layer only calls into the one below
//! it, and every value is immutable once built.
//!
//! The [registry] module exposes every operation through a textual dispatch interface, which is
//! what the `numeral` command-line tool drives.

#[macro_use]
mod utils;

pub mod errors;
pub use errors::{ArithmeticError, DispatchError, ValueKind};

pub mod natural;
pub use natural::{LeadingDigit, Natural};

pub mod integer;
pub use integer::{Integer, Sign, Signum};

pub mod rational;
pub use rational::Rational;

pub mod poly;
pub use poly::Poly;

pub mod registry;
pub use registry::{Module, ModuleGroup, OperationId, Value};

#[cfg(feature = "benchmark-internals")]
pub use natural::{_add, _compare, _euclidean_gcd, _long_division, _mul};
#[cfg(feature = "benchmark-internals")]
pub use poly::_gcd_poly;

#[cfg(test)]
mod proptests;
