//! Errors produced by libnumeral.
//!
//! Arithmetic operations fail with an [ArithmeticError]; the operation registry additionally fails
//! with a [DispatchError] when asked for an operation it does not know or given the wrong number of
//! arguments.

use crate::registry::OperationId;

use thiserror::Error;

/// The kind of entity a textual encoding was expected to describe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Digit,
    Natural,
    Integer,
    Rational,
    Polynomial,
    Operation,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueKind::Digit => "digit",
            ValueKind::Natural => "natural number",
            ValueKind::Integer => "integer",
            ValueKind::Rational => "rational number",
            ValueKind::Polynomial => "polynomial",
            ValueKind::Operation => "operation identifier",
        };
        f.write_str(name)
    }
}

/// An error raised by an arithmetic operation or by constructing an arithmetic value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    /// A textual encoding does not parse into the expected entity.
    #[error(r#"cannot read "{input}" as a {kind}"#)]
    MalformedValue { kind: ValueKind, input: String },

    /// A natural number would have to be negative.
    #[error("natural numbers cannot be negative")]
    NegativeValue,

    /// A divisor is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A rational number whose reduced denominator is not 1 was converted to an integer.
    #[error("{0} is not an integer")]
    NonIntegralResult(String),

    /// A negative integer was converted to a natural number.
    #[error("{0} is negative and cannot be converted to a natural number")]
    NegativeConversion(String),
}

impl ArithmeticError {
    pub(crate) fn malformed(kind: ValueKind, input: impl Into<String>) -> Self {
        ArithmeticError::MalformedValue {
            kind,
            input: input.into(),
        }
    }
}

/// An error raised at the operation-registry boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The operation is not supported by the module it was sent to.
    #[error("{0} is not implemented")]
    UnknownOperation(OperationId),

    /// The operation was given the wrong number of arguments.
    #[error("{operation} expects {expected} argument(s), got {actual}")]
    InvalidArgumentCount {
        operation: OperationId,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

pub type Result<T> = std::result::Result<T, ArithmeticError>;
