//! Error handling for field and curve arithmetic

use std::fmt;

use num_bigint::{BigInt, BigUint};

pub mod validate;

#[cfg(test)]
mod tests;

/// The error type for field and curve operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Field element constructed with a residue outside `[0, prime)`
    OutOfRange {
        /// The rejected value
        num: BigUint,
        /// The field prime it was checked against
        prime: BigUint,
    },

    /// Arithmetic attempted between elements of different prime fields
    FieldMismatch {
        /// Prime of the left operand
        left: BigUint,
        /// Prime of the right operand
        right: BigUint,
    },

    /// Point constructed with coordinates that do not satisfy the curve equation
    NotOnCurve {
        /// Rendered x-coordinate
        x: String,
        /// Rendered y-coordinate
        y: String,
    },

    /// Group-law operation attempted between points of different curves
    CurveMismatch {
        /// Operation that was attempted
        operation: &'static str,
    },

    /// Field division or inversion of the zero element
    DivisionByZero,

    /// Plain-integer coordinate division with a non-integral quotient
    ///
    /// Integer-coordinate curves are not closed under the group law; a
    /// chord or tangent slope that is not an integer is an error rather
    /// than a rounded value, since results are never re-validated.
    InexactQuotient {
        /// Dividend of the failed division
        dividend: BigInt,
        /// Divisor of the failed division
        divisor: BigInt,
    },
}

/// Result type for field and curve operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange { num, prime } => {
                write!(f, "num {} outside field range [0, {})", num, prime)
            }
            Error::FieldMismatch { left, right } => {
                write!(
                    f,
                    "cannot operate across fields (prime {} vs prime {})",
                    left, right
                )
            }
            Error::NotOnCurve { x, y } => {
                write!(f, "({}, {}) is not on the curve", x, y)
            }
            Error::CurveMismatch { operation } => {
                write!(f, "points are not on the same curve in {}", operation)
            }
            Error::DivisionByZero => {
                write!(f, "division by the zero field element")
            }
            Error::InexactQuotient { dividend, divisor } => {
                write!(
                    f,
                    "{} is not an integer multiple of {}",
                    dividend, divisor
                )
            }
        }
    }
}

impl std::error::Error for Error {}
