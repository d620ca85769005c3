// ============================================================================
// Numeric Errors
// Error types for the Result-typed fraction API
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors reported by the checked fraction operations.
///
/// The operator API never returns these: it yields [`Fraction::INVALID`]
/// instead. They surface from `checked_*`, `FromStr` and the decimal bridges.
///
/// [`Fraction::INVALID`]: super::Fraction::INVALID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericError {
    /// An intermediate or final value left the i64 range
    Overflow,
    /// The denominator of the result would be zero
    DivisionByZero,
    /// Input string or value is not a decimal literal
    InvalidInput,
    /// An operand is the invalid sentinel
    InvalidOperand,
    /// Conversion would lose significant digits
    PrecisionLoss,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: value does not fit in 64 bits")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidInput => write!(f, "invalid input: not a decimal number"),
            NumericError::InvalidOperand => write!(f, "operand is an invalid fraction"),
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::Overflow.to_string(),
            "arithmetic overflow: value does not fit in 64 bits"
        );
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            NumericError::InvalidOperand.to_string(),
            "operand is an invalid fraction"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::Overflow, NumericError::DivisionByZero);
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(NumericError::InvalidInput);
        assert_eq!(err.to_string(), "invalid input: not a decimal number");
    }
}
