// ============================================================================
// Money Errors
// Error types for fixed-point money operations
// ============================================================================

use std::fmt;

/// Errors that can occur during money arithmetic and configuration.
///
/// Every variant is a caller-precondition violation rather than a transient
/// failure: none are retried, all are surfaced synchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoneyError {
    /// Raw value arithmetic exceeded the i64 range
    Overflow,
    /// Attempted division by a zero-valued amount
    DivisionByZero,
    /// Requested decimal places below zero
    InvalidPrecision,
    /// Requested decimal places above the supported maximum
    PrecisionTooLarge,
    /// Binary operation between amounts at different precisions
    ScaleMismatch,
    /// Non-finite float input or result (NaN or infinity)
    DomainError,
    /// Input string or sample data is invalid
    InvalidInput,
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::Overflow => {
                write!(f, "arithmetic overflow: result outside the i64 range")
            },
            MoneyError::DivisionByZero => write!(f, "division by zero"),
            MoneyError::InvalidPrecision => {
                write!(f, "invalid precision: decimal places cannot be negative")
            },
            MoneyError::PrecisionTooLarge => write!(
                f,
                "precision too large: decimal places exceed the supported maximum"
            ),
            MoneyError::ScaleMismatch => write!(f, "scale mismatch between operands"),
            MoneyError::DomainError => {
                write!(f, "domain error: computation produced a non-finite value")
            },
            MoneyError::InvalidInput => write!(f, "invalid input: could not use value"),
        }
    }
}

impl std::error::Error for MoneyError {}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            MoneyError::Overflow.to_string(),
            "arithmetic overflow: result outside the i64 range"
        );
        assert_eq!(MoneyError::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(MoneyError::Overflow, MoneyError::Overflow);
        assert_ne!(MoneyError::InvalidPrecision, MoneyError::PrecisionTooLarge);
    }
}
