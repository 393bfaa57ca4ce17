// ============================================================================
// Numeric Errors
// Error types for tick arithmetic operations
// ============================================================================

use std::fmt;

/// Errors that can occur during tick arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded i64::MAX
    Overflow,
    /// Result below zero
    Underflow,
    /// Input value is invalid (e.g., negative tick count)
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result below zero")
            },
            NumericError::InvalidInput => write!(f, "invalid input: negative tick count"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
