//! Error types for truth tables and their minimization

use std::fmt;
use std::io;
use std::sync::Arc;

use crate::bool_expr::ExprError;

/// Errors building a truth table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The table would need more input bits than supported
    TooManyBits {
        /// Requested number of input bits
        bit_count: usize,
        /// Largest supported number of input bits
        max: usize,
    },
    /// A sampled output bit lies outside the generator's integer
    InvalidOutputBit {
        /// The requested bit
        bit: u32,
    },
    /// A generating expression could not be bound to the table's inputs
    Expr(ExprError),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::TooManyBits { bit_count, max } => write!(
                f,
                "Truth table with {} input bits requested, at most {} are supported",
                bit_count, max
            ),
            TableError::InvalidOutputBit { bit } => {
                write!(f, "Output bit {} is outside a 32-bit value", bit)
            }
            TableError::Expr(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::Expr(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ExprError> for TableError {
    fn from(err: ExprError) -> Self {
        TableError::Expr(err)
    }
}

impl From<TableError> for io::Error {
    fn from(err: TableError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// A minimized expression that does not reproduce its source table
///
/// Signals a defect in the minimizer, never a caller mistake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinimizationError {
    /// The expression disagrees with the table at `input`
    Mismatch {
        /// Name of the table
        name: Arc<str>,
        /// First input where the two differ
        input: u32,
        /// The table's value at `input`
        expected: bool,
    },
}

impl fmt::Display for MinimizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimizationError::Mismatch {
                name,
                input,
                expected,
            } => write!(
                f,
                "Minimized expression for '{}' evaluates to {} at input {:#b}, table has {}",
                name, !expected, input, expected
            ),
        }
    }
}

impl std::error::Error for MinimizationError {}

impl From<MinimizationError> for io::Error {
    fn from(err: MinimizationError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_too_many_bits_display() {
        let err = TableError::TooManyBits {
            bit_count: 30,
            max: 28,
        };
        let msg = err.to_string();
        assert!(msg.contains("30 input bits"));
        assert!(msg.contains("at most 28"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_expr_error_is_source() {
        let err: TableError = ExprError::UnknownVariable {
            name: Arc::from("X"),
        }
        .into();
        assert!(err.source().is_some());
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_mismatch_display() {
        let err = MinimizationError::Mismatch {
            name: Arc::from("Q"),
            input: 5,
            expected: true,
        };
        let msg = err.to_string();
        assert!(msg.contains("'Q'"));
        assert!(msg.contains("0b101"));
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
