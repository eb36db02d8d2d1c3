//! Error types for chip construction

use std::fmt;
use std::io;
use std::sync::Arc;

use crate::truth_table::{MinimizationError, TableError};

/// Errors building a [`Chip`](super::Chip)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChipError {
    /// More outputs than the device has macrocells
    TooManyOutputs {
        /// Chip name
        chip: Arc<str>,
        /// Declared outputs
        count: usize,
        /// Configured limit
        max: usize,
    },
    /// More pins in total than the device has
    TooManyPins {
        /// Chip name
        chip: Arc<str>,
        /// Declared outputs plus inputs
        count: usize,
        /// Configured limit
        max: usize,
    },
    /// A pin name is used twice on one chip
    DuplicatePin {
        /// Chip name
        chip: Arc<str>,
        /// The repeated pin
        pin: Arc<str>,
    },
    /// A truth table for one of the outputs could not be built
    Table(TableError),
    /// Minimizing one of the outputs failed verification
    Minimization(MinimizationError),
}

impl fmt::Display for ChipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChipError::TooManyOutputs { chip, count, max } => write!(
                f,
                "Chip '{}' declares {} outputs, at most {} are allowed",
                chip, count, max
            ),
            ChipError::TooManyPins { chip, count, max } => write!(
                f,
                "Chip '{}' declares {} pins in total, at most {} are allowed",
                chip, count, max
            ),
            ChipError::DuplicatePin { chip, pin } => {
                write!(f, "Chip '{}' uses pin '{}' more than once", chip, pin)
            }
            ChipError::Table(e) => write!(f, "{}", e),
            ChipError::Minimization(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ChipError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChipError::Table(e) => Some(e),
            ChipError::Minimization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TableError> for ChipError {
    fn from(err: TableError) -> Self {
        ChipError::Table(err)
    }
}

impl From<MinimizationError> for ChipError {
    fn from(err: MinimizationError) -> Self {
        ChipError::Minimization(err)
    }
}

impl From<ChipError> for io::Error {
    fn from(err: ChipError) -> Self {
        match err {
            ChipError::Minimization(e) => e.into(),
            other => io::Error::new(io::ErrorKind::InvalidInput, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_limits_display() {
        let err = ChipError::TooManyOutputs {
            chip: Arc::from("ctr"),
            count: 11,
            max: 10,
        };
        assert!(err.to_string().contains("11 outputs"));

        let err = ChipError::TooManyPins {
            chip: Arc::from("ctr"),
            count: 22,
            max: 21,
        };
        assert!(err.to_string().contains("22 pins"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_duplicate_pin_display() {
        let err = ChipError::DuplicatePin {
            chip: Arc::from("ctr"),
            pin: Arc::from("CLR"),
        };
        assert_eq!(err.to_string(), "Chip 'ctr' uses pin 'CLR' more than once");
    }

    #[test]
    fn test_io_error_kinds() {
        let err = ChipError::Minimization(MinimizationError::Mismatch {
            name: Arc::from("Q"),
            input: 0,
            expected: true,
        });
        assert!(err.source().is_some());
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);

        let err = ChipError::Table(TableError::InvalidOutputBit { bit: 40 });
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    }
}
