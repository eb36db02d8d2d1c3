//! Error types for rendering terms and packed pin values

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors raised while building or applying a formatter
///
/// These are configuration errors: the template or the list of names supplied
/// by the caller does not fit what is being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A bit formatter template could not be parsed
    InvalidTemplate {
        /// The template as given
        template: Arc<str>,
        /// Byte offset of the offending field
        position: usize,
        /// What was wrong with it
        reason: &'static str,
    },
    /// A term uses a bit position that has no name
    MissingBitName {
        /// The highest fixed position without a name
        position: usize,
        /// How many names were supplied
        available: usize,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::InvalidTemplate {
                template,
                position,
                reason,
            } => write!(
                f,
                "Invalid format template at position {}: {}. Template: {:?}",
                position, reason, template
            ),
            FormatError::MissingBitName {
                position,
                available,
            } => write!(
                f,
                "No name for bit {} (only {} names supplied)",
                position, available
            ),
        }
    }
}

impl std::error::Error for FormatError {}

impl From<FormatError> for io::Error {
    fn from(err: FormatError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_template_display() {
        let err = FormatError::InvalidTemplate {
            template: Arc::from("[0-"),
            position: 0,
            reason: "unterminated field",
        };
        let msg = err.to_string();
        assert!(msg.contains("position 0"));
        assert!(msg.contains("unterminated field"));
        assert!(msg.contains("\"[0-\""));
    }

    #[test]
    fn test_missing_bit_name_display() {
        let err = FormatError::MissingBitName {
            position: 3,
            available: 3,
        };
        assert!(err.to_string().contains("bit 3"));
    }

    #[test]
    fn test_format_error_to_io_error() {
        let err = FormatError::MissingBitName {
            position: 1,
            available: 1,
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    }
}
