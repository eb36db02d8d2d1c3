//! Error types for boolean expressions

use std::fmt;
use std::io;
use std::sync::Arc;

/// A boolean expression string that does not parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionParseError {
    /// The input is not valid expression syntax
    InvalidSyntax {
        /// Message from the parser
        message: Arc<str>,
        /// The input that failed to parse
        input: Arc<str>,
        /// Byte offset of the offending token, when known
        position: Option<usize>,
    },
}

impl fmt::Display for ExpressionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionParseError::InvalidSyntax {
                message,
                input,
                position: Some(pos),
            } => write!(
                f,
                "Failed to parse boolean expression at position {}: {}. Input: {:?}",
                pos, message, input
            ),
            ExpressionParseError::InvalidSyntax {
                message,
                input,
                position: None,
            } => write!(
                f,
                "Failed to parse boolean expression: {}. Input: {:?}",
                message, input
            ),
        }
    }
}

impl std::error::Error for ExpressionParseError {}

impl From<ExpressionParseError> for io::Error {
    fn from(err: ExpressionParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Error returned by [`BoolExpr::parse`](super::BoolExpr::parse)
#[derive(Debug)]
pub enum ParseBoolExprError {
    /// Syntax error
    Parse(ExpressionParseError),
}

impl fmt::Display for ParseBoolExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBoolExprError::Parse(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ParseBoolExprError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseBoolExprError::Parse(e) => Some(e),
        }
    }
}

impl From<ExpressionParseError> for ParseBoolExprError {
    fn from(err: ExpressionParseError) -> Self {
        ParseBoolExprError::Parse(err)
    }
}

impl From<ParseBoolExprError> for io::Error {
    fn from(err: ParseBoolExprError) -> Self {
        match err {
            ParseBoolExprError::Parse(e) => e.into(),
        }
    }
}

/// Errors binding an expression to an ordered list of input bits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// The expression uses a variable that is not among the bit names
    UnknownVariable {
        /// The unmatched variable
        name: Arc<str>,
    },
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprError::UnknownVariable { name } => {
                write!(f, "Variable '{}' is not one of the input bits", name)
            }
        }
    }
}

impl std::error::Error for ExprError {}

impl From<ExprError> for io::Error {
    fn from(err: ExprError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
