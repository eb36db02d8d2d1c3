//! Parsing support for boolean expressions

use super::error::{ExpressionParseError, ParseBoolExprError};
use super::BoolExpr;
use lalrpop_util::ParseError;
use std::sync::Arc;

// Generated from bool_expr.lalrpop by build.rs
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/bool_expr/bool_expr.rs"));
}

impl BoolExpr {
    /// Parse a boolean expression from a string
    ///
    /// Supported syntax, loosest binding first:
    /// - `+` or `|` for OR
    /// - `*` or `&` for AND
    /// - `~`, `!` or PAL style `/` for NOT
    /// - Parentheses for grouping
    /// - Constants: `0`, `1`, `true`, `false`
    /// - Identifiers: `[A-Za-z_][A-Za-z0-9_]*`
    ///
    /// ```
    /// use pal_logic::BoolExpr;
    ///
    /// let expr = BoolExpr::parse("/CLR * (Q + T)").unwrap();
    /// assert_eq!(expr.to_string(), "~CLR * (Q + T)");
    /// assert!(BoolExpr::parse("a * * b").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseBoolExprError> {
        parser_impl::ExprParser::new().parse(input).map_err(|e| {
            let position = match &e {
                ParseError::InvalidToken { location } => Some(*location),
                ParseError::UnrecognizedEof { location, .. } => Some(*location),
                ParseError::UnrecognizedToken {
                    token: (start, _, _),
                    ..
                }
                | ParseError::ExtraToken {
                    token: (start, _, _),
                } => Some(*start),
                ParseError::User { .. } => None,
            };
            ExpressionParseError::InvalidSyntax {
                message: Arc::from(e.to_string()),
                input: Arc::from(input),
                position,
            }
            .into()
        })
    }
}

impl std::str::FromStr for BoolExpr {
    type Err = ParseBoolExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoolExpr::parse(s)
    }
}
