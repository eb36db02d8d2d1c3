//! Sum-of-products expressions
//!
//! An [`Expression`] is the named OR of [`Term`]s produced by
//! [`TruthTable::optimise`](crate::TruthTable::optimise). It is a pure value:
//! evaluating it never changes it.

use crate::bool_expr::BoolExpr;
use crate::format::FormatError;
use crate::term::{BitState, Term};
use std::fmt;
use std::sync::Arc;

/// A named sum of products
///
/// # Examples
///
/// ```
/// use pal_logic::{BitState::*, Expression, Term};
///
/// // Q = A /B + C
/// let q = Expression::new(
///     "Q",
///     [Term::of([True, False]), Term::of([DontCare, DontCare, True])],
/// );
/// assert!(q.evaluate(0b001));
/// assert!(q.evaluate(0b100));
/// assert!(!q.evaluate(0b011));
/// assert_eq!(q.display_with(&["A", "B", "C"]).to_string(), "Q = /B A + C");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    name: Arc<str>,
    terms: Arc<[Term]>,
}

impl Expression {
    /// Create an expression from its terms, kept in the given order
    pub fn new<N, I>(name: N, terms: I) -> Self
    where
        N: AsRef<str>,
        I: IntoIterator<Item = Term>,
    {
        Expression {
            name: Arc::from(name.as_ref()),
            terms: terms.into_iter().collect(),
        }
    }

    /// Name of the signal this expression drives
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn name_arc(&self) -> &Arc<str> {
        &self.name
    }

    /// The product terms
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Number of product terms
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// True iff any term matches `input`
    pub fn evaluate(&self, input: u32) -> bool {
        self.terms.iter().any(|term| term.test(input))
    }

    /// Render as `NAME = t1 + t2 + ...` using the given bit names
    ///
    /// A constant-false expression renders as `NAME = 0`.
    pub fn display_with<'a, S: AsRef<str>>(&'a self, names: &'a [S]) -> ExpressionDisplay<'a, S> {
        ExpressionDisplay {
            expression: self,
            names,
        }
    }

    /// Like [`display_with`](Self::display_with), but fails when a term uses
    /// a bit that has no name
    pub fn format<S: AsRef<str>>(&self, names: &[S]) -> Result<String, FormatError> {
        let widest = self.terms.iter().map(Term::len).max().unwrap_or(0);
        if widest > names.len() {
            return Err(FormatError::MissingBitName {
                position: widest - 1,
                available: names.len(),
            });
        }
        Ok(self.display_with(names).to_string())
    }

    /// Rebuild the sum of products as a [`BoolExpr`] over the named bits
    ///
    /// # Panics
    ///
    /// Panics if a term uses a bit that has no name.
    pub fn to_bool_expr<S: AsRef<str>>(&self, names: &[S]) -> BoolExpr {
        self.terms
            .iter()
            .map(|term| {
                term.bits()
                    .iter()
                    .enumerate()
                    .filter(|(_, state)| state.is_fixed())
                    .map(|(i, state)| {
                        let var = BoolExpr::variable(names[i].as_ref());
                        if *state == BitState::True {
                            var
                        } else {
                            var.not()
                        }
                    })
                    .reduce(|acc, literal| acc.and(&literal))
                    .unwrap_or_else(|| BoolExpr::constant(true))
            })
            .reduce(|acc, product| acc.or(&product))
            .unwrap_or_else(|| BoolExpr::constant(false))
    }
}

/// Display adapter returned by [`Expression::display_with`]
pub struct ExpressionDisplay<'a, S> {
    expression: &'a Expression,
    names: &'a [S],
}

impl<S: AsRef<str>> fmt::Display for ExpressionDisplay<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = ", self.expression.name)?;
        if self.expression.terms.is_empty() {
            return write!(f, "0");
        }
        for (i, term) in self.expression.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", term.display_with(self.names))?;
        }
        Ok(())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: [&str; 0] = [];
        fmt::Display::fmt(&self.display_with(&names), f)
    }
}
