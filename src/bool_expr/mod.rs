//! Boolean expressions used as truth-table generators
//!
//! A [`BoolExpr`] is a small immutable expression tree over named variables.
//! It is the most convenient way to describe what an output pin should do:
//! build it programmatically, with operators, with the `expr!` macro or by
//! parsing a string, then hand it to
//! [`TruthTable::from_expr`](crate::TruthTable::from_expr) or
//! [`Chip::from_equations`](crate::Chip::from_equations) to be minimized.
//!
//! # Quick Start
//!
//! ```
//! use pal_logic::{expr, BoolExpr};
//!
//! # fn main() -> std::io::Result<()> {
//! // Method API
//! let a = BoolExpr::variable("a");
//! let b = BoolExpr::variable("b");
//! let xor = a.and(&b.not()).or(&a.not().and(&b));
//!
//! // Operators
//! let same = &a * &b.not() + &a.not() * &b;
//!
//! // Macro
//! let also = expr!(a * !b + !a * b);
//!
//! // Parser (PAL style `/` negation is accepted too)
//! let parsed = BoolExpr::parse("a * /b + /a * b")?;
//!
//! assert!(xor.equivalent_to(&same));
//! assert!(xor.equivalent_to(&also));
//! assert!(xor.equivalent_to(&parsed));
//! # Ok(())
//! # }
//! ```
//!
//! Equality (`==`) is structural; use [`BoolExpr::equivalent_to`] to compare
//! the functions two expressions compute.

mod display;
pub mod error;
mod eval;
mod operators;
mod parser;

pub use error::{ExprError, ExpressionParseError, ParseBoolExprError};
pub use eval::BoundExpr;

use std::sync::Arc;

/// Node type for expression tree folding
///
/// Passed to the closure given to [`BoolExpr::fold`]; `T` carries the
/// already folded results of the children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprNode<'a, T> {
    /// A variable with the given name
    Variable(&'a str),
    /// Logical AND with results from left and right subtrees
    And(T, T),
    /// Logical OR with results from left and right subtrees
    Or(T, T),
    /// Logical NOT with result from inner subtree
    Not(T),
    /// A constant boolean value
    Constant(bool),
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) enum BoolExprInner {
    Variable(Arc<str>),
    And(BoolExpr, BoolExpr),
    Or(BoolExpr, BoolExpr),
    Not(BoolExpr),
    Constant(bool),
}

/// A boolean expression over named variables
///
/// Uses `Arc` internally, so cloning is cheap and sub-expressions are shared.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BoolExpr {
    inner: Arc<BoolExprInner>,
}

impl BoolExpr {
    fn from_inner(inner: BoolExprInner) -> Self {
        BoolExpr {
            inner: Arc::new(inner),
        }
    }

    /// Create a variable expression with the given name
    pub fn variable(name: &str) -> Self {
        Self::from_inner(BoolExprInner::Variable(Arc::from(name)))
    }

    /// Create a constant expression (true or false)
    pub fn constant(value: bool) -> Self {
        Self::from_inner(BoolExprInner::Constant(value))
    }

    /// Fold the expression tree depth-first from leaves to root
    ///
    /// ```
    /// use pal_logic::{BoolExpr, ExprNode};
    ///
    /// let a = BoolExpr::variable("a");
    /// let b = BoolExpr::variable("b");
    /// let expr = a.and(&b.not());
    ///
    /// let op_count = expr.fold(|node| match node {
    ///     ExprNode::Variable(_) | ExprNode::Constant(_) => 0,
    ///     ExprNode::And(l, r) | ExprNode::Or(l, r) => l + r + 1,
    ///     ExprNode::Not(inner) => inner + 1,
    /// });
    /// assert_eq!(op_count, 2);
    /// ```
    pub fn fold<T, F>(&self, f: F) -> T
    where
        F: Fn(ExprNode<T>) -> T + Copy,
    {
        match self.inner.as_ref() {
            BoolExprInner::Variable(name) => f(ExprNode::Variable(name)),
            BoolExprInner::Constant(value) => f(ExprNode::Constant(*value)),
            BoolExprInner::And(left, right) => {
                let l = left.fold(f);
                let r = right.fold(f);
                f(ExprNode::And(l, r))
            }
            BoolExprInner::Or(left, right) => {
                let l = left.fold(f);
                let r = right.fold(f);
                f(ExprNode::Or(l, r))
            }
            BoolExprInner::Not(inner) => {
                let inner = inner.fold(f);
                f(ExprNode::Not(inner))
            }
        }
    }

    /// Distinct variable names in order of first appearance
    pub fn variables(&self) -> Vec<Arc<str>> {
        let mut seen = Vec::new();
        self.collect_variables(&mut seen);
        seen
    }

    fn collect_variables(&self, seen: &mut Vec<Arc<str>>) {
        match self.inner.as_ref() {
            BoolExprInner::Variable(name) => {
                if !seen.contains(name) {
                    seen.push(Arc::clone(name));
                }
            }
            BoolExprInner::Constant(_) => {}
            BoolExprInner::And(left, right) | BoolExprInner::Or(left, right) => {
                left.collect_variables(seen);
                right.collect_variables(seen);
            }
            BoolExprInner::Not(inner) => inner.collect_variables(seen),
        }
    }
}

#[cfg(test)]
mod tests;
