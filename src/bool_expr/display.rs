//! Display and Debug formatting for boolean expressions

use super::{BoolExpr, BoolExprInner};
use std::fmt;

/// Binding strength of the operator enclosing a sub-expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Top,
    Or,
    And,
    Not,
}

impl BoolExpr {
    fn fmt_at(&self, f: &mut fmt::Formatter<'_>, outer: Precedence) -> fmt::Result {
        let (own, left, op, right) = match self.inner.as_ref() {
            BoolExprInner::Variable(name) => return write!(f, "{}", name),
            BoolExprInner::Constant(value) => return write!(f, "{}", u8::from(*value)),
            BoolExprInner::Not(inner) => {
                write!(f, "~")?;
                return inner.fmt_at(f, Precedence::Not);
            }
            BoolExprInner::And(left, right) => (Precedence::And, left, " * ", right),
            BoolExprInner::Or(left, right) => (Precedence::Or, left, " + ", right),
        };

        let parens = outer > own;
        if parens {
            write!(f, "(")?;
        }
        left.fmt_at(f, own)?;
        write!(f, "{}", op)?;
        right.fmt_at(f, own)?;
        if parens {
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// Renders with `*` for AND, `+` for OR and `~` for NOT, using only the
/// parentheses precedence requires
///
/// # Examples
///
/// ```
/// use pal_logic::BoolExpr;
///
/// let a = BoolExpr::variable("a");
/// let b = BoolExpr::variable("b");
/// let c = BoolExpr::variable("c");
///
/// assert_eq!(format!("{:?}", a.and(&b).or(&c)), "a * b + c");
/// assert_eq!(format!("{:?}", a.or(&b).and(&c)), "(a + b) * c");
/// assert_eq!(format!("{:?}", a.and(&b).not()), "~(a * b)");
/// ```
impl fmt::Debug for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_at(f, Precedence::Top)
    }
}

/// Same output as `Debug`
impl fmt::Display for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
