//! Operator overloading and boolean operations for boolean expressions

use super::{BoolExpr, BoolExprInner};
use std::ops::{Add, Mul, Not};

/// Logical AND operator for references: `&a * &b`
///
/// # Examples
///
/// ```
/// use pal_logic::BoolExpr;
///
/// let a = BoolExpr::variable("a");
/// let b = BoolExpr::variable("b");
/// let result = &a * &b;  // Equivalent to a.and(&b)
/// ```
impl Mul for &BoolExpr {
    type Output = BoolExpr;

    fn mul(self, rhs: &BoolExpr) -> BoolExpr {
        self.and(rhs)
    }
}

/// Logical AND operator: `a * b` (delegates to reference version)
impl Mul for BoolExpr {
    type Output = BoolExpr;

    fn mul(self, rhs: BoolExpr) -> BoolExpr {
        self.and(&rhs)
    }
}

/// Logical OR operator for references: `&a + &b`
///
/// # Examples
///
/// ```
/// use pal_logic::BoolExpr;
///
/// let a = BoolExpr::variable("a");
/// let b = BoolExpr::variable("b");
/// let result = &a + &b;  // Equivalent to a.or(&b)
/// ```
impl Add for &BoolExpr {
    type Output = BoolExpr;

    fn add(self, rhs: &BoolExpr) -> BoolExpr {
        self.or(rhs)
    }
}

/// Logical OR operator: `a + b` (delegates to reference version)
impl Add for BoolExpr {
    type Output = BoolExpr;

    fn add(self, rhs: BoolExpr) -> BoolExpr {
        self.or(&rhs)
    }
}

/// Logical NOT operator for references: `!&a`
impl Not for &BoolExpr {
    type Output = BoolExpr;

    fn not(self) -> BoolExpr {
        BoolExpr::not(self)
    }
}

/// Logical NOT operator: `!a` (delegates to reference version)
impl Not for BoolExpr {
    type Output = BoolExpr;

    fn not(self) -> BoolExpr {
        BoolExpr::not(&self)
    }
}

impl BoolExpr {
    /// Logical AND of this expression and another
    ///
    /// Constants are folded away, so `a.and(&BoolExpr::constant(true))` is
    /// just `a`.
    pub fn and(&self, other: &BoolExpr) -> BoolExpr {
        match (self.inner.as_ref(), other.inner.as_ref()) {
            (BoolExprInner::Constant(false), _) | (_, BoolExprInner::Constant(false)) => {
                BoolExpr::constant(false)
            }
            (BoolExprInner::Constant(true), _) => other.clone(),
            (_, BoolExprInner::Constant(true)) => self.clone(),
            _ => BoolExpr::from_inner(BoolExprInner::And(self.clone(), other.clone())),
        }
    }

    /// Logical OR of this expression and another
    pub fn or(&self, other: &BoolExpr) -> BoolExpr {
        match (self.inner.as_ref(), other.inner.as_ref()) {
            (BoolExprInner::Constant(true), _) | (_, BoolExprInner::Constant(true)) => {
                BoolExpr::constant(true)
            }
            (BoolExprInner::Constant(false), _) => other.clone(),
            (_, BoolExprInner::Constant(false)) => self.clone(),
            _ => BoolExpr::from_inner(BoolExprInner::Or(self.clone(), other.clone())),
        }
    }

    /// Logical NOT of this expression
    ///
    /// Double negations and negated constants collapse.
    pub fn not(&self) -> BoolExpr {
        match self.inner.as_ref() {
            BoolExprInner::Constant(value) => BoolExpr::constant(!value),
            BoolExprInner::Not(inner) => inner.clone(),
            _ => BoolExpr::from_inner(BoolExprInner::Not(self.clone())),
        }
    }
}
