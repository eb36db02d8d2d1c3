//! Evaluation and equivalence checking for boolean expressions

use super::error::ExprError;
use super::{BoolExpr, BoolExprInner};
use std::collections::HashMap;
use std::sync::Arc;

impl BoolExpr {
    /// Evaluate the expression under a variable assignment
    ///
    /// Variables missing from the assignment read as `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pal_logic::BoolExpr;
    /// use std::collections::HashMap;
    /// use std::sync::Arc;
    ///
    /// let a = BoolExpr::variable("a");
    /// let b = BoolExpr::variable("b");
    /// let expr = a.and(&b);
    ///
    /// let mut assignment = HashMap::new();
    /// assignment.insert(Arc::from("a"), true);
    /// assignment.insert(Arc::from("b"), true);
    /// assert!(expr.evaluate(&assignment));
    ///
    /// assignment.remove("b");
    /// assert!(!expr.evaluate(&assignment));
    /// ```
    pub fn evaluate(&self, assignment: &HashMap<Arc<str>, bool>) -> bool {
        match self.inner.as_ref() {
            BoolExprInner::Variable(name) => assignment.get(name).copied().unwrap_or(false),
            BoolExprInner::Constant(value) => *value,
            BoolExprInner::And(left, right) => {
                left.evaluate(assignment) && right.evaluate(assignment)
            }
            BoolExprInner::Or(left, right) => {
                left.evaluate(assignment) || right.evaluate(assignment)
            }
            BoolExprInner::Not(inner) => !inner.evaluate(assignment),
        }
    }

    /// Check whether two expressions compute the same function
    ///
    /// Compares every assignment of the variables the two expressions use
    /// between them, so the cost doubles with each distinct variable.
    ///
    /// ```
    /// use pal_logic::BoolExpr;
    ///
    /// let a = BoolExpr::variable("a");
    /// let b = BoolExpr::variable("b");
    ///
    /// assert!(a.and(&b).equivalent_to(&b.and(&a)));
    /// assert!(a.and(&b).not().equivalent_to(&a.not().or(&b.not())));
    /// assert!(!a.equivalent_to(&b));
    /// ```
    pub fn equivalent_to(&self, other: &BoolExpr) -> bool {
        if self == other {
            return true;
        }

        let mut names = self.variables();
        for name in other.variables() {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        assert!(
            names.len() < 32,
            "cannot compare expressions over {} variables",
            names.len()
        );

        // Both bind cleanly: every variable is in `names`.
        let (Ok(left), Ok(right)) = (self.bind(&names), other.bind(&names)) else {
            return false;
        };
        (0..1u32 << names.len()).all(|input| left.evaluate(input) == right.evaluate(input))
    }

    /// Bind variables to input bit positions
    ///
    /// Variable `names[i]` reads bit `i` of the index later passed to
    /// [`BoundExpr::evaluate`].
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::UnknownVariable`] if the expression uses a name
    /// that is not in `names`.
    ///
    /// ```
    /// use pal_logic::BoolExpr;
    ///
    /// # fn main() -> Result<(), pal_logic::ExprError> {
    /// let expr = BoolExpr::variable("b").and(&BoolExpr::variable("a").not());
    /// let bound = expr.bind(&["a", "b"])?;
    /// assert!(bound.evaluate(0b10));
    /// assert!(!bound.evaluate(0b11));
    ///
    /// assert!(expr.bind(&["a"]).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn bind<S: AsRef<str>>(&self, names: &[S]) -> Result<BoundExpr, ExprError> {
        let positions: HashMap<&str, u32> = names
            .iter()
            .enumerate()
            .rev()
            .map(|(i, name)| (name.as_ref(), i as u32))
            .collect();
        let mut nodes = Vec::new();
        self.compile(&positions, &mut nodes)?;
        Ok(BoundExpr {
            nodes: nodes.into(),
        })
    }

    fn compile(
        &self,
        positions: &HashMap<&str, u32>,
        nodes: &mut Vec<BoundNode>,
    ) -> Result<(), ExprError> {
        match self.inner.as_ref() {
            BoolExprInner::Variable(name) => {
                let bit = *positions
                    .get(name.as_ref())
                    .ok_or_else(|| ExprError::UnknownVariable {
                        name: Arc::clone(name),
                    })?;
                nodes.push(BoundNode::Bit(bit));
            }
            BoolExprInner::Constant(value) => nodes.push(BoundNode::Constant(*value)),
            BoolExprInner::And(left, right) => {
                left.compile(positions, nodes)?;
                right.compile(positions, nodes)?;
                nodes.push(BoundNode::And);
            }
            BoolExprInner::Or(left, right) => {
                left.compile(positions, nodes)?;
                right.compile(positions, nodes)?;
                nodes.push(BoundNode::Or);
            }
            BoolExprInner::Not(inner) => {
                inner.compile(positions, nodes)?;
                nodes.push(BoundNode::Not);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoundNode {
    Bit(u32),
    Constant(bool),
    And,
    Or,
    Not,
}

/// A [`BoolExpr`] whose variables have been resolved to input bit positions
///
/// Stored in postfix order so evaluation is a single pass over a small stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundExpr {
    nodes: Arc<[BoundNode]>,
}

impl BoundExpr {
    /// Evaluate against a packed input index
    pub fn evaluate(&self, input: u32) -> bool {
        let mut stack: Vec<bool> = Vec::with_capacity(self.nodes.len());
        for node in self.nodes.iter() {
            let value = match node {
                BoundNode::Bit(bit) => (input >> bit) & 1 != 0,
                BoundNode::Constant(value) => *value,
                BoundNode::Not => !pop(&mut stack),
                BoundNode::And => {
                    let right = pop(&mut stack);
                    pop(&mut stack) && right
                }
                BoundNode::Or => {
                    let right = pop(&mut stack);
                    pop(&mut stack) || right
                }
            };
            stack.push(value);
        }
        pop(&mut stack)
    }
}

// Postfix programs built by `compile` are always well formed.
fn pop(stack: &mut Vec<bool>) -> bool {
    stack.pop().unwrap_or(false)
}
