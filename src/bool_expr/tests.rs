//! Tests for the bool_expr module

use super::*;
use crate::expr;
use std::collections::HashMap;

fn assignment(pairs: &[(&str, bool)]) -> HashMap<Arc<str>, bool> {
    pairs
        .iter()
        .map(|(name, value)| (Arc::from(*name), *value))
        .collect()
}

#[test]
fn test_variables_in_first_appearance_order() {
    let a = BoolExpr::variable("a");
    let b = BoolExpr::variable("b");
    let c = BoolExpr::variable("c");

    let expr = c.and(&a).or(&a.and(&b.not()));
    let vars = expr.variables();
    let names: Vec<&str> = vars.iter().map(|s| s.as_ref()).collect();
    assert_eq!(names, vec!["c", "a", "b"]);
}

#[test]
fn test_constant_folding() {
    let a = BoolExpr::variable("a");
    let one = BoolExpr::constant(true);
    let zero = BoolExpr::constant(false);

    assert_eq!(a.and(&one), a);
    assert_eq!(a.and(&zero), zero);
    assert_eq!(a.or(&zero), a);
    assert_eq!(a.or(&one), one);
    assert_eq!(a.not().not(), a);
    assert_eq!(one.not(), zero);
}

#[test]
fn test_operators_match_methods() {
    let a = BoolExpr::variable("a");
    let b = BoolExpr::variable("b");

    assert_eq!(&a * &b, a.and(&b));
    assert_eq!(&a + &b, a.or(&b));
    assert_eq!(!&a, a.not());
    assert_eq!(a.clone() * b.clone() + !a.clone(), a.and(&b).or(&a.not()));
}

#[test]
fn test_evaluate_missing_variable_is_false() {
    let expr = BoolExpr::variable("a").or(&BoolExpr::variable("b").not());
    assert!(expr.evaluate(&HashMap::new()));
    assert!(!expr.evaluate(&assignment(&[("b", true)])));
    assert!(expr.evaluate(&assignment(&[("a", true), ("b", true)])));
}

#[test]
fn test_precedence_display() {
    let a = BoolExpr::variable("a");
    let b = BoolExpr::variable("b");
    let c = BoolExpr::variable("c");

    assert_eq!(a.and(&b).or(&c).to_string(), "a * b + c");
    assert_eq!(a.or(&b).and(&c).to_string(), "(a + b) * c");
    assert_eq!(a.and(&b.or(&c)).to_string(), "a * (b + c)");
    assert_eq!(a.or(&b).not().to_string(), "~(a + b)");
    assert_eq!(a.not().and(&b).to_string(), "~a * b");
    assert_eq!(BoolExpr::constant(true).to_string(), "1");
}

#[test]
fn test_display_parse_round_trip() {
    let exprs = [
        "a * b + c",
        "(a + b) * (c + d)",
        "~(a * ~b) + c * ~(d + e)",
        "a * b * c + ~a * ~b * ~c",
        "~~a",
        "1 * a + 0",
    ];
    for text in exprs {
        let parsed = BoolExpr::parse(text).unwrap();
        let reparsed = BoolExpr::parse(&parsed.to_string()).unwrap();
        assert!(parsed.equivalent_to(&reparsed), "{}", text);
        assert_eq!(parsed, reparsed, "{}", text);
    }
}

#[test]
fn test_parse_operator_spellings() {
    let canonical = BoolExpr::parse("a * ~b + c").unwrap();
    for text in ["a & !b | c", "a*/b+c", "a * /b | c", "(a & ~b) + (c)"] {
        let parsed = BoolExpr::parse(text).unwrap();
        assert!(canonical.equivalent_to(&parsed), "{}", text);
    }
}

#[test]
fn test_parse_constants_and_identifiers() {
    assert_eq!(BoolExpr::parse("true").unwrap(), BoolExpr::constant(true));
    assert_eq!(BoolExpr::parse("0").unwrap(), BoolExpr::constant(false));
    assert_eq!(
        BoolExpr::parse("_q0 * CLR_n").unwrap().variables().len(),
        2
    );
}

#[test]
fn test_parse_errors_carry_position() {
    let err = BoolExpr::parse("a * * b").unwrap_err();
    match err {
        ParseBoolExprError::Parse(ExpressionParseError::InvalidSyntax {
            position, input, ..
        }) => {
            assert_eq!(position, Some(4));
            assert_eq!(&*input, "a * * b");
        }
    }

    assert!(BoolExpr::parse("").is_err());
    assert!(BoolExpr::parse("(a + b").is_err());
    assert!(BoolExpr::parse("a + 2").is_err());
}

#[test]
fn test_from_str() {
    let expr: BoolExpr = "a + b".parse().unwrap();
    assert!(expr.equivalent_to(&expr!("b" + "a")));
}

#[test]
fn test_equivalence() {
    let a = BoolExpr::variable("a");
    let b = BoolExpr::variable("b");
    let c = BoolExpr::variable("c");

    // Distribution
    let lhs = a.and(&b.or(&c));
    let rhs = a.and(&b).or(&a.and(&c));
    assert!(lhs.equivalent_to(&rhs));

    // Absorption drops a variable from one side
    assert!(a.or(&a.and(&b)).equivalent_to(&a));

    assert!(!a.and(&b).equivalent_to(&a.or(&b)));
    assert!(BoolExpr::constant(true).equivalent_to(&a.or(&a.not())));
}

#[test]
fn test_bind_positions() {
    let expr = expr!("Q" * !"CLR");
    let bound = expr.bind(&["Q", "CLR"]).unwrap();
    assert!(bound.evaluate(0b01));
    assert!(!bound.evaluate(0b11));
    assert!(!bound.evaluate(0b00));

    // Order of names decides the bit.
    let swapped = expr.bind(&["CLR", "Q"]).unwrap();
    assert!(swapped.evaluate(0b10));
}

#[test]
fn test_bind_unknown_variable() {
    let expr = expr!("a" + "b");
    assert_eq!(
        expr.bind(&["a"]),
        Err(ExprError::UnknownVariable {
            name: Arc::from("b")
        })
    );
}

#[test]
fn test_bind_matches_evaluate() {
    let expr = BoolExpr::parse("a * ~b + ~(c + a) * b").unwrap();
    let names = ["a", "b", "c"];
    let bound = expr.bind(&names).unwrap();
    for input in 0..8u32 {
        let values: HashMap<Arc<str>, bool> = names
            .iter()
            .enumerate()
            .map(|(i, name)| (Arc::from(*name), (input >> i) & 1 != 0))
            .collect();
        assert_eq!(bound.evaluate(input), expr.evaluate(&values), "{}", input);
    }
}

#[test]
fn test_macro_forms() {
    let a = BoolExpr::variable("a");
    let b = BoolExpr::variable("b");

    assert!(expr!(a * b).equivalent_to(&a.and(&b)));
    assert!(expr!(a & b | !a).equivalent_to(&a.and(&b).or(&a.not())));
    assert!(expr!(~(a + b)).equivalent_to(&a.or(&b).not()));
    assert!(expr!("x" + 0).equivalent_to(&BoolExpr::variable("x")));
    assert!(expr!(1).equivalent_to(&BoolExpr::constant(true)));
}

#[test]
fn test_fold_counts_leaves() {
    let expr = expr!("a" * "b" + !"c");
    let leaves = expr.fold(|node| match node {
        ExprNode::Variable(_) | ExprNode::Constant(_) => 1,
        ExprNode::And(l, r) | ExprNode::Or(l, r) => l + r,
        ExprNode::Not(inner) => inner,
    });
    assert_eq!(leaves, 3);
}
