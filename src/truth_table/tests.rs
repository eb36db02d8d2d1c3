//! Tests for the truth_table module

use super::*;
use crate::expr;
use crate::term::BitState::{DontCare, True};
use crate::term::Term;

fn assert_reproduces(table: &TruthTable, expression: &Expression) {
    for input in 0..table.len() as u32 {
        assert_eq!(
            expression.evaluate(input),
            table.get(input),
            "{} at {:#b}",
            table.name(),
            input
        );
    }
}

#[test]
fn test_create_sizes_table() {
    let table = TruthTable::create("X", 5, |i| i % 3 == 0).unwrap();
    assert_eq!(table.len(), 32);
    assert_eq!(table.bit_count(), 5);
    assert_eq!(table.count_ones(), 11);
    assert!(table.get(30));
    assert!(!table.get(31));
    assert_eq!(table.to_string(), "X");
}

#[test]
fn test_too_many_bits() {
    let err = TruthTable::create("X", TruthTable::MAX_BITS + 1, |_| true).unwrap_err();
    assert!(matches!(err, TableError::TooManyBits { max: 28, .. }));
}

#[test]
fn test_create_sampled_rejects_bit_outside_u32() {
    let err = TruthTable::create_sampled("X", 2, |i| i, 32).unwrap_err();
    assert_eq!(err, TableError::InvalidOutputBit { bit: 32 });
}

#[test]
fn test_create_many_layout() {
    // Two outputs (S0, S1) and one input (EN): S' = S + EN
    let tables = TruthTable::create_many(&["EN"], &["S0", "S1"], |v| {
        let state = v & 0b11;
        let en = (v >> 2) & 1;
        (state + en) & 0b11
    })
    .unwrap();

    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].name(), "S0");
    assert_eq!(tables[1].name(), "S1");
    assert!(tables.iter().all(|t| t.bit_count() == 3));

    // State 01 with EN set steps to 10.
    assert!(!tables[0].get(0b101));
    assert!(tables[1].get(0b101));
    // Without EN the state holds.
    assert!(tables[0].get(0b001));
    assert!(!tables[1].get(0b001));
}

#[test]
fn test_from_expr() {
    let names = ["Q", "CLR"];
    let table = TruthTable::from_expr("Q", &expr!(!"Q" * !"CLR"), &names).unwrap();
    assert_eq!(
        (0..4).map(|i| table.get(i)).collect::<Vec<_>>(),
        [true, false, false, false]
    );

    let err = TruthTable::from_expr("Q", &expr!("Q" * "EN"), &names).unwrap_err();
    assert!(matches!(err, TableError::Expr(_)));
}

#[test]
fn test_inverse_flips_every_entry() {
    let table = TruthTable::create("F", 4, |i| i.count_ones() == 2).unwrap();
    let inverse = table.inverse();
    assert_eq!(inverse.name(), "/F");
    assert_eq!(inverse.bit_count(), 4);
    for i in 0..16 {
        assert_ne!(table.get(i), inverse.get(i));
    }
    assert_eq!(inverse.inverse().bits(), table.bits());
}

#[test]
fn test_two_input_and_is_one_term() {
    let table = TruthTable::create("F", 2, |i| i & 1 != 0 && i & 2 != 0).unwrap();
    let expression = table.optimise().unwrap();
    assert_eq!(expression.terms(), &[Term::of([True, True])]);
    assert_eq!(expression.name(), "F");
}

#[test]
fn test_all_false_and_all_true() {
    for bits in 0..=6 {
        let zero = TruthTable::create("zero", bits, |_| false).unwrap();
        assert_eq!(zero.optimise().unwrap().term_count(), 0);

        let one = TruthTable::create("one", bits, |_| true).unwrap();
        assert_eq!(one.optimise().unwrap().terms(), &[Term::one()]);
    }
}

#[test]
fn test_single_variable_function() {
    let table = TruthTable::create("F", 4, |i| i & 0b100 != 0).unwrap();
    let expression = table.optimise().unwrap();
    assert_eq!(expression.terms(), &[Term::of([DontCare, DontCare, True])]);
}

#[test]
fn test_counter_bits_reproduce() {
    let tables = TruthTable::create_many(&["CLR"], &["Q0", "Q1", "Q2"], |v| {
        if v & 0b1000 != 0 {
            0
        } else {
            (v + 1) & 0b111
        }
    })
    .unwrap();
    for (table, expression) in tables.iter().zip(optimise_all(&tables).unwrap()) {
        assert_reproduces(table, &expression);
    }
}

#[test]
fn test_terms_are_sorted() {
    let table = TruthTable::create("F", 5, |i| i % 7 == 1 || i > 27).unwrap();
    let expression = table.optimise().unwrap();
    let mut sorted = expression.terms().to_vec();
    sorted.sort();
    assert_eq!(expression.terms(), sorted.as_slice());
    assert_reproduces(&table, &expression);
}

#[test]
fn test_verify_reports_mismatch() {
    let table = TruthTable::create("F", 2, |i| i == 3).unwrap();
    let wrong = Expression::new("F", [Term::of([True])]);
    assert_eq!(
        table.verify(&wrong),
        Err(MinimizationError::Mismatch {
            name: Arc::from("F"),
            input: 1,
            expected: false,
        })
    );
}

#[test]
fn test_optimise_without_verify() {
    let config = PalConfig {
        verify: false,
        ..PalConfig::default()
    };
    let table = TruthTable::create("F", 3, |i| i != 5).unwrap();
    let expression = table.optimise_with(&config).unwrap();
    assert_reproduces(&table, &expression);
}
