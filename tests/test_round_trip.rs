//! Minimized expressions reproduce their truth tables exactly
//!
//! Every table shape is checked for input widths up to 24: all-false,
//! all-true, pseudo-random functions and a few structured ones.

use bitvec::prelude::*;
use pal_logic::{BitState, Expression, PalConfig, Term, TruthTable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn tables(bit_count: usize) -> Vec<TruthTable> {
    let mut rng = StdRng::seed_from_u64(bit_count as u64);
    let random: Vec<bool> = (0..1usize << bit_count).map(|_| rng.gen()).collect();
    let sparse: Vec<bool> = (0..1usize << bit_count)
        .map(|_| rng.gen_ratio(1, 8))
        .collect();

    vec![
        TruthTable::create(&format!("all-false-{}", bit_count), bit_count, |_| false).unwrap(),
        TruthTable::create(&format!("all-true-{}", bit_count), bit_count, |_| true).unwrap(),
        TruthTable::create(&format!("random-{}", bit_count), bit_count, |i| {
            random[i as usize]
        })
        .unwrap(),
        TruthTable::create(&format!("sparse-{}", bit_count), bit_count, |i| {
            sparse[i as usize]
        })
        .unwrap(),
        TruthTable::create(&format!("parity-{}", bit_count), bit_count, |i| {
            i.count_ones() % 2 == 1
        })
        .unwrap(),
        TruthTable::create_sampled(
            &format!("increment-msb-{}", bit_count),
            bit_count,
            |i| i + 1,
            bit_count as u32 - 1,
        )
        .unwrap(),
    ]
}

fn assert_round_trip(table: &TruthTable) -> Expression {
    let expression = table.optimise().unwrap();
    for input in 0..table.len() as u32 {
        assert_eq!(
            expression.evaluate(input),
            table.get(input),
            "{} differs at {:#b}",
            table.name(),
            input
        );
    }
    expression
}

#[test]
fn test_round_trip_small_tables() {
    for bit_count in 1..=12 {
        for table in tables(bit_count) {
            assert_round_trip(&table);
        }
    }
}

#[test]
fn test_round_trip_medium_tables() {
    // Shapes with small covers; the dense random ones are in the ignored test.
    for bit_count in 13..=16 {
        for table in tables(bit_count) {
            if table.name().starts_with("all-") || table.name().starts_with("increment") {
                assert_round_trip(&table);
            }
        }
    }
}

/// Linear congruential step; bit 10 gives a cheap, irregular function
fn lcg_bit(i: u32) -> bool {
    (u64::from(i) * 0x5DEECE66D + 0xB) & 1024 == 0
}

/// Exact soundness check that costs one visit per covered entry
///
/// Every term must cover only 1-entries and together they must cover all
/// of them.
fn assert_exact_cover(table: &TruthTable, expression: &Expression) {
    let bit_count = table.bit_count();
    let mut covered = bitvec![0; table.len()];
    for term in expression.terms() {
        assert!(term.test_all(table.bits(), bit_count), "{}: {:?}", table.name(), term);
        for input in term.matches(bit_count) {
            covered.set(input as usize, true);
        }
    }
    assert_eq!(
        covered.as_bitslice(),
        table.bits(),
        "{} is not fully covered",
        table.name()
    );
}

#[test]
fn test_round_trip_wide_tables() {
    // Evaluating every input against every term is too slow here, so the
    // cover is checked entry by entry instead.
    let config = PalConfig {
        verify: false,
        ..PalConfig::default()
    };
    for bit_count in 17..=24 {
        let shapes = [
            TruthTable::create("all-false", bit_count, |_| false).unwrap(),
            TruthTable::create("all-true", bit_count, |_| true).unwrap(),
            TruthTable::create("lcg", bit_count, lcg_bit).unwrap(),
        ];
        for table in &shapes {
            let expression = table.optimise_with(&config).unwrap();
            assert_exact_cover(table, &expression);
        }
        assert_eq!(shapes[0].optimise_with(&config).unwrap().term_count(), 0);
        assert_eq!(shapes[1].optimise_with(&config).unwrap().terms(), &[Term::one()]);
    }
}

#[test]
fn test_lcg_tables_round_trip_by_evaluation() {
    for bit_count in 1..=16 {
        let table = TruthTable::create("lcg", bit_count, lcg_bit).unwrap();
        let expression = assert_round_trip(&table);
        assert_exact_cover(&table, &expression);
    }
}

#[test]
#[ignore = "slow; run with --ignored"]
fn test_round_trip_large_tables() {
    for bit_count in 13..=24 {
        for table in tables(bit_count) {
            assert_round_trip(&table);
        }
    }
}

#[test]
fn test_inverse_round_trip() {
    for bit_count in 1..=8 {
        for table in tables(bit_count) {
            let inverse = table.inverse();
            let expression = assert_round_trip(&inverse);
            assert_eq!(expression.name(), format!("/{}", table.name()));
        }
    }
}

#[test]
fn test_constant_tables_have_trivial_covers() {
    for bit_count in 1..=10 {
        let zero = TruthTable::create("zero", bit_count, |_| false).unwrap();
        assert_eq!(zero.optimise().unwrap().term_count(), 0);

        let one = TruthTable::create("one", bit_count, |_| true).unwrap();
        assert_eq!(one.optimise().unwrap().terms(), &[Term::one()]);
    }
}

#[test]
fn test_two_input_and() {
    let table = TruthTable::create("F", 2, |i| i & 1 != 0 && i & 2 != 0).unwrap();
    let expression = table.optimise().unwrap();
    assert_eq!(expression.term_count(), 1);
    let term = &expression.terms()[0];
    assert_eq!(term.bits(), &[BitState::True, BitState::True]);
    assert_eq!(expression.display_with(&["bit0", "bit1"]).to_string(), "F = bit1 bit0");
}

#[test]
fn test_parity_needs_every_minterm() {
    // No two odd-parity inputs are adjacent, so nothing can be relaxed.
    let table = TruthTable::create("P", 6, |i| i.count_ones() % 2 == 1).unwrap();
    let expression = table.optimise().unwrap();
    assert_eq!(expression.term_count(), 32);
    assert!(expression.terms().iter().all(|t| t.literal_count() == 6));
}

#[test]
fn test_each_term_covers_only_ones() {
    let table = tables(9).swap_remove(2);
    let expression = table.optimise().unwrap();
    for term in expression.terms() {
        assert!(term.test_all(table.bits(), table.bit_count()), "{:?}", term);
    }
}
