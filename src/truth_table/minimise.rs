//! Greedy sum-of-products reduction
//!
//! Seeds a minterm from the lowest uncovered 1-entry, relaxes its bits to
//! don't-care one at a time from bit 0 upwards while the widened term still
//! covers only 1-entries of the original table, then marks everything it
//! covers as done. There is no backtracking: an early relaxation can rule out
//! a later one, so the result is sound but not necessarily minimal.

use crate::term::{BitState, Term};
use bitvec::prelude::*;
use log::trace;

pub(super) fn minimise(table: &BitSlice, bit_count: usize) -> Vec<Term> {
    let mut todo = table.to_bitvec();
    let mut terms = Vec::new();

    while let Some(seed) = todo.first_one() {
        let mut term = Term::minterm(seed as u32, bit_count);
        for bit in 0..bit_count {
            let relaxed = term.with_bit(bit, BitState::DontCare);
            // Tested against the full table so overlap with covered entries is allowed.
            if relaxed.test_all(table, bit_count) {
                term = relaxed;
            }
        }

        term.clear_all(&mut todo, bit_count);
        trace!("seed {:#b} -> {:?}", seed, term);
        terms.push(term);
    }

    debug_assert!(todo.not_any());
    terms.sort();
    terms
}
