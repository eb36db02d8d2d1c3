//! Truth tables for single output signals
//!
//! A [`TruthTable`] stores one result bit for each of the `2^bit_count`
//! input combinations of a named signal. Input combination `i` has signal `j`
//! asserted exactly when bit `j` of `i` is set.
//!
//! Tables are built from a generator function (or a [`BoolExpr`]) and turned
//! into a sum of products with [`TruthTable::optimise`].
//!
//! ```
//! use pal_logic::TruthTable;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Two-input AND
//! let table = TruthTable::create("F", 2, |i| i == 0b11)?;
//! let expr = table.optimise()?;
//! assert_eq!(expr.term_count(), 1);
//! assert_eq!(expr.display_with(&["A", "B"]).to_string(), "F = B A");
//! # Ok(())
//! # }
//! ```

pub mod error;
mod minimise;

pub use error::{MinimizationError, TableError};

use crate::bool_expr::BoolExpr;
use crate::config::PalConfig;
use crate::expression::Expression;
use bitvec::prelude::*;
use log::debug;
use std::fmt;
use std::sync::Arc;

/// Complete input to output mapping of one named signal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    name: Arc<str>,
    table: Arc<BitVec>,
    bit_count: usize,
}

impl TruthTable {
    /// Largest number of input bits a table may have
    pub const MAX_BITS: usize = 28;

    fn check_bits(bit_count: usize) -> Result<(), TableError> {
        if bit_count > Self::MAX_BITS {
            return Err(TableError::TooManyBits {
                bit_count,
                max: Self::MAX_BITS,
            });
        }
        Ok(())
    }

    fn generate<F>(name: &str, bit_count: usize, mut f: F) -> Result<Self, TableError>
    where
        F: FnMut(u32) -> bool,
    {
        Self::check_bits(bit_count)?;
        let size = 1usize << bit_count;
        let mut table = BitVec::with_capacity(size);
        for input in 0..size as u32 {
            table.push(f(input));
        }
        Ok(TruthTable {
            name: Arc::from(name),
            table: Arc::new(table),
            bit_count,
        })
    }

    /// Build a table by calling `f` for every input combination
    ///
    /// # Errors
    ///
    /// [`TableError::TooManyBits`] if `bit_count` exceeds [`Self::MAX_BITS`].
    pub fn create<F>(name: &str, bit_count: usize, f: F) -> Result<Self, TableError>
    where
        F: Fn(u32) -> bool,
    {
        Self::generate(name, bit_count, f)
    }

    /// Build a table from one bit of an integer-valued generator
    ///
    /// Useful for counters and other multi-bit functions: `f` computes the
    /// whole next value and only bit `bit` of it is kept.
    ///
    /// ```
    /// use pal_logic::TruthTable;
    ///
    /// # fn main() -> Result<(), pal_logic::TableError> {
    /// // Bit 1 of a 2-bit incrementer
    /// let table = TruthTable::create_sampled("Q1", 2, |i| (i + 1) & 0b11, 1)?;
    /// assert_eq!(
    ///     (0..4).map(|i| table.get(i)).collect::<Vec<_>>(),
    ///     [false, true, true, false]
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn create_sampled<F>(
        name: &str,
        bit_count: usize,
        f: F,
        bit: u32,
    ) -> Result<Self, TableError>
    where
        F: Fn(u32) -> u32,
    {
        if bit >= u32::BITS {
            return Err(TableError::InvalidOutputBit { bit });
        }
        let mask = 1u32 << bit;
        Self::generate(name, bit_count, |input| f(input) & mask != 0)
    }

    /// Build one table per output from a generator over the packed chip value
    ///
    /// Outputs occupy the low bits `[0, outputs.len())` in order and inputs the
    /// bits after them, so every table has `outputs.len() + inputs.len()`
    /// input bits. Table `j` is named `outputs[j]` and samples bit `j` of `f`.
    /// `f` is called once per input combination.
    pub fn create_many<S, F>(inputs: &[S], outputs: &[S], f: F) -> Result<Vec<Self>, TableError>
    where
        S: AsRef<str>,
        F: Fn(u32) -> u32,
    {
        let bit_count = outputs.len() + inputs.len();
        if outputs.len() > u32::BITS as usize {
            return Err(TableError::InvalidOutputBit {
                bit: outputs.len() as u32 - 1,
            });
        }
        Self::check_bits(bit_count)?;
        let values: Vec<u32> = (0..1u32 << bit_count).map(f).collect();
        outputs
            .iter()
            .enumerate()
            .map(|(bit, name)| {
                let mask = 1u32 << bit;
                Self::generate(name.as_ref(), bit_count, |input| {
                    values[input as usize] & mask != 0
                })
            })
            .collect()
    }

    /// Build a table from a boolean expression over the named input bits
    ///
    /// Variable `bit_names[j]` reads input bit `j`.
    ///
    /// # Errors
    ///
    /// [`TableError::Expr`] if the expression uses a name missing from
    /// `bit_names`, [`TableError::TooManyBits`] if there are too many names.
    pub fn from_expr<S: AsRef<str>>(
        name: &str,
        expr: &BoolExpr,
        bit_names: &[S],
    ) -> Result<Self, TableError> {
        let bound = expr.bind(bit_names)?;
        Self::generate(name, bit_names.len(), |input| bound.evaluate(input))
    }

    /// Name of the signal
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of input bits
    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Number of entries, always `2^bit_count`
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always false: even a zero-bit table has one entry
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Number of input combinations mapping to 1
    pub fn count_ones(&self) -> usize {
        self.table.count_ones()
    }

    /// Result for one input combination
    ///
    /// # Panics
    ///
    /// Panics if `input` is not below `2^bit_count`.
    pub fn get(&self, input: u32) -> bool {
        self.table[input as usize]
    }

    /// The raw table bits, indexed by input combination
    pub fn bits(&self) -> &BitSlice {
        &self.table
    }

    /// A table named `/name` with every entry flipped
    pub fn inverse(&self) -> Self {
        let table = !BitVec::clone(&self.table);
        TruthTable {
            name: Arc::from(format!("/{}", self.name)),
            table: Arc::new(table),
            bit_count: self.bit_count,
        }
    }

    /// Minimize into a sum of products using the default configuration
    ///
    /// The result reproduces the table exactly but is not guaranteed to be
    /// the smallest such expression.
    pub fn optimise(&self) -> Result<Expression, MinimizationError> {
        self.optimise_with(&PalConfig::default())
    }

    /// Minimize into a sum of products
    ///
    /// # Errors
    ///
    /// With [`PalConfig::verify`] set, returns
    /// [`MinimizationError::Mismatch`] if the result disagrees with the table
    /// anywhere.
    pub fn optimise_with(&self, config: &PalConfig) -> Result<Expression, MinimizationError> {
        let terms = minimise::minimise(&self.table, self.bit_count);
        debug!(
            "Minimized {} ({} bits, {} ones) to {} terms",
            self.name,
            self.bit_count,
            self.count_ones(),
            terms.len()
        );
        let expression = Expression::new(&*self.name, terms);
        if config.verify {
            self.verify(&expression)?;
        }
        Ok(expression)
    }

    /// Check that `expression` agrees with this table on every input
    pub fn verify(&self, expression: &Expression) -> Result<(), MinimizationError> {
        match (0..self.len() as u32).find(|&input| expression.evaluate(input) != self.get(input)) {
            Some(input) => Err(MinimizationError::Mismatch {
                name: Arc::clone(&self.name),
                input,
                expected: self.get(input),
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Minimize every table in order
pub fn optimise_all(tables: &[TruthTable]) -> Result<Vec<Expression>, MinimizationError> {
    tables.iter().map(TruthTable::optimise).collect()
}

#[cfg(test)]
mod tests;
