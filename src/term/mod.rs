//! Product terms over an ordered tri-state bit vector
//!
//! A [`Term`] is one product (AND) of literals: every position is either
//! asserted, negated or don't-care. Terms are persistent values: every
//! "mutator" returns a new canonical term and the original is untouched.
//!
//! Bit `i` of a term corresponds to bit `i` of the unsigned input index it is
//! tested against, so a term matches a hyper-rectangle of input combinations.

use crate::format::FormatError;
use crate::util::low_mask;
use bitvec::slice::BitSlice;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// State of a single position in a [`Term`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitState {
    /// The input bit must be 1
    True,
    /// The input bit must be 0
    False,
    /// The input bit is irrelevant
    DontCare,
}

impl BitState {
    /// Whether this position constrains the input
    pub fn is_fixed(self) -> bool {
        self != BitState::DontCare
    }
}

impl From<bool> for BitState {
    fn from(value: bool) -> Self {
        if value {
            BitState::True
        } else {
            BitState::False
        }
    }
}

impl From<Option<bool>> for BitState {
    fn from(value: Option<bool>) -> Self {
        value.map_or(BitState::DontCare, BitState::from)
    }
}

/// A product term (minterm or cube) in canonical form
///
/// The canonical form never ends in [`BitState::DontCare`]; two sequences that
/// only differ in trailing don't-cares build equal terms. The zero-length term
/// is the constant `true`.
///
/// # Examples
///
/// ```
/// use pal_logic::{BitState, Term};
///
/// let term = Term::of([BitState::True, BitState::False, BitState::DontCare]);
/// assert_eq!(term.len(), 2);
/// assert!(term.test(0b001));
/// assert!(term.test(0b101));
/// assert!(!term.test(0b011));
/// assert!(!term.test(0b010));
/// ```
#[derive(Clone)]
pub struct Term {
    bits: Arc<[BitState]>,
    interest_mask: u32,
    set_mask: u32,
}

impl Term {
    /// Largest number of positions a term can carry
    pub const MAX_BITS: usize = 32;

    /// Build a canonical term, trimming trailing don't-cares
    ///
    /// # Panics
    ///
    /// Panics if a fixed position lies at or beyond [`Term::MAX_BITS`].
    pub fn of<I>(bits: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<BitState>,
    {
        let mut bits: Vec<BitState> = bits.into_iter().map(Into::into).collect();
        while bits.last() == Some(&BitState::DontCare) {
            bits.pop();
        }
        assert!(
            bits.len() <= Self::MAX_BITS,
            "term has {} positions, at most {} are supported",
            bits.len(),
            Self::MAX_BITS
        );

        let mut interest_mask = 0u32;
        let mut set_mask = 0u32;
        for (i, state) in bits.iter().enumerate() {
            let bit = 1u32 << i;
            match state {
                BitState::True => {
                    interest_mask |= bit;
                    set_mask |= bit;
                }
                BitState::False => interest_mask |= bit,
                BitState::DontCare => {}
            }
        }
        debug_assert_eq!(!interest_mask & set_mask, 0);

        Term {
            bits: bits.into(),
            interest_mask,
            set_mask,
        }
    }

    /// The constant `true` term (no literals)
    pub fn one() -> Self {
        Term::of(std::iter::empty::<BitState>())
    }

    /// The fully specified term matching exactly `index` over `bit_count` bits
    ///
    /// # Panics
    ///
    /// Panics if `bit_count` exceeds [`Term::MAX_BITS`].
    pub fn minterm(index: u32, bit_count: usize) -> Self {
        assert!(
            bit_count <= Self::MAX_BITS,
            "minterm over {} bits, at most {} are supported",
            bit_count,
            Self::MAX_BITS
        );
        Term::of((0..bit_count).map(|bit| (index >> bit) & 1 != 0))
    }

    /// Return a copy of this term with position `pos` replaced by `state`
    ///
    /// # Panics
    ///
    /// Panics if `state` is fixed and `pos` lies at or beyond
    /// [`Term::MAX_BITS`].
    pub fn with_bit(&self, pos: usize, state: BitState) -> Self {
        let mut bits = self.bits.to_vec();
        if pos >= bits.len() {
            bits.resize(pos + 1, BitState::DontCare);
        }
        bits[pos] = state;
        Term::of(bits)
    }

    /// The canonical positions, lowest bit first
    pub fn bits(&self) -> &[BitState] {
        &self.bits
    }

    /// State of position `pos`; positions past the canonical length are don't-care
    pub fn bit(&self, pos: usize) -> BitState {
        self.bits.get(pos).copied().unwrap_or(BitState::DontCare)
    }

    /// Canonical length (index of the highest fixed position plus one)
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether this is the constant `true` term
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Mask of all fixed positions
    pub fn interest_mask(&self) -> u32 {
        self.interest_mask
    }

    /// Mask of the positions fixed to 1
    pub fn set_mask(&self) -> u32 {
        self.set_mask
    }

    /// Number of literals in the product
    pub fn literal_count(&self) -> u32 {
        self.interest_mask.count_ones()
    }

    /// Whether every input matched by `other` is also matched by `self`
    ///
    /// Each fixed position of `self` must agree with the same position of
    /// `other`; positions past either term's length count as don't-care.
    ///
    /// ```
    /// use pal_logic::{BitState::*, Term};
    ///
    /// let wide = Term::of([True, DontCare]);
    /// let narrow = Term::of([True, False]);
    /// assert!(wide.contains(&narrow));
    /// assert!(!narrow.contains(&wide));
    /// ```
    pub fn contains(&self, other: &Term) -> bool {
        (0..self.len().max(other.len())).all(|i| {
            let mine = self.bit(i);
            !mine.is_fixed() || mine == other.bit(i)
        })
    }

    /// Whether `input` satisfies every fixed position
    pub fn test(&self, input: u32) -> bool {
        (input & self.interest_mask) == self.set_mask
    }

    /// Iterate over every input in `[0, 2^bit_count)` matched by this term
    ///
    /// Only the don't-care combinations are enumerated, so the iterator yields
    /// `2^(bit_count - literal_count)` values in ascending order.
    pub fn matches(&self, bit_count: usize) -> Matches {
        let range = low_mask(bit_count);
        let next = if self.set_mask & !range != 0 {
            // A literal asserted above the table can never be satisfied.
            None
        } else {
            Some(0)
        };
        Matches {
            set: self.set_mask,
            free: !self.interest_mask & range,
            next,
        }
    }

    /// Whether every input consistent with this term is a 1-entry of `table`
    pub fn test_all(&self, table: &BitSlice, bit_count: usize) -> bool {
        self.matches(bit_count).all(|input| table[input as usize])
    }

    /// Clear every entry of `table` matched by this term
    pub fn clear_all(&self, table: &mut BitSlice, bit_count: usize) {
        for input in self.matches(bit_count) {
            table.set(input as usize, false);
        }
    }

    /// Render with the given bit names, highest bit first
    ///
    /// Asserted positions print as `NAME`, negated ones as `/NAME`,
    /// don't-cares are omitted and the constant term prints as `1`.
    ///
    /// ```
    /// use pal_logic::{BitState::*, Term};
    ///
    /// let term = Term::of([True, DontCare, False]);
    /// assert_eq!(term.format(&["Q", "X", "CLR"]).unwrap(), "/CLR Q");
    /// ```
    pub fn format<S: AsRef<str>>(&self, names: &[S]) -> Result<String, FormatError> {
        // Canonical terms end in a fixed bit, so the last position is the one to report.
        if self.len() > names.len() {
            return Err(FormatError::MissingBitName {
                position: self.len() - 1,
                available: names.len(),
            });
        }
        Ok(self.display_with(names).to_string())
    }

    /// A [`fmt::Display`] adapter using the given bit names
    ///
    /// Positions without a name fall back to `B<index>`.
    pub fn display_with<'a, S: AsRef<str>>(&'a self, names: &'a [S]) -> TermDisplay<'a, S> {
        TermDisplay { term: self, names }
    }
}

/// Iterator over the inputs matched by a [`Term`], see [`Term::matches`]
#[derive(Debug, Clone)]
pub struct Matches {
    set: u32,
    free: u32,
    next: Option<u32>,
}

impl Iterator for Matches {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let subset = self.next?;
        // Step to the next subset of the free positions; wraps to 0 when done.
        let following = subset.wrapping_sub(self.free) & self.free;
        self.next = (following != 0).then_some(following);
        Some(self.set | subset)
    }
}

/// Display adapter returned by [`Term::display_with`]
pub struct TermDisplay<'a, S> {
    term: &'a Term,
    names: &'a [S],
}

impl<S: AsRef<str>> fmt::Display for TermDisplay<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.term.is_empty() {
            return write!(f, "1");
        }
        let mut first = true;
        for (i, state) in self.term.bits.iter().enumerate().rev() {
            let prefix = match state {
                BitState::True => "",
                BitState::False => "/",
                BitState::DontCare => continue,
            };
            if !first {
                write!(f, " ")?;
            }
            first = false;
            match self.names.get(i) {
                Some(name) => write!(f, "{}{}", prefix, name.as_ref())?,
                None => write!(f, "{}B{}", prefix, i)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: [&str; 0] = [];
        fmt::Display::fmt(&self.display_with(&names), f)
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Term(")?;
        for state in self.bits.iter().rev() {
            let c = match state {
                BitState::True => '1',
                BitState::False => '0',
                BitState::DontCare => '-',
            };
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl Eq for Term {}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

/// Presentation order: fewer literals first, then the term whose fixed
/// positions reach higher bits first
impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        self.literal_count()
            .cmp(&other.literal_count())
            .then_with(|| other.interest_mask.cmp(&self.interest_mask))
            .then_with(|| other.set_mask.cmp(&self.set_mask))
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
