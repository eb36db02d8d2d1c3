//! # PAL Logic
//!
//! Derive sum-of-products equations for programmable logic devices from truth
//! tables, then check them by simulating a network of chips before burning
//! any hardware.
//!
//! ## Overview
//!
//! - [`Term`]: one product of literals over an ordered tri-state bit vector,
//!   with containment and matching tests
//! - [`TruthTable`]: the complete input to output mapping of one signal, and
//!   the greedy minimizer turning it into an [`Expression`]
//! - [`BoolExpr`]: boolean expressions, parsed or built with operators or the
//!   [`expr!`] macro, used to generate truth tables
//! - [`Chip`]: named pins plus one minimized expression per output
//! - [`Simulation`]: chips wired together by pin name, advanced one clock
//!   tick at a time through immutable [`State`] snapshots
//!
//! ## Minimizing a function
//!
//! ```
//! use pal_logic::TruthTable;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Majority of three inputs
//! let table = TruthTable::create("M", 3, |i| i.count_ones() >= 2)?;
//! let expression = table.optimise()?;
//!
//! assert_eq!(
//!     expression.display_with(&["A", "B", "C"]).to_string(),
//!     "M = C B + C A + B A"
//! );
//! for i in 0..8 {
//!     assert_eq!(expression.evaluate(i), table.get(i));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The minimizer is greedy: every result reproduces its table exactly, but it
//! does not search for the smallest possible cover.
//!
//! ## Building and simulating chips
//!
//! ```
//! use pal_logic::{expr, util::bit_range, Chip, Simulation};
//!
//! # fn main() -> Result<(), pal_logic::PalError> {
//! // A 4-bit counter with enable, and a chip decoding count == 9
//! let counter = Chip::from_operator("ctr", &["EN"], &bit_range("C", 0, 4), |v| {
//!     let count = v & 0xf;
//!     if v & 0x10 != 0 { (count + 1) & 0xf } else { count }
//! })?;
//! let decode = Chip::from_equations(
//!     "dec",
//!     &bit_range("C", 0, 4),
//!     [("NINE", expr!("C0" * !"C1" * !"C2" * "C3"))],
//! )?;
//!
//! let simulation = Simulation::new(vec![counter, decode])?;
//! let mut state = simulation.zero_state();
//! for _ in 0..9 {
//!     state = state.with("EN", true)?.next();
//! }
//! assert_eq!(state.number("C0", 4)?, 9);
//!
//! // The decoder sees the count one tick later.
//! assert!(!state.flag("NINE")?);
//! assert!(state.next().flag("NINE")?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Packed values
//!
//! A chip's state is one integer: outputs occupy the low bits in declaration
//! order, inputs follow. Truth tables for a chip are indexed the same way, so
//! a generator function and the simulator always agree on which bit is which
//! pin. See [`BitLayout`].

// Lets the `expr!` macro name `::pal_logic` from inside this crate.
extern crate self as pal_logic;

pub mod bool_expr;
pub mod chip;
pub mod config;
pub mod error;
pub mod expression;
pub mod format;
pub mod simulation;
pub mod term;
pub mod truth_table;
pub mod util;

pub use bool_expr::{BoolExpr, BoundExpr, ExprError, ExprNode, ParseBoolExprError};
pub use chip::{BitLayout, Chip, ChipError};
pub use config::PalConfig;
pub use error::PalError;
pub use expression::Expression;
pub use format::{BitFormatter, FormatError};
pub use simulation::{PinKind, PinSlot, Simulation, SimulationError, State};
pub use term::{BitState, Term};
pub use truth_table::{MinimizationError, TableError, TruthTable};

/// Build a [`BoolExpr`] from PAL-style operator syntax
///
/// Identifiers refer to `BoolExpr` bindings in scope, string literals create
/// variables and `0`/`1` are constants. `!`, `~` or `/` negate, `*` or `&`
/// is AND and `+` or `|` is OR, with the usual precedence.
///
/// ```
/// use pal_logic::{expr, BoolExpr};
///
/// let q = BoolExpr::variable("Q");
/// let next = expr!(q * !"CLR" + "SET");
/// assert!(next.equivalent_to(&BoolExpr::parse("Q * /CLR + SET").unwrap()));
/// ```
pub use pal_logic_macros::expr;
