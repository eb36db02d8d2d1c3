//! Crate-wide error type
//!
//! Each module reports its own error enum. [`PalError`] wraps all of them so
//! code working across layers (parse an equation, build a chip, simulate it)
//! can use `?` throughout.

use std::fmt;
use std::io;

use crate::bool_expr::{ExprError, ParseBoolExprError};
use crate::chip::ChipError;
use crate::format::FormatError;
use crate::simulation::SimulationError;
use crate::truth_table::{MinimizationError, TableError};

/// Any error raised by this crate
#[derive(Debug)]
pub enum PalError {
    /// Malformed template or missing bit name
    Format(FormatError),
    /// Boolean expression syntax error
    Parse(ParseBoolExprError),
    /// Expression variable not among the input bits
    Expr(ExprError),
    /// Truth table could not be built
    Table(TableError),
    /// Minimizer produced a wrong result
    Minimization(MinimizationError),
    /// Chip declaration rejected
    Chip(ChipError),
    /// Simulation wiring or pin query failed
    Simulation(SimulationError),
    /// I/O failure while writing output
    Io(io::Error),
}

impl fmt::Display for PalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PalError::Format(e) => write!(f, "{}", e),
            PalError::Parse(e) => write!(f, "{}", e),
            PalError::Expr(e) => write!(f, "{}", e),
            PalError::Table(e) => write!(f, "{}", e),
            PalError::Minimization(e) => write!(f, "{}", e),
            PalError::Chip(e) => write!(f, "{}", e),
            PalError::Simulation(e) => write!(f, "{}", e),
            PalError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PalError::Format(e) => Some(e),
            PalError::Parse(e) => Some(e),
            PalError::Expr(e) => Some(e),
            PalError::Table(e) => Some(e),
            PalError::Minimization(e) => Some(e),
            PalError::Chip(e) => Some(e),
            PalError::Simulation(e) => Some(e),
            PalError::Io(e) => Some(e),
        }
    }
}

macro_rules! impl_from {
    ($($variant:ident($err:ty)),* $(,)?) => {
        $(
            impl From<$err> for PalError {
                fn from(err: $err) -> Self {
                    PalError::$variant(err)
                }
            }
        )*
    };
}

impl_from!(
    Format(FormatError),
    Parse(ParseBoolExprError),
    Expr(ExprError),
    Table(TableError),
    Minimization(MinimizationError),
    Chip(ChipError),
    Simulation(SimulationError),
    Io(io::Error),
);

impl From<PalError> for io::Error {
    fn from(err: PalError) -> Self {
        match err {
            PalError::Format(e) => e.into(),
            PalError::Parse(e) => e.into(),
            PalError::Expr(e) => e.into(),
            PalError::Table(e) => e.into(),
            PalError::Minimization(e) => e.into(),
            PalError::Chip(e) => e.into(),
            PalError::Simulation(e) => e.into(),
            PalError::Io(e) => e,
        }
    }
}
