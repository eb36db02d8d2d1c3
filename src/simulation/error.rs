//! Error types for simulations

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors building or querying a [`Simulation`](super::Simulation)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// No chip has a pin with this name
    UnknownPin {
        /// The requested pin
        pin: Arc<str>,
    },
    /// The pin exists but no chip drives it as an output
    NotAnOutput {
        /// The requested pin
        pin: Arc<str>,
    },
    /// A multi-bit read runs past the outputs of the owning chip
    NumberOutOfRange {
        /// First pin of the read
        pin: Arc<str>,
        /// Requested width
        count: usize,
        /// Outputs available from `pin` upwards
        available: usize,
    },
    /// More than one chip drives the same pin name
    MultipleDrivers {
        /// The contested pin
        pin: Arc<str>,
        /// Names of the chips driving it, in chip order
        chips: Vec<Arc<str>>,
    },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::UnknownPin { pin } => write!(f, "Unknown pin '{}'", pin),
            SimulationError::NotAnOutput { pin } => {
                write!(f, "Pin '{}' is not an output of any chip", pin)
            }
            SimulationError::NumberOutOfRange {
                pin,
                count,
                available,
            } => write!(
                f,
                "Cannot read {} bits from output '{}': only {} outputs follow it",
                count, pin, available
            ),
            SimulationError::MultipleDrivers { pin, chips } => {
                let chips: Vec<&str> = chips.iter().map(|c| c.as_ref()).collect();
                write!(
                    f,
                    "Pin '{}' is driven by more than one chip: {}",
                    pin,
                    chips.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<SimulationError> for io::Error {
    fn from(err: SimulationError) -> Self {
        let kind = match err {
            SimulationError::UnknownPin { .. } => io::ErrorKind::NotFound,
            _ => io::ErrorKind::InvalidInput,
        };
        io::Error::new(kind, err)
    }
}
