//! Synchronous simulation of a network of chips
//!
//! A [`Simulation`] wires chips together by pin name: every output pin drives
//! every pin of the same name on any chip. The network advances one clock
//! tick at a time through immutable [`State`] snapshots.
//!
//! # Examples
//!
//! ```
//! use pal_logic::{expr, Chip, Simulation};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let counter = Chip::from_equations("ctr", &["CLR"], [("Q", expr!(!"Q" * !"CLR"))])?;
//! let simulation = Simulation::new(vec![counter])?;
//!
//! let cleared = simulation.zero_state().with("CLR", true)?.next();
//! assert!(!cleared.flag("Q")?);
//!
//! let ticks: Vec<bool> = std::iter::successors(Some(cleared), |s| Some(s.next()))
//!     .skip(1)
//!     .take(4)
//!     .map(|s| s.flag("Q"))
//!     .collect::<Result<_, _>>()?;
//! assert_eq!(ticks, [true, false, true, false]);
//! # Ok(())
//! # }
//! ```

pub mod error;
mod state;

pub use error::SimulationError;
pub use state::State;

use crate::chip::Chip;
use log::debug;
use rand::RngCore;
use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::Arc;

/// Whether a pin occurrence is driven by its chip or read by it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinKind {
    /// The chip computes this pin
    Output,
    /// The chip reads this pin
    Input,
}

/// One occurrence of a pin name on one chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PinSlot {
    /// Index of the chip in the simulation
    pub chip: usize,
    /// Bit position in that chip's packed value
    pub bit: u32,
    /// Output or input
    pub kind: PinKind,
}

impl PinSlot {
    /// Single-bit mask for this slot
    pub fn mask(&self) -> u32 {
        1 << self.bit
    }
}

/// A network of chips sharing pins by name
#[derive(Debug, Clone)]
pub struct Simulation {
    chips: Arc<[Chip]>,
    // Slots in chip order, and within a chip outputs before inputs.
    pins: HashMap<Arc<str>, Arc<[PinSlot]>>,
    // fanout[chip][output bit]: every slot sharing that output's name
    fanout: Box<[Box<[Arc<[PinSlot]>]>]>,
}

impl Simulation {
    /// Wire `chips` together
    ///
    /// # Errors
    ///
    /// [`SimulationError::MultipleDrivers`] if two chips declare an output
    /// with the same name.
    pub fn new(chips: Vec<Chip>) -> Result<Self, SimulationError> {
        let mut slots: HashMap<Arc<str>, Vec<PinSlot>> = HashMap::new();
        for (index, chip) in chips.iter().enumerate() {
            let layout = chip.layout();
            for (bit, name) in layout.names().iter().enumerate() {
                let bit = bit as u32;
                let kind = if layout.is_output(bit) {
                    PinKind::Output
                } else {
                    PinKind::Input
                };
                slots.entry(Arc::clone(name)).or_default().push(PinSlot {
                    chip: index,
                    bit,
                    kind,
                });
            }
        }
        let pins: HashMap<Arc<str>, Arc<[PinSlot]>> = slots
            .into_iter()
            .map(|(name, slots)| (name, slots.into()))
            .collect();

        let mut fanout = Vec::with_capacity(chips.len());
        for chip in chips.iter() {
            let mut driven = Vec::with_capacity(chip.outputs().len());
            for output in chip.outputs() {
                let targets = &pins[output.name()];
                let drivers: Vec<usize> = targets
                    .iter()
                    .filter(|slot| slot.kind == PinKind::Output)
                    .map(|slot| slot.chip)
                    .collect();
                if drivers.len() > 1 {
                    return Err(SimulationError::MultipleDrivers {
                        pin: Arc::from(output.name()),
                        chips: drivers
                            .iter()
                            .map(|&i| Arc::from(chips[i].name()))
                            .collect(),
                    });
                }
                driven.push(Arc::clone(targets));
            }
            fanout.push(driven.into_boxed_slice());
        }

        debug!(
            "Simulation of {} chips with {} distinct pins",
            chips.len(),
            pins.len()
        );
        Ok(Simulation {
            chips: chips.into(),
            pins,
            fanout: fanout.into_boxed_slice(),
        })
    }

    /// The chips in wiring order
    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }

    /// Every occurrence of `pin`, in chip order
    pub fn slots(&self, pin: &str) -> Result<&[PinSlot], SimulationError> {
        self.pins
            .get(pin)
            .map(|slots| &slots[..])
            .ok_or_else(|| SimulationError::UnknownPin {
                pin: Arc::from(pin),
            })
    }

    /// The state with every pin low
    pub fn zero_state(&self) -> State<'_> {
        State::new(self, vec![0; self.chips.len()])
    }

    /// A random state with inputs consistent with the outputs driving them
    ///
    /// Each chip gets random bits within its own width, then every output is
    /// copied to the pins it drives. Pass a seeded generator for repeatable
    /// runs.
    pub fn random_state<R: RngCore + ?Sized>(&self, rng: &mut R) -> State<'_> {
        let mut values: Vec<u32> = self
            .chips
            .iter()
            .map(|chip| rng.next_u32() & chip.layout().mask())
            .collect();
        self.propagate(&mut values);
        State::new(self, values)
    }

    /// Copy every output bit of `values` to all slots sharing its name
    fn propagate(&self, values: &mut [u32]) {
        for (chip, driven) in self.fanout.iter().enumerate() {
            let outputs = values[chip];
            for (bit, targets) in driven.iter().enumerate() {
                let high = crate::util::is_set(outputs, bit as u32);
                for slot in targets.iter() {
                    set_slot(values, slot, high);
                }
            }
        }
    }

    /// Write the equations of every chip, each headed by its name
    pub fn write_expressions<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for chip in self.chips.iter() {
            writeln!(writer, "{}", chip.name())?;
            writeln!(writer)?;
            chip.write_expressions(writer)?;
            writeln!(writer)?;
            writeln!(writer, "--------------")?;
            writeln!(writer)?;
        }
        Ok(())
    }
}

fn set_slot(values: &mut [u32], slot: &PinSlot, high: bool) {
    if high {
        values[slot.chip] |= slot.mask();
    } else {
        values[slot.chip] &= !slot.mask();
    }
}
