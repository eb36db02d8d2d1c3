//! Immutable simulation snapshots

use super::{set_slot, PinKind, Simulation, SimulationError};
use crate::util::{is_set, low_mask};
use log::trace;
use std::fmt;
use std::sync::Arc;

/// The packed value of every chip at one instant
///
/// Every transition returns a new `State`; earlier snapshots stay valid and
/// unchanged.
#[derive(Clone)]
pub struct State<'s> {
    simulation: &'s Simulation,
    values: Arc<[u32]>,
}

impl<'s> State<'s> {
    pub(super) fn new(simulation: &'s Simulation, values: Vec<u32>) -> Self {
        State {
            simulation,
            values: values.into(),
        }
    }

    /// The simulation this state belongs to
    pub fn simulation(&self) -> &'s Simulation {
        self.simulation
    }

    /// Advance one clock tick
    ///
    /// Every chip computes its outputs from this state's values, then each
    /// new output is copied to every pin sharing its name. Inputs that no
    /// output drives read low afterwards, so external stimuli set with
    /// [`with`](Self::with) last for a single tick.
    pub fn next(&self) -> State<'s> {
        let mut values: Vec<u32> = self
            .simulation
            .chips
            .iter()
            .zip(self.values.iter())
            .map(|(chip, &value)| chip.compute(value))
            .collect();
        self.simulation.propagate(&mut values);
        trace!("tick {:x?} -> {:x?}", self.values, values);
        State::new(self.simulation, values)
    }

    /// Advance `ticks` clock ticks
    pub fn run(&self, ticks: usize) -> State<'s> {
        (0..ticks).fold(self.clone(), |state, _| state.next())
    }

    /// Force every pin named `pin` high or low, on every chip
    ///
    /// Takes effect immediately, independent of the clock.
    pub fn with(&self, pin: &str, flag: bool) -> Result<State<'s>, SimulationError> {
        let mut values = self.values.to_vec();
        self.apply(&mut values, pin, flag)?;
        Ok(State::new(self.simulation, values))
    }

    /// Drive the pin family `prefix0..prefix{count-1}` with the bits of
    /// `value`, lowest bit on `prefix0`
    pub fn with_number(
        &self,
        prefix: &str,
        count: usize,
        value: u32,
    ) -> Result<State<'s>, SimulationError> {
        let mut values = self.values.to_vec();
        for i in 0..count {
            let high = i < u32::BITS as usize && is_set(value, i as u32);
            self.apply(&mut values, &format!("{}{}", prefix, i), high)?;
        }
        Ok(State::new(self.simulation, values))
    }

    fn apply(&self, values: &mut [u32], pin: &str, flag: bool) -> Result<(), SimulationError> {
        for slot in self.simulation.slots(pin)? {
            set_slot(values, slot, flag);
        }
        Ok(())
    }

    /// Level of `pin`, read from its first occurrence in chip order
    ///
    /// Only meaningful for pins with one logical value across the network,
    /// which holds after a tick for every driven pin.
    pub fn flag(&self, pin: &str) -> Result<bool, SimulationError> {
        let slot = self.simulation.slots(pin)?[0];
        Ok(self.values[slot.chip] & slot.mask() != 0)
    }

    /// `" NAME"` when `pin` is high, `"/NAME"` when low
    pub fn formatted_flag(&self, pin: &str) -> Result<String, SimulationError> {
        let marker = if self.flag(pin)? { ' ' } else { '/' };
        Ok(format!("{}{}", marker, pin))
    }

    /// Read `count` consecutive outputs as an unsigned number
    ///
    /// `first_pin` is the lowest bit; the following outputs of the same
    /// chip supply the higher bits, so a family such as `A0..A7` from
    /// [`bit_range`](crate::util::bit_range) reads back as one value.
    ///
    /// # Errors
    ///
    /// [`SimulationError::NotAnOutput`] if no chip drives `first_pin`,
    /// [`SimulationError::NumberOutOfRange`] if fewer than `count` outputs
    /// start at it.
    pub fn number(&self, first_pin: &str, count: usize) -> Result<u32, SimulationError> {
        let slot = self
            .simulation
            .slots(first_pin)?
            .iter()
            .find(|slot| slot.kind == PinKind::Output)
            .ok_or_else(|| SimulationError::NotAnOutput {
                pin: Arc::from(first_pin),
            })?;

        let outputs = self.simulation.chips[slot.chip].layout().output_count();
        let available = outputs - slot.bit as usize;
        if count > available {
            return Err(SimulationError::NumberOutOfRange {
                pin: Arc::from(first_pin),
                count,
                available,
            });
        }
        Ok((self.values[slot.chip] >> slot.bit) & low_mask(count))
    }

    /// Packed value of chip `chip`
    ///
    /// # Panics
    ///
    /// Panics if `chip` is not a chip index of the simulation.
    pub fn value(&self, chip: usize) -> u32 {
        self.values[chip]
    }

    /// Packed values of every chip, in chip order
    pub fn values(&self) -> &[u32] {
        &self.values
    }
}

impl PartialEq for State<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.simulation, other.simulation) && self.values == other.values
    }
}

impl Eq for State<'_> {}

impl fmt::Debug for State<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("values", &self.values)
            .finish()
    }
}

/// One line per chip: its name and its rendered state
impl fmt::Display for State<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (chip, value) in self.simulation.chips.iter().zip(self.values.iter()) {
            writeln!(f, "{} {}", chip.name(), chip.state(*value))?;
        }
        Ok(())
    }
}
