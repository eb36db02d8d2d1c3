//! Bit layout of a chip's packed value

use super::error::ChipError;
use std::collections::HashMap;
use std::sync::Arc;

/// Position of every pin in a chip's packed `[outputs | inputs]` value
///
/// Outputs take the low bits in declaration order, inputs follow. Built once
/// per chip and shared by truth-table generation and simulation.
///
/// ```
/// use pal_logic::BitLayout;
///
/// let layout = BitLayout::new("ctr", &["Q0", "Q1"], &["CLR"]).unwrap();
/// assert_eq!(layout.position("Q1"), Some(1));
/// assert_eq!(layout.position("CLR"), Some(2));
/// assert!(layout.is_output(1));
/// assert!(!layout.is_output(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitLayout {
    names: Arc<[Arc<str>]>,
    positions: HashMap<Arc<str>, u32>,
    output_count: usize,
}

impl BitLayout {
    /// Most pins a packed `u32` value can hold, whatever the configured limit
    pub const MAX_WIDTH: usize = u32::BITS as usize;

    /// Lay out `outputs` then `inputs`
    ///
    /// # Errors
    ///
    /// [`ChipError::DuplicatePin`] for a repeated name,
    /// [`ChipError::TooManyPins`] for more than [`Self::MAX_WIDTH`] pins.
    pub fn new<S, T>(chip: &str, outputs: &[S], inputs: &[T]) -> Result<Self, ChipError>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let names: Vec<Arc<str>> = outputs
            .iter()
            .map(|name| Arc::from(name.as_ref()))
            .chain(inputs.iter().map(|name| Arc::from(name.as_ref())))
            .collect();
        Self::from_names(chip, names, outputs.len())
    }

    pub(crate) fn from_names(
        chip: &str,
        names: Vec<Arc<str>>,
        output_count: usize,
    ) -> Result<Self, ChipError> {
        if names.len() > Self::MAX_WIDTH {
            return Err(ChipError::TooManyPins {
                chip: Arc::from(chip),
                count: names.len(),
                max: Self::MAX_WIDTH,
            });
        }
        let mut positions = HashMap::with_capacity(names.len());
        for (bit, name) in names.iter().enumerate() {
            if positions.insert(Arc::clone(name), bit as u32).is_some() {
                return Err(ChipError::DuplicatePin {
                    chip: Arc::from(chip),
                    pin: Arc::clone(name),
                });
            }
        }
        Ok(BitLayout {
            names: names.into(),
            positions,
            output_count,
        })
    }

    /// Bit position of a pin
    pub fn position(&self, name: &str) -> Option<u32> {
        self.positions.get(name).copied()
    }

    /// Pin names in bit order
    pub fn names(&self) -> &[Arc<str>] {
        &self.names
    }

    /// Number of output pins
    pub fn output_count(&self) -> usize {
        self.output_count
    }

    /// Number of input pins
    pub fn input_count(&self) -> usize {
        self.names.len() - self.output_count
    }

    /// Total number of pins
    pub fn width(&self) -> usize {
        self.names.len()
    }

    /// Mask covering every pin
    pub fn mask(&self) -> u32 {
        crate::util::low_mask(self.width())
    }

    /// Mask covering the output pins
    pub fn output_mask(&self) -> u32 {
        crate::util::low_mask(self.output_count)
    }

    /// Whether bit position `bit` belongs to an output
    pub fn is_output(&self, bit: u32) -> bool {
        (bit as usize) < self.output_count
    }
}
