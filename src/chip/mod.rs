//! Chips: named logic blocks with minimized output equations
//!
//! A [`Chip`] declares ordered input pins and one minimized [`Expression`]
//! per output pin. Its state is a single packed integer laid out by
//! [`BitLayout`]: outputs in the low bits, then inputs.
//!
//! # Examples
//!
//! ```
//! use pal_logic::{expr, Chip};
//!
//! # fn main() -> Result<(), pal_logic::ChipError> {
//! // 1-bit counter with synchronous clear
//! let chip = Chip::from_equations("ctr", &["CLR"], [("Q", expr!(!"Q" * !"CLR"))])?;
//! assert_eq!(chip.outputs()[0].display_with(chip.layout().names()).to_string(), "Q = /CLR /Q");
//! assert_eq!(chip.state(0b01), "Q /CLR");
//! # Ok(())
//! # }
//! ```

pub mod error;
mod layout;

pub use error::ChipError;
pub use layout::BitLayout;

use crate::bool_expr::BoolExpr;
use crate::config::PalConfig;
use crate::expression::Expression;
use crate::format::BitFormatter;
use crate::truth_table::TruthTable;
use log::debug;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

/// A programmable logic block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    name: Arc<str>,
    inputs: Arc<[Arc<str>]>,
    outputs: Arc<[Expression]>,
    layout: BitLayout,
    formatter: Option<BitFormatter>,
}

impl Chip {
    /// Create a chip from ready-made output expressions
    ///
    /// # Errors
    ///
    /// [`ChipError::TooManyOutputs`], [`ChipError::TooManyPins`] or
    /// [`ChipError::DuplicatePin`] if the declaration does not fit the default
    /// [`PalConfig`] limits.
    pub fn new<S: AsRef<str>>(
        name: &str,
        inputs: &[S],
        outputs: Vec<Expression>,
    ) -> Result<Self, ChipError> {
        Self::with_config(name, inputs, outputs, &PalConfig::default())
    }

    /// Create a chip, checking it against the limits in `config`
    pub fn with_config<S: AsRef<str>>(
        name: &str,
        inputs: &[S],
        outputs: Vec<Expression>,
        config: &PalConfig,
    ) -> Result<Self, ChipError> {
        check_limits(name, outputs.len(), inputs.len(), config)?;

        let inputs: Arc<[Arc<str>]> = inputs.iter().map(|s| Arc::from(s.as_ref())).collect();
        let names = outputs
            .iter()
            .map(|output| Arc::clone(output.name_arc()))
            .chain(inputs.iter().cloned())
            .collect();
        let layout = BitLayout::from_names(name, names, outputs.len())?;

        Ok(Chip {
            name: Arc::from(name),
            inputs,
            outputs: outputs.into(),
            layout,
            formatter: None,
        })
    }

    /// Build a chip from a function computing the next packed value
    ///
    /// `f` receives the packed `[outputs | inputs]` value and returns the next
    /// value; bit `j` of the result becomes output `j`.
    ///
    /// ```
    /// use pal_logic::Chip;
    ///
    /// # fn main() -> Result<(), pal_logic::ChipError> {
    /// let chip = Chip::from_operator("ctr", &["EN"], &["Q0", "Q1"], |v| {
    ///     let count = v & 0b11;
    ///     if v & 0b100 != 0 { (count + 1) & 0b11 } else { count }
    /// })?;
    /// assert_eq!(chip.compute(0b101), 0b10);
    /// assert_eq!(chip.compute(0b001), 0b01);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_operator<S, T, F>(
        name: &str,
        inputs: &[S],
        outputs: &[T],
        f: F,
    ) -> Result<Self, ChipError>
    where
        S: AsRef<str>,
        T: AsRef<str>,
        F: Fn(u32) -> u32,
    {
        Self::from_operator_with_config(name, inputs, outputs, f, &PalConfig::default())
    }

    /// [`from_operator`](Self::from_operator) with explicit limits
    pub fn from_operator_with_config<S, T, F>(
        name: &str,
        inputs: &[S],
        outputs: &[T],
        f: F,
        config: &PalConfig,
    ) -> Result<Self, ChipError>
    where
        S: AsRef<str>,
        T: AsRef<str>,
        F: Fn(u32) -> u32,
    {
        check_limits(name, outputs.len(), inputs.len(), config)?;
        let inputs: Vec<&str> = inputs.iter().map(AsRef::as_ref).collect();
        let outputs: Vec<&str> = outputs.iter().map(AsRef::as_ref).collect();

        let expressions = TruthTable::create_many(&inputs, &outputs, f)?
            .iter()
            .map(|table| table.optimise_with(config))
            .collect::<Result<Vec<_>, _>>()?;
        let chip = Self::with_config(name, &inputs, expressions, config)?;
        debug!("Built chip {} with {} product terms", chip.name, chip.term_count());
        Ok(chip)
    }

    /// Build a chip with one output per `(name, expression)` equation
    ///
    /// Expressions may refer to any pin of the chip, outputs included, by
    /// name.
    ///
    /// # Errors
    ///
    /// Besides the limit checks, [`ChipError::Table`] if an expression uses a
    /// name that is not a pin of this chip.
    pub fn from_equations<S, N, I>(
        name: &str,
        inputs: &[S],
        equations: I,
    ) -> Result<Self, ChipError>
    where
        S: AsRef<str>,
        N: AsRef<str>,
        I: IntoIterator<Item = (N, BoolExpr)>,
    {
        Self::from_equations_with_config(name, inputs, equations, &PalConfig::default())
    }

    /// [`from_equations`](Self::from_equations) with explicit limits
    pub fn from_equations_with_config<S, N, I>(
        name: &str,
        inputs: &[S],
        equations: I,
        config: &PalConfig,
    ) -> Result<Self, ChipError>
    where
        S: AsRef<str>,
        N: AsRef<str>,
        I: IntoIterator<Item = (N, BoolExpr)>,
    {
        let equations: Vec<(N, BoolExpr)> = equations.into_iter().collect();
        check_limits(name, equations.len(), inputs.len(), config)?;

        let outputs: Vec<&str> = equations.iter().map(|(output, _)| output.as_ref()).collect();
        let layout = BitLayout::new(name, &outputs, inputs)?;

        let expressions = equations
            .iter()
            .map(|(output, expr)| -> Result<Expression, ChipError> {
                let table = TruthTable::from_expr(output.as_ref(), expr, layout.names())?;
                Ok(table.optimise_with(config)?)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let chip = Self::with_config(name, inputs, expressions, config)?;
        debug!("Built chip {} with {} product terms", chip.name, chip.term_count());
        Ok(chip)
    }

    /// Use `formatter` to render packed values in [`state`](Self::state)
    pub fn with_formatter(mut self, formatter: BitFormatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Chip name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Input pin names in declaration order
    pub fn inputs(&self) -> &[Arc<str>] {
        &self.inputs
    }

    /// Output expressions in declaration order
    pub fn outputs(&self) -> &[Expression] {
        &self.outputs
    }

    /// The packed value layout
    pub fn layout(&self) -> &BitLayout {
        &self.layout
    }

    /// The formatter set with [`with_formatter`](Self::with_formatter)
    pub fn formatter(&self) -> Option<&BitFormatter> {
        self.formatter.as_ref()
    }

    /// Total product terms over all outputs
    pub fn term_count(&self) -> usize {
        self.outputs.iter().map(Expression::term_count).sum()
    }

    /// Evaluate every output against `value`
    ///
    /// Returns the output bits only; input positions are zero.
    pub fn compute(&self, value: u32) -> u32 {
        self.outputs
            .iter()
            .enumerate()
            .filter(|(_, output)| output.evaluate(value))
            .fold(0, |acc, (bit, _)| acc | 1 << bit)
    }

    /// Render a packed value
    ///
    /// Without a formatter every pin prints as `NAME` when set or `/NAME`
    /// when clear, outputs first, separated by spaces.
    pub fn state(&self, value: u32) -> String {
        match &self.formatter {
            Some(formatter) => formatter.render(value),
            None => self
                .layout
                .names()
                .iter()
                .enumerate()
                .map(|(bit, name)| {
                    if crate::util::is_set(value, bit as u32) {
                        name.to_string()
                    } else {
                        format!("/{}", name)
                    }
                })
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Write every output equation in registered PAL source form
    ///
    /// Each output gets a term count comment, a note when the count only
    /// fits some 22V10 macrocells, then `NAME.R =` followed by one product
    /// per line.
    pub fn write_expressions<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let names = self.layout.names();
        for output in self.outputs.iter() {
            let terms = output.term_count();
            if terms == 1 {
                writeln!(writer, "; 1 term")?;
            } else {
                writeln!(writer, "; {} terms", terms)?;
            }
            if let Some(note) = macrocell_note(terms) {
                writeln!(writer, "; {}", note)?;
            }

            writeln!(writer, "{}.R =", output.name())?;
            for (i, term) in output.terms().iter().enumerate() {
                let prefix = if i == 0 { "      " } else { "    + " };
                writeln!(writer, "{}{}", prefix, term.display_with(names))?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }

    /// [`write_expressions`](Self::write_expressions) into a string
    pub fn expressions_string(&self) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail and every name is UTF-8.
        let _ = self.write_expressions(&mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// [`write_expressions`](Self::write_expressions) into a file
    pub fn write_expressions_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_expressions(&mut writer)?;
        writer.flush()
    }
}

fn check_limits(
    chip: &str,
    outputs: usize,
    inputs: usize,
    config: &PalConfig,
) -> Result<(), ChipError> {
    if outputs > config.max_outputs {
        return Err(ChipError::TooManyOutputs {
            chip: Arc::from(chip),
            count: outputs,
            max: config.max_outputs,
        });
    }
    let max_pins = config.max_pins.min(BitLayout::MAX_WIDTH);
    if outputs + inputs > max_pins {
        return Err(ChipError::TooManyPins {
            chip: Arc::from(chip),
            count: outputs + inputs,
            max: max_pins,
        });
    }
    Ok(())
}

/// Which 22V10 macrocells can hold an output with `terms` product terms
fn macrocell_note(terms: usize) -> Option<&'static str> {
    match terms {
        0..=8 => None,
        9..=10 => Some("22V10 pins 15-22 only"),
        11..=12 => Some("22V10 pins 16-21 only"),
        13..=14 => Some("22V10 pins 17-20 only"),
        15..=16 => Some("22V10 pins 18-19 only"),
        _ => Some("***** cannot achieve *****"),
    }
}

impl fmt::Display for Chip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
