//! Rendering of packed chip values
//!
//! A [`BitFormatter`] turns the packed `[outputs | inputs]` integer of a chip
//! into a short human-readable line, driven by a template such as
//! `"[x0-7] [8,AC] [9,AB]"`:
//!
//! - `[bit,NAME]` renders ` NAME` when the bit is set and `/NAME` when clear
//! - `[from-to]` renders the bit field as a zero-padded decimal number
//! - `[xfrom-to]` renders the bit field as zero-padded hex
//! - anything else is copied verbatim

mod error;

pub use error::FormatError;

use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Literal(Arc<str>),
    Flag {
        mask: u32,
        name: Arc<str>,
    },
    Number {
        offset: u32,
        mask: u32,
        digits: usize,
        hex: bool,
    },
}

/// Template-driven formatter for packed pin values
///
/// # Examples
///
/// ```
/// use pal_logic::BitFormatter;
///
/// # fn main() -> Result<(), pal_logic::FormatError> {
/// let formatter = BitFormatter::parse("[x0-7] [8,AC] [9,AB]")?;
/// assert_eq!(formatter.render(0x2a5), "a5 /AC  AB");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitFormatter {
    template: Arc<str>,
    parts: Arc<[Part]>,
}

impl BitFormatter {
    /// Parse a template
    pub fn parse(template: &str) -> Result<Self, FormatError> {
        let invalid = |position: usize, reason: &'static str| FormatError::InvalidTemplate {
            template: Arc::from(template),
            position,
            reason,
        };

        let mut parts = Vec::new();
        let mut rest = 0;
        while rest < template.len() {
            let open = template[rest..].find('[').map(|i| i + rest);
            let literal = &template[rest..open.unwrap_or(template.len())];
            if !literal.is_empty() {
                parts.push(Part::Literal(Arc::from(literal)));
            }
            let open = match open {
                Some(open) => open,
                None => break,
            };

            let close = template[open + 1..]
                .find(']')
                .map(|i| i + open + 1)
                .ok_or_else(|| invalid(open, "unterminated field"))?;
            let field = &template[open + 1..close];

            if let Some((bit, name)) = field.split_once(',') {
                let bit = parse_bit(bit).ok_or_else(|| invalid(open, "invalid flag bit"))?;
                if name.is_empty() {
                    return Err(invalid(open, "flag has no name"));
                }
                parts.push(Part::Flag {
                    mask: 1 << bit,
                    name: Arc::from(name),
                });
            } else if let Some((from, to)) = field.split_once('-') {
                let (hex, from) = match from.strip_prefix('x') {
                    Some(from) => (true, from),
                    None => (false, from),
                };
                let from = parse_bit(from).ok_or_else(|| invalid(open, "invalid field start"))?;
                let to = parse_bit(to).ok_or_else(|| invalid(open, "invalid field end"))?;
                if to < from {
                    return Err(invalid(open, "field ends before it starts"));
                }
                let width = to - from + 1;
                let mask = ((1u64 << width) - 1) as u32;
                let digits = if hex {
                    width.div_ceil(4) as usize
                } else {
                    mask.to_string().len()
                };
                parts.push(Part::Number {
                    offset: from,
                    mask,
                    digits,
                    hex,
                });
            } else {
                return Err(invalid(open, "expected `[bit,NAME]` or `[from-to]`"));
            }

            rest = close + 1;
        }

        Ok(BitFormatter {
            template: Arc::from(template),
            parts: parts.into(),
        })
    }

    /// The template this formatter was parsed from
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Render a packed value
    pub fn render(&self, value: u32) -> String {
        let mut out = String::new();
        for part in self.parts.iter() {
            match part {
                Part::Literal(text) => out.push_str(text),
                Part::Flag { mask, name } => {
                    out.push(if value & mask != 0 { ' ' } else { '/' });
                    out.push_str(name);
                }
                Part::Number {
                    offset,
                    mask,
                    digits,
                    hex,
                } => {
                    let field = (value >> offset) & mask;
                    if *hex {
                        out.push_str(&format!("{:0width$x}", field, width = *digits));
                    } else {
                        out.push_str(&format!("{:0width$}", field, width = *digits));
                    }
                }
            }
        }
        out
    }
}

fn parse_bit(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok().filter(|bit| *bit < 32)
}

impl fmt::Display for BitFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.template)
    }
}
