//! Small helpers for building generator functions over packed values

use std::ops::Range;

/// Names `prefix{start}` to `prefix{start + count - 1}`
///
/// Multi-bit values read back with
/// [`State::number`](crate::State::number) use this naming.
///
/// ```
/// use pal_logic::util::bit_range;
///
/// assert_eq!(bit_range("A", 2, 3), ["A2", "A3", "A4"]);
/// ```
pub fn bit_range(prefix: &str, start: usize, count: usize) -> Vec<String> {
    (start..start + count)
        .map(|i| format!("{}{}", prefix, i))
        .collect()
}

/// Whether bit `bit` of `value` is set
///
/// Positions past the width of `u32` read as clear.
pub fn is_set(value: u32, bit: u32) -> bool {
    value.checked_shr(bit).map_or(false, |v| v & 1 != 0)
}

/// The `width`-bit field of `value` starting at bit `offset`
///
/// ```
/// use pal_logic::util::field;
///
/// assert_eq!(field(0b1101_0110, 2, 4), 0b0101);
/// ```
pub fn field(value: u32, offset: u32, width: u32) -> u32 {
    value.checked_shr(offset).unwrap_or(0) & low_mask(width as usize)
}

/// Whether the `width`-bit field at `offset` lies in `range`
///
/// ```
/// use pal_logic::util::is_between;
///
/// // Horizontal counter in bits 4..12, visible for 32..288
/// assert!(is_between(100 << 4, 4, 8, 32..288));
/// assert!(!is_between(20 << 4, 4, 8, 32..288));
/// ```
pub fn is_between(value: u32, offset: u32, width: u32, range: Range<u32>) -> bool {
    range.contains(&field(value, offset, width))
}

/// Whether the `width`-bit field at `offset` equals `desired`
pub fn is_equal(value: u32, offset: u32, width: u32, desired: u32) -> bool {
    field(value, offset, width) == desired
}

/// Mask of the lowest `bits` bits
pub(crate) fn low_mask(bits: usize) -> u32 {
    if bits >= u32::BITS as usize {
        u32::MAX
    } else {
        (1u32 << bits) - 1
    }
}
