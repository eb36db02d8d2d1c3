//! Configuration shared by chip construction and minimization

/// Limits and checks applied when building chips and minimizing tables
///
/// The defaults describe a 22V10 class device: at most 10 registered outputs
/// and 21 pins in total, so a chip's packed value always fits a signed 32-bit
/// integer with headroom.
///
/// # Examples
///
/// ```
/// use pal_logic::PalConfig;
///
/// let mut config = PalConfig::default();
/// assert_eq!(config.max_outputs, 10);
/// assert_eq!(config.max_pins, 21);
///
/// // Skip the exhaustive result check for large tables
/// config.verify = false;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalConfig {
    /// Largest number of outputs a chip may declare
    ///
    /// **Default:** `10`
    pub max_outputs: usize,

    /// Largest number of pins (outputs plus inputs) a chip may declare
    ///
    /// Values above [`BitLayout::MAX_WIDTH`](crate::BitLayout::MAX_WIDTH)
    /// act as that width.
    ///
    /// **Default:** `21`
    pub max_pins: usize,

    /// Check every minimized expression against its source table
    ///
    /// The check costs one evaluation per table entry.
    ///
    /// **Default:** `true`
    pub verify: bool,
}

impl Default for PalConfig {
    fn default() -> Self {
        PalConfig {
            max_outputs: 10,
            max_pins: 21,
            verify: true,
        }
    }
}

impl PalConfig {
    /// Create a configuration with the default limits
    pub fn new() -> Self {
        Self::default()
    }
}
