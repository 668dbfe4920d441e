//! Display configuration.
//!
//! Plain data with builder-style setters, optionally (de)serializable so
//! firmware can keep it alongside the rest of its settings.
//!
//! # Example
//!
//! ```rust
//! use rs_max7219::config::DisplayConfig;
//!
//! // Use defaults
//! let config = DisplayConfig::default();
//! assert_eq!(config.num_chips, 1);
//!
//! // Or customize
//! let config = DisplayConfig::default()
//!     .with_num_chips(4)
//!     .with_intensity(6)
//!     .with_update_interval_ms(500);
//! ```

use crate::registers::MAX_INTENSITY;
use crate::traits::{BitOrder, DEFAULT_UPDATE_INTERVAL_MS};

/// Configuration of one display chain.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Number of chained chips (at least one).
    pub num_chips: usize,
    /// Brightness, 0 (dimmest) to 15 (brightest).
    pub intensity: u8,
    /// Milliseconds between update ticks.
    pub update_interval_ms: u32,
    /// Bit order the bus transport shifts in. `None` trusts the
    /// transport's own [`FrameTransmitter::bit_order`](crate::traits::FrameTransmitter::bit_order).
    pub bit_order: Option<BitOrder>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            num_chips: 1,
            intensity: MAX_INTENSITY,
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
            bit_order: None,
        }
    }
}

impl DisplayConfig {
    /// Set the number of chained chips
    pub fn with_num_chips(mut self, num_chips: usize) -> Self {
        self.num_chips = num_chips;
        self
    }

    /// Set the intensity (clamped to 0..=15)
    pub fn with_intensity(mut self, intensity: u8) -> Self {
        self.intensity = intensity.min(MAX_INTENSITY);
        self
    }

    /// Set the update interval
    pub fn with_update_interval_ms(mut self, ms: u32) -> Self {
        self.update_interval_ms = ms;
        self
    }

    /// Override the transport bit order
    pub fn with_bit_order(mut self, bit_order: BitOrder) -> Self {
        self.bit_order = Some(bit_order);
        self
    }

    /// Returns a copy with every field forced into its valid range.
    ///
    /// Zero chips become one, intensity is capped at 15 and a zero
    /// interval becomes the default.
    pub fn normalized(&self) -> Self {
        Self {
            num_chips: self.num_chips.max(1),
            intensity: self.intensity.min(MAX_INTENSITY),
            update_interval_ms: if self.update_interval_ms == 0 {
                DEFAULT_UPDATE_INTERVAL_MS
            } else {
                self.update_interval_ms
            },
            bit_order: self.bit_order,
        }
    }
}

/// Parse a display configuration from JSON bytes.
///
/// Missing fields take their defaults; values are normalized.
///
/// # Example
///
/// ```
/// use rs_max7219::config::parse_config;
/// use rs_max7219::traits::BitOrder;
///
/// let json = br#"{"num_chips": 3, "intensity": 40, "bit_order": "lsbfirst"}"#;
/// let config = parse_config(json).unwrap();
/// assert_eq!(config.num_chips, 3);
/// assert_eq!(config.intensity, 15);
/// assert_eq!(config.bit_order, Some(BitOrder::LsbFirst));
/// assert_eq!(config.update_interval_ms, 1000);
/// ```
#[cfg(feature = "serde-json-core")]
pub fn parse_config(json: &[u8]) -> Option<DisplayConfig> {
    serde_json_core::from_slice::<DisplayConfig>(json)
        .ok()
        .map(|(config, _)| config.normalized())
}
