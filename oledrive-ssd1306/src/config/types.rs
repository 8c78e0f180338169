//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Factory I2C address (SA0 low)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Default text scale for renderers
pub const DEFAULT_FONT_SCALE: u8 = 1;

/// Foreground pixel value handed to renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DrawColor {
    /// Pixel cleared (black)
    Off = 0,
    /// Pixel set (white)
    #[default]
    On = 1,
}

/// Per-panel session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionConfig {
    /// 7-bit I2C address
    pub address: u8,
    /// Initial draw color
    pub draw_color: DrawColor,
    /// Initial font scale
    pub font_scale: u8,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            draw_color: DrawColor::On,
            font_scale: DEFAULT_FONT_SCALE,
        }
    }
}
