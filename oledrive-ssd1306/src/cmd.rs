//! SSD1306 command opcodes
//!
//! Values from the controller datasheet. Parameters noted in the comments
//! are the ones used by the bring-up sequence.

/// Panel width in pixels
pub const WIDTH: usize = 128;
/// Panel height in pixels
pub const HEIGHT: usize = 64;
/// Number of 8-row pages
pub const PAGES: usize = HEIGHT / 8;

/// Control bytes sent before the payload of each I2C write
pub mod control {
    /// Every following byte is a command
    pub const CMD_STREAM: u8 = 0x00;
    /// Only the next byte is a command
    pub const CMD_SINGLE: u8 = 0x80;
    /// Every following byte is display RAM data
    pub const DATA_STREAM: u8 = 0x40;
}

// Fundamental
pub const SET_CONTRAST: u8 = 0x81; // 0x7F
pub const RESUME_RAM_CONTENT_DISPLAY: u8 = 0xA4;
pub const DISPLAY_OFF: u8 = 0xAE;
pub const DISPLAY_ON: u8 = 0xAF;

// Scrolling
pub const DEACTIVATE_SCROLL: u8 = 0x2E;

// Addressing
pub const SET_MEMORY_ADDR_MODE: u8 = 0x20; // 0x00 = horizontal
pub const SET_COLUMN_ADDR: u8 = 0x21; // start, end
pub const SET_PAGE_ADDR: u8 = 0x22; // start, end

/// Horizontal addressing for [`SET_MEMORY_ADDR_MODE`]
pub const ADDR_MODE_HORIZONTAL: u8 = 0x00;

// Hardware configuration
pub const SET_START_LINE: u8 = 0x40; // OR'd with line 0-63
pub const SET_SEG_REMAP: u8 = 0xA1; // column 127 -> SEG0
pub const SET_MUX_RATIO: u8 = 0xA8; // rows - 1
pub const SET_COM_SCAN_DEC: u8 = 0xC8;
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
pub const SET_COM_PINS: u8 = 0xDA; // 0x12 = alternative, no L/R remap

// Timing and driving
pub const SET_CLOCK_DIV: u8 = 0xD5;
pub const SET_CHARGE_PUMP: u8 = 0x8D; // 0x14 = enable
