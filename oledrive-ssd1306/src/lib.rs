//! SSD1306 OLED controller driver
//!
//! Brings a 128x64 SSD1306 panel up over I2C and reports whether it is
//! present. Drawing is left to renderers built on top:
//!
//! - [`cmd`] - Controller opcodes and panel geometry
//! - [`frame`] - Command frames and the fixed bring-up table
//! - [`session`] - [`ControllerSession`], the per-panel handle
//! - [`config`] - Presentation presets and config file reading
//!
//! # Example
//!
//! ```ignore
//! let mut bus = oledrive_hal::HalI2c::new(i2c);
//! let mut oled = ControllerSession::with_defaults(&mut bus);
//! if oled.is_ready()? {
//!     oled.initialize(&mut delay)?;
//! }
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod cmd;
pub mod config;
pub mod error;
pub mod frame;
pub mod session;

pub use config::{DrawColor, SessionConfig};
pub use error::Error;
pub use frame::{CommandFrame, InitStep, INIT_SEQUENCE};
pub use session::ControllerSession;
