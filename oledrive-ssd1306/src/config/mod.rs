//! Configuration
//!
//! Presentation presets and the session configuration, plus a small
//! reader for the `[display]` section of a TOML config file.

pub mod toml;
pub mod types;

pub use types::*;
