//! Oledrive Hardware Abstraction Layer
//!
//! This crate defines the bus capability display drivers are written
//! against. Platforms either implement [`i2c::I2cBus`] directly or wrap
//! an existing `embedded-hal` I2C peripheral in [`i2c::HalI2c`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Driver (oledrive-ssd1306)              │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  oledrive-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ HalI2c over   │       │ board-specific│
//! │ embedded-hal  │       │ I2cBus impl   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - I2C write and presence probe

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;

// Re-export key items at crate root for convenience
pub use i2c::{HalI2c, I2cBus, I2cBusError};
