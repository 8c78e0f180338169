//! SSD1306 controller session
//!
//! Brings a 128x64 SSD1306 panel from power-on to an active display over
//! I2C and answers whether the panel is on the bus. Rendering collaborators
//! read the draw color and font scale from here; they are not used by the
//! controller itself.

use embedded_hal::delay::DelayNs;
use oledrive_hal::I2cBus;

use crate::config::{DrawColor, SessionConfig, DEFAULT_ADDRESS, DEFAULT_FONT_SCALE};
use crate::error::Error;
use crate::frame::{INIT_SEQUENCE, STABILIZE_DELAY_MS};

/// One SSD1306 panel at a fixed I2C address
///
/// The bus may be owned or borrowed: `I2cBus` is implemented for `&mut B`,
/// so `ControllerSession::with_defaults(&mut bus)` leaves the bus with the
/// caller.
#[derive(Debug)]
pub struct ControllerSession<B> {
    bus: B,
    address: u8,
    /// Foreground color for renderers
    pub draw_color: DrawColor,
    /// Text scale for renderers
    pub font_scale: u8,
}

impl<B: I2cBus> ControllerSession<B> {
    /// Create a session
    ///
    /// # Arguments
    /// - `bus`: I2C transport
    /// - `address`: 7-bit device address
    /// - `draw_color`: initial draw color
    /// - `font_scale`: initial font scale
    pub fn new(bus: B, address: u8, draw_color: DrawColor, font_scale: u8) -> Self {
        Self {
            bus,
            address,
            draw_color,
            font_scale,
        }
    }

    /// Create a session at 0x3C with color on and unit font scale
    pub fn with_defaults(bus: B) -> Self {
        Self::new(bus, DEFAULT_ADDRESS, DrawColor::On, DEFAULT_FONT_SCALE)
    }

    /// Create a session from a loaded configuration
    pub fn from_config(bus: B, config: &SessionConfig) -> Self {
        Self::new(bus, config.address, config.draw_color, config.font_scale)
    }

    /// Device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Send the bring-up sequence and wait for the panel to settle
    ///
    /// Frames go out in table order; the first failed write stops the
    /// sequence and is returned with the step it belonged to. On error the
    /// controller is in an unknown state until this succeeds again.
    /// Safe to repeat: the same sequence is sent every time.
    pub fn initialize<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<B::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("ssd1306 @ {=u8:#x}: init", self.address);

        for command in INIT_SEQUENCE.iter() {
            #[cfg(feature = "defmt")]
            defmt::trace!("init step {}", command.step);

            if let Err(source) = self.bus.write(self.address, command.frame.as_bytes()) {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "ssd1306 @ {=u8:#x}: init aborted at {}",
                    self.address,
                    command.step
                );
                return Err(Error::Transport {
                    step: command.step,
                    source,
                });
            }
        }

        delay.delay_ms(STABILIZE_DELAY_MS);

        #[cfg(feature = "defmt")]
        defmt::debug!("ssd1306 @ {=u8:#x}: display on", self.address);
        Ok(())
    }

    /// Check whether the panel acknowledges its address
    ///
    /// `Ok(false)` means nothing answered. Only a bus fault is an error.
    pub fn is_ready(&mut self) -> Result<bool, Error<B::Error>> {
        let ready = self.bus.probe(self.address).map_err(Error::Probe)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("ssd1306 @ {=u8:#x}: ready={=bool}", self.address, ready);
        Ok(ready)
    }

    /// Release the bus
    pub fn release(self) -> B {
        self.bus
    }
}
