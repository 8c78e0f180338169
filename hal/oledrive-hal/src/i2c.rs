//! I2C bus abstractions
//!
//! Provides the write-and-probe capability display drivers need from an
//! I2C master, plus an adapter for `embedded-hal` peripherals.

use embedded_hal::i2c::{Error as _, ErrorKind, I2c};

/// I2C bus master
///
/// Blocking, write-only view of an I2C master. Clocking, acknowledge
/// handling and any electrical-level retry stay with the implementation.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Check whether a device acknowledges the given address
    ///
    /// Returns `Ok(false)` when nothing answers. Faults that are not a
    /// plain missing acknowledge (bus error, arbitration loss) are `Err`.
    fn probe(&mut self, address: u8) -> Result<bool, Self::Error>;
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        T::write(self, address, data)
    }

    fn probe(&mut self, address: u8) -> Result<bool, Self::Error> {
        T::probe(self, address)
    }
}

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Bus error
    Bus,
    /// Arbitration lost
    ArbitrationLost,
    /// NACK received
    Nack,
    /// Overrun
    Overrun,
    /// Other error
    Other,
}

impl From<ErrorKind> for I2cBusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Bus => I2cBusError::Bus,
            ErrorKind::ArbitrationLoss => I2cBusError::ArbitrationLost,
            ErrorKind::NoAcknowledge(_) => I2cBusError::Nack,
            ErrorKind::Overrun => I2cBusError::Overrun,
            _ => I2cBusError::Other,
        }
    }
}

/// [`I2cBus`] over any blocking `embedded-hal` I2C master
///
/// Presence is probed with an empty write: the address byte alone is
/// clocked out and the acknowledge bit decides the answer.
#[derive(Debug)]
pub struct HalI2c<I> {
    i2c: I,
}

impl<I> HalI2c<I> {
    /// Wrap an `embedded-hal` I2C peripheral
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Give back the wrapped peripheral
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> I2cBus for HalI2c<I> {
    type Error = I2cBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.i2c
            .write(address, data)
            .map_err(|e| I2cBusError::from(e.kind()))
    }

    fn probe(&mut self, address: u8) -> Result<bool, Self::Error> {
        match self.i2c.write(address, &[]) {
            Ok(()) => Ok(true),
            Err(e) => match e.kind() {
                ErrorKind::NoAcknowledge(_) => Ok(false),
                kind => Err(kind.into()),
            },
        }
    }
}
