//! SPI interface implementation built on top of `embedded-hal` `SpiBus` with
//! a dedicated chip-select pin.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::{MODE_3, Mode, SpiBus};

use super::Lis3lv02Interface;

/// SPI mode required by the device (CPOL = 1, CPHA = 1).
pub const MODE: Mode = MODE_3;

/// SPI-based interface implementation for the LIS3LV02 driver.
///
/// The chip-select pin is driven directly so that one selection can span
/// several byte exchanges; this is what allows auto-increment bursts and the
/// two-byte filter-reset frame. A software-clocked bus works the same way as
/// a hardware peripheral as long as it implements [`SpiBus`].
pub struct SpiInterface<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> SpiInterface<SPI, CS> {
    /// Creates a new interface from the provided bus and chip-select pin.
    pub const fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    /// Provides mutable access to the wrapped bus.
    pub fn spi_mut(&mut self) -> &mut SPI {
        &mut self.spi
    }

    /// Provides mutable access to the wrapped chip-select pin.
    pub fn cs_mut(&mut self) -> &mut CS {
        &mut self.cs
    }

    /// Consumes the interface and returns the owned bus and pin.
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

/// Error variants produced by [`SpiInterface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiError<SpiE, PinE> {
    /// The underlying bus reported an error.
    Bus(SpiE),
    /// The chip-select pin reported an error.
    Pin(PinE),
}

impl<SPI, CS> Lis3lv02Interface for SpiInterface<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    type Error = SpiError<SPI::Error, CS::Error>;

    fn begin_selection(&mut self) -> core::result::Result<(), Self::Error> {
        self.cs.set_low().map_err(SpiError::Pin)
    }

    fn end_selection(&mut self) -> core::result::Result<(), Self::Error> {
        // The chip select is raised even when the flush fails, otherwise the
        // device would be left half way through a frame.
        let flushed = self.spi.flush().map_err(SpiError::Bus);
        let raised = self.cs.set_high().map_err(SpiError::Pin);
        flushed.and(raised)
    }

    fn transfer_byte(&mut self, byte: u8) -> core::result::Result<u8, Self::Error> {
        let mut word = [byte];
        self.spi.transfer_in_place(&mut word).map_err(SpiError::Bus)?;
        Ok(word[0])
    }
}
