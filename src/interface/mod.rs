//! Bus interface abstraction for the LIS3LV02 driver.

pub mod spi;

/// Abstraction over the low-level bus access required by the driver.
///
/// Implementations expose the serial link as explicit chip-select framing
/// plus full-duplex byte exchanges. The driver brackets every register
/// access with exactly one `begin_selection`/`end_selection` pair and only
/// calls `transfer_byte` while a selection is active.
pub trait Lis3lv02Interface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Asserts the chip-select line, opening a transaction frame.
    fn begin_selection(&mut self) -> core::result::Result<(), Self::Error>;

    /// Releases the chip-select line, closing the current transaction frame.
    fn end_selection(&mut self) -> core::result::Result<(), Self::Error>;

    /// Shifts one byte out and returns the byte shifted in on the same clocks.
    fn transfer_byte(&mut self, byte: u8) -> core::result::Result<u8, Self::Error>;
}
