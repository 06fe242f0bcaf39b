//! High-level LIS3LV02 device driver implementation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::Lis3lv02Interface;
use crate::interface::spi::SpiInterface;
use crate::log::debug;
use crate::params::{
    BlockDataUpdate, ClockSource, DataAlignment, DataRate, DataReadyEnable, FilterCutoff,
    FullScale, HighPassFilter, InterruptEnable, PowerMode, SpiMode,
};
use crate::registers::{
    AUTO_INCREMENT_FLAG, Axis, Control1, Control2, Control3, DUMMY, EXPECTED_DEVICE_ID, READ_FLAG,
    REG_HP_FILTER_RESET, REG_STATUS, REG_WHO_AM_I, Register, Status,
};
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

/// High-level synchronous driver for the LIS3LV02 accelerometer.
pub struct Lis3lv02<IFACE> {
    interface: IFACE,
    config: Config,
}

/// Decoded view of the `STATUS_REG` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataStatus {
    /// STATUS_REG[7] ZYXOR.
    pub xyz_overrun: bool,
    /// STATUS_REG[6] ZOR.
    pub z_overrun: bool,
    /// STATUS_REG[5] YOR.
    pub y_overrun: bool,
    /// STATUS_REG[4] XOR.
    pub x_overrun: bool,
    /// STATUS_REG[3] ZYXDA.
    pub xyz_available: bool,
    /// STATUS_REG[2] ZDA.
    pub z_available: bool,
    /// STATUS_REG[1] YDA.
    pub y_available: bool,
    /// STATUS_REG[0] XDA.
    pub x_available: bool,
}

impl DataStatus {
    /// Builds a snapshot from the raw STATUS_REG bitfield.
    pub fn from_register(status: Status) -> Self {
        Self {
            xyz_overrun: status.xyz_overrun(),
            z_overrun: status.z_overrun(),
            y_overrun: status.y_overrun(),
            x_overrun: status.x_overrun(),
            xyz_available: status.xyz_available(),
            z_available: status.z_available(),
            y_available: status.y_available(),
            x_available: status.x_available(),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DataStatus {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "DataStatus {{\n    ZYXOR: {},\n    ZOR: {},\n    YOR: {},\n    XOR: {},\n    ZYXDA: {},\n    ZDA: {},\n    YDA: {},\n    XDA: {}\n}}",
            self.xyz_overrun,
            self.z_overrun,
            self.y_overrun,
            self.x_overrun,
            self.xyz_available,
            self.z_available,
            self.y_available,
            self.x_available
        );
    }
}

impl<IFACE> Lis3lv02<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    pub fn new(interface: IFACE, config: Config) -> Self {
        Self { interface, config }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> (IFACE, Config) {
        (self.interface, self.config)
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    /// Returns a shared reference to the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl<SPI, CS> Lis3lv02<SpiInterface<SPI, CS>>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    // ==================================================================
    // == SPI Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for `SpiBus` transports with a chip-select pin.
    pub fn new_spi(spi: SPI, cs: CS, config: Config) -> Self {
        Self::new(SpiInterface::new(spi, cs), config)
    }

    /// Releases the driver, returning the bus, pin, and configuration.
    pub fn release_spi(self) -> (SPI, CS, Config) {
        let (iface, config) = self.release();
        let (spi, cs) = iface.release();
        (spi, cs, config)
    }
}

impl<IFACE, CommE> Lis3lv02<IFACE>
where
    IFACE: Lis3lv02Interface<Error = CommE>,
{
    // ==================================================================
    // == Identification & Bring-Up =====================================
    // ==================================================================
    /// Reads the `WHO_AM_I` register and returns the raw identity byte.
    pub fn device_id(&mut self) -> Result<u8, CommE> {
        self.read_register(REG_WHO_AM_I)
    }

    /// Probes the device, returning `true` when the identity byte matches.
    ///
    /// A foreign or absent device reports `Ok(false)`; only transport
    /// failures surface as errors.
    pub fn begin(&mut self) -> Result<bool, CommE> {
        let id = self.device_id()?;
        debug!("WHO_AM_I returned {=u8:x}", id);
        Ok(id == EXPECTED_DEVICE_ID)
    }

    /// Initializes the sensor using the current configuration.
    ///
    /// Verifies the identity byte first so a miswired bus is reported before
    /// any control register is written.
    pub fn init(&mut self) -> Result<(), CommE> {
        let id = self.device_id()?;
        if id != EXPECTED_DEVICE_ID {
            return Err(Error::DeviceIdMismatch(id));
        }

        self.configure(self.config)
    }

    /// Applies a new configuration by programming all three control registers.
    pub fn configure(&mut self, config: Config) -> Result<(), CommE> {
        self.write_register(Control1::ADDRESS, config.control1().into())?;
        self.write_register(Control2::ADDRESS, config.control2().into())?;
        self.write_register(Control3::ADDRESS, config.control3().into())?;

        self.config = config;
        Ok(())
    }

    // ==================================================================
    // == Control Register Programming ==================================
    // ==================================================================
    /// Programs `CTRL_REG1` with the supplied power mode and data rate.
    ///
    /// All three axis enables are always set.
    pub fn set_power_data_rate(
        &mut self,
        power: PowerMode,
        data_rate: DataRate,
    ) -> Result<(), CommE> {
        let reg = Control1::new()
            .with_x_enable(true)
            .with_y_enable(true)
            .with_z_enable(true)
            .with_data_rate(data_rate)
            .with_power(power);
        self.write_register(Control1::ADDRESS, reg.into())?;

        self.config.power = power;
        self.config.data_rate = data_rate;
        Ok(())
    }

    /// Programs `CTRL_REG2` with the supplied measurement options.
    ///
    /// The alignment also selects the acquisition protocol used by
    /// [`read_axis`](Self::read_axis).
    pub fn set_measurement_options(
        &mut self,
        full_scale: FullScale,
        block_update: BlockDataUpdate,
        interrupt: InterruptEnable,
        data_ready: DataReadyEnable,
        spi_mode: SpiMode,
        alignment: DataAlignment,
    ) -> Result<(), CommE> {
        let reg = Control2::new()
            .with_full_scale(full_scale)
            .with_block_update(block_update)
            .with_interrupt(interrupt)
            .with_data_ready(data_ready)
            .with_spi_mode(spi_mode)
            .with_alignment(alignment);
        self.write_register(Control2::ADDRESS, reg.into())?;

        self.config.full_scale = full_scale;
        self.config.block_update = block_update;
        self.config.interrupt = interrupt;
        self.config.data_ready = data_ready;
        self.config.spi_mode = spi_mode;
        self.config.alignment = alignment;
        Ok(())
    }

    /// Programs `CTRL_REG3` with the supplied clock and filter options.
    pub fn set_filter_options(
        &mut self,
        clock: ClockSource,
        direction_filter: HighPassFilter,
        free_fall_filter: HighPassFilter,
        data_filter: HighPassFilter,
        cutoff: FilterCutoff,
    ) -> Result<(), CommE> {
        let reg = Control3::new()
            .with_clock(clock)
            .with_direction_filter(direction_filter)
            .with_free_fall_filter(free_fall_filter)
            .with_data_filter(data_filter)
            .with_cutoff(cutoff);
        self.write_register(Control3::ADDRESS, reg.into())?;

        self.config.clock = clock;
        self.config.direction_filter = direction_filter;
        self.config.free_fall_filter = free_fall_filter;
        self.config.data_filter = data_filter;
        self.config.cutoff = cutoff;
        Ok(())
    }

    // ==================================================================
    // == Status & Filter ===============================================
    // ==================================================================
    /// Reads `STATUS_REG` and returns the raw byte.
    pub fn read_status(&mut self) -> Result<u8, CommE> {
        self.read_register(REG_STATUS)
    }

    /// Reads `STATUS_REG` and decodes the per-axis availability and overrun
    /// flags.
    pub fn read_data_status(&mut self) -> Result<DataStatus, CommE> {
        let raw = self.read_status()?;
        Ok(DataStatus::from_register(Status::from(raw)))
    }

    /// Clears the high-pass filter by touching `HP_FILTER_RESET`.
    pub fn reset_filter(&mut self) -> Result<(), CommE> {
        // The address byte carries the read flag: the dummy read access
        // itself is what resets the filter content.
        self.transaction(|bus| {
            bus.transfer_byte(REG_HP_FILTER_RESET | READ_FLAG)?;
            bus.transfer_byte(DUMMY)?;
            Ok(())
        })
    }

    // ==================================================================
    // == Sample Acquisition ============================================
    // ==================================================================
    #[inline]
    fn unpack_discrete(high: u8, low: u8) -> i16 {
        // The high byte is captured first on the wire; sign extend it, then
        // merge the low byte.
        ((high as i8 as i16) << 8) | low as i16
    }

    #[inline]
    fn unpack_burst(low: u8, high: u8) -> i16 {
        i16::from_le_bytes([low, high])
    }

    /// Reads one axis using the protocol selected by the configured
    /// alignment.
    ///
    /// Right-justified data is collected with two discrete frames,
    /// left-justified data with a single auto-increment burst. Both decode
    /// to two's-complement `i16`.
    pub fn read_axis(&mut self, axis: Axis) -> Result<i16, CommE> {
        match self.config.alignment {
            DataAlignment::Right12 => self.read_axis_discrete(axis),
            DataAlignment::Left16 => self.read_axis_burst(axis),
        }
    }

    /// Reads the X, Y, and Z axes in order.
    pub fn read_xyz(&mut self) -> Result<[i16; 3], CommE> {
        Ok([
            self.read_axis(Axis::X)?,
            self.read_axis(Axis::Y)?,
            self.read_axis(Axis::Z)?,
        ])
    }

    /// Reads one axis with two single-register frames, high byte first.
    pub fn read_axis_discrete(&mut self, axis: Axis) -> Result<i16, CommE> {
        let high = self.read_register(axis.high_address())?;
        let low = self.read_register(axis.low_address())?;
        Ok(Self::unpack_discrete(high, low))
    }

    /// Reads one axis in a single auto-increment frame starting at the low
    /// byte register.
    pub fn read_axis_burst(&mut self, axis: Axis) -> Result<i16, CommE> {
        let (low, high) = self.read_register_pair(axis.low_address())?;
        Ok(Self::unpack_burst(low, high))
    }

    /// Reads only the high output byte of one axis, preserving its sign.
    pub fn read_axis_high(&mut self, axis: Axis) -> Result<i8, CommE> {
        Ok(self.read_register(axis.high_address())? as i8)
    }

    /// Reads only the low output byte of one axis.
    pub fn read_axis_low(&mut self, axis: Axis) -> Result<u8, CommE> {
        self.read_register(axis.low_address())
    }

    // ==================================================================
    // == Internal Transaction Helpers ==================================
    // ==================================================================
    /// Runs `operations` inside one chip-select frame.
    ///
    /// The selection is closed even when an operation fails; the operation
    /// error takes precedence over a failure to close.
    fn transaction<T, F>(&mut self, operations: F) -> Result<T, CommE>
    where
        F: FnOnce(&mut IFACE) -> core::result::Result<T, CommE>,
    {
        self.interface.begin_selection().map_err(Error::from)?;
        let result = operations(&mut self.interface);
        let closed = self.interface.end_selection();

        let value = result.map_err(Error::from)?;
        closed.map_err(Error::from)?;
        Ok(value)
    }

    fn write_register(&mut self, address: u8, value: u8) -> Result<(), CommE> {
        self.transaction(|bus| {
            bus.transfer_byte(address)?;
            bus.transfer_byte(value)?;
            Ok(())
        })?;
        debug!("reg {=u8:x} <- {=u8:x}", address, value);
        Ok(())
    }

    fn read_register(&mut self, address: u8) -> Result<u8, CommE> {
        self.transaction(|bus| {
            bus.transfer_byte(address | READ_FLAG)?;
            bus.transfer_byte(DUMMY)
        })
    }

    /// Reads two consecutive registers in one auto-increment frame.
    fn read_register_pair(&mut self, address: u8) -> Result<(u8, u8), CommE> {
        self.transaction(|bus| {
            bus.transfer_byte(address | READ_FLAG | AUTO_INCREMENT_FLAG)?;
            let first = bus.transfer_byte(DUMMY)?;
            let second = bus.transfer_byte(DUMMY)?;
            Ok((first, second))
        })
    }
}
