//! Register map definitions for the LIS3LV02 accelerometer.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{
    BlockDataUpdate, ClockSource, DataAlignment, DataRate, DataReadyEnable, FilterCutoff,
    FullScale, HighPassFilter, InterruptEnable, PowerMode, SpiMode,
};

/// Register address of `WHO_AM_I`.
pub const REG_WHO_AM_I: u8 = 0x0F;
/// Register address of `OFFSET_X`.
pub const REG_OFFSET_X: u8 = 0x16;
/// Register address of `OFFSET_Y`.
pub const REG_OFFSET_Y: u8 = 0x17;
/// Register address of `OFFSET_Z`.
pub const REG_OFFSET_Z: u8 = 0x18;
/// Register address of `GAIN_X`.
pub const REG_GAIN_X: u8 = 0x19;
/// Register address of `GAIN_Y`.
pub const REG_GAIN_Y: u8 = 0x1A;
/// Register address of `GAIN_Z`.
pub const REG_GAIN_Z: u8 = 0x1B;
/// Register address of `CTRL_REG1`.
pub const REG_CTRL1: u8 = 0x20;
/// Register address of `CTRL_REG2`.
pub const REG_CTRL2: u8 = 0x21;
/// Register address of `CTRL_REG3`.
pub const REG_CTRL3: u8 = 0x22;
/// Register address of `HP_FILTER_RESET`.
pub const REG_HP_FILTER_RESET: u8 = 0x23;
/// Register address of `STATUS_REG`.
pub const REG_STATUS: u8 = 0x27;
/// Register address of `OUTX_L`.
pub const REG_OUTX_L: u8 = 0x28;
/// Register address of `OUTX_H`.
pub const REG_OUTX_H: u8 = 0x29;
/// Register address of `OUTY_L`.
pub const REG_OUTY_L: u8 = 0x2A;
/// Register address of `OUTY_H`.
pub const REG_OUTY_H: u8 = 0x2B;
/// Register address of `OUTZ_L`.
pub const REG_OUTZ_L: u8 = 0x2C;
/// Register address of `OUTZ_H`.
pub const REG_OUTZ_H: u8 = 0x2D;
/// Register address of `FF_WU_CFG`.
pub const REG_FF_WU_CFG: u8 = 0x30;
/// Register address of `FF_WU_SRC`.
pub const REG_FF_WU_SRC: u8 = 0x31;
/// Register address of `FF_WU_ACK`.
pub const REG_FF_WU_ACK: u8 = 0x32;
/// Register address of `FF_WU_THS_L`.
pub const REG_FF_WU_THS_L: u8 = 0x34;
/// Register address of `FF_WU_THS_H`.
pub const REG_FF_WU_THS_H: u8 = 0x35;
/// Register address of `FF_WU_DURATION`.
pub const REG_FF_WU_DURATION: u8 = 0x36;
/// Register address of `DD_CFG`.
pub const REG_DD_CFG: u8 = 0x38;
/// Register address of `DD_SRC`.
pub const REG_DD_SRC: u8 = 0x39;
/// Register address of `DD_ACK`.
pub const REG_DD_ACK: u8 = 0x3A;
/// Register address of `DD_THSI_L`.
pub const REG_DD_THSI_L: u8 = 0x3C;
/// Register address of `DD_THSI_H`.
pub const REG_DD_THSI_H: u8 = 0x3D;
/// Register address of `DD_THSE_L`.
pub const REG_DD_THSE_L: u8 = 0x3E;
/// Register address of `DD_THSE_H`.
pub const REG_DD_THSE_H: u8 = 0x3F;

/// Address bit requesting a register read (bit 7 of the address byte).
pub const READ_FLAG: u8 = 0x80;
/// Address bit enabling address auto-increment within one frame (bit 6).
pub const AUTO_INCREMENT_FLAG: u8 = 0x40;
/// Filler byte clocked out while the device drives data back.
pub const DUMMY: u8 = 0x00;
/// Identity byte reported by `WHO_AM_I`.
pub const EXPECTED_DEVICE_ID: u8 = 0x3A;

/// Output axis selection for per-axis sample reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}

impl Axis {
    /// Returns the address of the low output byte register for this axis.
    pub const fn low_address(self) -> u8 {
        match self {
            Self::X => REG_OUTX_L,
            Self::Y => REG_OUTY_L,
            Self::Z => REG_OUTZ_L,
        }
    }

    /// Returns the address of the high output byte register for this axis.
    pub const fn high_address(self) -> u8 {
        match self {
            Self::X => REG_OUTX_H,
            Self::Y => REG_OUTY_H,
            Self::Z => REG_OUTZ_H,
        }
    }
}

/// Access permissions encoded for each register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    /// Read-only register.
    ReadOnly,
    /// Write-only register.
    WriteOnly,
    /// Read/write register.
    ReadWrite,
}

/// Minimal metadata exposed by every register value type.
pub trait Register {
    /// Raw storage backing the register payload.
    type Raw: Copy;
    /// Register address as documented in the datasheet.
    const ADDRESS: u8;
    /// Access permission classification.
    const ACCESS: RegisterAccess;
    /// Optional reset/default value defined by the datasheet.
    const RESET_VALUE: Option<Self::Raw>;
}

/// Bitfield representation of the `CTRL_REG1` register (address `0x20`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control1 {
    // X axis enable (bit 0).
    pub x_enable: bool,
    // Y axis enable (bit 1).
    pub y_enable: bool,
    // Z axis enable (bit 2).
    pub z_enable: bool,
    #[skip]
    __: B1,
    // Output data rate selection (bits 5:4).
    pub data_rate: DataRate,
    // Power mode selection (bit 6).
    pub power: PowerMode,
    #[skip]
    __: B1,
}

impl From<u8> for Control1 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Control1> for u8 {
    fn from(value: Control1) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `CTRL_REG2` register (address `0x21`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control2 {
    // Data alignment selection (bit 0).
    pub alignment: DataAlignment,
    // Serial wire count selection (bit 1).
    pub spi_mode: SpiMode,
    // Data-ready signal enable (bit 2).
    pub data_ready: DataReadyEnable,
    // Interrupt pin enable (bit 3).
    pub interrupt: InterruptEnable,
    #[skip]
    __: B2,
    // Output register update policy (bit 6).
    pub block_update: BlockDataUpdate,
    // Measurement range selection (bit 7).
    pub full_scale: FullScale,
}

impl From<u8> for Control2 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Control2> for u8 {
    fn from(value: Control2) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `CTRL_REG3` register (address `0x22`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control3 {
    // High-pass filter cutoff coefficient (bits 1:0).
    pub cutoff: FilterCutoff,
    #[skip]
    __: B2,
    // Filter routing for the output data path (bit 4).
    pub data_filter: HighPassFilter,
    // Filter routing for the free-fall/wake-up engine (bit 5).
    pub free_fall_filter: HighPassFilter,
    // Filter routing for the direction-detection engine (bit 6).
    pub direction_filter: HighPassFilter,
    // Clock source selection (bit 7).
    pub clock: ClockSource,
}

impl From<u8> for Control3 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Control3> for u8 {
    fn from(value: Control3) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `STATUS_REG` register (address `0x27`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    // New X axis data available (bit 0).
    pub x_available: bool,
    // New Y axis data available (bit 1).
    pub y_available: bool,
    // New Z axis data available (bit 2).
    pub z_available: bool,
    // New data available on all axes (bit 3).
    pub xyz_available: bool,
    // X axis data overrun (bit 4).
    pub x_overrun: bool,
    // Y axis data overrun (bit 5).
    pub y_overrun: bool,
    // Z axis data overrun (bit 6).
    pub z_overrun: bool,
    // Data overrun on all axes (bit 7).
    pub xyz_overrun: bool,
}

impl From<u8> for Status {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Status> for u8 {
    fn from(value: Status) -> Self {
        value.into_bytes()[0]
    }
}

impl Register for Control1 {
    type Raw = u8;
    const ADDRESS: u8 = REG_CTRL1;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x07);
}

impl Register for Control2 {
    type Raw = u8;
    const ADDRESS: u8 = REG_CTRL2;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for Control3 {
    type Raw = u8;
    const ADDRESS: u8 = REG_CTRL3;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for Status {
    type Raw = u8;
    const ADDRESS: u8 = REG_STATUS;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<Self::Raw> = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Validates that Control1 bitfields match the datasheet layout.
    #[test]
    fn control1_layout_matches_datasheet() {
        let reg = Control1::new()
            .with_x_enable(true)
            .with_y_enable(true)
            .with_z_enable(true)
            .with_data_rate(DataRate::Hz2560)
            .with_power(PowerMode::On);

        assert_eq!(u8::from(reg), 0b0111_0111);
        let decoded = Control1::from(u8::from(reg));
        assert_eq!(decoded.data_rate(), DataRate::Hz2560);
        assert_eq!(decoded.power(), PowerMode::On);
        assert!(decoded.x_enable() && decoded.y_enable() && decoded.z_enable());
    }

    /// Validates that Control2 bitfields match the datasheet layout.
    #[test]
    fn control2_layout_matches_datasheet() {
        let reg = Control2::new()
            .with_full_scale(FullScale::G6)
            .with_block_update(BlockDataUpdate::Latched)
            .with_interrupt(InterruptEnable::Enabled)
            .with_data_ready(DataReadyEnable::Enabled)
            .with_spi_mode(SpiMode::ThreeWire)
            .with_alignment(DataAlignment::Left16);

        assert_eq!(u8::from(reg), 0b1100_1111);
        let decoded = Control2::from(u8::from(reg));
        assert_eq!(decoded.full_scale(), FullScale::G6);
        assert_eq!(decoded.alignment(), DataAlignment::Left16);
    }

    /// Validates that Control3 bitfields match the datasheet layout.
    #[test]
    fn control3_layout_matches_datasheet() {
        let reg = Control3::new()
            .with_clock(ClockSource::ExternalPad)
            .with_direction_filter(HighPassFilter::Enabled)
            .with_free_fall_filter(HighPassFilter::Enabled)
            .with_data_filter(HighPassFilter::Enabled)
            .with_cutoff(FilterCutoff::Hpc4096);

        assert_eq!(u8::from(reg), 0b1111_0011);
        let decoded = Control3::from(u8::from(reg));
        assert_eq!(decoded.cutoff(), FilterCutoff::Hpc4096);
        assert_eq!(decoded.clock(), ClockSource::ExternalPad);
    }

    /// Validates that Status bitfields match the datasheet layout.
    #[test]
    fn status_layout_matches_datasheet() {
        let status = Status::from(0b1000_0001);
        assert!(status.x_available());
        assert!(!status.y_available());
        assert!(!status.z_available());
        assert!(!status.xyz_available());
        assert!(!status.x_overrun());
        assert!(status.xyz_overrun());
    }

    /// Each Control1 option occupies its own bit range above the always-set
    /// axis enables, so individual encodings compose by OR.
    #[test]
    fn control1_options_compose_bitwise() {
        let base = Control1::new()
            .with_x_enable(true)
            .with_y_enable(true)
            .with_z_enable(true);
        for power in [PowerMode::Down, PowerMode::On] {
            for rate in [
                DataRate::Hz40,
                DataRate::Hz160,
                DataRate::Hz640,
                DataRate::Hz2560,
            ] {
                let combined = u8::from(base.with_data_rate(rate).with_power(power));
                assert_eq!(combined, 0x07 | ((rate as u8) << 4) | ((power as u8) << 6));
                assert_eq!(
                    combined,
                    u8::from(base.with_data_rate(rate)) | u8::from(base.with_power(power)),
                );
            }
        }
    }

    /// Each Control2 option occupies its own bit range, so individual
    /// encodings compose by OR.
    #[test]
    fn control2_options_compose_bitwise() {
        for scale in [FullScale::G2, FullScale::G6] {
            for update in [BlockDataUpdate::Continuous, BlockDataUpdate::Latched] {
                for interrupt in [InterruptEnable::Disabled, InterruptEnable::Enabled] {
                    for ready in [DataReadyEnable::Disabled, DataReadyEnable::Enabled] {
                        for wires in [SpiMode::FourWire, SpiMode::ThreeWire] {
                            for alignment in [DataAlignment::Right12, DataAlignment::Left16] {
                                let combined = u8::from(
                                    Control2::new()
                                        .with_full_scale(scale)
                                        .with_block_update(update)
                                        .with_interrupt(interrupt)
                                        .with_data_ready(ready)
                                        .with_spi_mode(wires)
                                        .with_alignment(alignment),
                                );
                                let composed = u8::from(Control2::new().with_full_scale(scale))
                                    | u8::from(Control2::new().with_block_update(update))
                                    | u8::from(Control2::new().with_interrupt(interrupt))
                                    | u8::from(Control2::new().with_data_ready(ready))
                                    | u8::from(Control2::new().with_spi_mode(wires))
                                    | u8::from(Control2::new().with_alignment(alignment));
                                assert_eq!(combined, composed);
                            }
                        }
                    }
                }
            }
        }
    }

    /// Each Control3 option occupies its own bit range, so individual
    /// encodings compose by OR.
    #[test]
    fn control3_options_compose_bitwise() {
        let paths = [HighPassFilter::Bypassed, HighPassFilter::Enabled];
        let cutoffs = [
            FilterCutoff::Hpc512,
            FilterCutoff::Hpc1024,
            FilterCutoff::Hpc2048,
            FilterCutoff::Hpc4096,
        ];
        for clock in [ClockSource::Internal, ClockSource::ExternalPad] {
            for direction in paths {
                for free_fall in paths {
                    for data in paths {
                        for cutoff in cutoffs {
                            let combined = u8::from(
                                Control3::new()
                                    .with_clock(clock)
                                    .with_direction_filter(direction)
                                    .with_free_fall_filter(free_fall)
                                    .with_data_filter(data)
                                    .with_cutoff(cutoff),
                            );
                            let composed = u8::from(Control3::new().with_clock(clock))
                                | u8::from(Control3::new().with_direction_filter(direction))
                                | u8::from(Control3::new().with_free_fall_filter(free_fall))
                                | u8::from(Control3::new().with_data_filter(data))
                                | u8::from(Control3::new().with_cutoff(cutoff));
                            assert_eq!(combined, composed);
                        }
                    }
                }
            }
        }
    }

    /// Ensures register metadata matches the datasheet tables.
    #[test]
    fn register_metadata_matches_datasheet() {
        assert_eq!(Control1::ADDRESS, REG_CTRL1);
        assert_eq!(Control2::ADDRESS, REG_CTRL2);
        assert_eq!(Control3::ADDRESS, REG_CTRL3);
        assert_eq!(Status::ADDRESS, REG_STATUS);
        assert_eq!(Status::ACCESS, RegisterAccess::ReadOnly);
        assert_eq!(Control1::ACCESS, RegisterAccess::ReadWrite);
        assert_eq!(Status::RESET_VALUE, None);
    }

    /// The documented reset value leaves the device powered down with all
    /// axes enabled at the slowest rate.
    #[test]
    fn control1_reset_state_decodes() {
        let decoded = Control1::from(Control1::RESET_VALUE.unwrap());
        assert!(decoded.x_enable() && decoded.y_enable() && decoded.z_enable());
        assert_eq!(decoded.power(), PowerMode::Down);
        assert_eq!(decoded.data_rate(), DataRate::Hz40);
    }

    /// Output registers for each axis sit at adjacent low/high addresses.
    #[test]
    fn axis_register_addresses() {
        assert_eq!(Axis::X.low_address(), REG_OUTX_L);
        assert_eq!(Axis::X.high_address(), REG_OUTX_H);
        assert_eq!(Axis::Y.low_address(), REG_OUTY_L);
        assert_eq!(Axis::Y.high_address(), REG_OUTY_H);
        assert_eq!(Axis::Z.low_address(), REG_OUTZ_L);
        assert_eq!(Axis::Z.high_address(), REG_OUTZ_H);
        assert_eq!(Axis::Z.high_address(), Axis::Z.low_address() + 1);
    }
}
