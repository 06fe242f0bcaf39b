//! Strongly typed parameter enumerations for the LIS3LV02 driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! [`Config`](crate::config::Config) and the high-level driver APIs. Prefer these
//! types over raw integers to keep configuration values valid and explicit.
//!
//! # Examples
//!
//! ```rust
//! use lis3lv02::params::{DataRate, FullScale, PowerMode};
//!
//! let rate = DataRate::Hz640;
//! let scale = FullScale::G6;
//! let mode = PowerMode::On;
//! let _ = (rate, scale, mode);
//! ```

use modular_bitfield::prelude::Specifier;

/// Power state encoded in `CTRL_REG1.PD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum PowerMode {
    /// Power-down mode; no sampling, lowest current draw.
    Down = 0,
    /// Device on, sampling at the configured data rate.
    On = 1,
}

/// Output data rate (decimation) selections encoded in `CTRL_REG1[5:4]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 2]
pub enum DataRate {
    /// 40 Hz output data rate.
    Hz40 = 0b00,
    /// 160 Hz output data rate.
    Hz160 = 0b01,
    /// 640 Hz output data rate.
    Hz640 = 0b10,
    /// 2560 Hz output data rate.
    Hz2560 = 0b11,
}

impl DataRate {
    /// Returns the output data rate in hertz as an integer value.
    pub const fn hz(self) -> u32 {
        match self {
            Self::Hz40 => 40,
            Self::Hz160 => 160,
            Self::Hz640 => 640,
            Self::Hz2560 => 2_560,
        }
    }
}

/// Measurement range selections encoded in `CTRL_REG2.FS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum FullScale {
    /// ±2 g range.
    G2 = 0,
    /// ±6 g range.
    G6 = 1,
}

impl FullScale {
    /// Returns the magnitude of the measurement range in g.
    pub const fn max_g(self) -> u8 {
        match self {
            Self::G2 => 2,
            Self::G6 => 6,
        }
    }
}

/// Output register update policy encoded in `CTRL_REG2.BDU`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum BlockDataUpdate {
    /// Output registers update continuously.
    Continuous = 0,
    /// Output registers are latched until both bytes of a sample are read.
    Latched = 1,
}

/// Interrupt pin enable bit (`CTRL_REG2.IEN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum InterruptEnable {
    /// Interrupt pin disabled.
    Disabled = 0,
    /// Interrupt pin enabled.
    Enabled = 1,
}

/// Data-ready signal enable bit (`CTRL_REG2.DRDY`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum DataReadyEnable {
    /// Data-ready generation disabled.
    Disabled = 0,
    /// Data-ready generation enabled on the RDY pin.
    Enabled = 1,
}

/// Serial wire count encoded in `CTRL_REG2.SIM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum SpiMode {
    /// Four-wire SPI (separate data in and data out lines).
    FourWire = 0,
    /// Three-wire SPI (bidirectional data line).
    ThreeWire = 1,
}

/// Sample alignment encoded in `CTRL_REG2.DAS`.
///
/// The alignment also selects the acquisition protocol used by
/// [`read_axis`](crate::device::Lis3lv02::read_axis): right-justified data is
/// collected with discrete per-byte reads, left-justified data with one
/// auto-increment burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum DataAlignment {
    /// 12-bit samples, right justified and sign extended.
    Right12 = 0,
    /// 16-bit samples, left justified.
    Left16 = 1,
}

/// Clock source selection bit (`CTRL_REG3.ECK`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum ClockSource {
    /// Internal oscillator.
    Internal = 0,
    /// External clock supplied on the CK pad.
    ExternalPad = 1,
}

/// High-pass filter routing state used by the `CTRL_REG3` filter bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum HighPassFilter {
    /// Filter bypassed for this signal path.
    Bypassed = 0,
    /// Filter enabled for this signal path.
    Enabled = 1,
}

/// High-pass filter cutoff coefficients encoded in `CTRL_REG3.HPC[1:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 2]
pub enum FilterCutoff {
    /// Coefficient 512.
    Hpc512 = 0b00,
    /// Coefficient 1024.
    Hpc1024 = 0b01,
    /// Coefficient 2048.
    Hpc2048 = 0b10,
    /// Coefficient 4096.
    Hpc4096 = 0b11,
}

impl FilterCutoff {
    /// Returns the raw HPC divider coefficient.
    pub const fn coefficient(self) -> u16 {
        match self {
            Self::Hpc512 => 512,
            Self::Hpc1024 => 1_024,
            Self::Hpc2048 => 2_048,
            Self::Hpc4096 => 4_096,
        }
    }

    /// Returns the cutoff frequency in hertz for the supplied data rate.
    ///
    /// The device derives the corner as `0.318 / HPC` of half the output data
    /// rate.
    pub const fn corner_hz(self, rate: DataRate) -> f32 {
        0.318 / self.coefficient() as f32 * (rate.hz() as f32 / 2.0)
    }
}
