//! Configuration primitives for the LIS3LV02 driver.

use crate::params::{
    BlockDataUpdate, ClockSource, DataAlignment, DataRate, DataReadyEnable, FilterCutoff,
    FullScale, HighPassFilter, InterruptEnable, PowerMode, SpiMode,
};
use crate::registers::{Control1, Control2, Control3};

/// User-facing configuration for the LIS3LV02 sensor.
///
/// Every field is a closed enum, so any combination of values encodes to a
/// well-defined register image; there is nothing to validate at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Power mode selection.
    pub power: PowerMode,
    /// Output data rate selection.
    pub data_rate: DataRate,
    /// Measurement range selection.
    pub full_scale: FullScale,
    /// Output register update policy.
    pub block_update: BlockDataUpdate,
    /// Interrupt pin enable.
    pub interrupt: InterruptEnable,
    /// Data-ready signal enable.
    pub data_ready: DataReadyEnable,
    /// Serial wire count selection.
    pub spi_mode: SpiMode,
    /// Sample alignment; also selects the acquisition protocol.
    pub alignment: DataAlignment,
    /// Clock source selection.
    pub clock: ClockSource,
    /// High-pass filter routing for the direction-detection engine.
    pub direction_filter: HighPassFilter,
    /// High-pass filter routing for the free-fall/wake-up engine.
    pub free_fall_filter: HighPassFilter,
    /// High-pass filter routing for the output data path.
    pub data_filter: HighPassFilter,
    /// High-pass filter cutoff coefficient.
    pub cutoff: FilterCutoff,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Encodes the `CTRL_REG1` image for this configuration.
    ///
    /// All three axis enables are always set; the driver offers no per-axis
    /// gating.
    pub fn control1(&self) -> Control1 {
        Control1::new()
            .with_x_enable(true)
            .with_y_enable(true)
            .with_z_enable(true)
            .with_data_rate(self.data_rate)
            .with_power(self.power)
    }

    /// Encodes the `CTRL_REG2` image for this configuration.
    pub fn control2(&self) -> Control2 {
        Control2::new()
            .with_full_scale(self.full_scale)
            .with_block_update(self.block_update)
            .with_interrupt(self.interrupt)
            .with_data_ready(self.data_ready)
            .with_spi_mode(self.spi_mode)
            .with_alignment(self.alignment)
    }

    /// Encodes the `CTRL_REG3` image for this configuration.
    pub fn control3(&self) -> Control3 {
        Control3::new()
            .with_clock(self.clock)
            .with_direction_filter(self.direction_filter)
            .with_free_fall_filter(self.free_fall_filter)
            .with_data_filter(self.data_filter)
            .with_cutoff(self.cutoff)
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the power mode.
    pub fn power(mut self, power: PowerMode) -> Self {
        self.config.power = power;
        self
    }

    /// Overrides the output data rate.
    pub fn data_rate(mut self, data_rate: DataRate) -> Self {
        self.config.data_rate = data_rate;
        self
    }

    /// Overrides the measurement range.
    pub fn full_scale(mut self, full_scale: FullScale) -> Self {
        self.config.full_scale = full_scale;
        self
    }

    /// Overrides the output register update policy.
    pub fn block_update(mut self, block_update: BlockDataUpdate) -> Self {
        self.config.block_update = block_update;
        self
    }

    /// Overrides the interrupt pin enable.
    pub fn interrupt(mut self, interrupt: InterruptEnable) -> Self {
        self.config.interrupt = interrupt;
        self
    }

    /// Overrides the data-ready signal enable.
    pub fn data_ready(mut self, data_ready: DataReadyEnable) -> Self {
        self.config.data_ready = data_ready;
        self
    }

    /// Overrides the serial wire count selection.
    pub fn spi_mode(mut self, spi_mode: SpiMode) -> Self {
        self.config.spi_mode = spi_mode;
        self
    }

    /// Overrides the sample alignment and acquisition protocol.
    pub fn alignment(mut self, alignment: DataAlignment) -> Self {
        self.config.alignment = alignment;
        self
    }

    /// Overrides the clock source selection.
    pub fn clock(mut self, clock: ClockSource) -> Self {
        self.config.clock = clock;
        self
    }

    /// Overrides the direction-detection filter routing.
    pub fn direction_filter(mut self, direction_filter: HighPassFilter) -> Self {
        self.config.direction_filter = direction_filter;
        self
    }

    /// Overrides the free-fall/wake-up filter routing.
    pub fn free_fall_filter(mut self, free_fall_filter: HighPassFilter) -> Self {
        self.config.free_fall_filter = free_fall_filter;
        self
    }

    /// Overrides the output data path filter routing.
    pub fn data_filter(mut self, data_filter: HighPassFilter) -> Self {
        self.config.data_filter = data_filter;
        self
    }

    /// Overrides the high-pass filter cutoff coefficient.
    pub fn cutoff(mut self, cutoff: FilterCutoff) -> Self {
        self.config.cutoff = cutoff;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for Config {
    /// Device reset values, except that the power mode defaults to
    /// [`PowerMode::On`] so a freshly configured driver produces samples.
    fn default() -> Self {
        Self {
            power: PowerMode::On,
            data_rate: DataRate::Hz40,
            full_scale: FullScale::G2,
            block_update: BlockDataUpdate::Continuous,
            interrupt: InterruptEnable::Disabled,
            data_ready: DataReadyEnable::Disabled,
            spi_mode: SpiMode::FourWire,
            alignment: DataAlignment::Right12,
            clock: ClockSource::Internal,
            direction_filter: HighPassFilter::Bypassed,
            free_fall_filter: HighPassFilter::Bypassed,
            data_filter: HighPassFilter::Bypassed,
            cutoff: FilterCutoff::Hpc512,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_encodes_reset_values_powered_on() {
        let config = Config::default();
        assert_eq!(u8::from(config.control1()), 0x47);
        assert_eq!(u8::from(config.control2()), 0x00);
        assert_eq!(u8::from(config.control3()), 0x00);
    }

    #[test]
    fn builder_overrides_compose() {
        let config = Config::new()
            .data_rate(DataRate::Hz640)
            .full_scale(FullScale::G6)
            .alignment(DataAlignment::Left16)
            .data_filter(HighPassFilter::Enabled)
            .cutoff(FilterCutoff::Hpc2048)
            .build();

        assert_eq!(u8::from(config.control1()), 0x67);
        assert_eq!(u8::from(config.control2()), 0x81);
        assert_eq!(u8::from(config.control3()), 0x12);
        assert_eq!(config.power, PowerMode::On);
    }
}
