//! Configuration primitives for the demo loops.

use crate::params::ProximityGain;

/// What to do when the sensor reports an initialisation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitPolicy {
    /// Print the failure and carry on polling, as the vendor examples do.
    #[default]
    Lenient,
    /// Print the failure and abort setup with [`Error::InitFailed`](crate::Error::InitFailed).
    Strict,
}

/// Timing and sensor settings shared by every demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Behaviour on initialisation failure.
    pub init_policy: InitPolicy,
    /// One-time wait after enabling the light engine (milliseconds).
    pub light_settle_ms: u32,
    /// Delay between color readings (milliseconds).
    pub light_interval_ms: u32,
    /// Delay between polled proximity readings (milliseconds).
    pub proximity_interval_ms: u32,
    /// How long the indicator LED stays lit per proximity event (milliseconds).
    pub led_pulse_ms: u32,
    /// Sleep between checks of the interrupt flag (milliseconds).
    pub irq_poll_interval_ms: u32,
    /// Sleep between samples of the INT line when it is not asserted (milliseconds).
    pub pin_poll_interval_ms: u32,
    /// Proximity gain applied by the proximity demos.
    pub proximity_gain: ProximityGain,
    /// Proximity level below which the device raises an interrupt.
    pub proximity_int_low: u8,
    /// Proximity level above which the device raises an interrupt.
    pub proximity_int_high: u8,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Checks whether this configuration can drive the demos.
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        let intervals = [
            self.light_interval_ms,
            self.proximity_interval_ms,
            self.led_pulse_ms,
            self.irq_poll_interval_ms,
            self.pin_poll_interval_ms,
        ];
        if intervals.contains(&0) {
            return Err(ConfigError::ZeroInterval);
        }

        if self.proximity_int_low > self.proximity_int_high {
            return Err(ConfigError::ThresholdOrder);
        }

        Ok(())
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

    /// Sets the initialisation failure policy.
    pub fn init_policy(mut self, policy: InitPolicy) -> Self {
        self.config.init_policy = policy;
        self
    }

    /// Overrides the light engine settle time.
    pub fn light_settle_ms(mut self, ms: u32) -> Self {
        self.config.light_settle_ms = ms;
        self
    }

    /// Overrides the color polling cadence.
    pub fn light_interval_ms(mut self, ms: u32) -> Self {
        self.config.light_interval_ms = ms;
        self
    }

    /// Overrides the proximity polling cadence.
    pub fn proximity_interval_ms(mut self, ms: u32) -> Self {
        self.config.proximity_interval_ms = ms;
        self
    }

    /// Overrides the LED pulse length.
    pub fn led_pulse_ms(mut self, ms: u32) -> Self {
        self.config.led_pulse_ms = ms;
        self
    }

    /// Overrides the interrupt flag poll interval.
    pub fn irq_poll_interval_ms(mut self, ms: u32) -> Self {
        self.config.irq_poll_interval_ms = ms;
        self
    }

    /// Overrides the INT line poll interval.
    pub fn pin_poll_interval_ms(mut self, ms: u32) -> Self {
        self.config.pin_poll_interval_ms = ms;
        self
    }

    /// Sets the proximity gain.
    pub fn proximity_gain(mut self, gain: ProximityGain) -> Self {
        self.config.proximity_gain = gain;
        self
    }

    /// Sets both proximity interrupt thresholds.
    pub fn proximity_thresholds(mut self, low: u8, high: u8) -> Self {
        self.config.proximity_int_low = low;
        self.config.proximity_int_high = high;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            init_policy: InitPolicy::Lenient,
            light_settle_ms: 500,
            light_interval_ms: 1_000,
            proximity_interval_ms: 250,
            led_pulse_ms: 500,
            irq_poll_interval_ms: 1,
            pin_poll_interval_ms: 50,
            proximity_gain: ProximityGain::X2,
            proximity_int_low: 0,
            proximity_int_high: 50,
        }
    }
}

/// Validation errors generated while verifying a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A loop cadence or pulse length is zero.
    ZeroInterval,
    /// The low proximity threshold is above the high one.
    ThresholdOrder,
}
