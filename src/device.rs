//! Sensor, delay and console bundle shared by every demo.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;

use crate::config::{Config, InitPolicy};
use crate::error::{Error, Result};
use crate::irq::InterruptFlag;
use crate::report;
use crate::sensor::Apds9960;

/// Everything a demo drives besides its GPIO lines.
pub struct Harness<S, D, W> {
    sensor: S,
    delay: D,
    console: W,
    config: Config,
}

impl<S, D, W> Harness<S, D, W> {
    // ==================================================================
    // == Construction & Ownership ======================================
    // ==================================================================
    /// Bundles a driver, a delay provider and a console sink.
    pub fn new(sensor: S, delay: D, console: W, config: Config) -> Self {
        Self {
            sensor,
            delay,
            console,
            config,
        }
    }

    /// Consumes the harness and returns its parts.
    pub fn release(self) -> (S, D, W) {
        (self.sensor, self.delay, self.console)
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Provides mutable access to the underlying driver.
    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    /// Provides shared access to the console sink.
    pub fn console(&self) -> &W {
        &self.console
    }
}

impl<S, D, W> Harness<S, D, W>
where
    S: Apds9960,
    D: DelayNs,
    W: Write,
{
    // ==================================================================
    // == Startup =======================================================
    // ==================================================================
    /// Rejects an invalid configuration before the sensor is touched.
    pub fn validate_config(&self) -> Result<(), S::Error> {
        self.config.validate().map_err(|_| Error::InvalidConfig)
    }

    /// Prints the demo banner.
    pub fn banner(&mut self, title: &str) -> Result<(), S::Error> {
        report::banner(&mut self.console, title).map_err(|_| Error::Console)
    }

    /// Initialises the sensor and reports the outcome.
    ///
    /// A failure is printed and, under [`InitPolicy::Lenient`], otherwise ignored.
    pub fn init(&mut self) -> Result<bool, S::Error> {
        if self.sensor.init().is_ok() {
            debug!("apds9960 init ok");
            self.say(report::INIT_OK)?;
            return Ok(true);
        }

        self.say(report::INIT_FAILED)?;
        match self.config.init_policy {
            InitPolicy::Lenient => {
                warn!("apds9960 init failed, continuing");
                Ok(false)
            }
            InitPolicy::Strict => {
                error!("apds9960 init failed");
                Err(Error::InitFailed)
            }
        }
    }

    /// Applies the configured proximity gain.
    pub fn configure_proximity_gain(&mut self) -> Result<(), S::Error> {
        let gain = self.config.proximity_gain;
        if self.sensor.set_proximity_gain(gain).is_err() {
            warn!("setting proximity gain failed");
            self.say(report::GAIN_FAILED)?;
        }
        Ok(())
    }

    /// Writes the proximity interrupt window.
    pub fn configure_proximity_thresholds(&mut self) -> Result<(), S::Error> {
        let (low, high) = (self.config.proximity_int_low, self.config.proximity_int_high);

        if self.sensor.set_proximity_int_low_threshold(low).is_err() {
            warn!("writing proximity low threshold failed");
            self.say(report::LOW_THRESHOLD_FAILED)?;
        }
        if self.sensor.set_proximity_int_high_threshold(high).is_err() {
            warn!("writing proximity high threshold failed");
            self.say(report::HIGH_THRESHOLD_FAILED)?;
        }
        Ok(())
    }

    /// Starts the light engine and reports the outcome.
    pub fn enable_light(&mut self, interrupts: bool) -> Result<bool, S::Error> {
        let ok = self.sensor.enable_light_sensor(interrupts).is_ok();
        self.report_enable(ok, report::LIGHT_RUNNING, report::SENSOR_ENABLE_FAILED)
    }

    /// Starts the proximity engine and reports the outcome.
    pub fn enable_proximity(&mut self, interrupts: bool) -> Result<bool, S::Error> {
        let ok = self.sensor.enable_proximity_sensor(interrupts).is_ok();
        self.report_enable(ok, report::PROXIMITY_RUNNING, report::SENSOR_ENABLE_FAILED)
    }

    /// Starts the gesture engine and reports the outcome.
    pub fn enable_gesture(&mut self, interrupts: bool) -> Result<bool, S::Error> {
        let ok = self.sensor.enable_gesture_sensor(interrupts).is_ok();
        self.report_enable(ok, report::GESTURE_RUNNING, report::GESTURE_ENABLE_FAILED)
    }

    fn report_enable(&mut self, ok: bool, running: &str, failed: &str) -> Result<bool, S::Error> {
        if ok {
            debug!("engine enabled");
            self.say(running)?;
        } else {
            warn!("engine enable failed");
            self.say(failed)?;
        }
        Ok(ok)
    }

    // ==================================================================
    // == Loop Helpers ==================================================
    // ==================================================================
    /// Prints one fixed line.
    pub fn say(&mut self, line: &str) -> Result<(), S::Error> {
        writeln!(self.console, "{line}").map_err(|_| Error::Console)
    }

    /// Runs a formatter against the console, mapping failures to [`Error::Console`].
    pub fn print<F>(&mut self, write: F) -> Result<(), S::Error>
    where
        F: FnOnce(&mut W) -> core::fmt::Result,
    {
        write(&mut self.console).map_err(|_| Error::Console)
    }

    /// Blocks for `ms` milliseconds.
    pub fn sleep_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Sleeps in [`Config::irq_poll_interval_ms`] slices until `flag` is raised.
    pub fn wait_for(&mut self, flag: &InterruptFlag) {
        flag.wait(&mut self.delay, self.config.irq_poll_interval_ms);
    }
}
