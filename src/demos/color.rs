//! Ambient and RGB polling.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;

use crate::demos::Demo;
use crate::device::Harness;
use crate::error::Result;
use crate::report;
use crate::sensor::Apds9960;

/// Polls the light engine once per [`Config::light_interval_ms`](crate::Config::light_interval_ms).
pub struct ColorSensor<S, D, W> {
    harness: Harness<S, D, W>,
}

impl<S, D, W> ColorSensor<S, D, W> {
    /// Banner title.
    pub const TITLE: &'static str = "SparkFun APDS-9960 - ColorSensor";

    /// Wraps a harness; nothing is sent to the sensor until [`Demo::setup`].
    pub fn new(harness: Harness<S, D, W>) -> Self {
        Self { harness }
    }

    /// Consumes the demo and returns its harness.
    pub fn release(self) -> Harness<S, D, W> {
        self.harness
    }

    /// Provides mutable access to the harness.
    pub fn harness_mut(&mut self) -> &mut Harness<S, D, W> {
        &mut self.harness
    }
}

impl<S, D, W> Demo for ColorSensor<S, D, W>
where
    S: Apds9960,
    D: DelayNs,
    W: Write,
{
    type DriverError = S::Error;

    fn setup(&mut self) -> Result<(), S::Error> {
        let harness = &mut self.harness;
        harness.validate_config()?;
        harness.banner(Self::TITLE)?;
        harness.init()?;
        harness.enable_light(false)?;

        // Wait for initialization and calibration to finish.
        let settle = harness.config().light_settle_ms;
        harness.sleep_ms(settle);
        Ok(())
    }

    fn step(&mut self) -> Result<(), S::Error> {
        let harness = &mut self.harness;
        match harness.sensor_mut().read_light() {
            Ok(sample) => {
                trace!("light {} {} {} {}", sample.ambient, sample.red, sample.green, sample.blue);
                harness.print(|w| report::light(w, &sample))?;
            }
            Err(_) => {
                warn!("light read failed");
                harness.say(report::LIGHT_READ_FAILED)?;
            }
        }

        let interval = harness.config().light_interval_ms;
        harness.sleep_ms(interval);
        Ok(())
    }
}
