//! Proximity polling.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;

use crate::demos::Demo;
use crate::device::Harness;
use crate::error::Result;
use crate::report;
use crate::sensor::Apds9960;

/// Polls the proximity engine once per [`Config::proximity_interval_ms`](crate::Config::proximity_interval_ms).
pub struct ProximitySensor<S, D, W> {
    harness: Harness<S, D, W>,
}

impl<S, D, W> ProximitySensor<S, D, W> {
    /// Banner title.
    pub const TITLE: &'static str = "SparkFun APDS-9960 - ProximitySensor";

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

impl<S, D, W> Demo for ProximitySensor<S, D, W>
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
        harness.configure_proximity_gain()?;
        harness.enable_proximity(false)?;
        Ok(())
    }

    fn step(&mut self) -> Result<(), S::Error> {
        let harness = &mut self.harness;
        match harness.sensor_mut().read_proximity() {
            Ok(level) => {
                trace!("proximity {}", level);
                harness.print(|w| report::proximity(w, level))?;
            }
            Err(_) => {
                warn!("proximity read failed");
                harness.say(report::PROXIMITY_READ_FAILED)?;
            }
        }

        let interval = harness.config().proximity_interval_ms;
        harness.sleep_ms(interval);
        Ok(())
    }
}
