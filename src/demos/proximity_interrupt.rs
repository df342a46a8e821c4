//! Proximity interrupts with an LED pulse per event.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::demos::Demo;
use crate::device::Harness;
use crate::error::{Error, Result};
use crate::irq::InterruptFlag;
use crate::report;
use crate::sensor::Apds9960;

/// Waits for the device to cross the configured proximity window, then
/// prints the level and lights the LED for [`Config::led_pulse_ms`](crate::Config::led_pulse_ms).
///
/// The pulse blocks the loop. Edges raised during it land on the already
/// pending flag and are absorbed by the pass in progress.
///
/// The flag is acknowledged after the latch clear. An edge the device raises
/// between those two calls is lost: INT stays asserted with no further
/// falling edge, so the loop keeps waiting until the flag is raised again.
pub struct ProximityInterrupt<'a, S, D, W, LED> {
    harness: Harness<S, D, W>,
    led: LED,
    flag: &'a InterruptFlag,
}

impl<'a, S, D, W, LED> ProximityInterrupt<'a, S, D, W, LED> {
    /// Banner title.
    pub const TITLE: &'static str = "SparkFun APDS-9960 - ProximityInterrupt";

    /// `flag` must be raised by the falling-edge handler of the INT line.
    pub fn new(harness: Harness<S, D, W>, led: LED, flag: &'a InterruptFlag) -> Self {
        Self { harness, led, flag }
    }

    /// Consumes the demo and returns the harness and the LED line.
    pub fn release(self) -> (Harness<S, D, W>, LED) {
        (self.harness, self.led)
    }

    /// Provides mutable access to the harness.
    pub fn harness_mut(&mut self) -> &mut Harness<S, D, W> {
        &mut self.harness
    }
}

impl<S, D, W, LED> ProximityInterrupt<'_, S, D, W, LED>
where
    S: Apds9960,
    D: DelayNs,
    W: Write,
    LED: OutputPin,
{
    /// Handles a pending event, if any. Returns `true` when one was handled.
    pub fn poll(&mut self) -> Result<bool, S::Error> {
        if !self.flag.is_pending() {
            return Ok(false);
        }

        trace!("proximity interrupt");
        self.handle_event()?;
        self.flag.acknowledge();
        Ok(true)
    }

    fn handle_event(&mut self) -> Result<(), S::Error> {
        match self.harness.sensor_mut().read_proximity() {
            Ok(level) => {
                trace!("proximity {}", level);
                self.harness.print(|w| report::proximity_event(w, level))?;
            }
            Err(_) => {
                warn!("proximity read failed");
                self.harness.say(report::PROXIMITY_READ_FAILED)?;
            }
        }

        self.led.set_high().map_err(Error::<S::Error>::pin)?;
        let pulse = self.harness.config().led_pulse_ms;
        self.harness.sleep_ms(pulse);
        self.led.set_low().map_err(Error::<S::Error>::pin)?;

        // The device holds INT asserted until its latch is cleared.
        if self.harness.sensor_mut().clear_proximity_int().is_err() {
            warn!("clearing proximity interrupt failed");
            self.harness.say(report::CLEAR_INT_FAILED)?;
        }
        Ok(())
    }
}

impl<S, D, W, LED> Demo for ProximityInterrupt<'_, S, D, W, LED>
where
    S: Apds9960,
    D: DelayNs,
    W: Write,
    LED: OutputPin,
{
    type DriverError = S::Error;

    fn setup(&mut self) -> Result<(), S::Error> {
        let harness = &mut self.harness;
        harness.validate_config()?;
        harness.banner(Self::TITLE)?;
        harness.init()?;
        harness.configure_proximity_gain()?;
        harness.configure_proximity_thresholds()?;
        harness.enable_proximity(true)?;
        Ok(())
    }

    fn step(&mut self) -> Result<(), S::Error> {
        self.harness.wait_for(self.flag);
        self.poll()?;
        Ok(())
    }
}
