//! Gesture recognition driven by the INT line.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;

use crate::demos::Demo;
use crate::device::Harness;
use crate::error::Result;
use crate::irq::InterruptFlag;
use crate::params::Direction;
use crate::report;
use crate::sensor::Apds9960;

/// Reads the pending gesture, or `None` when the engine has nothing ready.
pub(crate) fn next_gesture<S>(sensor: &mut S) -> core::result::Result<Option<Direction>, S::Error>
where
    S: Apds9960,
{
    if !sensor.is_gesture_available()? {
        return Ok(None);
    }
    sensor.read_gesture().map(Some)
}

/// Prints one line per gesture interrupt: the direction, or why there is none.
///
/// To perform a NEAR gesture, hold a hand far above the sensor, move it
/// within about 5 cm, hold it there for at least a second and move it away.
/// A FAR gesture is the reverse: start close, hold, then withdraw out of range.
pub struct GestureTest<'a, S, D, W> {
    harness: Harness<S, D, W>,
    flag: &'a InterruptFlag,
}

impl<'a, S, D, W> GestureTest<'a, S, D, W> {
    /// Banner title.
    pub const TITLE: &'static str = "SparkFun APDS-9960 - GestureTest";

    /// `flag` must be raised by the falling-edge handler of the INT line.
    pub fn new(harness: Harness<S, D, W>, flag: &'a InterruptFlag) -> Self {
        Self { harness, flag }
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

impl<S, D, W> GestureTest<'_, S, D, W>
where
    S: Apds9960,
    D: DelayNs,
    W: Write,
{
    /// Handles a pending event, if any. Returns `true` when one was handled.
    pub fn poll(&mut self) -> Result<bool, S::Error> {
        if !self.flag.is_pending() {
            return Ok(false);
        }

        trace!("gesture interrupt");
        self.handle_event()?;
        self.flag.acknowledge();
        Ok(true)
    }

    fn handle_event(&mut self) -> Result<(), S::Error> {
        match next_gesture(self.harness.sensor_mut()) {
            Ok(Some(direction)) => {
                trace!("gesture {}", direction);
                self.harness.print(|w| report::gesture(w, direction))
            }
            Ok(None) => self.harness.say(report::NO_GESTURE),
            Err(_) => {
                warn!("gesture read failed");
                self.harness.say(report::GESTURE_READ_FAILED)
            }
        }
    }
}

impl<S, D, W> Demo for GestureTest<'_, S, D, W>
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
        harness.enable_gesture(true)?;
        Ok(())
    }

    fn step(&mut self) -> Result<(), S::Error> {
        self.harness.wait_for(self.flag);
        self.poll()?;
        Ok(())
    }
}
