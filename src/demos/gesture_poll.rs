//! Gesture recognition by sampling the INT line level.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::demos::gesture::next_gesture;
use crate::demos::Demo;
use crate::device::Harness;
use crate::error::{Error, Result};
use crate::report;
use crate::sensor::Apds9960;

/// Queries the gesture engine while the INT line reads high and backs off for
/// [`Config::pin_poll_interval_ms`](crate::Config::pin_poll_interval_ms) while it reads low.
///
/// The engine runs with device interrupts off, so the pulled-up line stays
/// high and every step asks the engine for a gesture. No edge handler is
/// needed, so this suits platforms without GPIO interrupts.
pub struct GesturePoll<S, D, W, INT> {
    harness: Harness<S, D, W>,
    int: INT,
}

impl<S, D, W, INT> GesturePoll<S, D, W, INT> {
    /// Banner title.
    pub const TITLE: &'static str = "SparkFun APDS-9960 - GesturePoll";

    /// Creates the demo around the INT line configured as an input.
    pub fn new(harness: Harness<S, D, W>, int: INT) -> Self {
        Self { harness, int }
    }

    /// Consumes the demo and returns the harness and the INT line.
    pub fn release(self) -> (Harness<S, D, W>, INT) {
        (self.harness, self.int)
    }

    /// Provides mutable access to the harness.
    pub fn harness_mut(&mut self) -> &mut Harness<S, D, W> {
        &mut self.harness
    }
}

impl<S, D, W, INT> GesturePoll<S, D, W, INT>
where
    S: Apds9960,
    D: DelayNs,
    W: Write,
    INT: InputPin,
{
    fn handle_gesture(&mut self) -> Result<(), S::Error> {
        match next_gesture(self.harness.sensor_mut()) {
            Ok(Some(direction)) => {
                self.harness.say(report::GESTURE_AVAILABLE)?;
                self.harness.print(|w| report::gesture(w, direction))
            }
            Ok(None) => Ok(()),
            Err(_) => {
                warn!("gesture read failed");
                self.harness.say(report::GESTURE_READ_FAILED)
            }
        }
    }
}

impl<S, D, W, INT> Demo for GesturePoll<S, D, W, INT>
where
    S: Apds9960,
    D: DelayNs,
    W: Write,
    INT: InputPin,
{
    type DriverError = S::Error;

    fn setup(&mut self) -> Result<(), S::Error> {
        let harness = &mut self.harness;
        harness.validate_config()?;
        harness.banner(Self::TITLE)?;
        harness.init()?;
        harness.enable_gesture(false)?;
        Ok(())
    }

    fn step(&mut self) -> Result<(), S::Error> {
        if self.int.is_high().map_err(Error::<S::Error>::pin)? {
            return self.handle_gesture();
        }

        trace!("INT low, backing off");

        let interval = self.harness.config().pin_poll_interval_ms;
        self.harness.sleep_ms(interval);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::GesturePoll;
    use crate::config::Config;
    use crate::demos::Demo;
    use crate::device::Harness;
    use crate::error::Error;
    use crate::mock::{Call, Event, Recorder, SimDelay, SimSensor};
    use crate::params::Direction;
    use embedded_hal::digital::{ErrorKind, ErrorType, InputPin};
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };
    use std::string::String;

    type Subject = GesturePoll<SimSensor, SimDelay<'static>, String, PinMock>;

    fn demo(recorder: &Recorder, int: PinMock) -> Subject {
        GesturePoll::new(
            Harness::new(
                SimSensor::new(recorder),
                SimDelay::new(recorder),
                String::new(),
                Config::default(),
            ),
            int,
        )
    }

    #[test]
    fn setup_enables_gesture_without_device_interrupts() {
        let recorder = Recorder::new();
        let int = PinMock::new(&[]);
        let mut demo = demo(&recorder, int);

        demo.setup().unwrap();
        assert_eq!(recorder.calls(), [Call::Init, Call::EnableGesture(false)]);
        assert!(demo.harness_mut().console().starts_with(
            "\n--------------------------------\nSparkFun APDS-9960 - GesturePoll\n"
        ));

        let (_, mut int) = demo.release();
        int.done();
    }

    #[test]
    fn idle_line_reads_the_ready_gesture() {
        let recorder = Recorder::new();
        let int = PinMock::new(&[PinTransaction::get(PinState::High)]);
        let mut demo = demo(&recorder, int);
        demo.harness_mut().sensor_mut().gesture_available = true;
        demo.harness_mut().sensor_mut().gesture = Direction::Up;

        demo.setup().unwrap();
        let setup_output = demo.harness_mut().console().len();
        demo.step().unwrap();

        assert_eq!(
            recorder.calls(),
            [
                Call::Init,
                Call::EnableGesture(false),
                Call::GestureAvailable,
                Call::ReadGesture,
            ]
        );
        assert_eq!(
            &demo.harness_mut().console()[setup_output..],
            "Gesture is available\nUP\n"
        );
        assert_eq!(recorder.elapsed_ms(), 0);

        let (_, mut int) = demo.release();
        int.done();
    }

    #[test]
    fn idle_line_without_gesture_prints_nothing() {
        let recorder = Recorder::new();
        let int = PinMock::new(&[PinTransaction::get(PinState::High)]);
        let mut demo = demo(&recorder, int);

        demo.step().unwrap();
        assert!(demo.harness_mut().console().is_empty());
        assert_eq!(recorder.calls(), [Call::GestureAvailable]);

        let (_, mut int) = demo.release();
        int.done();
    }

    #[test]
    fn low_line_sleeps_for_the_poll_interval() {
        let recorder = Recorder::new();
        let int = PinMock::new(&[PinTransaction::get(PinState::Low)]);
        let mut demo = demo(&recorder, int);
        demo.harness_mut().sensor_mut().gesture_available = true;

        demo.step().unwrap();
        assert_eq!(recorder.events(), [Event::Sleep(50)]);
        assert!(demo.harness_mut().console().is_empty());

        let (_, mut int) = demo.release();
        int.done();
    }

    #[test]
    fn pin_failure_stops_the_loop() {
        struct BrokenPin;

        impl ErrorType for BrokenPin {
            type Error = ErrorKind;
        }

        impl InputPin for BrokenPin {
            fn is_high(&mut self) -> Result<bool, ErrorKind> {
                Err(ErrorKind::Other)
            }

            fn is_low(&mut self) -> Result<bool, ErrorKind> {
                Err(ErrorKind::Other)
            }
        }

        let recorder = Recorder::new();
        let mut demo = GesturePoll::new(
            Harness::new(
                SimSensor::new(&recorder),
                SimDelay::new(&recorder),
                String::new(),
                Config::default(),
            ),
            BrokenPin,
        );

        assert_eq!(demo.step(), Err(Error::Pin(ErrorKind::Other)));
        assert!(recorder.events().is_empty());
    }
}
