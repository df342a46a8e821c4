//! Recording test doubles for the driver, the LED and the delay provider.
//!
//! All doubles append to one shared [`Recorder`], so tests can check the
//! relative order of driver calls, pin writes and sleeps.

use core::convert::Infallible;
use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

use crate::irq::InterruptFlag;
use crate::params::{Direction, ProximityGain};
use crate::sensor::Apds9960;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Init,
    EnableLight(bool),
    EnableProximity(bool),
    EnableGesture(bool),
    ReadAmbient,
    ReadRed,
    ReadGreen,
    ReadBlue,
    ReadProximity,
    SetGain(ProximityGain),
    SetLowThreshold(u8),
    SetHighThreshold(u8),
    ClearProximityInt,
    GestureAvailable,
    ReadGesture,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Sensor(Call),
    Led(bool),
    Sleep(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimError;

#[derive(Debug, Clone, Default)]
pub struct Recorder {
    events: Rc<RefCell<Vec<Event>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Sensor(call) => Some(*call),
                _ => None,
            })
            .collect()
    }

    /// Simulated clock: total milliseconds slept so far.
    pub fn elapsed_ms(&self) -> u64 {
        self.events
            .borrow()
            .iter()
            .map(|event| match event {
                Event::Sleep(ms) => u64::from(*ms),
                _ => 0,
            })
            .sum()
    }
}

pub struct SimSensor {
    recorder: Recorder,
    failing: Vec<Call>,
    pub light: [u16; 4],
    pub proximity: u8,
    pub gesture_available: bool,
    pub gesture: Direction,
    /// Raised right after a latch clear, as if the device re-asserted INT.
    pub reassert_on_clear: Option<&'static InterruptFlag>,
}

impl SimSensor {
    pub fn new(recorder: &Recorder) -> Self {
        Self {
            recorder: recorder.clone(),
            failing: Vec::new(),
            light: [0; 4],
            proximity: 0,
            gesture_available: false,
            gesture: Direction::None,
            reassert_on_clear: None,
        }
    }

    pub fn fail_on(&mut self, call: Call) {
        self.failing.push(call);
    }

    pub fn heal(&mut self) {
        self.failing.clear();
    }

    fn call<T>(&mut self, call: Call, value: T) -> Result<T, SimError> {
        self.recorder.push(Event::Sensor(call));
        if self.failing.contains(&call) {
            Err(SimError)
        } else {
            Ok(value)
        }
    }
}

impl Apds9960 for SimSensor {
    type Error = SimError;

    fn init(&mut self) -> Result<(), SimError> {
        self.call(Call::Init, ())
    }

    fn enable_light_sensor(&mut self, interrupts: bool) -> Result<(), SimError> {
        self.call(Call::EnableLight(interrupts), ())
    }

    fn enable_proximity_sensor(&mut self, interrupts: bool) -> Result<(), SimError> {
        self.call(Call::EnableProximity(interrupts), ())
    }

    fn enable_gesture_sensor(&mut self, interrupts: bool) -> Result<(), SimError> {
        self.call(Call::EnableGesture(interrupts), ())
    }

    fn read_ambient_light(&mut self) -> Result<u16, SimError> {
        self.call(Call::ReadAmbient, self.light[0])
    }

    fn read_red_light(&mut self) -> Result<u16, SimError> {
        self.call(Call::ReadRed, self.light[1])
    }

    fn read_green_light(&mut self) -> Result<u16, SimError> {
        self.call(Call::ReadGreen, self.light[2])
    }

    fn read_blue_light(&mut self) -> Result<u16, SimError> {
        self.call(Call::ReadBlue, self.light[3])
    }

    fn read_proximity(&mut self) -> Result<u8, SimError> {
        self.call(Call::ReadProximity, self.proximity)
    }

    fn set_proximity_gain(&mut self, gain: ProximityGain) -> Result<(), SimError> {
        self.call(Call::SetGain(gain), ())
    }

    fn set_proximity_int_low_threshold(&mut self, level: u8) -> Result<(), SimError> {
        self.call(Call::SetLowThreshold(level), ())
    }

    fn set_proximity_int_high_threshold(&mut self, level: u8) -> Result<(), SimError> {
        self.call(Call::SetHighThreshold(level), ())
    }

    fn clear_proximity_int(&mut self) -> Result<(), SimError> {
        let result = self.call(Call::ClearProximityInt, ());
        if let Some(flag) = self.reassert_on_clear {
            flag.raise();
        }
        result
    }

    fn is_gesture_available(&mut self) -> Result<bool, SimError> {
        self.call(Call::GestureAvailable, self.gesture_available)
    }

    fn read_gesture(&mut self) -> Result<Direction, SimError> {
        self.call(Call::ReadGesture, self.gesture)
    }
}

pub struct SimLed {
    recorder: Recorder,
}

impl SimLed {
    pub fn new(recorder: &Recorder) -> Self {
        Self {
            recorder: recorder.clone(),
        }
    }
}

impl ErrorType for SimLed {
    type Error = Infallible;
}

impl OutputPin for SimLed {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.recorder.push(Event::Led(false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.recorder.push(Event::Led(true));
        Ok(())
    }
}

/// Delay that advances the simulated clock, optionally firing the INT handler while asleep.
pub struct SimDelay<'f> {
    recorder: Recorder,
    raise: Option<&'f InterruptFlag>,
}

impl<'f> SimDelay<'f> {
    pub fn new(recorder: &Recorder) -> Self {
        Self {
            recorder: recorder.clone(),
            raise: None,
        }
    }

    pub fn raising(mut self, flag: &'f InterruptFlag) -> Self {
        self.raise = Some(flag);
        self
    }

    fn sleep(&mut self, ms: u32) {
        self.recorder.push(Event::Sleep(ms));
        if let Some(flag) = self.raise {
            flag.raise();
        }
    }
}

impl DelayNs for SimDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.sleep(ns / 1_000_000);
    }

    fn delay_us(&mut self, us: u32) {
        self.sleep(us / 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.sleep(ms);
    }
}
