//! The five demo programs.
//!
//! Each demo owns a [`Harness`](crate::device::Harness) plus whatever GPIO
//! lines it needs, and implements [`Demo`]: a one-time [`setup`](Demo::setup)
//! followed by an endless series of [`step`](Demo::step)s.

pub mod color;
pub mod gesture;
pub mod gesture_poll;
pub mod proximity;
pub mod proximity_interrupt;

pub use color::ColorSensor;
pub use gesture::GestureTest;
pub use gesture_poll::GesturePoll;
pub use proximity::ProximitySensor;
pub use proximity_interrupt::ProximityInterrupt;

use core::convert::Infallible;

use crate::error::Result;

/// A configure-then-loop sensor demo.
pub trait Demo {
    /// Error type of the underlying sensor driver.
    type DriverError;

    /// Banner, initialisation and engine configuration.
    fn setup(&mut self) -> Result<(), Self::DriverError>;

    /// One iteration of the main loop.
    fn step(&mut self) -> Result<(), Self::DriverError>;

    /// Runs [`setup`](Demo::setup) once and then [`step`](Demo::step) forever.
    ///
    /// Sensor failures are printed and never end the loop, so this only
    /// returns when the console, a GPIO line, or strict initialisation fails.
    fn run(&mut self) -> Result<Infallible, Self::DriverError> {
        self.setup()?;
        loop {
            self.step()?;
        }
    }
}
