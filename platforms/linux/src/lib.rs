//! Raspberry Pi wiring for the `apds9960-demos` loops.
//!
//! Each binary under `src/bin` runs one demo with no command-line arguments:
//! the sensor sits on `/dev/i2c-1`, INT and the LED on `/dev/gpiochip0` at
//! the offsets in [`board`].

pub mod board;
pub mod driver;
pub mod gpio;
pub mod host;

pub use crate::driver::{PlatformError, Sensor};
