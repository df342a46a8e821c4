//! Demo loops for the APDS-9960 gesture, proximity and color sensor.
//!
//! Five demos cover the sensor's modes: [`ColorSensor`] and
//! [`ProximitySensor`] poll at a fixed cadence, [`ProximityInterrupt`] and
//! [`GestureTest`] react to the INT line through an [`InterruptFlag`], and
//! [`GesturePoll`] samples the INT line level directly.
//!
//! The sensor driver itself is out of scope: the demos talk to it through the
//! [`Apds9960`] trait. GPIO lines and sleeps use `embedded-hal` 1.0 traits,
//! and output goes to any [`core::fmt::Write`] sink.
//!
//! ```rust,ignore
//! static APDS_INT: InterruptFlag = InterruptFlag::new();
//!
//! // Bind the platform's falling-edge handler for the INT line to `APDS_INT.raise()`.
//!
//! let harness = Harness::new(driver, delay, console, Config::default());
//! let mut demo = GestureTest::new(harness, &APDS_INT);
//! demo.run()?;
//! ```
#![no_std]

#[cfg(test)]
extern crate std;

mod log; // must stay ahead of the modules that log

mod error;
mod report;

#[cfg(test)]
mod mock;

pub mod config;
pub mod demos;
pub mod device;
pub mod irq;
pub mod params;
pub mod sensor;

pub use crate::config::{Config, InitPolicy};
pub use crate::demos::{ColorSensor, Demo, GesturePoll, GestureTest, ProximityInterrupt, ProximitySensor};
pub use crate::device::Harness;
pub use crate::error::{Error, Result};
pub use crate::irq::InterruptFlag;
pub use crate::params::{Direction, ProximityGain};
pub use crate::sensor::{Apds9960, LightSample};
