//! [`Apds9960`] adapter over the `apds9960` register driver.

use core::fmt;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use apds9960::Apds9960 as Device;
use apds9960_demos::{Apds9960, Direction, ProximityGain};
use linux_embedded_hal::I2cdev;
use log::{debug, trace};

/// Data-valid polls before a read gives up.
const READ_ATTEMPTS: u32 = 50;
const READ_RETRY_MS: u64 = 2;

/// Gesture FIFO depth in bytes (32 datasets of U, D, L, R).
const GESTURE_FIFO_LEN: usize = 128;

/// Failures reported by [`Sensor`].
#[derive(Debug)]
pub enum PlatformError {
    /// The I2C transfer failed.
    Bus(String),
    /// The engine never flagged its data as valid.
    NotReady,
    /// The register driver has no support for this operation.
    Unsupported(&'static str),
}

impl PlatformError {
    fn bus(err: impl fmt::Debug) -> Self {
        Self::Bus(format!("{err:?}"))
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus(err) => write!(f, "i2c transfer failed: {err}"),
            Self::NotReady => f.write_str("sensor data never became valid"),
            Self::Unsupported(what) => write!(f, "{what} is not supported by the register driver"),
        }
    }
}

impl std::error::Error for PlatformError {}

/// Polls a non-blocking read until it yields, bounded by [`READ_ATTEMPTS`].
fn settle<T, E: fmt::Debug>(mut read: impl FnMut() -> nb::Result<T, E>) -> Result<T, PlatformError> {
    for _ in 0..READ_ATTEMPTS {
        match read() {
            Ok(value) => return Ok(value),
            Err(nb::Error::WouldBlock) => thread::sleep(Duration::from_millis(READ_RETRY_MS)),
            Err(nb::Error::Other(err)) => return Err(PlatformError::bus(err)),
        }
    }
    Err(PlatformError::NotReady)
}

/// APDS-9960 on a Linux I2C bus.
///
/// Proximity gain and gesture classification are not exposed by the
/// register driver. [`Apds9960::set_proximity_gain`] reports
/// [`PlatformError::Unsupported`], and [`Apds9960::read_gesture`] drains the
/// gesture FIFO before reporting the same.
pub struct Sensor {
    device: Device<I2cdev>,
}

impl Sensor {
    /// Opens the I2C bus at `path`.
    pub fn open(path: &str) -> anyhow::Result<Self> {
        let i2c = I2cdev::new(path).with_context(|| format!("failed to open {path}"))?;
        Ok(Self {
            device: Device::new(i2c),
        })
    }
}

impl Apds9960 for Sensor {
    type Error = PlatformError;

    fn init(&mut self) -> Result<(), PlatformError> {
        self.device.enable().map_err(PlatformError::bus)?;
        debug!("apds9960 powered on");
        Ok(())
    }

    fn enable_light_sensor(&mut self, interrupts: bool) -> Result<(), PlatformError> {
        self.device.enable_light().map_err(PlatformError::bus)?;
        if interrupts {
            self.device.enable_light_interrupts()
        } else {
            self.device.disable_light_interrupts()
        }
        .map_err(PlatformError::bus)
    }

    fn enable_proximity_sensor(&mut self, interrupts: bool) -> Result<(), PlatformError> {
        self.device.enable_proximity().map_err(PlatformError::bus)?;
        if interrupts {
            self.device.enable_proximity_interrupts()
        } else {
            self.device.disable_proximity_interrupts()
        }
        .map_err(PlatformError::bus)
    }

    fn enable_gesture_sensor(&mut self, interrupts: bool) -> Result<(), PlatformError> {
        // The gesture state machine is entered from the proximity engine.
        self.device.enable_proximity().map_err(PlatformError::bus)?;
        self.device.enable_gesture().map_err(PlatformError::bus)?;
        self.device.enable_gesture_mode().map_err(PlatformError::bus)?;
        if interrupts {
            self.device.enable_gesture_interrupts()
        } else {
            self.device.disable_gesture_interrupts()
        }
        .map_err(PlatformError::bus)
    }

    fn read_ambient_light(&mut self) -> Result<u16, PlatformError> {
        settle(|| self.device.read_light_clear())
    }

    fn read_red_light(&mut self) -> Result<u16, PlatformError> {
        settle(|| self.device.read_light_red())
    }

    fn read_green_light(&mut self) -> Result<u16, PlatformError> {
        settle(|| self.device.read_light_green())
    }

    fn read_blue_light(&mut self) -> Result<u16, PlatformError> {
        settle(|| self.device.read_light_blue())
    }

    fn read_proximity(&mut self) -> Result<u8, PlatformError> {
        settle(|| self.device.read_proximity())
    }

    fn set_proximity_gain(&mut self, gain: ProximityGain) -> Result<(), PlatformError> {
        debug!("proximity gain {gain:?} requested");
        Err(PlatformError::Unsupported("proximity gain"))
    }

    fn set_proximity_int_low_threshold(&mut self, level: u8) -> Result<(), PlatformError> {
        self.device
            .set_proximity_low_threshold(level)
            .map_err(PlatformError::bus)
    }

    fn set_proximity_int_high_threshold(&mut self, level: u8) -> Result<(), PlatformError> {
        self.device
            .set_proximity_high_threshold(level)
            .map_err(PlatformError::bus)
    }

    fn clear_proximity_int(&mut self) -> Result<(), PlatformError> {
        self.device
            .clear_proximity_interrupt()
            .map_err(PlatformError::bus)
    }

    fn is_gesture_available(&mut self) -> Result<bool, PlatformError> {
        self.device.is_gesture_data_valid().map_err(PlatformError::bus)
    }

    fn read_gesture(&mut self) -> Result<Direction, PlatformError> {
        let datasets = self
            .device
            .read_gesture_data_level()
            .map_err(PlatformError::bus)?;
        let len = (usize::from(datasets) * 4).min(GESTURE_FIFO_LEN);

        let mut fifo = [0u8; GESTURE_FIFO_LEN];
        if len > 0 {
            settle(|| self.device.read_gesture_data(&mut fifo[..len]))?;
        }
        trace!("gesture fifo {:02x?}", &fifo[..len]);
        Err(PlatformError::Unsupported("gesture classification"))
    }
}
