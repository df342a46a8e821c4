//! Driver seam for the APDS-9960.
//!
//! The demos never touch registers. They drive the sensor exclusively through
//! [`Apds9960`], which a platform crate implements on top of its bus driver.

use crate::params::{Direction, ProximityGain};

/// One ambient + RGB reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightSample {
    /// Clear (ambient) channel.
    pub ambient: u16,
    /// Red channel.
    pub red: u16,
    /// Green channel.
    pub green: u16,
    /// Blue channel.
    pub blue: u16,
}

/// Operations the demos need from an APDS-9960 driver.
pub trait Apds9960 {
    /// Error type produced by the concrete driver.
    type Error;

    /// Configures the bus and loads the default register values.
    fn init(&mut self) -> core::result::Result<(), Self::Error>;

    /// Starts the ambient/RGB engine, optionally with device interrupts.
    fn enable_light_sensor(&mut self, interrupts: bool) -> core::result::Result<(), Self::Error>;

    /// Starts the proximity engine, optionally with device interrupts.
    fn enable_proximity_sensor(&mut self, interrupts: bool) -> core::result::Result<(), Self::Error>;

    /// Starts the gesture engine, optionally with device interrupts.
    fn enable_gesture_sensor(&mut self, interrupts: bool) -> core::result::Result<(), Self::Error>;

    /// Reads the clear channel.
    fn read_ambient_light(&mut self) -> core::result::Result<u16, Self::Error>;

    /// Reads the red channel.
    fn read_red_light(&mut self) -> core::result::Result<u16, Self::Error>;

    /// Reads the green channel.
    fn read_green_light(&mut self) -> core::result::Result<u16, Self::Error>;

    /// Reads the blue channel.
    fn read_blue_light(&mut self) -> core::result::Result<u16, Self::Error>;

    /// Reads the proximity level.
    fn read_proximity(&mut self) -> core::result::Result<u8, Self::Error>;

    /// Sets the proximity receiver gain.
    fn set_proximity_gain(&mut self, gain: ProximityGain) -> core::result::Result<(), Self::Error>;

    /// Sets the level below which a proximity interrupt fires.
    fn set_proximity_int_low_threshold(&mut self, level: u8) -> core::result::Result<(), Self::Error>;

    /// Sets the level above which a proximity interrupt fires.
    fn set_proximity_int_high_threshold(&mut self, level: u8)
        -> core::result::Result<(), Self::Error>;

    /// Clears the device-side proximity interrupt latch, releasing the INT line.
    fn clear_proximity_int(&mut self) -> core::result::Result<(), Self::Error>;

    /// Returns `true` when gesture data is waiting to be read.
    fn is_gesture_available(&mut self) -> core::result::Result<bool, Self::Error>;

    /// Reads and classifies the pending gesture.
    fn read_gesture(&mut self) -> core::result::Result<Direction, Self::Error>;

    /// Reads all four light channels, stopping at the first failure.
    fn read_light(&mut self) -> core::result::Result<LightSample, Self::Error> {
        Ok(LightSample {
            ambient: self.read_ambient_light()?,
            red: self.read_red_light()?,
            green: self.read_green_light()?,
            blue: self.read_blue_light()?,
        })
    }
}

impl<T> Apds9960 for &mut T
where
    T: Apds9960 + ?Sized,
{
    type Error = T::Error;

    fn init(&mut self) -> core::result::Result<(), Self::Error> {
        T::init(self)
    }

    fn enable_light_sensor(&mut self, interrupts: bool) -> core::result::Result<(), Self::Error> {
        T::enable_light_sensor(self, interrupts)
    }

    fn enable_proximity_sensor(&mut self, interrupts: bool) -> core::result::Result<(), Self::Error> {
        T::enable_proximity_sensor(self, interrupts)
    }

    fn enable_gesture_sensor(&mut self, interrupts: bool) -> core::result::Result<(), Self::Error> {
        T::enable_gesture_sensor(self, interrupts)
    }

    fn read_ambient_light(&mut self) -> core::result::Result<u16, Self::Error> {
        T::read_ambient_light(self)
    }

    fn read_red_light(&mut self) -> core::result::Result<u16, Self::Error> {
        T::read_red_light(self)
    }

    fn read_green_light(&mut self) -> core::result::Result<u16, Self::Error> {
        T::read_green_light(self)
    }

    fn read_blue_light(&mut self) -> core::result::Result<u16, Self::Error> {
        T::read_blue_light(self)
    }

    fn read_proximity(&mut self) -> core::result::Result<u8, Self::Error> {
        T::read_proximity(self)
    }

    fn set_proximity_gain(&mut self, gain: ProximityGain) -> core::result::Result<(), Self::Error> {
        T::set_proximity_gain(self, gain)
    }

    fn set_proximity_int_low_threshold(&mut self, level: u8) -> core::result::Result<(), Self::Error> {
        T::set_proximity_int_low_threshold(self, level)
    }

    fn set_proximity_int_high_threshold(
        &mut self,
        level: u8,
    ) -> core::result::Result<(), Self::Error> {
        T::set_proximity_int_high_threshold(self, level)
    }

    fn clear_proximity_int(&mut self) -> core::result::Result<(), Self::Error> {
        T::clear_proximity_int(self)
    }

    fn is_gesture_available(&mut self) -> core::result::Result<bool, Self::Error> {
        T::is_gesture_available(self)
    }

    fn read_gesture(&mut self) -> core::result::Result<Direction, Self::Error> {
        T::read_gesture(self)
    }
}
