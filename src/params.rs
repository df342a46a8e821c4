//! Strongly typed parameter enumerations shared by the driver seam and the demos.
//!
//! # Examples
//!
//! ```rust
//! use apds9960_demos::params::{Direction, ProximityGain};
//!
//! assert_eq!(Direction::from(5u8), Direction::Near);
//! assert_eq!(Direction::from(42u8).as_str(), "NONE");
//! assert_eq!(ProximityGain::X2.bits(), 0b01);
//! ```

use core::fmt;

/// Proximity gain selections encoded in `CONTROL.PGAIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ProximityGain {
    /// 1x gain.
    X1 = 0b00,
    /// 2x gain.
    X2 = 0b01,
    /// 4x gain.
    X4 = 0b10,
    /// 8x gain.
    X8 = 0b11,
}

impl ProximityGain {
    /// Returns the raw two-bit field value.
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Gesture outcome reported by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// No recognisable gesture.
    #[default]
    None,
    /// Swipe towards the left edge.
    Left,
    /// Swipe towards the right edge.
    Right,
    /// Swipe upwards.
    Up,
    /// Swipe downwards.
    Down,
    /// Hand approached and held close to the sensor.
    Near,
    /// Hand held close and then withdrawn.
    Far,
}

impl Direction {
    /// Returns the console label for this outcome.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Near => "NEAR",
            Self::Far => "FAR",
            Self::None => "NONE",
        }
    }
}

/// Decodes the `DIR_*` codes used by the vendor driver; unknown codes are `None`.
impl From<u8> for Direction {
    fn from(code: u8) -> Self {
        match code {
            1 => Self::Left,
            2 => Self::Right,
            3 => Self::Up,
            4 => Self::Down,
            5 => Self::Near,
            6 => Self::Far,
            _ => Self::None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
