//! Console lines printed by the demos.

use core::fmt::{self, Write};

use crate::params::Direction;
use crate::sensor::LightSample;

pub const INIT_OK: &str = "APDS-9960 initialization complete";
pub const INIT_FAILED: &str = "Something went wrong during APDS-9960 init!";

pub const LIGHT_RUNNING: &str = "Light sensor is now running";
pub const PROXIMITY_RUNNING: &str = "Proximity sensor is now running";
pub const GESTURE_RUNNING: &str = "Gesture sensor is now running";
pub const SENSOR_ENABLE_FAILED: &str = "Something went wrong during sensor init!";
pub const GESTURE_ENABLE_FAILED: &str = "Something went wrong during gesture sensor init!";

pub const GAIN_FAILED: &str = "Something went wrong trying to set PGAIN";
pub const LOW_THRESHOLD_FAILED: &str = "Error writing low threshold";
pub const HIGH_THRESHOLD_FAILED: &str = "Error writing high threshold";

pub const LIGHT_READ_FAILED: &str = "Error reading light values";
pub const PROXIMITY_READ_FAILED: &str = "Error reading proximity value";
pub const CLEAR_INT_FAILED: &str = "Error clearing interrupt";

pub const GESTURE_AVAILABLE: &str = "Gesture is available";
pub const NO_GESTURE: &str = "No gesture available";
pub const GESTURE_READ_FAILED: &str = "Error reading gesture";

/// Writes a blank line followed by the title framed by dashed rules of equal width.
pub fn banner(w: &mut impl Write, title: &str) -> fmt::Result {
    writeln!(w)?;
    rule(w, title.len())?;
    writeln!(w, "{title}")?;
    rule(w, title.len())
}

fn rule(w: &mut impl Write, width: usize) -> fmt::Result {
    for _ in 0..width {
        w.write_char('-')?;
    }
    writeln!(w)
}

pub fn light(w: &mut impl Write, sample: &LightSample) -> fmt::Result {
    writeln!(
        w,
        "Ambient: {} Red: {} Green: {} Blue: {}",
        sample.ambient, sample.red, sample.green, sample.blue
    )
}

pub fn proximity(w: &mut impl Write, level: u8) -> fmt::Result {
    writeln!(w, "Proximity: {level}")
}

pub fn proximity_event(w: &mut impl Write, level: u8) -> fmt::Result {
    writeln!(w, "Proximity detected! Level: {level}")
}

pub fn gesture(w: &mut impl Write, direction: Direction) -> fmt::Result {
    writeln!(w, "{direction}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::String;

    #[test]
    fn banner_rules_match_title_width() {
        let mut out = String::new();
        banner(&mut out, "abc").unwrap();
        assert_eq!(out, "\n---\nabc\n---\n");
    }

    #[test]
    fn light_line_has_fixed_layout() {
        let mut out = String::new();
        let sample = LightSample { ambient: 1, red: 22, green: 333, blue: 4444 };
        light(&mut out, &sample).unwrap();
        assert_eq!(out, "Ambient: 1 Red: 22 Green: 333 Blue: 4444\n");
    }

    #[test]
    fn proximity_lines() {
        let mut out = String::new();
        proximity(&mut out, 0).unwrap();
        proximity_event(&mut out, 255).unwrap();
        assert_eq!(out, "Proximity: 0\nProximity detected! Level: 255\n");
    }
}
