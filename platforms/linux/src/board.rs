//! Bus and line assignments (BCM numbering).

use gpiocdev::line::Offset;

/// I2C bus the APDS-9960 is attached to.
pub const I2C_BUS: &str = "/dev/i2c-1";

/// GPIO character device holding the INT and LED lines.
pub const GPIO_CHIP: &str = "/dev/gpiochip0";

/// APDS-9960 INT output, open drain and active low.
pub const APDS_INT: Offset = 4;

/// LED pulsed on every proximity interrupt.
pub const LED: Offset = 9;

/// Consumer label shown by `gpioinfo`.
pub const CONSUMER: &str = "apds9960-demos";
