//! Pulses the LED whenever the proximity level leaves the interrupt window.
//!
//! Move a hand near the sensor and watch the LED on [`board::LED`].

use apds9960_demos::{Config, Harness, InterruptFlag, ProximityInterrupt};
use apds9960_linux::gpio::{self, Line};
use apds9960_linux::host::{self, StdDelay, Stdout};
use apds9960_linux::{board, Sensor};

static APDS_INT: InterruptFlag = InterruptFlag::new();

fn main() -> anyhow::Result<()> {
    host::init_logging()?;

    let led = Line::output(board::GPIO_CHIP, board::LED)?;
    gpio::watch_falling_edges(board::GPIO_CHIP, board::APDS_INT, &APDS_INT)?;

    let sensor = Sensor::open(board::I2C_BUS)?;
    let harness = Harness::new(sensor, StdDelay, Stdout, Config::default());
    host::run(&mut ProximityInterrupt::new(harness, led, &APDS_INT))
}
