//! Prints ambient and RGB light levels once per second.

use apds9960_demos::{ColorSensor, Config, Harness};
use apds9960_linux::host::{self, StdDelay, Stdout};
use apds9960_linux::{board, Sensor};

fn main() -> anyhow::Result<()> {
    host::init_logging()?;

    let sensor = Sensor::open(board::I2C_BUS)?;
    let harness = Harness::new(sensor, StdDelay, Stdout, Config::default());
    host::run(&mut ColorSensor::new(harness))
}
