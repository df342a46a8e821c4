//! Prints the proximity level every 250 ms.

use apds9960_demos::{Config, Harness, ProximitySensor};
use apds9960_linux::host::{self, StdDelay, Stdout};
use apds9960_linux::{board, Sensor};

fn main() -> anyhow::Result<()> {
    host::init_logging()?;

    let sensor = Sensor::open(board::I2C_BUS)?;
    let harness = Harness::new(sensor, StdDelay, Stdout, Config::default());
    host::run(&mut ProximitySensor::new(harness))
}
