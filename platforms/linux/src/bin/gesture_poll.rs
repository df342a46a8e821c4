//! Asks the gesture engine for a gesture whenever the INT line reads high.

use apds9960_demos::{Config, GesturePoll, Harness};
use apds9960_linux::gpio::Line;
use apds9960_linux::host::{self, StdDelay, Stdout};
use apds9960_linux::{board, Sensor};

fn main() -> anyhow::Result<()> {
    host::init_logging()?;

    let int = Line::input(board::GPIO_CHIP, board::APDS_INT)?;

    let sensor = Sensor::open(board::I2C_BUS)?;
    let harness = Harness::new(sensor, StdDelay, Stdout, Config::default());
    host::run(&mut GesturePoll::new(harness, int))
}
