//! Console, delay and process plumbing shared by the binaries.

use core::fmt;
use std::io::{self, Write as _};
use std::thread;
use std::time::Duration;

use apds9960_demos::Demo;
use embedded_hal::delay::DelayNs;
use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Line-flushed standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl fmt::Write for Stdout {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut out = io::stdout().lock();
        out.write_all(s.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|_| fmt::Error)
    }
}

/// Sleeps the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(Duration::from_nanos(ns.into()));
    }

    fn delay_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(ms.into()));
    }
}

/// Installs the logger; only warnings and errors reach the console.
pub fn init_logging() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .init()
        .map_err(|err| anyhow::anyhow!("failed to install the logger: {err}"))
}

/// Runs `demo` until it stops, which only happens on an error.
pub fn run<D>(demo: &mut D) -> anyhow::Result<()>
where
    D: Demo,
    D::DriverError: fmt::Debug,
{
    match demo.run() {
        Ok(never) => match never {},
        Err(err) => Err(anyhow::anyhow!("demo stopped: {err:?}")),
    }
}
