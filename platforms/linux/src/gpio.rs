//! GPIO lines through the Linux character device.

use std::thread;

use anyhow::Context;
use apds9960_demos::InterruptFlag;
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};
use gpiocdev::line::{Bias, EdgeDetection, EdgeKind, Offset, Value};
use gpiocdev::Request;
use log::{debug, error};

use crate::board;

/// One requested line, usable as an `embedded-hal` pin.
pub struct Line {
    request: Request,
    offset: Offset,
}

impl Line {
    /// Requests `offset` as an input with the pull-up the open-drain INT needs.
    pub fn input(chip: &str, offset: Offset) -> anyhow::Result<Self> {
        let request = Request::builder()
            .on_chip(chip)
            .with_consumer(board::CONSUMER)
            .with_line(offset)
            .as_input()
            .with_bias(Bias::PullUp)
            .request()
            .with_context(|| format!("failed to request input line {offset}"))?;
        Ok(Self { request, offset })
    }

    /// Requests `offset` as an output, initially low.
    pub fn output(chip: &str, offset: Offset) -> anyhow::Result<Self> {
        let request = Request::builder()
            .on_chip(chip)
            .with_consumer(board::CONSUMER)
            .with_line(offset)
            .as_output(Value::Inactive)
            .request()
            .with_context(|| format!("failed to request output line {offset}"))?;
        Ok(Self { request, offset })
    }

    fn level(&self) -> Result<Value, ErrorKind> {
        self.request.value(self.offset).map_err(|err| {
            error!("reading line {}: {err}", self.offset);
            ErrorKind::Other
        })
    }

    fn drive(&self, value: Value) -> Result<(), ErrorKind> {
        self.request.set_value(self.offset, value).map_err(|err| {
            error!("driving line {}: {err}", self.offset);
            ErrorKind::Other
        })
    }
}

impl ErrorType for Line {
    type Error = ErrorKind;
}

impl InputPin for Line {
    fn is_high(&mut self) -> Result<bool, ErrorKind> {
        Ok(self.level()? == Value::Active)
    }

    fn is_low(&mut self) -> Result<bool, ErrorKind> {
        Ok(self.level()? == Value::Inactive)
    }
}

impl OutputPin for Line {
    fn set_low(&mut self) -> Result<(), ErrorKind> {
        self.drive(Value::Inactive)
    }

    fn set_high(&mut self) -> Result<(), ErrorKind> {
        self.drive(Value::Active)
    }
}

/// Raises `flag` on every falling edge of `offset`, from a background thread.
///
/// The thread owns the line request and runs until the edge stream fails.
pub fn watch_falling_edges(
    chip: &str,
    offset: Offset,
    flag: &'static InterruptFlag,
) -> anyhow::Result<()> {
    let request = Request::builder()
        .on_chip(chip)
        .with_consumer(board::CONSUMER)
        .with_line(offset)
        .as_input()
        .with_bias(Bias::PullUp)
        .with_edge_detection(EdgeDetection::FallingEdge)
        .request()
        .with_context(|| format!("failed to request edge events on line {offset}"))?;

    thread::Builder::new()
        .name("apds9960-int".into())
        .spawn(move || {
            for event in request.edge_events() {
                match event {
                    Ok(event) if event.kind == EdgeKind::Falling => flag.raise(),
                    Ok(event) => debug!("ignoring {:?} edge", event.kind),
                    Err(err) => {
                        error!("edge stream on line {offset} failed: {err}");
                        return;
                    }
                }
            }
        })
        .context("failed to spawn the INT watcher")?;
    Ok(())
}
