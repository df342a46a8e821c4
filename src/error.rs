//! Error handling primitives for the demo loops.

use embedded_hal::digital::ErrorKind as PinErrorKind;

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants that stop a demo.
///
/// Sensor failures are reported on the console and never end a loop on their
/// own; they only surface here when the driver is used directly through `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Any error reported by the sensor driver.
    Driver(E),
    /// A GPIO line used for the interrupt input or the LED failed.
    Pin(PinErrorKind),
    /// Writing to the console sink failed.
    Console,
    /// The provided configuration parameters are invalid.
    InvalidConfig,
    /// Sensor initialisation failed and the strict init policy is active.
    InitFailed,
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Driver(err)
    }
}

impl<E> Error<E> {
    /// Maps a GPIO error into [`Error::Pin`].
    pub(crate) fn pin(err: impl embedded_hal::digital::Error) -> Self {
        Self::Pin(err.kind())
    }
}
