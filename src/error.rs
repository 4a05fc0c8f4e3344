// SPDX-License-Identifier: Apache-2.0
#[cfg(feature = "std")]
extern crate std;

use core::fmt;

use embedded_hal::blocking::i2c;

/// Errors that don't involve I²C.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LibraryError {
    /// The camera returned a value outside the documented domain for a setting.
    UnknownValue(&'static str, u32),
}

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::UnknownValue(name, value) => {
                write!(f, "unknown {} value from camera: {:#010X}", name, value)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LibraryError {}

pub enum Error<I2C>
where
    I2C: i2c::Write + i2c::Read,
{
    /// An I²C write was rejected by the bus.
    I2cWriteError(<I2C as i2c::Write>::Error),

    /// An I²C read was rejected by the bus or transferred short.
    I2cReadError(<I2C as i2c::Read>::Error),

    /// The bounded handshake gave up before the camera reported ready.
    ///
    /// Only the bounded wait produces this; the default handshake polls until
    /// the camera responds.
    HandshakeTimeout,

    /// Errors originating from within this library.
    LibraryError(LibraryError),
}

// Custom Debug implementation so that I2C doesn't need to implement Debug (like the one from
// linux-embedded-hal).
impl<I2C> fmt::Debug for Error<I2C>
where
    I2C: i2c::Write + i2c::Read,
    <I2C as i2c::Write>::Error: fmt::Debug,
    <I2C as i2c::Read>::Error: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::I2cWriteError(i2c_error) => f
                .debug_tuple("Error::I2cWriteError")
                .field(i2c_error)
                .finish(),
            Error::I2cReadError(i2c_error) => f
                .debug_tuple("Error::I2cReadError")
                .field(i2c_error)
                .finish(),
            Error::HandshakeTimeout => f.debug_tuple("Error::HandshakeTimeout").finish(),
            Error::LibraryError(err) => f.debug_tuple("Error::LibraryError").field(err).finish(),
        }
    }
}

impl<I2C> fmt::Display for Error<I2C>
where
    I2C: i2c::Write + i2c::Read,
    <I2C as i2c::Write>::Error: fmt::Debug,
    <I2C as i2c::Read>::Error: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::I2cWriteError(i2c_error) => write!(f, "I2C write error: {:?}", i2c_error),
            Error::I2cReadError(i2c_error) => write!(f, "I2C read error: {:?}", i2c_error),
            Error::HandshakeTimeout => {
                write!(f, "camera did not report booted and not busy in time")
            }
            Error::LibraryError(err) => write!(f, "Library Error: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl<I2C> std::error::Error for Error<I2C>
where
    I2C: i2c::Write + i2c::Read,
    <I2C as i2c::Write>::Error: std::error::Error + 'static,
    <I2C as i2c::Read>::Error: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::I2cWriteError(i2c_error) => Some(i2c_error),
            Error::I2cReadError(i2c_error) => Some(i2c_error),
            Error::HandshakeTimeout => None,
            Error::LibraryError(lib_err) => Some(lib_err),
        }
    }
}

impl<I2C> From<LibraryError> for Error<I2C>
where
    I2C: i2c::Write + i2c::Read,
{
    fn from(lib_err: LibraryError) -> Self {
        Self::LibraryError(lib_err)
    }
}
