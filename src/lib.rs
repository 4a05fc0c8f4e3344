// SPDX-License-Identifier: Apache-2.0
//! A pure-Rust driver for the command and control interface (CCI) of FLIR
//! Lepton thermal cameras.
//!
//! The Lepton exposes its configuration over I²C as a small bank of 16-bit
//! registers. Commands — run a flat-field correction, enable telemetry or
//! radiometry, change the GPIO3 pin mode, reboot — are issued by loading the
//! data registers, writing a command ID, and polling the status register
//! until the camera reports booted and not busy. [`CciDriver`] wraps that
//! protocol in a typed surface and performs the busy handshake around every
//! command, so callers never have to think about it.
//!
//! Video never travels over this interface; frames leave the camera on a
//! separate SPI path (VoSPI) that this crate does not touch. The usual reason
//! to reach for this crate is the setup that path needs: rebooting the camera
//! into a known state and switching GPIO3 to VSYNC so frame capture can
//! synchronise.
//!
//! This library uses the [`embedded-hal`][embedded-hal] blocking I²C traits,
//! so it runs anywhere an `embedded-hal` I²C implementation is available. On
//! embedded Linux that is `linux-embedded-hal`'s `I2cdev`:
//!
//! [embedded-hal]: https://docs.rs/embedded-hal/0.2/embedded_hal/blocking/i2c/index.html
//!
//! ```no_run
//! use linux_embedded_hal::{Delay, I2cdev};
//! use lepton_cci::{CciDriver, GpioMode, CCI_ADDRESS};
//!
//! let bus = I2cdev::new("/dev/i2c-2").expect("/dev/i2c-2 needs to be an I2C controller");
//! let mut camera = CciDriver::new(bus, CCI_ADDRESS)?;
//! let mut delay = Delay;
//! camera.run_reboot(&mut delay);
//! if camera.gpio_mode()? != GpioMode::Vsync {
//!     camera.set_gpio_mode(GpioMode::Vsync);
//! }
//! # Ok::<(), lepton_cci::Error<I2cdev>>(())
//! ```
//!
//! The driver is synchronous and single-owner: every operation blocks until
//! its bus transfers complete, and the handshake polls with no internal
//! timeout (the camera is unresponsive for seconds after a reboot, which is
//! bridged with a fixed delay rather than a handshake deadline). If multiple
//! tasks need the camera, wrap the driver in a mutex or give it to a single
//! owning task; the crate does no locking of its own.
//!
//! Diagnostics are reported through the [`log`] facade at the point of
//! detection, matching how the driver treats bus errors: failures during the
//! handshake or within a command's register writes are logged and retried or
//! skipped rather than unwinding the caller, because the bracketing handshake
//! is what actually confirms the camera made progress.

#![no_std]

pub mod command;
pub mod common;
pub mod driver;
pub mod error;
pub mod register;
#[cfg(test)]
mod test;
mod util;

pub use command::{Command, FeatureState, GpioMode, TelemetryLocation};
pub use common::{Address, CCI_ADDRESS};
pub use driver::CciDriver;
pub use error::{Error, LibraryError};
pub use register::StatusRegister;
