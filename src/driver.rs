// SPDX-License-Identifier: Apache-2.0

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c;
use log::{error, warn};
use num_enum::TryFromPrimitive;

use crate::command::{Command, FeatureState, GpioMode, TelemetryLocation};
use crate::common::Address;
use crate::error::{Error, LibraryError};
use crate::register::{self, StatusRegister};

/// Payload size of every command in this crate, in 16-bit words.
const PAYLOAD_LENGTH_WORDS: u16 = 2;

/// How long the camera is off the bus after a reboot, in milliseconds.
///
/// Covers the boot itself plus the automatic flat-field correction the camera
/// runs afterwards.
const REBOOT_SETTLE_MS: u16 = 6_000;

/// Driver for the Lepton's command and control interface.
///
/// Commands are issued through a bank of 16-bit control registers: the data
/// registers are loaded (or read back), a command ID is written to the command
/// register, and the status register is polled until the camera reports booted
/// and not busy. Every operation on this type performs that handshake before
/// and after touching the command registers, so callers can sequence
/// operations without any extra coordination.
///
/// The driver owns the bus handle exclusively. It performs no locking; if the
/// camera needs to be shared between tasks, serialise access outside this
/// type.
///
/// Getters return an error when the camera responds with a value outside the
/// documented domain for the setting. Setters and the run commands mirror the
/// camera's fire-and-forget semantics: individual register-write failures are
/// logged and counted in [`transfer_faults`][Self::transfer_faults] rather
/// than aborting the operation, because the bracketing handshake is what
/// actually confirms progress.
#[derive(Clone, Debug)]
pub struct CciDriver<I2C> {
    /// The I²C bus the camera is accessible on.
    bus: I2C,

    /// The I²C address the camera is accessible at.
    address: u8,

    /// Count of bus-transfer failures that were swallowed and retried.
    transfer_faults: u32,
}

impl<I2C> CciDriver<I2C>
where
    I2C: i2c::Write + i2c::Read,
{
    /// Create a `CciDriver` for the camera at the given I²C address.
    ///
    /// The address is almost always [`CCI_ADDRESS`][crate::CCI_ADDRESS]; it is
    /// a parameter to keep the driver usable behind address-translating
    /// multiplexers. The status register is read once to confirm the endpoint
    /// accepts the address, and construction fails if that probe fails.
    pub fn new(bus: I2C, address: u8) -> Result<Self, Error<I2C>> {
        let mut driver = Self {
            bus,
            address,
            transfer_faults: 0,
        };
        if let Err(probe_error) = driver.read_register(register::STATUS) {
            error!("CCI: no response from camera at address {:#04X}", address);
            return Err(probe_error);
        }
        Ok(driver)
    }

    /// Read the camera's status register.
    pub fn status(&mut self) -> Result<StatusRegister, Error<I2C>> {
        let raw = self.read_register(register::STATUS)?;
        Ok(StatusRegister::from(raw))
    }

    /// The number of bus-transfer failures that have been logged and retried.
    ///
    /// Covers failed status polls during the handshake and failed register
    /// writes within a command. A steadily climbing count points at a wiring
    /// or bus-speed problem even when operations eventually succeed.
    pub fn transfer_faults(&self) -> u32 {
        self.transfer_faults
    }

    /// Reset the [`transfer_faults`][Self::transfer_faults] diagnostic to zero.
    pub fn reset_transfer_faults(&mut self) {
        self.transfer_faults = 0;
    }

    /// Request that a flat-field correction occur immediately.
    pub fn run_ffc(&mut self) {
        self.run(Command::SysRunFfc)
    }

    /// Get the camera uptime in milliseconds.
    ///
    /// The counter rolls over after roughly 1193 hours.
    pub fn uptime(&mut self) -> Result<u32, Error<I2C>> {
        self.get_u32(Command::SysGetUptime)
    }

    /// Get the telemetry enable state.
    pub fn telemetry_enabled(&mut self) -> Result<FeatureState, Error<I2C>> {
        self.get_enum(Command::SysGetTelemetryEnabled, "telemetry enable state")
    }

    /// Enable or disable the telemetry rows.
    pub fn set_telemetry_enabled(&mut self, state: FeatureState) {
        self.set_u32(Command::SysSetTelemetryEnabled, state.into())
    }

    /// Get the location of the telemetry rows.
    pub fn telemetry_location(&mut self) -> Result<TelemetryLocation, Error<I2C>> {
        self.get_enum(Command::SysGetTelemetryLocation, "telemetry location")
    }

    /// Place the telemetry rows before or after the image.
    pub fn set_telemetry_location(&mut self, location: TelemetryLocation) {
        self.set_u32(Command::SysSetTelemetryLocation, location.into())
    }

    /// Get the radiometry enable state.
    pub fn radiometry_enabled(&mut self) -> Result<FeatureState, Error<I2C>> {
        self.get_enum(Command::RadGetEnabled, "radiometry enable state")
    }

    /// Enable or disable radiometry.
    pub fn set_radiometry_enabled(&mut self, state: FeatureState) {
        self.set_u32(Command::RadSetEnabled, state.into())
    }

    /// Get the radiometry T-linear enable state.
    pub fn radiometry_tlinear_enabled(&mut self) -> Result<FeatureState, Error<I2C>> {
        self.get_enum(Command::RadGetTLinearEnabled, "T-linear enable state")
    }

    /// Enable or disable T-linear output.
    ///
    /// Only has an effect while radiometry is enabled.
    pub fn set_radiometry_tlinear_enabled(&mut self, state: FeatureState) {
        self.set_u32(Command::RadSetTLinearEnabled, state.into())
    }

    /// Get the AGC enable state.
    pub fn agc_enabled(&mut self) -> Result<FeatureState, Error<I2C>> {
        self.get_enum(Command::AgcGetEnabled, "AGC enable state")
    }

    /// Enable or disable automatic gain control.
    pub fn set_agc_enabled(&mut self, state: FeatureState) {
        self.set_u32(Command::AgcSetEnabled, state.into())
    }

    /// Get the AGC calculation enable state.
    pub fn agc_calc_enabled(&mut self) -> Result<FeatureState, Error<I2C>> {
        self.get_enum(Command::AgcGetCalcEnabled, "AGC calc enable state")
    }

    /// Enable or disable the AGC histogram calculation.
    pub fn set_agc_calc_enabled(&mut self, state: FeatureState) {
        self.set_u32(Command::AgcSetCalcEnabled, state.into())
    }

    /// Get the mode of the GPIO3 pin.
    pub fn gpio_mode(&mut self) -> Result<GpioMode, Error<I2C>> {
        self.get_enum(Command::OemGetGpioMode, "GPIO mode")
    }

    /// Set the mode of the GPIO3 pin.
    pub fn set_gpio_mode(&mut self, mode: GpioMode) {
        self.set_u32(Command::OemSetGpioMode, mode.into())
    }

    /// Reboot the camera.
    ///
    /// The camera drops off the bus for several seconds while it boots and
    /// runs its power-on flat-field correction, so a fixed settle delay is
    /// inserted before the closing handshake instead of polling straight
    /// away. The delay provider is usually `linux_embedded_hal::Delay`.
    pub fn run_reboot<D: DelayMs<u16>>(&mut self, delay: &mut D) {
        self.wait_ready();
        self.write_register_logged(register::COMMAND, Command::OemRunReboot.into());
        delay.delay_ms(REBOOT_SETTLE_MS);
        self.wait_ready();
    }

    /// Poll the status register until the camera reports booted and not busy.
    ///
    /// Transfer failures during polling are logged and the poll continues;
    /// there is no timeout. The I²C round-trip itself rate-limits the loop,
    /// so no sleep is inserted between polls.
    fn wait_ready(&mut self) {
        loop {
            match self.read_register(register::STATUS) {
                Ok(raw) => {
                    if StatusRegister::from(raw).ready() {
                        return;
                    }
                }
                Err(_) => {
                    self.transfer_faults = self.transfer_faults.saturating_add(1);
                    warn!("CCI: status poll failed, polling again");
                }
            }
        }
    }

    /// Bounded variant of the busy handshake.
    ///
    /// Polls the status register at most `max_polls` times and returns
    /// [`Error::HandshakeTimeout`] if the camera never reported ready. The
    /// command operations all use the unbounded wait; this is for callers
    /// that want to probe the camera's state without committing to it, for
    /// example right after power-up.
    pub fn wait_ready_bounded(&mut self, max_polls: usize) -> Result<(), Error<I2C>> {
        for _ in 0..max_polls {
            match self.read_register(register::STATUS) {
                Ok(raw) => {
                    if StatusRegister::from(raw).ready() {
                        return Ok(());
                    }
                }
                Err(_) => {
                    self.transfer_faults = self.transfer_faults.saturating_add(1);
                    warn!("CCI: status poll failed, polling again");
                }
            }
        }
        Err(Error::HandshakeTimeout)
    }

    /// Run `body` inside a not-busy window.
    ///
    /// The handshake runs on entry and again on exit, so a command written by
    /// `body` has completed by the time this returns.
    fn transaction<T>(&mut self, body: impl FnOnce(&mut Self) -> T) -> T {
        self.wait_ready();
        let result = body(self);
        self.wait_ready();
        result
    }

    /// Issue a command that carries no payload.
    fn run(&mut self, command: Command) {
        self.transaction(|cci| {
            cci.write_register_logged(register::COMMAND, command.into());
        })
    }

    /// Issue a command that returns a 32-bit value.
    fn get_u32(&mut self, command: Command) -> Result<u32, Error<I2C>> {
        self.transaction(|cci| {
            cci.write_register_logged(register::DATA_LENGTH, PAYLOAD_LENGTH_WORDS);
            cci.write_register_logged(register::COMMAND, command.into());
        });
        let ls_word = self.read_register(register::data_word(0))?;
        let ms_word = self.read_register(register::data_word(1))?;
        Ok(u32::from(ms_word) << 16 | u32::from(ls_word))
    }

    /// Issue a command that takes a 32-bit argument.
    fn set_u32(&mut self, command: Command, value: u32) {
        self.transaction(|cci| {
            cci.write_register_logged(register::data_word(0), (value & 0xFFFF) as u16);
            cci.write_register_logged(register::data_word(1), (value >> 16) as u16);
            // The datasheet documents writing DATA_LENGTH before COMMAND; this
            // is the order verified working on actual modules.
            cci.write_register_logged(register::COMMAND, command.into());
            cci.write_register_logged(register::DATA_LENGTH, PAYLOAD_LENGTH_WORDS);
        })
    }

    /// Issue a GET and validate the result against the setting's domain.
    fn get_enum<T>(&mut self, command: Command, name: &'static str) -> Result<T, Error<I2C>>
    where
        T: TryFromPrimitive<Primitive = u32>,
    {
        let raw = self.get_u32(command)?;
        T::try_from_primitive(raw).map_err(|_| LibraryError::UnknownValue(name, raw).into())
    }

    /// Write a 16-bit register, emitting `[reg_hi, reg_lo, val_hi, val_lo]`.
    fn write_register(&mut self, address: Address, value: u16) -> Result<(), Error<I2C>> {
        let address_bytes = address.as_bytes();
        let value_bytes = value.to_be_bytes();
        let frame = [
            address_bytes[0],
            address_bytes[1],
            value_bytes[0],
            value_bytes[1],
        ];
        self.bus
            .write(self.address, &frame)
            .map_err(Error::I2cWriteError)
    }

    /// Write a register, logging and counting a failure instead of returning it.
    fn write_register_logged(&mut self, address: Address, value: u16) {
        if self.write_register(address, value).is_err() {
            self.transfer_faults = self.transfer_faults.saturating_add(1);
            error!(
                "CCI: failed to write register {:?} with value {:#06X}",
                address, value
            );
        }
    }

    /// Read a 16-bit register.
    ///
    /// Two separate transactions: the register address is written, then the
    /// value is read back. The camera needs the stop condition between the
    /// phases, so the combined write-read transaction can't be used.
    fn read_register(&mut self, address: Address) -> Result<u16, Error<I2C>> {
        self.bus
            .write(self.address, &address.as_bytes())
            .map_err(|write_error| {
                error!("CCI: failed to select register {:?} for reading", address);
                Error::I2cWriteError(write_error)
            })?;
        let mut value = [0u8; 2];
        self.bus
            .read(self.address, &mut value)
            .map_err(|read_error| {
                error!("CCI: failed to read register {:?}", address);
                Error::I2cReadError(read_error)
            })?;
        Ok(u16::from_be_bytes(value))
    }
}
