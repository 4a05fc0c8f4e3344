// SPDX-License-Identifier: Apache-2.0
//! Command IDs and the enumerated values carried in command payloads.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The CCI command IDs used by this crate.
///
/// A command ID packs the owning module's base address, the command number,
/// and the access type (get, set, or run) into one 16-bit value. The values
/// here are taken from the Lepton software interface description document.
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum Command {
    /// AGC module: get the AGC enable state.
    AgcGetEnabled = 0x0100,
    /// AGC module: set the AGC enable state.
    AgcSetEnabled = 0x0101,
    /// AGC module: get the AGC calculation enable state.
    AgcGetCalcEnabled = 0x0148,
    /// AGC module: set the AGC calculation enable state.
    AgcSetCalcEnabled = 0x0149,
    /// SYS module: get the camera uptime in milliseconds.
    SysGetUptime = 0x020C,
    /// SYS module: get the telemetry enable state.
    SysGetTelemetryEnabled = 0x0218,
    /// SYS module: set the telemetry enable state.
    SysSetTelemetryEnabled = 0x0219,
    /// SYS module: get the telemetry location.
    SysGetTelemetryLocation = 0x0220,
    /// SYS module: set the telemetry location.
    SysSetTelemetryLocation = 0x0221,
    /// SYS module: run a flat-field correction.
    SysRunFfc = 0x0242,
    /// OEM module: reboot the camera.
    OemRunReboot = 0x4840,
    /// OEM module: get the GPIO3 pin mode.
    OemGetGpioMode = 0x4854,
    /// OEM module: set the GPIO3 pin mode.
    OemSetGpioMode = 0x4855,
    /// RAD module: get the radiometry enable state.
    RadGetEnabled = 0x4E10,
    /// RAD module: set the radiometry enable state.
    RadSetEnabled = 0x4E11,
    /// RAD module: get the radiometry T-linear enable state.
    RadGetTLinearEnabled = 0x4EC0,
    /// RAD module: set the radiometry T-linear enable state.
    RadSetTLinearEnabled = 0x4EC1,
}

/// Enable state for the camera features that are simple on/off switches.
///
/// Used by the telemetry, radiometry, T-linear, AGC, and AGC calculation
/// commands. The camera widens this to a 32-bit word on the wire.
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
#[repr(u32)]
pub enum FeatureState {
    Disabled = 0,
    Enabled = 1,
}

impl From<bool> for FeatureState {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

impl From<FeatureState> for bool {
    fn from(state: FeatureState) -> Self {
        state == FeatureState::Enabled
    }
}

/// Where the camera places the telemetry rows relative to the image.
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
#[repr(u32)]
pub enum TelemetryLocation {
    Header = 0,
    Footer = 1,
}

/// The function assigned to the camera's GPIO3 pin.
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
#[repr(u32)]
pub enum GpioMode {
    /// Plain GPIO, the power-on default.
    Gpio = 0,
    I2cMaster = 1,
    SpiMasterVsync = 2,
    SpiMasterNoSs = 3,
    SpiSlaveVsync = 4,
    /// Pulse GPIO3 at each frame boundary.
    Vsync = 5,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn command_ids() {
        assert_eq!(u16::from(Command::SysRunFfc), 0x0242);
        assert_eq!(u16::from(Command::SysGetUptime), 0x020C);
        assert_eq!(u16::from(Command::SysSetTelemetryEnabled), 0x0219);
        assert_eq!(u16::from(Command::SysGetTelemetryEnabled), 0x0218);
        assert_eq!(u16::from(Command::SysSetTelemetryLocation), 0x0221);
        assert_eq!(u16::from(Command::SysGetTelemetryLocation), 0x0220);
        assert_eq!(u16::from(Command::RadSetEnabled), 0x4E11);
        assert_eq!(u16::from(Command::RadGetEnabled), 0x4E10);
        assert_eq!(u16::from(Command::RadSetTLinearEnabled), 0x4EC1);
        assert_eq!(u16::from(Command::RadGetTLinearEnabled), 0x4EC0);
        assert_eq!(u16::from(Command::AgcGetEnabled), 0x0100);
        assert_eq!(u16::from(Command::AgcSetEnabled), 0x0101);
        assert_eq!(u16::from(Command::AgcGetCalcEnabled), 0x0148);
        assert_eq!(u16::from(Command::AgcSetCalcEnabled), 0x0149);
        assert_eq!(u16::from(Command::OemGetGpioMode), 0x4854);
        assert_eq!(u16::from(Command::OemSetGpioMode), 0x4855);
        assert_eq!(u16::from(Command::OemRunReboot), 0x4840);
    }

    #[test]
    fn vsync_wire_value() {
        assert_eq!(u32::from(GpioMode::Vsync), 5);
    }

    #[test]
    fn feature_state_from_bool() {
        assert_eq!(FeatureState::from(true), FeatureState::Enabled);
        assert_eq!(FeatureState::from(false), FeatureState::Disabled);
        assert!(bool::from(FeatureState::Enabled));
    }

    #[test]
    fn out_of_domain_values_are_rejected() {
        assert!(FeatureState::try_from(2u32).is_err());
        assert!(TelemetryLocation::try_from(2u32).is_err());
        assert!(GpioMode::try_from(6u32).is_err());
    }
}
