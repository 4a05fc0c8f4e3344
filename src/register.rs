// SPDX-License-Identifier: Apache-2.0
//! The CCI control registers.
//!
//! The command protocol runs over a small bank of 16-bit registers. A command
//! is issued by loading the data registers, writing a command ID to
//! [`COMMAND`], and polling [`STATUS`] until the camera reports that it has
//! finished. [`DATA_LENGTH`] carries the payload size in 16-bit words.

use crate::common::Address;
use crate::util::is_bit_set;

/// The camera status register.
pub const STATUS: Address = Address::new(0x0002);

/// The register a command ID is written to in order to execute it.
pub const COMMAND: Address = Address::new(0x0004);

/// The number of 16-bit words in the data registers used by a command.
pub const DATA_LENGTH: Address = Address::new(0x0006);

/// The first data register.
pub const DATA_0: Address = Address::new(0x0008);

/// The address of the `index`-th data register.
///
/// Data registers are contiguous 16-bit words starting at [`DATA_0`]. The
/// commands in this crate only ever use the first two.
pub const fn data_word(index: u16) -> Address {
    Address::new(0x0008 + index * 2)
}

/// Decoded view of the low byte of the [`STATUS`] register.
///
/// Only the three least significant bits carry boot and busy state; the upper
/// byte holds the previous command's response code and is not interpreted
/// here.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StatusRegister {
    /// Set while the camera is executing a command. Bit 0.
    busy: bool,

    /// Set once the camera has loaded its boot mode. Bit 1.
    boot_mode: bool,

    /// Set once the camera has finished booting. Bit 2.
    boot_status: bool,
}

impl StatusRegister {
    /// Whether the camera is booted and ready to accept a command.
    ///
    /// Equivalent to the low byte masked with 0x07 reading 0x06.
    pub fn ready(&self) -> bool {
        self.boot_status && self.boot_mode && !self.busy
    }

    /// Whether the camera is currently executing a command.
    pub fn busy(&self) -> bool {
        self.busy
    }

    /// Whether the camera has finished booting.
    pub fn booted(&self) -> bool {
        self.boot_status
    }
}

impl From<u16> for StatusRegister {
    fn from(raw: u16) -> Self {
        Self {
            busy: is_bit_set(raw, 0),
            boot_mode: is_bit_set(raw, 1),
            boot_status: is_bit_set(raw, 2),
        }
    }
}
