// SPDX-License-Identifier: Apache-2.0
//! Types shared by the register and command layers.

use core::fmt;

/// The Lepton's 7-bit I²C slave address.
///
/// Unlike many I²C devices the CCI address is fixed; it cannot be reconfigured.
pub const CCI_ADDRESS: u8 = 0x2A;

/// Marker newtype for CCI register addresses.
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Address(u16);

impl Address {
    /// Wrap the given register address in an `Address`.
    ///
    /// This function is intended to be used in const contexts, in other cases the
    /// [`From`][core::convert::From] implementations are probably easier to use.
    pub const fn new(address: u16) -> Self {
        Self(address)
    }

    /// The address as it appears on the wire, most significant byte first.
    pub(crate) fn as_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({:#06X})", self.0)
    }
}

impl From<u16> for Address {
    fn from(raw_address: u16) -> Self {
        Self(raw_address)
    }
}

impl From<Address> for u16 {
    fn from(address: Address) -> Self {
        address.0
    }
}
