// SPDX-License-Identifier: Apache-2.0
//! Shared test support: a scriptable mock of the camera's CCI register bank.


use embedded_hal::blocking::delay::DelayMs;

extern crate alloc;
use alloc::vec::Vec;

/// Delay provider that records how long it was asked to wait.
#[derive(Clone, Debug, Default)]
pub(crate) struct MockDelay {
    pub(crate) delays: Vec<u16>,
}

impl DelayMs<u16> for MockDelay {
    fn delay_ms(&mut self, ms: u16) {
        self.delays.push(ms);
    }
}
