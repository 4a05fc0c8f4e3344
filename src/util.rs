// SPDX-License-Identifier: Apache-2.0

/// Check if a bit is set, counting from the least significant bit.
pub(crate) fn is_bit_set(value: u16, bit: usize) -> bool {
    value & (1 << bit) != 0
}
