//! Physical address type.
//!
//! This module defines [`Address`], a strong wrapper over a 64-bit physical
//! address. Keeping it distinct from a bare `u64` prevents addresses from
//! being silently confused with cycle counts, bank/channel indices, or row
//! numbers elsewhere in the simulator.

use std::fmt;

/// A 64-bit physical address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(pub u64);

impl Address {
    /// Creates an address from a raw 64-bit value.
    #[inline]
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw 64-bit address value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl From<u64> for Address {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
