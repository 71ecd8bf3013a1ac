//! A single trace record: a memory access preceded by some number of
//! non-memory instructions.

use crate::common::Address;

/// One line of an instruction trace.
///
/// `preceding` counts the non-memory instructions issued before this
/// record's memory access; the Core issues each of those as a one-cycle
/// retire-immediately slot before issuing the access itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceRecord {
    /// The memory address accessed.
    pub addr: Address,
    /// Number of preceding non-memory instructions.
    pub preceding: u64,
    /// `true` for a write, `false` for a read.
    pub is_write: bool,
}

impl TraceRecord {
    /// Creates a trace record.
    #[must_use]
    pub const fn new(addr: Address, preceding: u64, is_write: bool) -> Self {
        Self { addr, preceding, is_write }
    }
}
