//! Per-bank open-row state.

use crate::common::{Address, Cycle};

/// How a pending request's row relates to the bank's currently open row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConflictState {
    /// The request's row is already open: no activate/precharge needed.
    Hit,
    /// No row is open in this bank: an activate is needed, but not a precharge.
    Miss,
    /// A different row is open: both a precharge and an activate are needed.
    Conflict,
}

/// Timing state for a single DRAM bank.
///
/// `next_request` and `next_conflict` are the bank-local analogue of the
/// channel's `next_request`: the earliest cycle at which this bank can
/// accept another command, and the earliest cycle at which it can accept
/// another row-conflicting command, respectively.
#[derive(Clone, Copy, Debug)]
pub struct BankState {
    /// The currently open row, if any.
    open_row: Option<Address>,
    /// Earliest cycle this bank can service its next request.
    pub next_request: Cycle,
    /// Earliest cycle this bank can service its next row-conflicting request.
    pub next_conflict: Cycle,
}

impl BankState {
    /// Creates a bank with no open row and no outstanding timing constraints.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            open_row: None,
            next_request: Cycle::ZERO,
            next_conflict: Cycle::ZERO,
        }
    }

    /// Returns the currently open row, if any.
    #[must_use]
    pub const fn open_row(&self) -> Option<Address> {
        self.open_row
    }

    /// Sets the currently open row.
    pub fn set_open_row(&mut self, row: Address) {
        self.open_row = Some(row);
    }

    /// Returns this bank's conflict state with respect to `row`.
    #[must_use]
    pub fn conflict_state(&self, row: Address) -> ConflictState {
        match self.open_row {
            Some(open) if open == row => ConflictState::Hit,
            None => ConflictState::Miss,
            Some(_) => ConflictState::Conflict,
        }
    }
}

impl Default for BankState {
    fn default() -> Self {
        Self::new()
    }
}
