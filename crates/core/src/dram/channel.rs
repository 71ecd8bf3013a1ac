//! Per-channel request queue and bank array.

use std::collections::VecDeque;

use crate::common::{Address, Cycle};
use crate::dram::bank::BankState;
use crate::mem::MemRequestKind;

/// A memory request that has been routed to a channel, tagged with its
/// decoded bank and row so the scheduler never has to re-decode the
/// address.
#[derive(Clone, Copy, Debug)]
pub struct DramRequest {
    /// Read or write.
    pub kind: MemRequestKind,
    /// The original physical address.
    pub addr: Address,
    /// Decoded bank index within the channel.
    pub bank: usize,
    /// Decoded row index within the bank.
    pub row: Address,
}

/// Per-channel state: the waiting-request queue, the bank array, and the
/// earliest cycle the channel can issue its next command.
#[derive(Debug)]
pub struct ChannelState {
    /// Requests not yet issued to a bank.
    pub waiting: VecDeque<DramRequest>,
    /// Per-bank timing state.
    pub banks: Vec<BankState>,
    /// Earliest cycle this channel can issue another command.
    pub next_request: Cycle,
}

impl ChannelState {
    /// Creates a channel with `num_banks` idle banks and an empty queue.
    #[must_use]
    pub fn new(num_banks: usize) -> Self {
        Self {
            waiting: VecDeque::new(),
            banks: vec![BankState::new(); num_banks],
            next_request: Cycle::ZERO,
        }
    }
}
