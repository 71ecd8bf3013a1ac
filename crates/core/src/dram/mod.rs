//! Timing-accurate DRAM controller.
//!
//! This module implements a per-channel, per-bank open-row timing model:
//! 1. **Bank state:** [`bank::BankState`] tracks the open row and the
//!    earliest cycles at which the bank accepts a new request or a new
//!    row-conflicting request.
//! 2. **Channel state:** [`channel::ChannelState`] holds the per-channel
//!    waiting-request queue and bank array.
//! 3. **Controller:** [`controller::Dram`] decodes addresses into
//!    channel/bank/row, applies a row-hit-first scheduling policy each DRAM
//!    cycle, and emits timed responses for reads.

pub mod bank;
pub mod channel;
pub mod controller;

pub use bank::{BankState, ConflictState};
pub use channel::ChannelState;
pub use controller::{Dram, DramStats};
