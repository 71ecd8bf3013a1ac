//! Request and response payloads exchanged between the Core and DRAM.

use crate::common::{Address, Cycle};

/// Whether a memory request is a load or a store.
///
/// Stores are fire-and-forget: the DRAM model still schedules and times
/// them, but the Core never waits on a store's completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemRequestKind {
    /// A non-blocking read, coalesced in the Core's MSHR table.
    Read,
    /// A non-blocking write.
    Write,
}

/// A single memory access issued by the Core to the DRAM controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MemRequest {
    /// Read or write.
    pub kind: MemRequestKind,
    /// The physical address accessed.
    pub addr: Address,
}

impl MemRequest {
    /// Creates a new memory request.
    #[must_use]
    pub const fn new(kind: MemRequestKind, addr: Address) -> Self {
        Self { kind, addr }
    }

    /// Creates a read request for `addr`.
    #[must_use]
    pub const fn read(addr: Address) -> Self {
        Self::new(MemRequestKind::Read, addr)
    }

    /// Creates a write request for `addr`.
    #[must_use]
    pub const fn write(addr: Address) -> Self {
        Self::new(MemRequestKind::Write, addr)
    }
}

/// The DRAM controller's completion signal for a single request.
///
/// Only reads produce a response the Core acts on; writes are still timed
/// by the DRAM model but the controller does not emit a `MemResponse` for
/// them, since there is nothing on the Core side waiting on a store.
///
/// `ready_cycle` is the cycle at which the data becomes available, computed
/// by the DRAM model at issue time; it is ordinarily in the future relative
/// to the cycle the response is delivered on, and the receiver is expected
/// to queue it rather than act on it immediately.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MemResponse {
    /// The address this response completes.
    pub addr: Address,
    /// The cycle at which the requested data becomes available.
    pub ready_cycle: Cycle,
}

impl MemResponse {
    /// Creates a response for `addr`, ready at `ready_cycle`.
    #[must_use]
    pub const fn new(addr: Address, ready_cycle: Cycle) -> Self {
        Self { addr, ready_cycle }
    }
}

/// A narrow capability for accepting memory requests.
///
/// Implemented by the DRAM controller; kept separate from [`ResponseSink`]
/// so a component that only issues requests (and never needs completions
/// routed back to it) does not have to implement both.
pub trait RequestSink {
    /// Accepts `request`, to be serviced at some future cycle.
    fn receive_mem_request(&mut self, request: MemRequest);
}

/// A narrow capability for accepting memory responses.
///
/// Implemented by the Core; the DRAM controller does not hold one of these
/// directly; the [`Driver`](crate::sim::driver::Driver) drains completed
/// responses from the DRAM model each cycle and delivers them here.
pub trait ResponseSink {
    /// Delivers a completed read response.
    fn receive_mem_response(&mut self, response: MemResponse);
}
