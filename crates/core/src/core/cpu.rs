//! The Core's tick pipeline.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::common::error::{SimError, SimResult};
use crate::common::{Address, Cycle};
use crate::config::CoreConfig;
use crate::core::mshr::MshrTable;
use crate::core::rob::Rob;
use crate::mem::{MemRequest, MemResponse, RequestSink, ResponseSink};
use crate::trace::{TraceRecord, TraceSource};

/// A memory response queued for delivery at a future cycle, ordered so the
/// earliest-arriving response is always at the top of the min-heap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct WaitingResponse {
    ready_cycle: Cycle,
    addr: Address,
}

/// A cycle-driven out-of-order core: a reorder buffer, an MSHR table that
/// coalesces in-flight reads, and a priority-ordered inbox for DRAM
/// responses.
///
/// Each [`Self::tick`] runs retire, then memory-response delivery, then
/// issue, in that order — matching the reference model's `tickRetire` /
/// `tickMem` / `tickIssue` sequencing, which lets a response delivered this
/// cycle unblock a retirement in the very same cycle it arrives, while a
/// newly issued read cannot retire until at least the next cycle.
#[derive(Debug)]
pub struct Core {
    rob: Rob,
    mshr_table: MshrTable,
    superscalar_width: usize,
    cur_record: Option<TraceRecord>,
    trace_exhausted: bool,
    waiting_responses: BinaryHeap<Reverse<WaitingResponse>>,
    instructions_retired: u64,
}

impl Core {
    /// Creates a core with an empty reorder buffer sized per `config`.
    #[must_use]
    pub fn new(config: &CoreConfig) -> Self {
        Self {
            rob: Rob::new(config.rob_size),
            mshr_table: MshrTable::new(),
            superscalar_width: config.superscalar_width,
            cur_record: None,
            trace_exhausted: false,
            waiting_responses: BinaryHeap::new(),
            instructions_retired: 0,
        }
    }

    /// Returns the total number of instructions retired so far.
    #[must_use]
    pub const fn instructions_retired(&self) -> u64 {
        self.instructions_retired
    }

    /// Returns `true` once the trace is exhausted, no record is pending
    /// issue, and the reorder buffer holds no in-flight instructions.
    ///
    /// This is the Core's half of the simulation's overall stopping
    /// condition; the other half is the DRAM model having nothing left in
    /// flight, which follows automatically once the ROB is empty, since
    /// every in-flight read holds a ROB slot until it retires.
    #[must_use]
    pub fn is_drained(&self) -> bool {
        self.trace_exhausted && self.cur_record.is_none() && self.rob.is_empty()
    }

    /// Advances the core by one cycle.
    ///
    /// # Errors
    ///
    /// Returns an error if a memory response arrives for an address with no
    /// matching MSHR (a bug in the caller's wiring), or if the trace source
    /// fails for a reason other than graceful exhaustion.
    pub fn tick(&mut self, now: Cycle, trace: &mut dyn TraceSource, dram: &mut dyn RequestSink) -> SimResult<()> {
        self.tick_retire(now);
        self.tick_mem(now)?;
        self.tick_issue(now, trace, dram)?;
        Ok(())
    }

    /// Retires up to `superscalar_width` instructions whose retirement
    /// cycle has arrived.
    fn tick_retire(&mut self, now: Cycle) {
        let mut remaining = self.superscalar_width;
        while remaining > 0 {
            match self.rob.peek_head() {
                Some(retire_at) if retire_at <= now => {
                    self.rob.commit_head();
                    self.instructions_retired += 1;
                    remaining -= 1;
                }
                _ => break,
            }
        }
    }

    /// Delivers every response whose `ready_cycle` has arrived, stamping
    /// every ROB slot that was waiting on it with its retirement cycle.
    fn tick_mem(&mut self, now: Cycle) -> SimResult<()> {
        loop {
            match self.waiting_responses.peek() {
                Some(Reverse(top)) if top.ready_cycle <= now => {}
                _ => break,
            }
            let Some(Reverse(response)) = self.waiting_responses.pop() else {
                break;
            };
            self.receive_mem_address(response.addr, now)?;
        }
        Ok(())
    }

    /// Stamps every ROB slot waiting on `addr` with `now` and retires its
    /// MSHR entry.
    fn receive_mem_address(&mut self, addr: Address, now: Cycle) -> SimResult<()> {
        let mshr = self.mshr_table.remove(addr).ok_or(SimError::Logic(addr))?;
        for &index in mshr.waiters() {
            self.rob.complete(index, now);
        }
        Ok(())
    }

    /// Issues up to `superscalar_width` instructions into the reorder
    /// buffer: one cycle per preceding non-memory instruction, then the
    /// memory access itself.
    fn tick_issue(&mut self, now: Cycle, trace: &mut dyn TraceSource, dram: &mut dyn RequestSink) -> SimResult<()> {
        let mut remaining = self.superscalar_width;
        while remaining > 0 && !self.rob.is_full() {
            if self.cur_record.is_none() && !self.trace_exhausted {
                match trace.next() {
                    Ok(record) => self.cur_record = Some(record),
                    Err(err) if err.is_end_of_stream() => self.trace_exhausted = true,
                    Err(err) => return Err(err),
                }
            }
            let Some(record) = self.cur_record.as_mut() else {
                break;
            };

            if record.preceding > 0 {
                record.preceding -= 1;
                self.rob.allocate(now);
            } else {
                let addr = record.addr;
                if record.is_write {
                    dram.receive_mem_request(MemRequest::write(addr));
                    self.rob.allocate(now);
                } else {
                    let rob_index = self.rob.allocate(Cycle::MAX);
                    let mshr = self.mshr_table.get_or_insert(addr);
                    mshr.add_waiter(rob_index);
                    if !mshr.is_issued() {
                        dram.receive_mem_request(MemRequest::read(addr));
                        mshr.mark_issued();
                    }
                }
                self.cur_record = None;
            }
            remaining -= 1;
        }
        Ok(())
    }
}

impl ResponseSink for Core {
    fn receive_mem_response(&mut self, response: MemResponse) {
        self.waiting_responses.push(Reverse(WaitingResponse {
            ready_cycle: response.ready_cycle,
            addr: response.addr,
        }));
    }
}
