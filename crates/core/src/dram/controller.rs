//! DRAM controller: address decoding, row-hit-first scheduling, and timing.

use crate::common::{Address, Cycle};
use crate::config::{DramConfig, OFFSET_BITS, ROW_SIZE_BITS};
use crate::dram::bank::ConflictState;
use crate::dram::channel::{ChannelState, DramRequest};
use crate::mem::{MemRequest, MemRequestKind, MemResponse, RequestSink};

/// A timing-accurate, multi-channel, multi-bank DRAM controller.
///
/// Addresses are decoded into `channel:row:bank:offset` fields using fixed
/// offset/row-size widths and configurable channel/bank widths. Each DRAM
/// cycle (one simulator cycle out of every `clock_div` cycles), every
/// channel considers issuing at most one waiting request, preferring a
/// request that hits the currently open row in its bank.
#[derive(Debug)]
pub struct Dram {
    channel_bits: u32,
    bank_bits: u32,
    bank_lsb: u32,
    row_lsb: u32,
    clock_div: i64,
    t_ccd: i64,
    t_cl: i64,
    t_rcd: i64,
    t_rp: i64,
    t_ras: i64,
    channels: Vec<ChannelState>,
    row_hits: u64,
    row_misses: u64,
    row_conflicts: u64,
}

/// A snapshot of row-buffer scheduling outcomes, for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DramStats {
    /// Requests that found their row already open.
    pub row_hits: u64,
    /// Requests that found no row open in their bank.
    pub row_misses: u64,
    /// Requests that found a different row open in their bank.
    pub row_conflicts: u64,
}

impl Dram {
    /// Builds a controller from `config`, with `2^channel_bits` channels
    /// each holding `2^bank_bits` banks.
    #[must_use]
    pub fn new(config: &DramConfig) -> Self {
        let bank_lsb = ROW_SIZE_BITS + config.channel_bits;
        let row_lsb = bank_lsb + config.bank_bits;
        let num_channels = 1usize << config.channel_bits;
        let num_banks = 1usize << config.bank_bits;
        Self {
            channel_bits: config.channel_bits,
            bank_bits: config.bank_bits,
            bank_lsb,
            row_lsb,
            clock_div: config.clock_div,
            t_ccd: config.t_ccd,
            t_cl: config.t_cl,
            t_rcd: config.t_rcd,
            t_rp: config.t_rp,
            t_ras: config.t_ras,
            channels: (0..num_channels).map(|_| ChannelState::new(num_banks)).collect(),
            row_hits: 0,
            row_misses: 0,
            row_conflicts: 0,
        }
    }

    /// Returns a snapshot of row-buffer hit/miss/conflict counts.
    #[must_use]
    pub const fn stats(&self) -> DramStats {
        DramStats {
            row_hits: self.row_hits,
            row_misses: self.row_misses,
            row_conflicts: self.row_conflicts,
        }
    }

    /// Extracts the channel index from a physical address.
    #[must_use]
    pub fn map_channel(&self, addr: Address) -> usize {
        let mask = (1u64 << self.channel_bits) - 1;
        ((addr.value() >> OFFSET_BITS) & mask) as usize
    }

    /// Extracts the bank index from a physical address.
    #[must_use]
    pub fn map_bank(&self, addr: Address) -> usize {
        let mask = (1u64 << self.bank_bits) - 1;
        ((addr.value() >> self.bank_lsb) & mask) as usize
    }

    /// Extracts the row index from a physical address.
    #[must_use]
    pub fn map_row(&self, addr: Address) -> Address {
        Address::new(addr.value() >> self.row_lsb)
    }

    /// Advances the controller by one simulator cycle, returning any read
    /// responses issued this cycle.
    ///
    /// A no-op on simulator cycles that do not align to `clock_div`: the
    /// channel clock runs slower than the core clock. On an aligned cycle,
    /// each channel that is free to issue (`next_request <= now`) selects
    /// [`Self::best_request`] from its waiting queue and issues it.
    pub fn tick(&mut self, now: Cycle) -> Vec<MemResponse> {
        if now.value() % self.clock_div != 0 {
            return Vec::new();
        }
        let mut responses = Vec::new();
        for idx in 0..self.channels.len() {
            if self.channels[idx].next_request <= now {
                if let Some(req) = self.best_request(idx, now) {
                    if let Some(response) = self.issue_request(idx, req, now) {
                        responses.push(response);
                    }
                }
            }
        }
        responses
    }

    /// Chooses, removes, and returns the best request to issue from channel
    /// `idx`'s waiting queue, or `None` if no request is currently
    /// schedulable.
    ///
    /// A row-buffer hit is always preferred and, once found, short-circuits
    /// the scan (the waiting queue is scanned oldest-first, so the earliest
    /// hit wins). Otherwise the first schedulable request is kept as a
    /// fallback candidate, with row-conflicting requests skipped while the
    /// bank's `next_conflict` deadline has not passed.
    fn best_request(&mut self, idx: usize, now: Cycle) -> Option<DramRequest> {
        let chan = &self.channels[idx];
        let mut best: Option<usize> = None;
        for (pos, req) in chan.waiting.iter().enumerate() {
            let bank = &chan.banks[req.bank];
            if bank.next_request > now {
                continue;
            }
            let state = bank.conflict_state(req.row);
            if state == ConflictState::Hit {
                best = Some(pos);
                break;
            }
            if best.is_none() {
                if state == ConflictState::Conflict && bank.next_conflict > now {
                    continue;
                }
                best = Some(pos);
            }
        }
        best.and_then(|pos| self.channels[idx].waiting.remove(pos))
    }

    /// Applies the timing effects of issuing `req` on channel `idx` and
    /// returns the resulting response, if this was a read.
    ///
    /// Mirrors the reference timing equations: a precharge delay is added
    /// only on a row conflict, an activate delay is added on any miss or
    /// conflict, and a column delay is always added. The channel and bank
    /// become free for their next command at `now + req_delay * clock_div`;
    /// data is ready `t_cl` DRAM cycles after that.
    fn issue_request(&mut self, idx: usize, req: DramRequest, now: Cycle) -> Option<MemResponse> {
        let state = self.channels[idx].banks[req.bank].conflict_state(req.row);
        match state {
            ConflictState::Hit => self.row_hits += 1,
            ConflictState::Miss => self.row_misses += 1,
            ConflictState::Conflict => self.row_conflicts += 1,
        }
        let mut req_delay: i64 = 0;

        self.channels[idx].next_request = now + self.t_ccd * self.clock_div;

        if state != ConflictState::Hit {
            if state == ConflictState::Conflict {
                req_delay += self.t_rp;
            }
            let bank = &mut self.channels[idx].banks[req.bank];
            bank.next_conflict = now + (req_delay + self.t_ras) * self.clock_div;
            req_delay += self.t_rcd;
            bank.set_open_row(req.row);
        }

        req_delay += self.t_ccd;
        let bank = &mut self.channels[idx].banks[req.bank];
        bank.next_request = now + req_delay * self.clock_div;
        let data_delay = req_delay + self.t_cl;
        let ready_cycle = now + data_delay * self.clock_div;

        match req.kind {
            MemRequestKind::Read => Some(MemResponse::new(req.addr, ready_cycle)),
            MemRequestKind::Write => None,
        }
    }
}

impl RequestSink for Dram {
    /// Decodes `request`'s address and enqueues it on its channel.
    fn receive_mem_request(&mut self, request: MemRequest) {
        let channel = self.map_channel(request.addr);
        let bank = self.map_bank(request.addr);
        let row = self.map_row(request.addr);
        let dram_req = DramRequest {
            kind: request.kind,
            addr: request.addr,
            bank,
            row,
        };
        self.channels[channel].waiting.push_back(dram_req);
    }
}
