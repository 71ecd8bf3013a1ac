//! DRAM address decoding, row-buffer scheduling, and timing tests,
//! matching the concrete latency equations (P5–P10).

use memsim_core::config::DramConfig;
use memsim_core::mem::{MemRequest, RequestSink};
use memsim_core::{Address, Cycle, Dram};

fn config(channel_bits: u32, bank_bits: u32) -> DramConfig {
    DramConfig {
        channel_bits,
        bank_bits,
        clock_div: 4,
        t_ccd: 4,
        t_cl: 11,
        t_rcd: 11,
        t_rp: 11,
        t_ras: 28,
    }
}

// ══════════════════════════════════════════════════════════
// Address decoding
// ══════════════════════════════════════════════════════════

#[test]
fn decodes_channel_bank_row_fields() {
    let dram = Dram::new(&config(1, 2));
    // offset_bits=6, channel_bits=1, bank_bits=2: bank_lsb=13+1=14, row_lsb=14+2=16
    let addr = Address::new((0b101 << 16) | (0b11 << 14) | (1 << 6));
    assert_eq!(dram.map_channel(addr), 1);
    assert_eq!(dram.map_bank(addr), 0b11);
    assert_eq!(dram.map_row(addr), Address::new(0b101));
}

// ══════════════════════════════════════════════════════════
// Scenario S1 — cold miss
// ══════════════════════════════════════════════════════════

#[test]
fn s1_cold_miss_responds_after_rcd_ccd_cl() {
    let mut dram = Dram::new(&config(0, 0));
    dram.receive_mem_request(MemRequest::read(Address::new(0x0)));
    let responses = dram.tick(Cycle::new(0));
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0].ready_cycle, Cycle::new((11 + 4 + 11) * 4));
}

// ══════════════════════════════════════════════════════════
// Scenario S2 — row-buffer hit
// ══════════════════════════════════════════════════════════

#[test]
fn s2_repeat_access_to_open_row_is_a_fast_hit() {
    let mut dram = Dram::new(&config(0, 0));
    dram.receive_mem_request(MemRequest::read(Address::new(0x0)));
    let _ = dram.tick(Cycle::new(0));

    dram.receive_mem_request(MemRequest::read(Address::new(0x0)));
    let responses = dram.tick(Cycle::new(104));
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0].ready_cycle, Cycle::new(104 + (4 + 11) * 4));
}

// ══════════════════════════════════════════════════════════
// Scenario S3 — row conflict within the same bank
// ══════════════════════════════════════════════════════════

#[test]
fn s3_different_row_in_the_same_bank_is_a_conflict() {
    let mut dram = Dram::new(&config(0, 0));
    dram.receive_mem_request(MemRequest::read(Address::new(0x0)));
    let _ = dram.tick(Cycle::new(0));

    // A different row maps to the same bank in a single-bank config.
    dram.receive_mem_request(MemRequest::read(Address::new(0x2000)));
    let responses = dram.tick(Cycle::new(116));
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0].ready_cycle, Cycle::new(116 + (11 + 11 + 4 + 11) * 4));
}

// ══════════════════════════════════════════════════════════
// Writes never produce a response but still time the bank (P5/P9)
// ══════════════════════════════════════════════════════════

#[test]
fn writes_occupy_timing_but_never_respond() {
    let mut dram = Dram::new(&config(0, 0));
    dram.receive_mem_request(MemRequest::write(Address::new(0x1000)));
    assert!(dram.tick(Cycle::new(0)).is_empty());
}

// ══════════════════════════════════════════════════════════
// Row-hit-first scheduling across multiple waiting requests
// ══════════════════════════════════════════════════════════

#[test]
fn a_row_hit_is_preferred_over_an_earlier_queued_miss_to_another_bank() {
    let mut dram = Dram::new(&config(0, 1));
    // Bank 0 at row 0, opened by a prior access.
    dram.receive_mem_request(MemRequest::read(Address::new(0x0)));
    let _ = dram.tick(Cycle::new(0));

    // Queue a miss to bank 1 first, then a hit back to bank 0's open row.
    dram.receive_mem_request(MemRequest::read(Address::new(1 << 13)));
    dram.receive_mem_request(MemRequest::read(Address::new(0x0)));
    let responses = dram.tick(Cycle::new(104));
    // Only one request is serviced per channel per eligible tick; the hit
    // wins the scan regardless of queue position.
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0].ready_cycle, Cycle::new(104 + (4 + 11) * 4));
}

// ══════════════════════════════════════════════════════════
// Row-buffer statistics (for stats reporting)
// ══════════════════════════════════════════════════════════

#[test]
fn stats_tally_hits_misses_and_conflicts() {
    let mut dram = Dram::new(&config(0, 0));
    dram.receive_mem_request(MemRequest::read(Address::new(0x0)));
    let _ = dram.tick(Cycle::new(0));
    assert_eq!(dram.stats().row_misses, 1);

    dram.receive_mem_request(MemRequest::read(Address::new(0x0)));
    let _ = dram.tick(Cycle::new(104));
    assert_eq!(dram.stats().row_hits, 1);

    dram.receive_mem_request(MemRequest::read(Address::new(0x2000)));
    let _ = dram.tick(Cycle::new(116));
    assert_eq!(dram.stats().row_conflicts, 1);
}
