//! End-to-end scenarios (S4–S6) driving Core, DRAM, and the Driver together
//! through the public API. S1–S3 (single-request DRAM timing) are covered
//! directly against `Dram` in `unit::dram`.

use std::collections::VecDeque;

use memsim_core::common::error::TraceError;
use memsim_core::config::{CoreConfig, DramConfig};
use memsim_core::trace::TraceRecord;
use memsim_core::{Address, Config, Driver, SimResult};

struct VecTraceSource {
    records: VecDeque<TraceRecord>,
}

impl VecTraceSource {
    fn new(records: Vec<TraceRecord>) -> Self {
        Self { records: records.into() }
    }
}

impl memsim_core::trace::TraceSource for VecTraceSource {
    fn next(&mut self) -> SimResult<TraceRecord> {
        self.records.pop_front().ok_or_else(|| TraceError::EndOfStream.into())
    }
}

/// S4 — a burst of independent, non-blocking writes retires at
/// `superscalar_width` per cycle with no DRAM-induced stall.
#[test]
fn s4_a_burst_of_writes_retires_at_full_issue_width() {
    let config = Config {
        core: CoreConfig { superscalar_width: 4, rob_size: 192 },
        dram: DramConfig::default(),
        cycle_budget: 1_000_000,
    };
    let records: Vec<_> = (0..100)
        .map(|i| TraceRecord::new(Address::new(0x1000 + i * 0x40), 0, true))
        .collect();
    let trace = VecTraceSource::new(records);
    let mut driver = Driver::new(&config, Box::new(trace));

    let report = driver.run(config.cycle_budget).unwrap();
    assert_eq!(report.instructions_retired, 100);
    // 100 instructions at width 4: 25 issue cycles, plus one cycle of
    // retirement lag before the last batch can retire.
    assert!(report.cycles.value() <= 26, "got {} cycles", report.cycles.value());
}

/// S5 — four reads to distinct rows in distinct banks of one channel issue
/// on successive channel-eligible ticks and all eventually retire.
#[test]
fn s5_independent_reads_to_distinct_banks_all_complete() {
    let config = Config {
        core: CoreConfig { superscalar_width: 4, rob_size: 192 },
        dram: DramConfig { channel_bits: 0, bank_bits: 2, ..DramConfig::default() },
        cycle_budget: 10_000,
    };
    // bank_lsb = row_size_bits(13) + channel_bits(0) = 13, row_lsb = bank_lsb
    // + bank_bits(2) = 15: put `i` in the bank field (bits 13–14) and also in
    // the row field (bits 15+) so all four requests hit distinct banks and
    // distinct rows.
    let records: Vec<_> = (0..4)
        .map(|i| TraceRecord::new(Address::new((i << 13) | (i << 15)), 0, false))
        .collect();
    let trace = VecTraceSource::new(records);
    let mut driver = Driver::new(&config, Box::new(trace));

    let report = driver.run(config.cycle_budget).unwrap();
    assert_eq!(report.instructions_retired, 4);
}

/// S6 — a long run of non-memory instructions fills and drains the ROB many
/// times over before the trailing memory reference is even issued.
#[test]
fn s6_a_long_prec_run_precedes_a_single_memory_reference() {
    let config = Config {
        core: CoreConfig { superscalar_width: 1, rob_size: 4 },
        dram: DramConfig::default(),
        cycle_budget: 10_000,
    };
    let trace = VecTraceSource::new(vec![TraceRecord::new(Address::new(0xA), 100, false)]);
    let mut driver = Driver::new(&config, Box::new(trace));

    let report = driver.run(config.cycle_budget).unwrap();
    assert_eq!(report.instructions_retired, 1);
    assert!(report.cycles.value() >= 100, "got {} cycles", report.cycles.value());
}
