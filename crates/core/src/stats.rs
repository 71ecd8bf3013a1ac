//! Simulation statistics reporting.
//!
//! Wraps a [`SimReport`] with the host-side wall-clock time the run took,
//! and renders both the Core's and the DRAM's outcomes the way a human
//! operator reads them at the end of a batch run.

use std::time::Instant;

use crate::sim::driver::SimReport;

/// Host-side wall-clock timing plus the simulator's own [`SimReport`].
#[derive(Debug, Clone, Copy)]
pub struct SimStats {
    start_time: Instant,
    report: SimReport,
}

impl SimStats {
    /// Wraps `report`, timed against `start_time`.
    #[must_use]
    pub const fn new(start_time: Instant, report: SimReport) -> Self {
        Self { start_time, report }
    }

    /// Returns the wrapped simulation report.
    #[must_use]
    pub const fn report(&self) -> SimReport {
        self.report
    }

    /// Prints a human-readable summary to stdout.
    ///
    /// # Panics
    ///
    /// This function will not panic: every division guards its denominator
    /// against zero (`cycles` and the row-buffer access count are both
    /// floored at 1 before use).
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cycles = self.report.cycles.value().max(1) as f64;
        let retired = self.report.instructions_retired;
        let ipc = retired as f64 / cycles;
        let mips = (retired as f64 / seconds) / 1_000_000.0;

        println!("==========================================================");
        println!("MEMORY SYSTEM SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_cycles               {}", self.report.cycles.value());
        println!("sim_insts_retired        {retired}");
        println!("sim_ipc                  {ipc:.4}");
        println!("sim_mips                 {mips:.2}");
        println!("----------------------------------------------------------");

        let dram = self.report.dram;
        let row_accesses = (dram.row_hits + dram.row_misses + dram.row_conflicts).max(1) as f64;
        println!("DRAM ROW BUFFER");
        println!(
            "  hits                   {} ({:.2}%)",
            dram.row_hits,
            dram.row_hits as f64 / row_accesses * 100.0
        );
        println!(
            "  misses                 {} ({:.2}%)",
            dram.row_misses,
            dram.row_misses as f64 / row_accesses * 100.0
        );
        println!(
            "  conflicts              {} ({:.2}%)",
            dram.row_conflicts,
            dram.row_conflicts as f64 / row_accesses * 100.0
        );
        println!("==========================================================");
    }
}
