//! Ties the Core, DRAM, and trace source into the per-cycle simulation
//! loop.

use tracing::{debug, info};

use crate::common::error::SimResult;
use crate::common::Cycle;
use crate::config::Config;
use crate::core::cpu::Core;
use crate::dram::controller::{Dram, DramStats};
use crate::mem::ResponseSink;
use crate::sim::clock::Clock;
use crate::trace::source::TraceSource;

/// The outcome of a completed simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimReport {
    /// Total instructions retired.
    pub instructions_retired: u64,
    /// Number of cycles the simulation actually ran for.
    pub cycles: Cycle,
    /// Row-buffer scheduling outcomes observed during the run.
    pub dram: DramStats,
}

/// Owns the Core, DRAM controller, clock, and trace source, and runs the
/// per-cycle simulation loop.
pub struct Driver {
    core: Core,
    dram: Dram,
    clock: Clock,
    trace: Box<dyn TraceSource>,
}

impl Driver {
    /// Builds a driver from `config` and `trace`.
    #[must_use]
    pub fn new(config: &Config, trace: Box<dyn TraceSource>) -> Self {
        Self {
            core: Core::new(&config.core),
            dram: Dram::new(&config.dram),
            clock: Clock::new(),
            trace,
        }
    }

    /// Runs the simulation for at most `cycle_budget` cycles, stopping
    /// earlier if the trace is exhausted and every in-flight instruction
    /// has retired.
    ///
    /// Each cycle runs the Core (retire, deliver completed responses,
    /// issue), then the DRAM controller, then routes any responses DRAM
    /// produced this cycle back into the Core before advancing the clock —
    /// so a response issued this cycle is visible to the Core no earlier
    /// than the cycle after, since its `ready_cycle` is always strictly in
    /// the future relative to the cycle it was computed on.
    ///
    /// # Errors
    ///
    /// Returns an error if the Core reports a logic error or the trace
    /// source fails for a reason other than graceful exhaustion.
    pub fn run(&mut self, cycle_budget: u64) -> SimResult<SimReport> {
        info!(cycle_budget, "starting simulation run");
        let mut cycles_run: u64 = 0;
        while cycles_run < cycle_budget {
            let now = self.clock.now();
            self.core.tick(now, self.trace.as_mut(), &mut self.dram)?;
            let responses = self.dram.tick(now);
            for response in responses {
                self.core.receive_mem_response(response);
            }
            self.clock.tick();
            cycles_run += 1;

            if self.core.is_drained() {
                debug!(cycle = now.value(), "trace exhausted and reorder buffer empty");
                break;
            }
        }
        let report = SimReport {
            instructions_retired: self.core.instructions_retired(),
            cycles: self.clock.now(),
            dram: self.dram.stats(),
        };
        info!(
            instructions_retired = report.instructions_retired,
            cycles = report.cycles.value(),
            "simulation run complete"
        );
        Ok(report)
    }
}
