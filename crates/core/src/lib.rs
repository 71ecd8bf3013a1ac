//! Cycle-driven core/DRAM simulation library.
//!
//! This crate implements a deterministic, single-threaded simulator of the
//! interaction between an out-of-order CPU core and a timing-accurate DRAM
//! subsystem:
//! 1. **Core:** reorder buffer, MSHR-coalesced non-blocking reads, non-blocking
//!    writes, and an ordered response inbox.
//! 2. **DRAM:** per-channel, per-bank open-row timing with a row-hit-first
//!    scheduling policy and a channel clock divider.
//! 3. **Trace:** a narrow `TraceSource` capability plus a reference ASCII file
//!    parser.
//! 4. **Simulation:** `Clock`, `Driver` (ties Core/DRAM/Clock together), and
//!    `SimStats`.

/// Address/cycle primitives and the crate-wide error type.
pub mod common;
/// Simulator configuration (defaults, geometry, timing parameters).
pub mod config;
/// Memory request/response types and the sink traits that connect Core and DRAM.
pub mod mem;
/// Reorder buffer, MSHR table, and the `Core` tick pipeline.
pub mod core;
/// DRAM channel/bank timing model and request scheduling.
pub mod dram;
/// Trace record type, the `TraceSource` trait, and the reference file format.
pub mod trace;
/// Top-level `Clock` and `Driver` composing Core, DRAM, and the trace source.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Crate-wide error and result types.
pub use crate::common::error::{SimError, SimResult};
/// Core cycle/address primitives.
pub use crate::common::{Address, Cycle};
/// The reorder-buffer core.
pub use crate::core::cpu::Core;
/// The DRAM controller.
pub use crate::dram::controller::Dram;
/// Top-level driver; owns Core, DRAM, Clock, and the trace source.
pub use crate::sim::driver::{Driver, SimReport};
/// Host-timed wrapper around a `SimReport`, with human-readable reporting.
pub use crate::stats::SimStats;
