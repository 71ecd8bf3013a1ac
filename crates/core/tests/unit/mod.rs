//! Organizes black-box tests by the component under test.

/// Tests for DRAM address decoding, row-buffer scheduling, and timing.
pub mod dram;
/// Tests for the ASCII trace file format.
pub mod trace;
/// End-to-end scenarios driving Core, DRAM, and the Driver together.
pub mod scenarios;
