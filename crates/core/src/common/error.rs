//! Crate-wide error types.
//!
//! This module defines the error kinds described in the design's error
//! handling section:
//! 1. **Trace errors:** I/O failure, malformed record, and end-of-stream.
//! 2. **Logic errors:** a memory response with no matching MSHR — a
//!    programmer error in the caller, not a recoverable condition.
//! 3. **Config errors:** invalid construction parameters (zero/negative
//!    widths, geometry that overflows an address).

use crate::common::Address;
use std::io;

/// Convenience alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;

/// Errors produced while reading a trace.
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    /// Underlying file or stream failure.
    #[error("trace I/O error: {0}")]
    Io(#[from] io::Error),

    /// A line did not parse, or named an unknown request type.
    #[error("malformed trace record: {0}")]
    Malformed(String),

    /// The trace has been fully consumed.
    #[error("trace exhausted")]
    EndOfStream,
}

/// Top-level error type for the simulator.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A trace-reading error (I/O, malformed record, or end-of-stream).
    #[error(transparent)]
    Trace(#[from] TraceError),

    /// The Core received a memory response for an address with no matching
    /// MSHR. This indicates a bug in the DRAM model or the Core's bookkeeping
    /// and is never expected in a correct run.
    #[error("logic error: received unexpected memory response for {0}")]
    Logic(Address),

    /// Invalid construction parameters: zero/negative `rob_size` or
    /// `superscalar_width`, or DRAM geometry bits that overflow an `Address`.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl SimError {
    /// Returns `true` if this error represents graceful trace exhaustion
    /// rather than an unrecoverable failure.
    #[must_use]
    pub const fn is_end_of_stream(&self) -> bool {
        matches!(self, Self::Trace(TraceError::EndOfStream))
    }
}
