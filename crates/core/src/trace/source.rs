//! The trace-source capability.

use crate::common::error::SimResult;
use crate::trace::record::TraceRecord;

/// A source of [`TraceRecord`]s for the Core to issue.
///
/// Exhaustion is signaled through the crate's ordinary error channel, as
/// [`SimError::Trace(TraceError::EndOfStream)`](crate::common::error::SimError::Trace),
/// rather than a sentinel record — `Err` is the right shape for "no more
/// input," and `is_end_of_stream` lets callers treat it as the graceful
/// stop condition it is rather than a failure.
pub trait TraceSource {
    /// Returns the next trace record, or an end-of-stream error once the
    /// trace is exhausted.
    fn next(&mut self) -> SimResult<TraceRecord>;
}
