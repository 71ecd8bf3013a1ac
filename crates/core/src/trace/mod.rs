//! Instruction trace records and the source that produces them.
//!
//! The Core drives its issue pipeline from a stream of [`record::TraceRecord`]
//! values produced by anything implementing [`source::TraceSource`]; the
//! reference source, [`file::FileTraceSource`], reads the ASCII trace format
//! used by the timing model this simulator is based on.

pub mod file;
pub mod record;
pub mod source;

pub use file::FileTraceSource;
pub use record::TraceRecord;
pub use source::TraceSource;
