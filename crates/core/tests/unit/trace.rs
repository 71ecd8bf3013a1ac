//! ASCII trace file parsing tests.

use std::io::Write;

use memsim_core::trace::{FileTraceSource, TraceSource};
use memsim_core::Address;

fn trace_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn reads_reads_and_writes_in_program_order() {
    let file = trace_file("0 R 0x10\n2 W 0x20 0xcafe\n");
    let mut source = FileTraceSource::open(file.path()).unwrap();

    let first = source.next().unwrap();
    assert_eq!(first.addr, Address::new(0x10));
    assert_eq!(first.preceding, 0);
    assert!(!first.is_write);

    let second = source.next().unwrap();
    assert_eq!(second.addr, Address::new(0x20));
    assert_eq!(second.preceding, 2);
    assert!(second.is_write);
}

#[test]
fn end_of_stream_is_graceful() {
    let file = trace_file("0 R 0x10\n");
    let mut source = FileTraceSource::open(file.path()).unwrap();
    let _ = source.next().unwrap();
    assert!(source.next().unwrap_err().is_end_of_stream());
}

#[test]
fn an_unknown_request_type_is_malformed_not_end_of_stream() {
    let file = trace_file("0 Q 0x10\n");
    let mut source = FileTraceSource::open(file.path()).unwrap();
    let err = source.next().unwrap_err();
    assert!(!err.is_end_of_stream());
}

#[test]
fn opening_a_missing_file_is_an_io_error() {
    assert!(FileTraceSource::open("/nonexistent/path/to/a/trace").is_err());
}
