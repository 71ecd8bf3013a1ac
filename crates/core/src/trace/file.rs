//! ASCII trace file format.
//!
//! Each line has the form:
//!
//! ```text
//! <preceding> <R|W> 0x<address> [0x<pc>]
//! ```
//!
//! `preceding` is a decimal count of non-memory instructions issued before
//! this access, `R`/`W` selects a read or write, `address` is a hexadecimal
//! physical address, and the trailing program counter field is accepted but
//! discarded.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::common::error::{SimResult, TraceError};
use crate::common::Address;
use crate::trace::record::TraceRecord;
use crate::trace::source::TraceSource;

/// A [`TraceSource`] that reads the ASCII trace format from a file.
#[derive(Debug)]
pub struct FileTraceSource {
    reader: BufReader<File>,
    line: String,
}

impl FileTraceSource {
    /// Opens `path` as a trace file.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Io`] if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, TraceError> {
        let file = File::open(path)?;
        Ok(Self {
            reader: BufReader::new(file),
            line: String::new(),
        })
    }

    /// Parses one already-read line into a [`TraceRecord`].
    fn parse_line(line: &str) -> Result<TraceRecord, TraceError> {
        let mut fields = line.split_whitespace();

        let preceding = fields
            .next()
            .ok_or_else(|| TraceError::Malformed(format!("missing preceding-instruction count in {line:?}")))?
            .parse::<u64>()
            .map_err(|e| TraceError::Malformed(format!("bad preceding-instruction count: {e}")))?;

        let kind = fields
            .next()
            .ok_or_else(|| TraceError::Malformed(format!("missing R/W field in {line:?}")))?;
        let is_write = match kind {
            "R" => false,
            "W" => true,
            other => return Err(TraceError::Malformed(format!("unknown request type {other:?}"))),
        };

        let addr_field = fields
            .next()
            .ok_or_else(|| TraceError::Malformed(format!("missing address field in {line:?}")))?;
        let addr_hex = addr_field
            .strip_prefix("0x")
            .ok_or_else(|| TraceError::Malformed(format!("address field {addr_field:?} is not 0x-prefixed")))?;
        let addr = u64::from_str_radix(addr_hex, 16)
            .map_err(|e| TraceError::Malformed(format!("bad address field: {e}")))?;

        // The trailing program-counter field, if present, is accepted but
        // not retained: nothing downstream of issue needs it.
        if let Some(pc_field) = fields.next() {
            if pc_field.strip_prefix("0x").is_none() {
                return Err(TraceError::Malformed(format!("pc field {pc_field:?} is not 0x-prefixed")));
            }
        }

        Ok(TraceRecord::new(Address::new(addr), preceding, is_write))
    }
}

impl TraceSource for FileTraceSource {
    fn next(&mut self) -> SimResult<TraceRecord> {
        self.line.clear();
        let bytes_read = self.reader.read_line(&mut self.line).map_err(TraceError::Io)?;
        if bytes_read == 0 {
            return Err(TraceError::EndOfStream.into());
        }
        Self::parse_line(self.line.trim_end()).map_err(Into::into)
    }
}
