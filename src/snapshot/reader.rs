//! Snapshot Reader
//!
//! Reads snapshot records line by line, tolerating damage: a line that is
//! blank, lacks the delimiter, or fails key/value conversion is skipped
//! and counted, never surfaced as an error. Only I/O failures stop a load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::warn;

use crate::error::{Result, SkipKvError};

/// Reads snapshot records from a source
pub struct SnapshotReader<R: BufRead> {
    source: R,
    delimiter: char,
    line_no: usize,
    skipped: usize,
}

impl SnapshotReader<BufReader<File>> {
    /// Open a snapshot file for reading
    pub fn open(path: &Path, delimiter: char) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file), delimiter))
    }
}

impl<R: BufRead> SnapshotReader<R> {
    pub fn new(source: R, delimiter: char) -> Self {
        Self {
            source,
            delimiter,
            line_no: 0,
            skipped: 0,
        }
    }

    /// Read the next well-formed record, or `None` at end of input
    ///
    /// Skips over bad lines internally; `Err` means an I/O failure.
    pub fn next_record<K: FromStr, V: FromStr>(&mut self) -> Result<Option<(K, V)>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.source.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.line_no += 1;

            let record = line.trim_end_matches(&['\n', '\r'][..]);
            if record.is_empty() {
                self.skipped += 1;
                continue;
            }

            match self.parse_record(record) {
                Ok(parsed) => return Ok(Some(parsed)),
                Err(SkipKvError::Parse(reason)) => {
                    self.skipped += 1;
                    warn!(line = self.line_no, %reason, "skipping snapshot line");
                }
                Err(other) => return Err(other),
            }
        }
    }

    /// Parse one non-empty line into a record
    fn parse_record<K: FromStr, V: FromStr>(&self, record: &str) -> Result<(K, V)> {
        // Split at the first delimiter; everything after it is the value
        let (key, value) = record
            .split_once(self.delimiter)
            .ok_or_else(|| SkipKvError::Parse("missing delimiter".to_string()))?;

        let key = key
            .parse::<K>()
            .map_err(|_| SkipKvError::Parse(format!("unparseable key {key:?}")))?;
        let value = value
            .parse::<V>()
            .map_err(|_| SkipKvError::Parse(format!("unparseable value {value:?}")))?;

        Ok((key, value))
    }

    /// Lines dropped so far (blank, malformed, or unparseable)
    pub fn lines_skipped(&self) -> usize {
        self.skipped
    }
}
