//! Snapshot Writer
//!
//! Emits one `key<delimiter>value` line per record.

use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::warn;

use crate::error::Result;

/// Writes snapshot records to a sink
pub struct SnapshotWriter<W: Write> {
    sink: BufWriter<W>,
    delimiter: char,
    records: u64,
}

impl SnapshotWriter<File> {
    /// Create (or truncate) a snapshot file
    pub fn create(path: &Path, delimiter: char) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(file, delimiter))
    }
}

impl<W: Write> SnapshotWriter<W> {
    pub fn new(sink: W, delimiter: char) -> Self {
        Self {
            sink: BufWriter::new(sink),
            delimiter,
            records: 0,
        }
    }

    /// Append one record
    ///
    /// The format is unescaped: a key or value containing the delimiter
    /// is written as-is and will mis-split on reload.
    pub fn append<K: Display, V: Display>(&mut self, key: &K, value: &V) -> Result<()> {
        let key = key.to_string();
        let value = value.to_string();
        if key.contains(self.delimiter) || value.contains(self.delimiter) {
            warn!(
                delimiter = %self.delimiter,
                "record contains the delimiter and will not round-trip exactly"
            );
        }
        writeln!(self.sink, "{key}{}{value}", self.delimiter)?;
        self.records += 1;
        Ok(())
    }

    /// Flush and finish the snapshot, returning the record count
    pub fn finish(mut self) -> Result<u64> {
        self.sink.flush()?;
        Ok(self.records)
    }
}
