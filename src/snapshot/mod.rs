//! Snapshot Module
//!
//! Line-oriented text persistence for the list's level-0 chain.
//!
//! ## Responsibilities
//! - Dump every entry as one `key<delimiter>value` line, in key order
//! - Reload a snapshot best-effort: malformed lines are skipped, not fatal
//! - Report what a load actually did (records, skips, duplicates)
//!
//! ## File Format
//! ```text
//! ┌───────────────────────────────┐
//! │ key<delim>value\n             │
//! │ key<delim>value\n             │
//! │ ...                           │
//! └───────────────────────────────┘
//! ```
//! UTF-8, one record per line, no header, footer, or checksum. The
//! delimiter is a single configurable character (default `:`); the first
//! occurrence on a line is the key/value boundary, and the format carries
//! no escaping, so keys and values must not contain the delimiter if an
//! exact round trip is required. An empty file denotes an empty list.

mod reader;
mod writer;

pub use reader::SnapshotReader;
pub use writer::SnapshotWriter;

/// Summary of a snapshot load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records inserted into the list
    pub records_loaded: usize,

    /// Blank, delimiter-less, or unparseable lines dropped by the reader
    pub lines_skipped: usize,

    /// Well-formed records dropped because the key was already present
    pub duplicates_skipped: usize,
}
