//! SkipList — the lock-guarded public API
//!
//! Wraps `ListCore` in a list-owned `RwLock`. Lookups and snapshot dumps
//! take the shared guard, so readers run concurrently; inserts, removals,
//! clear, and snapshot loads take the exclusive guard and serialize against
//! everything else. Every operation runs to completion while holding the
//! guard, so no caller ever observes a partially applied splice or a
//! half-loaded list.

use std::fmt;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::path::Path;
use std::str::FromStr;

use parking_lot::RwLock;
use tracing::debug;

use super::core::ListCore;
use crate::config::Config;
use crate::error::{Result, SkipKvError};
use crate::snapshot::{LoadReport, SnapshotReader, SnapshotWriter};

/// A probabilistically-balanced ordered map
///
/// Expected O(log n) lookup, insert, and removal. The lock lives in the
/// list instance, so independent lists never serialize against each other.
pub struct SkipList<K, V> {
    /// All structural state, behind the list-wide guard
    inner: RwLock<ListCore<K, V>>,

    /// Field delimiter used by `dump`/`load`
    delimiter: char,
}

impl<K: Ord, V> SkipList<K, V> {
    /// Create an empty list whose nodes may reach `max_height` levels
    ///
    /// Fails fast with a configuration error when `max_height` is zero.
    pub fn new(max_height: usize) -> Result<Self> {
        Self::with_config(Config::builder().max_height(max_height).build())
    }

    /// Create an empty list from a full configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            inner: RwLock::new(ListCore::new(config.max_height, config.level_seed)),
            delimiter: config.delimiter,
        })
    }

    // =========================================================================
    // Lookups (shared guard)
    // =========================================================================

    /// Look up a key, returning a copy of its value
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.read().get(key).cloned()
    }

    /// Whether the key is present
    pub fn contains(&self, key: &K) -> bool {
        self.inner.read().get(key).is_some()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    // =========================================================================
    // Mutation (exclusive guard)
    // =========================================================================

    /// Insert a new key-value pair
    ///
    /// Rejects an already-present key with `KeyAlreadyExists` and leaves
    /// the list unmodified. Insert is not an upsert; callers wanting
    /// replacement semantics remove the key first.
    pub fn insert(&self, key: K, value: V) -> Result<()> {
        self.inner.write().insert(key, value)
    }

    /// Remove a key, returning its value
    ///
    /// Reports `KeyNotFound` without mutation when the key is absent.
    pub fn remove(&self, key: &K) -> Result<V> {
        self.inner.write().remove(key)
    }

    /// Drop every entry in one batch
    pub fn clear(&self) {
        let mut core = self.inner.write();
        let dropped = core.len();
        core.clear();
        debug!(dropped, "list cleared");
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Current highest active level (0 when empty)
    pub fn height(&self) -> usize {
        self.inner.read().height()
    }

    /// Configured level ceiling
    pub fn max_height(&self) -> usize {
        self.inner.read().max_height()
    }

    /// The snapshot field delimiter
    pub fn delimiter(&self) -> char {
        self.delimiter
    }
}

// =============================================================================
// Snapshot dump/load
// =============================================================================

impl<K, V> SkipList<K, V>
where
    K: Ord + Display + FromStr,
    V: Display + FromStr,
{
    /// Write a snapshot of the list to a file
    ///
    /// One `key<delimiter>value` line per entry, in key order. Holds the
    /// shared guard for the whole write, so the snapshot is a consistent
    /// point-in-time view; concurrent writers block until it finishes.
    /// A write failure surfaces as `Io` and may leave a partial file.
    pub fn dump<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let core = self.inner.read();
        let writer = SnapshotWriter::create(path.as_ref(), self.delimiter)?;
        let records = Self::write_records(&core, writer)?;
        debug!(records, path = %path.as_ref().display(), "snapshot dumped");
        Ok(())
    }

    /// Write a snapshot of the list to an arbitrary sink
    pub fn dump_to<W: Write>(&self, sink: W) -> Result<()> {
        let core = self.inner.read();
        let writer = SnapshotWriter::new(sink, self.delimiter);
        Self::write_records(&core, writer)?;
        Ok(())
    }

    fn write_records<W: Write>(
        core: &ListCore<K, V>,
        mut writer: SnapshotWriter<W>,
    ) -> Result<u64> {
        for (key, value) in core.iter() {
            writer.append(key, value)?;
        }
        writer.finish()
    }

    /// Load a snapshot file into the list
    ///
    /// Best-effort: blank lines, lines without the delimiter, and lines
    /// whose key or value fails conversion are skipped, and keys already
    /// present (in the list or earlier in the file) are silently dropped.
    /// The whole load runs under one exclusive guard acquisition, so the
    /// list is never observed half-loaded.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<LoadReport> {
        let mut core = self.inner.write();
        let reader = SnapshotReader::open(path.as_ref(), self.delimiter)?;
        let report = Self::read_records(&mut core, reader)?;
        debug!(
            records = report.records_loaded,
            skipped = report.lines_skipped,
            duplicates = report.duplicates_skipped,
            path = %path.as_ref().display(),
            "snapshot loaded"
        );
        Ok(report)
    }

    /// Load snapshot records from an arbitrary source
    pub fn load_from<R: BufRead>(&self, source: R) -> Result<LoadReport> {
        let mut core = self.inner.write();
        let reader = SnapshotReader::new(source, self.delimiter);
        Self::read_records(&mut core, reader)
    }

    fn read_records<R: BufRead>(
        core: &mut ListCore<K, V>,
        mut reader: SnapshotReader<R>,
    ) -> Result<LoadReport> {
        let mut report = LoadReport::default();
        while let Some((key, value)) = reader.next_record::<K, V>()? {
            match core.insert(key, value) {
                Ok(()) => report.records_loaded += 1,
                Err(SkipKvError::KeyAlreadyExists) => report.duplicates_skipped += 1,
                Err(other) => return Err(other),
            }
        }
        report.lines_skipped = reader.lines_skipped();
        Ok(report)
    }
}

/// Renders the level-0 contents in key order
impl<K: Ord + fmt::Debug, V: fmt::Debug> fmt::Debug for SkipList<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let core = self.inner.read();
        f.debug_map().entries(core.iter()).finish()
    }
}
