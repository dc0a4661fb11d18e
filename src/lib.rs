//! # SkipKV
//!
//! A lock-guarded, generic skip list with:
//! - Expected O(log n) search, insert, and remove
//! - Randomized balancing (seedable coin-flip level draw)
//! - Single-owner node storage in an index-addressed arena
//! - Text snapshot persistence (full dump/load, one record per line)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 SkipList                     │
//! │      (RwLock: shared reads, exclusive        │
//! │               writes and loads)              │
//! └───────┬─────────────────────────┬───────────┘
//!         │                         │
//!         ▼                         ▼
//!  ┌─────────────┐          ┌──────────────┐
//!  │  ListCore   │          │   Snapshot   │
//!  │ (chains +   │          │ (line codec: │
//!  │  arena +    │          │  dump/load)  │
//!  │  levels)    │          └──────────────┘
//!  └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use skipkv::SkipList;
//!
//! let list: SkipList<i64, String> = SkipList::new(6)?;
//! list.insert(1, "one".to_string())?;
//! assert_eq!(list.get(&1), Some("one".to_string()));
//! assert_eq!(list.len(), 1);
//! # Ok::<(), skipkv::SkipKvError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod list;
pub mod snapshot;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::Config;
pub use error::{Result, SkipKvError};
pub use list::SkipList;
pub use snapshot::LoadReport;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of SkipKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
