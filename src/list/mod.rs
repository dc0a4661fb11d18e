//! Skip List Module
//!
//! The ordered key-value core.
//!
//! ## Responsibilities
//! - Expected O(log n) search, insert, and remove over multi-level chains
//! - Randomized balancing via a coin-flip level draw (seedable)
//! - Single-owner node storage: an index-addressed arena, no shared pointers
//! - One list-wide RwLock: concurrent readers, serialized writers
//!
//! ## Layering
//! - `level` — the randomized level generator
//! - `node` — node + arena storage
//! - `core` — the unsynchronized algorithms
//! - `list` — the lock-guarded public `SkipList`

mod core;
mod level;
mod list;
mod node;

pub use self::level::LevelGenerator;
pub use self::list::SkipList;
