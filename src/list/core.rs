//! Core skip list algorithms
//!
//! `ListCore` is the unsynchronized structure: multi-level chains over the
//! node arena, the top-down finger descent, and the update-array splice and
//! unlink. `SkipList` wraps it in the lock; nothing here takes a guard.
//!
//! ## Structure
//! ```text
//! Level 3:  HEAD ──────────────────────────────► 50 ──────────► NIL
//! Level 2:  HEAD ──────────► 20 ────────────────► 50 ──────────► NIL
//! Level 1:  HEAD ──► 10 ──► 20 ────► 35 ────────► 50 ──► 60 ──► NIL
//! Level 0:  HEAD ──► 10 ──► 20 ──► 25 ──► 35 ──► 50 ──► 60 ──► NIL
//! ```
//! Level 0 holds every node in key order; each level above is a subsequence
//! of the one below. The header sentinel carries no key or value, so it is
//! represented by its forward array alone and a predecessor of `None` means
//! "the head".

use super::level::LevelGenerator;
use super::node::{Node, NodeArena};
use crate::error::{Result, SkipKvError};

/// The unsynchronized skip list
#[derive(Debug)]
pub(crate) struct ListCore<K, V> {
    /// Highest level any node may reach (fixed at construction)
    max_height: usize,

    /// Highest level currently in use; 0 when the list is empty
    height: usize,

    /// Number of stored entries
    len: usize,

    /// The header sentinel's forward array, length `max_height + 1`
    head: Vec<Option<usize>>,

    /// Node storage; chains reference nodes by slot index
    arena: NodeArena<K, V>,

    /// Randomized level draw for new nodes
    levels: LevelGenerator,
}

impl<K: Ord, V> ListCore<K, V> {
    pub fn new(max_height: usize, level_seed: Option<u64>) -> Self {
        let levels = match level_seed {
            Some(seed) => LevelGenerator::with_seed(max_height, seed),
            None => LevelGenerator::new(max_height),
        };
        Self {
            max_height,
            height: 0,
            len: 0,
            head: vec![None; max_height + 1],
            arena: NodeArena::new(),
            levels,
        }
    }

    // =========================================================================
    // Chain Plumbing
    // =========================================================================

    /// Successor of `pred` at `level`; `None` as predecessor means the head
    fn forward(&self, pred: Option<usize>, level: usize) -> Option<usize> {
        match pred {
            Some(idx) => self.arena.node(idx).forward[level],
            None => self.head[level],
        }
    }

    fn set_forward(&mut self, pred: Option<usize>, level: usize, next: Option<usize>) {
        match pred {
            Some(idx) => self.arena.node_mut(idx).forward[level] = next,
            None => self.head[level] = next,
        }
    }

    /// Top-down descent recording the last node visited at every level
    ///
    /// Returns the update array: `update[i]` is the predecessor whose
    /// forward pointer at level `i` would have to change to splice or
    /// unlink `key` there. Levels above the current height stay at the
    /// head, which is exactly what raising the height needs.
    fn descend(&self, key: &K) -> Vec<Option<usize>> {
        let mut update = vec![None; self.max_height + 1];
        let mut pred: Option<usize> = None;
        for level in (0..=self.height).rev() {
            while let Some(next) = self.forward(pred, level) {
                if self.arena.node(next).key < *key {
                    pred = Some(next);
                } else {
                    break;
                }
            }
            update[level] = pred;
        }
        update
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Look up a key
    pub fn get(&self, key: &K) -> Option<&V> {
        // Finger descent: each level's stopping point is a valid start for
        // the level below, because lower levels are supersets.
        let mut pred: Option<usize> = None;
        for level in (0..=self.height).rev() {
            while let Some(next) = self.forward(pred, level) {
                if self.arena.node(next).key < *key {
                    pred = Some(next);
                } else {
                    break;
                }
            }
        }
        let candidate = self.forward(pred, 0)?;
        let node = self.arena.node(candidate);
        (node.key == *key).then_some(&node.value)
    }

    /// Insert a new key-value pair
    ///
    /// Rejects a present key with `KeyAlreadyExists` and leaves the
    /// structure untouched; insert is not an upsert.
    pub fn insert(&mut self, key: K, value: V) -> Result<()> {
        let update = self.descend(&key);

        if let Some(candidate) = self.forward(update[0], 0) {
            if self.arena.node(candidate).key == key {
                return Err(SkipKvError::KeyAlreadyExists);
            }
        }

        let node_level = self.levels.generate();
        if node_level > self.height {
            // update[level] is already the head for the newly active levels
            self.height = node_level;
        }

        let idx = self.arena.alloc(Node::new(key, value, node_level));
        for level in 0..=node_level {
            let next = self.forward(update[level], level);
            self.arena.node_mut(idx).forward[level] = next;
            self.set_forward(update[level], level, Some(idx));
        }

        self.len += 1;
        Ok(())
    }

    /// Remove a key
    ///
    /// Reports `KeyNotFound` without mutation when the key is absent.
    pub fn remove(&mut self, key: &K) -> Result<V> {
        let update = self.descend(key);

        let target = match self.forward(update[0], 0) {
            Some(idx) if self.arena.node(idx).key == *key => idx,
            _ => return Err(SkipKvError::KeyNotFound),
        };

        for level in 0..=self.height {
            // Once a level's predecessor does not point at the target, no
            // higher level can either: level membership only shrinks upward.
            if self.forward(update[level], level) != Some(target) {
                break;
            }
            let next = self.arena.node(target).forward[level];
            self.set_forward(update[level], level, next);
        }

        while self.height > 0 && self.head[self.height].is_none() {
            self.height -= 1;
        }

        self.len -= 1;
        Ok(self.arena.release(target).value)
    }

    /// Drop every entry in one batch
    ///
    /// Detaches the head and clears the arena; no per-node chain walk,
    /// so depth never becomes a recursion bound.
    pub fn clear(&mut self) {
        self.head.iter_mut().for_each(|slot| *slot = None);
        self.height = 0;
        self.len = 0;
        self.arena.clear();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn max_height(&self) -> usize {
        self.max_height
    }

    /// Iterate the level-0 chain in key order
    pub fn iter(&self) -> Entries<'_, K, V> {
        Entries {
            core: self,
            next: self.head[0],
        }
    }
}

/// Iterator over entries in key order (the level-0 chain)
pub(crate) struct Entries<'a, K, V> {
    core: &'a ListCore<K, V>,
    next: Option<usize>,
}

impl<'a, K: Ord, V> Iterator for Entries<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.next?;
        let node = self.core.arena.node(idx);
        self.next = node.forward[0];
        Some((&node.key, &node.value))
    }
}
