//! Node storage
//!
//! Nodes live in an arena of slots and reference each other by slot index,
//! so the list is the single owner of every node. Indices stay stable across
//! deletions: a removed node's slot goes on a free list and is reused by a
//! later insert. Dropping or clearing the arena releases every node in one
//! batch, with no per-node chain walk.

/// A single entry in the list
///
/// `forward[i]` is the slot index of the next node whose chain includes
/// level `i`, or `None` at the end of that level's chain. The vector's
/// length is `level + 1`: a node drawn at level L participates in every
/// chain from 0 up to L.
#[derive(Debug)]
pub(crate) struct Node<K, V> {
    pub key: K,
    pub value: V,
    pub forward: Vec<Option<usize>>,
}

impl<K, V> Node<K, V> {
    pub fn new(key: K, value: V, level: usize) -> Self {
        Self {
            key,
            value,
            forward: vec![None; level + 1],
        }
    }

    /// The highest level this node participates in
    pub fn level(&self) -> usize {
        self.forward.len() - 1
    }
}

/// Slot-indexed node storage with free-list reuse
#[derive(Debug)]
pub(crate) struct NodeArena<K, V> {
    slots: Vec<Option<Node<K, V>>>,
    free: Vec<usize>,
}

impl<K, V> NodeArena<K, V> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Store a node, returning its stable slot index
    pub fn alloc(&mut self, node: Node<K, V>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// Release a node, making its slot reusable
    ///
    /// The caller must have unlinked the node from every chain first;
    /// nothing may reference the slot after this.
    pub fn release(&mut self, idx: usize) -> Node<K, V> {
        let node = self.slots[idx]
            .take()
            .unwrap_or_else(|| unreachable!("release of an empty slot {idx}"));
        self.free.push(idx);
        node
    }

    /// Drop every node in one batch
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    pub fn node(&self, idx: usize) -> &Node<K, V> {
        self.slots[idx]
            .as_ref()
            .unwrap_or_else(|| unreachable!("dangling slot index {idx}"))
    }

    pub fn node_mut(&mut self, idx: usize) -> &mut Node<K, V> {
        self.slots[idx]
            .as_mut()
            .unwrap_or_else(|| unreachable!("dangling slot index {idx}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_reuses_released_slots() {
        let mut arena: NodeArena<i32, &str> = NodeArena::new();
        let a = arena.alloc(Node::new(1, "a", 0));
        let b = arena.alloc(Node::new(2, "b", 2));
        assert_ne!(a, b);

        let released = arena.release(a);
        assert_eq!(released.key, 1);

        // Freed slot comes back before the arena grows
        let c = arena.alloc(Node::new(3, "c", 1));
        assert_eq!(c, a);
        assert_eq!(arena.node(c).key, 3);
        assert_eq!(arena.node(c).forward.len(), 2);
    }

    #[test]
    fn node_level_matches_forward_len() {
        let node: Node<i32, &str> = Node::new(7, "seven", 3);
        assert_eq!(node.level(), 3);
        assert_eq!(node.forward.len(), 4);
        assert!(node.forward.iter().all(|f| f.is_none()));
    }
}
