use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::node::{Cost, NodeId};

/// Heap entry, ordered so that `BinaryHeap` (a max-heap) pops the lowest
/// priority first and, among equal priorities, the most recent insertion.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Entry {
    priority: Cost,
    seq: u64,
    id: NodeId,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The search frontier.
///
/// Re-prioritised nodes are pushed again rather than moved; the outdated
/// entry stays in the heap and is skipped when popped. Pop order matches a
/// list kept sorted by inserting each node in front of the first entry whose
/// priority is not lower.
#[derive(Debug, Default)]
pub(crate) struct OpenSet {
    heap: BinaryHeap<Entry>,
    seq: u64,
    live: usize,
}

impl OpenSet {
    /// Add a node that was not in the set.
    pub(crate) fn push(&mut self, id: NodeId, priority: Cost) {
        self.live += 1;
        self.enqueue(id, priority);
    }

    /// Move a node already in the set to its new, lower priority.
    pub(crate) fn reprioritize(&mut self, id: NodeId, priority: Cost) {
        self.enqueue(id, priority);
    }

    fn enqueue(&mut self, id: NodeId, priority: Cost) {
        self.seq += 1;
        self.heap.push(Entry {
            priority,
            seq: self.seq,
            id,
        });
    }

    /// Remove and return the front node. `is_current(id, priority)` must
    /// report whether an entry still reflects the node's state; entries
    /// for which it returns `false` are discarded.
    pub(crate) fn pop(&mut self, is_current: impl Fn(NodeId, Cost) -> bool) -> Option<NodeId> {
        while let Some(e) = self.heap.pop() {
            if is_current(e.id, e.priority) {
                self.live -= 1;
                return Some(e.id);
            }
        }
        None
    }

    /// Number of distinct nodes in the set.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.live
    }
}
