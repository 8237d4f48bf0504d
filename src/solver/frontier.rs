//! Frontier containers.
//!
//! The uninformed strategies only need push/pop/len and share one search loop
//! through the [`Frontier`] trait. The informed strategy uses
//! [`PriorityFrontier`], an indexed binary min-heap that supports decrease-key
//! in `O(log n)`.
use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::solver::node::NodeId;

/// Nodes awaiting expansion.
pub trait Frontier {
    fn push(&mut self, id: NodeId);
    fn pop(&mut self) -> Option<NodeId>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out.
#[derive(Debug, Default)]
pub struct FifoFrontier(VecDeque<NodeId>);

impl Frontier for FifoFrontier {
    fn push(&mut self, id: NodeId) {
        self.0.push_back(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.0.pop_front()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Last in, first out.
#[derive(Debug, Default)]
pub struct LifoFrontier(Vec<NodeId>);

impl Frontier for LifoFrontier {
    fn push(&mut self, id: NodeId) {
        self.0.push(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.0.pop()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Ordering key of an informed-search entry: lowest `key` first, then lowest
/// move code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority {
    pub key: u32,
    pub move_code: u8,
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    priority: Priority,
    /// Insertion order, the final tie-break.
    seq: u64,
    node: NodeId,
}

impl Entry {
    fn cmp_order(&self, other: &Entry) -> Ordering {
        (self.priority, self.seq).cmp(&(other.priority, other.seq))
    }
}

/// Binary min-heap of node ids that tracks where each id sits, so an entry
/// can be found and re-keyed without a linear scan.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: Vec<Entry>,
    /// Heap position of each node id currently queued, indexed by `NodeId::index`.
    positions: Vec<Option<usize>>,
    next_seq: u64,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.position(id).is_some()
    }

    /// Priority of a queued node, or `None` if it is not in the frontier.
    pub fn priority(&self, id: NodeId) -> Option<Priority> {
        self.position(id).map(|pos| self.heap[pos].priority)
    }

    pub fn push(&mut self, id: NodeId, priority: Priority) {
        let entry = Entry {
            priority,
            seq: self.bump_seq(),
            node: id,
        };
        let pos = self.heap.len();
        self.heap.push(entry);
        self.set_position(id, Some(pos));
        self.sift_up(pos);
    }

    /// Removes and returns the node with the smallest priority.
    pub fn pop(&mut self) -> Option<NodeId> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop()?;
        self.set_position(entry.node, None);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(entry.node)
    }

    /// Replaces the queued entry for `old` with `new` at a strictly smaller
    /// priority, then restores heap order.
    ///
    /// # Returns
    /// `false` (and changes nothing) if `old` is not queued or `priority` is
    /// not smaller than its current one.
    pub fn replace(&mut self, old: NodeId, new: NodeId, priority: Priority) -> bool {
        let pos = match self.position(old) {
            Some(pos) => pos,
            None => return false,
        };
        if priority >= self.heap[pos].priority {
            return false;
        }
        let seq = self.bump_seq();
        self.heap[pos] = Entry {
            priority,
            seq,
            node: new,
        };
        self.set_position(old, None);
        self.set_position(new, Some(pos));
        self.sift_up(pos);
        true
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn position(&self, id: NodeId) -> Option<usize> {
        self.positions.get(id.index()).copied().flatten()
    }

    fn set_position(&mut self, id: NodeId, pos: Option<usize>) {
        let index = id.index();
        if index >= self.positions.len() {
            self.positions.resize(index + 1, None);
        }
        self.positions[index] = pos;
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        let (node_a, node_b) = (self.heap[a].node, self.heap[b].node);
        self.set_position(node_a, Some(a));
        self.set_position(node_b, Some(b));
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.heap[pos].cmp_order(&self.heap[parent]) != Ordering::Less {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;
            if left < len && self.heap[left].cmp_order(&self.heap[smallest]) == Ordering::Less {
                smallest = left;
            }
            if right < len && self.heap[right].cmp_order(&self.heap[smallest]) == Ordering::Less {
                smallest = right;
            }
            if smallest == pos {
                break;
            }
            self.swap(pos, smallest);
            pos = smallest;
        }
    }
}
