//! Fringe implementations

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::traits::{Fringe, FringeEntry};

/// First in, first out (breadth-first)
#[derive(Debug, Default)]
pub struct FifoFringe {
    queue: VecDeque<FringeEntry>,
}

impl FifoFringe {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Fringe for FifoFringe {
    fn push(&mut self, entry: FringeEntry) {
        self.queue.push_back(entry);
    }

    fn pop(&mut self) -> Option<FringeEntry> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last in, first out (depth-first)
#[derive(Debug, Default)]
pub struct LifoFringe {
    stack: Vec<FringeEntry>,
}

impl LifoFringe {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Fringe for LifoFringe {
    fn push(&mut self, entry: FringeEntry) {
        self.stack.push(entry);
    }

    fn pop(&mut self) -> Option<FringeEntry> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// Heap slot: an entry plus its insertion sequence number
#[derive(Debug)]
struct Ranked {
    entry: FringeEntry,
    seq: u64,
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap: lowest priority, then lowest cost,
        // then earliest insertion
        other
            .entry
            .priority
            .total_cmp(&self.entry.priority)
            .then_with(|| other.entry.cost.total_cmp(&self.entry.cost))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

/// Min-priority queue ordered by `(priority, cost, insertion order)`.
///
/// Stale entries for already-expanded nodes are not removed here; the
/// traversal loop skips them when they are popped.
#[derive(Debug, Default)]
pub struct PriorityFringe {
    heap: BinaryHeap<Ranked>,
    next_seq: u64,
}

impl PriorityFringe {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Fringe for PriorityFringe {
    fn push(&mut self, entry: FringeEntry) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Ranked { entry, seq });
    }

    fn pop(&mut self) -> Option<FringeEntry> {
        self.heap.pop().map(|ranked| ranked.entry)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
