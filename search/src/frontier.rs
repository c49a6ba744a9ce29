//! Strategy-shaped frontier: stack, FIFO queue, or min-heap.
//!
//! Heap ordering is `(primary, secondary, seq)`. `seq` is a per-frontier
//! insertion counter, so equal priorities pop in insertion order and the
//! exploration order is reproducible without relying on coordinate order.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use waypoint_kernel::grid::Coord;

use crate::strategy::Strategy;

/// A state waiting on the frontier, with the cost it was reached at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub coord: Coord,
    /// Steps from the start along the recorded parent chain.
    pub cost: i64,
}

/// Priority supplied by the run. Ignored by the stack and queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority {
    pub primary: i64,
    pub secondary: i64,
}

/// The heap ordering key: `(primary, secondary, seq)`, lower first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub priority: Priority,
    pub seq: u64,
}

#[derive(Debug, PartialEq, Eq)]
struct HeapEntry {
    key: Reverse<FrontierKey>,
    entry: FrontierEntry,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Keys are unique (seq), so the entry never decides.
        self.key.cmp(&other.key)
    }
}

#[derive(Debug)]
enum Store {
    Stack(Vec<FrontierEntry>),
    Queue(VecDeque<FrontierEntry>),
    Heap(BinaryHeap<HeapEntry>),
}

/// Frontier for one search run.
#[derive(Debug)]
pub struct Frontier {
    store: Store,
    next_seq: u64,
    high_water: usize,
}

impl Frontier {
    /// Empty frontier with the discipline `strategy` needs.
    #[must_use]
    pub fn for_strategy(strategy: Strategy) -> Self {
        let store = match strategy {
            Strategy::DepthFirst => Store::Stack(Vec::new()),
            Strategy::BreadthFirst => Store::Queue(VecDeque::new()),
            Strategy::UniformCost | Strategy::Greedy | Strategy::AStar => {
                Store::Heap(BinaryHeap::new())
            }
        };
        Self {
            store,
            next_seq: 0,
            high_water: 0,
        }
    }

    /// Insert an entry. `priority` only matters for heap frontiers.
    pub fn push(&mut self, entry: FrontierEntry, priority: Priority) {
        let seq = self.next_seq;
        self.next_seq += 1;
        match &mut self.store {
            Store::Stack(stack) => stack.push(entry),
            Store::Queue(queue) => queue.push_back(entry),
            Store::Heap(heap) => heap.push(HeapEntry {
                key: Reverse(FrontierKey { priority, seq }),
                entry,
            }),
        }
        self.high_water = self.high_water.max(self.len());
    }

    /// Remove the next entry according to the discipline.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        match &mut self.store {
            Store::Stack(stack) => stack.pop(),
            Store::Queue(queue) => queue.pop_front(),
            Store::Heap(heap) => heap.pop().map(|h| h.entry),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match &self.store {
            Store::Stack(stack) => stack.len(),
            Store::Queue(queue) => queue.len(),
            Store::Heap(heap) => heap.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest size the frontier has reached.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
