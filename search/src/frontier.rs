//! Frontier disciplines: stack, queue and stable priority queue.
//!
//! No discipline deduplicates on push. The same state may be queued several
//! times at once; the search loop decides at pop time whether an entry is
//! still worth expanding.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use crate::cost::Cost;

/// Ordered container of pending entries.
///
/// `priority` is only meaningful to priority-ordered frontiers; stack and
/// queue disciplines ignore it.
pub trait Frontier<T, K> {
    /// Add an entry.
    fn push(&mut self, item: T, priority: K);

    /// Remove and return the next entry under this discipline.
    fn pop(&mut self) -> Option<T>;

    /// Number of queued entries.
    fn len(&self) -> usize;

    /// Whether no entries are queued.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last-in-first-out frontier (depth-first search).
#[derive(Debug, Clone)]
pub struct StackFrontier<T> {
    items: Vec<T>,
}

impl<T> StackFrontier<T> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Default for StackFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K> Frontier<T, K> for StackFrontier<T> {
    fn push(&mut self, item: T, _priority: K) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// First-in-first-out frontier (breadth-first search).
#[derive(Debug, Clone)]
pub struct QueueFrontier<T> {
    items: VecDeque<T>,
}

impl<T> QueueFrontier<T> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> Default for QueueFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K> Frontier<T, K> for QueueFrontier<T> {
    fn push(&mut self, item: T, _priority: K) {
        self.items.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// The priority-frontier ordering key: `(priority, insertion_order)`.
///
/// Lower priority first; equal priorities pop in insertion order.
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey<K> {
    pub priority: K,
    pub insertion_order: u64,
}

impl<K: Cost> PartialEq for FrontierKey<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Cost> Eq for FrontierKey<K> {}

impl<K: Cost> PartialOrd for FrontierKey<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Cost> Ord for FrontierKey<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cost_cmp(&other.priority)
            .then(self.insertion_order.cmp(&other.insertion_order))
    }
}

/// A frontier entry wrapping an item with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest priority first).
#[derive(Debug)]
struct FrontierEntry<T, K> {
    key: Reverse<FrontierKey<K>>,
    item: T,
}

impl<T, K: Cost> PartialEq for FrontierEntry<T, K> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T, K: Cost> Eq for FrontierEntry<T, K> {}

impl<T, K: Cost> PartialOrd for FrontierEntry<T, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, K: Cost> Ord for FrontierEntry<T, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Priority-ordered frontier (uniform-cost and A* search).
///
/// Insertion order is unique per entry, so the heap order is total and
/// `pop` is deterministic regardless of heap internals.
#[derive(Debug)]
pub struct PriorityFrontier<T, K> {
    heap: BinaryHeap<FrontierEntry<T, K>>,
    next_insertion: u64,
}

impl<T, K: Cost> PriorityFrontier<T, K> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_insertion: 0,
        }
    }

    /// Priority of the entry `pop` would return next.
    #[must_use]
    pub fn peek_priority(&self) -> Option<K> {
        self.heap.peek().map(|e| e.key.0.priority)
    }
}

impl<T, K: Cost> Default for PriorityFrontier<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Cost> Frontier<T, K> for PriorityFrontier<T, K> {
    fn push(&mut self, item: T, priority: K) {
        let key = FrontierKey {
            priority,
            insertion_order: self.next_insertion,
        };
        self.next_insertion += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            item,
        });
    }

    fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|e| e.item)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
