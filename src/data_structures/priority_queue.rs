use num_traits::Float;
use ordered_float::OrderedFloat;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue keyed by floating point priorities.
///
/// Items need no ordering of their own. Equal priorities pop in insertion
/// order, which keeps the solvers built on top deterministic.
#[derive(Debug)]
pub struct MinPriorityQueue<T, P>
where
    P: Float + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<QueueEntry<T, P>>>,

    /// Insertion counter used to break priority ties
    sequence: u64,
}

#[derive(Debug)]
struct QueueEntry<T, P>
where
    P: Float,
{
    priority: OrderedFloat<P>,
    sequence: u64,
    item: T,
}

impl<T, P: Float> PartialEq for QueueEntry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, P: Float> Eq for QueueEntry<T, P> {}

impl<T, P: Float> PartialOrd for QueueEntry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Float> Ord for QueueEntry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.sequence.cmp(&other.sequence))
    }
}

impl<T, P> MinPriorityQueue<T, P>
where
    P: Float + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinPriorityQueue {
            heap: BinaryHeap::new(),
            sequence: 0,
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an item with the given priority
    pub fn push(&mut self, item: T, priority: P) {
        let entry = QueueEntry {
            priority: OrderedFloat(priority),
            sequence: self.sequence,
            item,
        };
        self.sequence += 1;
        self.heap.push(Reverse(entry));
    }

    /// Removes the item with the lowest priority
    pub fn pop(&mut self) -> Option<(T, P)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.item, entry.priority.into_inner()))
    }

    /// Returns the item with the lowest priority without removing it
    pub fn peek(&self) -> Option<(&T, P)> {
        self.heap
            .peek()
            .map(|Reverse(entry)| (&entry.item, entry.priority.into_inner()))
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T, P> Default for MinPriorityQueue<T, P>
where
    P: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
