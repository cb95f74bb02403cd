use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A min-heap of cell handles ordered by cost, without decrease-key support: callers push
/// an improved entry rather than updating in place, and [`Frontier::pop`] silently skips
/// entries that are stale relative to the grid's current cost (see
/// [`crate::engine::SearchEngine`]).
pub struct Frontier<C> {
    heap: BinaryHeap<Entry<C>>,
    sequence: u64,
}

impl<C: PartialOrd> Frontier<C> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::with_capacity(512),
            sequence: 0,
        }
    }

    pub fn push(&mut self, index: usize, cost: C) {
        self.sequence += 1;
        self.heap.push(Entry {
            cost,
            index,
            sequence: self.sequence,
        });
    }

    /// Pop the entry with the smallest cost, breaking ties by insertion order.
    pub fn pop(&mut self) -> Option<(usize, C)> {
        self.heap.pop().map(|e| (e.index, e.cost))
    }

    #[must_use]
    pub fn peek(&self) -> Option<(usize, &C)> {
        self.heap.peek().map(|e| (e.index, &e.cost))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.sequence = 0;
    }
}

impl<C: PartialOrd> Default for Frontier<C> {
    fn default() -> Self {
        Self::new()
    }
}

struct Entry<C> {
    cost: C,
    index: usize,
    sequence: u64,
}

impl<C: PartialOrd> PartialEq for Entry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.sequence == other.sequence
    }
}

impl<C: PartialOrd> Eq for Entry<C> {}

impl<C: PartialOrd> PartialOrd for Entry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Reversed so that `BinaryHeap`, a max-heap, yields the smallest cost first.
impl<C: PartialOrd> Ord for Entry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        match other.cost.partial_cmp(&self.cost) {
            Some(Ordering::Equal) | None => other.sequence.cmp(&self.sequence),
            Some(ord) => ord,
        }
    }
}
