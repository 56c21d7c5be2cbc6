//! Min-priority queue with first-in tie-breaking.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Entry<T> {
    cost: f64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // BinaryHeap is a max-heap: reverse both keys so the cheapest, then
    // earliest pushed, entry sits on top.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Pops the lowest cost first; among equal costs, the earliest pushed.
pub(crate) struct MinHeap<T> {
    heap: BinaryHeap<Entry<T>>,
    seq: u64,
}

impl<T> MinHeap<T> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    pub(crate) fn push(&mut self, cost: f64, item: T) {
        self.heap.push(Entry {
            cost,
            seq: self.seq,
            item,
        });
        self.seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<(f64, T)> {
        self.heap.pop().map(|entry| (entry.cost, entry.item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_lowest_cost() {
        let mut heap = MinHeap::new();
        heap.push(3.0, "c");
        heap.push(1.0, "a");
        heap.push(2.0, "b");

        assert_eq!(heap.pop(), Some((1.0, "a")));
        assert_eq!(heap.pop(), Some((2.0, "b")));
        assert_eq!(heap.pop(), Some((3.0, "c")));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_ties_pop_in_insertion_order() {
        let mut heap = MinHeap::new();
        heap.push(0.5, 1);
        heap.push(0.5, 2);
        heap.push(0.1, 0);
        heap.push(0.5, 3);

        let order: Vec<_> = std::iter::from_fn(|| heap.pop())
            .map(|(_, item)| item)
            .collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }
}
