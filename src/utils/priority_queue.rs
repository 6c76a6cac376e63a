/*!
# Indexed Priority Queue

A binary min-heap over node handles that supports lowering the priority of a queued node in
`O(log n)`. Positions of queued handles are tracked in a dense vector indexed by handle.
*/

use crate::node::*;

const NOT_QUEUED: usize = usize::MAX;

/// Min-heap of node handles keyed by `f64` priorities with decrease-key support
#[derive(Debug, Clone, Default)]
pub struct IndexedMinHeap {
    heap: Vec<(Node, f64)>,
    positions: Vec<usize>,
}

impl IndexedMinHeap {
    /// Creates an empty queue for handles below `bound`
    pub fn with_bound(bound: usize) -> Self {
        Self {
            heap: Vec::with_capacity(bound),
            positions: vec![NOT_QUEUED; bound],
        }
    }

    /// Number of queued handles
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns *true* if `u` is currently queued
    pub fn contains(&self, u: Node) -> bool {
        self.positions
            .get(u as usize)
            .is_some_and(|&pos| pos != NOT_QUEUED)
    }

    /// Returns the priority of `u` if it is queued
    pub fn priority_of(&self, u: Node) -> Option<f64> {
        self.contains(u)
            .then(|| self.heap[self.positions[u as usize]].1)
    }

    /// Queues `u` with the given priority. Returns *false* (and changes nothing) if `u` is
    /// already queued.
    pub fn push(&mut self, u: Node, priority: f64) -> bool {
        if self.contains(u) {
            return false;
        }
        if self.positions.len() <= u as usize {
            self.positions.resize(u as usize + 1, NOT_QUEUED);
        }

        let pos = self.heap.len();
        self.heap.push((u, priority));
        self.positions[u as usize] = pos;
        self.sift_up(pos);
        true
    }

    /// Removes and returns the handle with minimum priority
    pub fn pop_min(&mut self) -> Option<(Node, f64)> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let (u, priority) = self.heap.pop()?;
        self.positions[u as usize] = NOT_QUEUED;

        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((u, priority))
    }

    /// Lowers the priority of `u`. Returns *false* if `u` is not queued or `priority` is not
    /// smaller than its current priority.
    pub fn decrease(&mut self, u: Node, priority: f64) -> bool {
        if !self.contains(u) {
            return false;
        }

        let pos = self.positions[u as usize];
        if !(priority < self.heap[pos].1) {
            return false;
        }
        self.heap[pos].1 = priority;
        self.sift_up(pos);
        true
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.positions[self.heap[i].0 as usize] = i;
        self.positions[self.heap[j].0 as usize] = j;
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.heap[pos].1 < self.heap[parent].1 {
                self.swap(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;

            let mut smallest = pos;
            if left < self.heap.len() && self.heap[left].1 < self.heap[smallest].1 {
                smallest = left;
            }
            if right < self.heap.len() && self.heap[right].1 < self.heap[smallest].1 {
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
