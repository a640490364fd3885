use std::fmt::Debug;

const ABSENT: usize = usize::MAX;

/// A binary min-heap over dense `usize` keys with decrease-key support.
///
/// Every key in `0..capacity` can be queued at most once. `positions` maps a
/// key to its slot in `heap`, so changing the priority of a queued key is a
/// sift instead of a remove followed by a reinsert.
#[derive(Debug)]
pub struct IndexedMinHeap<P>
where
    P: Ord + Copy + Debug,
{
    /// (priority, key) pairs in heap order
    heap: Vec<(P, usize)>,

    /// Slot of each key in `heap`, or `ABSENT`
    positions: Vec<usize>,
}

impl<P> IndexedMinHeap<P>
where
    P: Ord + Copy + Debug,
{
    /// Creates an empty heap accepting keys in `0..capacity`
    pub fn new(capacity: usize) -> Self {
        IndexedMinHeap {
            heap: Vec::new(),
            positions: vec![ABSENT; capacity],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn contains(&self, key: usize) -> bool {
        self.positions.get(key).map_or(false, |&p| p != ABSENT)
    }

    /// Current priority of a queued key
    pub fn priority(&self, key: usize) -> Option<P> {
        match self.positions.get(key) {
            Some(&pos) if pos != ABSENT => Some(self.heap[pos].0),
            _ => None,
        }
    }

    /// Inserts `key`, or moves it to `priority` if it is already queued.
    ///
    /// Keys outside `0..capacity` grow the index table.
    pub fn push_or_update(&mut self, key: usize, priority: P) {
        if key >= self.positions.len() {
            self.positions.resize(key + 1, ABSENT);
        }
        let pos = self.positions[key];
        if pos == ABSENT {
            self.heap.push((priority, key));
            let last = self.heap.len() - 1;
            self.positions[key] = last;
            self.sift_up(last);
        } else {
            let old = self.heap[pos].0;
            self.heap[pos].0 = priority;
            if priority < old {
                self.sift_up(pos);
            } else {
                self.sift_down(pos);
            }
        }
    }

    /// Removes the key with the smallest priority
    pub fn pop(&mut self) -> Option<(usize, P)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let (priority, key) = self.heap.pop()?;
        self.positions[key] = ABSENT;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((key, priority))
    }

    /// Returns the key with the smallest priority without removing it
    pub fn peek(&self) -> Option<(usize, P)> {
        self.heap.first().map(|&(priority, key)| (key, priority))
    }

    pub fn clear(&mut self) {
        for &(_, key) in &self.heap {
            self.positions[key] = ABSENT;
        }
        self.heap.clear();
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.heap[pos].0 >= self.heap[parent].0 {
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
            if left < len && self.heap[left].0 < self.heap[smallest].0 {
                smallest = left;
            }
            if right < len && self.heap[right].0 < self.heap[smallest].0 {
                smallest = right;
            }
            if smallest == pos {
                break;
            }
            self.swap(pos, smallest);
            pos = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].1] = a;
        self.positions[self.heap[b].1] = b;
    }
}
