use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::graph::{Distance, NodeId};

/// A queued relaxation result: `node` was lowered to `distance`.
///
/// Entries are never updated in place. When the node is lowered again a new
/// entry is pushed and the old one becomes stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierEntry {
    pub distance: Distance,
    pub node: NodeId,
}

impl FrontierEntry {
    pub fn new(distance: Distance, node: NodeId) -> Self {
        FrontierEntry { distance, node }
    }
}

/// Outcome of [`Frontier::poll`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Poll {
    /// A live entry to process
    Work(FrontierEntry),
    /// Nothing queued, but some worker may still produce entries
    Idle,
    /// Nothing queued and every worker is idle
    Converged,
}

/// Per-worker view of the termination protocol
#[derive(Debug, Default)]
pub struct WorkerSlot {
    waiting: bool,
    /// Stale entries this worker discarded
    pub stale: u64,
}

/// Min-ordered frontier shared by the workers of one parallel run.
///
/// The queue sits behind a single lock that is held only for a push or a pop.
/// `waiting` counts workers that last saw the queue empty; it only changes
/// inside the same critical section as the pop that justified the change, so
/// `waiting == workers` implies an empty queue with no entry in flight.
#[derive(Debug)]
pub struct Frontier {
    queue: Mutex<BinaryHeap<Reverse<FrontierEntry>>>,
    waiting: AtomicUsize,
    workers: usize,
}

impl Frontier {
    pub fn new(workers: usize) -> Self {
        Frontier {
            queue: Mutex::new(BinaryHeap::with_capacity(workers)),
            waiting: AtomicUsize::new(0),
            workers,
        }
    }

    pub fn push(&self, entry: FrontierEntry) {
        self.queue.lock().push(Reverse(entry));
    }

    /// Pops the smallest live entry.
    ///
    /// `is_live` decides whether an entry still matches its node's current
    /// distance; stale entries are dropped and counted on `slot`.
    pub fn poll<F>(&self, slot: &mut WorkerSlot, is_live: F) -> Poll
    where
        F: Fn(&FrontierEntry) -> bool,
    {
        {
            let mut queue = self.queue.lock();
            while let Some(Reverse(entry)) = queue.pop() {
                if is_live(&entry) {
                    if slot.waiting {
                        slot.waiting = false;
                        self.waiting.fetch_sub(1, Ordering::AcqRel);
                    }
                    return Poll::Work(entry);
                }
                slot.stale += 1;
            }
            if !slot.waiting {
                slot.waiting = true;
                self.waiting.fetch_add(1, Ordering::AcqRel);
            }
        }

        if self.waiting.load(Ordering::Acquire) == self.workers {
            Poll::Converged
        } else {
            Poll::Idle
        }
    }

    /// Number of workers currently counted as idle
    pub fn waiting_workers(&self) -> usize {
        self.waiting.load(Ordering::Acquire)
    }
}
