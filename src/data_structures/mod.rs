pub mod frontier;
pub mod priority_queue;

pub use frontier::{Frontier, FrontierEntry, Poll, WorkerSlot};
pub use priority_queue::IndexedMinHeap;
