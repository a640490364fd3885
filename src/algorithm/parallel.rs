use std::num::NonZeroUsize;
use std::ops::AddAssign;
use std::sync::atomic::Ordering;

use log::debug;

use crate::algorithm::ShortestPathAlgorithm;
use crate::data_structures::{Frontier, FrontierEntry, Poll, WorkerSlot};
use crate::graph::{Distance, Graph, Node, NodeId};
use crate::{Error, Result};

/// Counters gathered by one parallel run, summed over all workers
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Number of workers in the pool
    pub workers: usize,
    /// Live frontier entries whose edges were relaxed
    pub processed: u64,
    /// Entries dropped because their node had been lowered since
    pub stale: u64,
    /// Successful compare-and-swap updates
    pub relaxations: u64,
    /// Compare-and-swap attempts lost to another worker
    pub cas_retries: u64,
    /// Polls that found nothing to do
    pub idle_polls: u64,
}

impl AddAssign for RunStats {
    fn add_assign(&mut self, other: RunStats) {
        self.processed += other.processed;
        self.stale += other.stale;
        self.relaxations += other.relaxations;
        self.cas_retries += other.cas_retries;
        self.idle_polls += other.idle_polls;
    }
}

/// Label-correcting shortest path solver run by a fixed pool of workers.
///
/// The frontier is only a scheduling hint: workers may process nodes out of
/// distance order, and a node may be processed several times. Each improving
/// relaxation is published through a compare-and-swap on the target's atomic
/// distance and re-queued, so the run reaches the same fixed point as
/// [`Dijkstra`](super::dijkstra::Dijkstra).
#[derive(Debug, Clone)]
pub struct ParallelDijkstra {
    /// Size of the worker pool
    workers: usize,
}

impl ParallelDijkstra {
    /// Creates a solver with one worker per available hardware thread
    pub fn new() -> Self {
        ParallelDijkstra {
            workers: std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
        }
    }

    /// Set the number of workers
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Runs the solver and returns the destination's distance together with
    /// the run's counters.
    pub fn shortest_path_with_stats(
        &self,
        graph: &Graph,
        start: NodeId,
        destination: NodeId,
    ) -> Result<(Distance, RunStats)> {
        if self.workers == 0 {
            return Err(Error::InvalidArgument(
                "worker pool needs at least one worker".to_string(),
            ));
        }
        graph.check(start)?;
        graph.check(destination)?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("sssp-worker-{}", i))
            .build()?;

        graph.node(start)?.atomic().store(0, Ordering::Release);
        let frontier = Frontier::new(self.workers);
        frontier.push(FrontierEntry::new(0, start));

        debug!(
            "parallel run {} -> {} on {} workers",
            start, destination, self.workers
        );

        // Every pool thread runs exactly one worker; broadcast returns once
        // all of them have stopped, which publishes their writes to us.
        let per_worker = pool.broadcast(|_| work(graph, &frontier));

        let mut stats = RunStats {
            workers: self.workers,
            ..RunStats::default()
        };
        for worker in per_worker {
            stats += worker;
        }

        let distance = graph.node(destination)?.atomic_distance();
        debug!(
            "parallel run {} -> {}: distance {} ({:?})",
            start, destination, distance, stats
        );
        Ok((distance, stats))
    }

    pub fn run(&self, graph: &Graph, start: NodeId, destination: NodeId) -> Result<Distance> {
        self.shortest_path_with_stats(graph, start, destination)
            .map(|(distance, _)| distance)
    }
}

impl Default for ParallelDijkstra {
    fn default() -> Self {
        ParallelDijkstra::new()
    }
}

/// One worker's loop: poll, relax, repeat until the pool has converged.
fn work(graph: &Graph, frontier: &Frontier) -> RunStats {
    let nodes = graph.nodes();
    let mut slot = WorkerSlot::default();
    let mut stats = RunStats::default();

    loop {
        let entry = match frontier.poll(&mut slot, |e| {
            e.distance == nodes[e.node.index()].atomic_distance()
        }) {
            Poll::Work(entry) => entry,
            Poll::Idle => {
                stats.idle_polls += 1;
                std::hint::spin_loop();
                std::thread::yield_now();
                continue;
            }
            Poll::Converged => break,
        };
        stats.processed += 1;

        let current = &nodes[entry.node.index()];
        for edge in current.outgoing_edges() {
            let target = nodes[edge.to.index()].atomic();
            let mut before = target.load(Ordering::Acquire);
            loop {
                let after = current
                    .atomic_distance()
                    .saturating_add(Distance::from(edge.weight));
                if after >= before {
                    break;
                }
                match target.compare_exchange(before, after, Ordering::AcqRel, Ordering::Acquire) {
                    Ok(_) => {
                        stats.relaxations += 1;
                        frontier.push(FrontierEntry::new(after, edge.to));
                        break;
                    }
                    Err(latest) => {
                        stats.cas_retries += 1;
                        before = latest;
                    }
                }
            }
        }
    }

    stats.stale = slot.stale;
    stats
}

impl ShortestPathAlgorithm for ParallelDijkstra {
    fn name(&self) -> &'static str {
        "Parallel Dijkstra"
    }

    fn shortest_path(
        &self,
        graph: &mut Graph,
        start: NodeId,
        destination: NodeId,
    ) -> Result<Distance> {
        self.run(graph, start, destination)
    }

    fn node_distance(&self, node: &Node) -> Distance {
        node.atomic_distance()
    }
}

/// Runs the parallel solver with one worker per hardware thread; returns
/// [`INFINITY`](crate::INFINITY) if `destination` is unreachable.
pub fn shortest_path_parallel(
    graph: &Graph,
    start: NodeId,
    destination: NodeId,
) -> Result<Distance> {
    ParallelDijkstra::new().run(graph, start, destination)
}
