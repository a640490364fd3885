//! Parallel SSSP - single-source shortest paths with a lock-free worker pool
//!
//! This library computes shortest-path distances on directed graphs with
//! non-negative integer weights. Two solvers are provided:
//!
//! - [`Dijkstra`]: the classic single-threaded label-setting algorithm, used as
//!   the reference result.
//! - [`ParallelDijkstra`]: a label-correcting solver where a fixed pool of
//!   workers relaxes edges against a shared priority frontier. Node distances
//!   are updated with compare-and-swap, stale frontier entries are discarded
//!   lazily, and the pool stops once every worker is simultaneously idle.
//!
//! Unreachable nodes report [`INFINITY`].

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{shortest_path_sequential, Dijkstra},
    parallel::{shortest_path_parallel, ParallelDijkstra, RunStats},
    ShortestPathAlgorithm,
};
/// Re-export main types for convenient use
pub use graph::{Distance, Edge, Graph, Node, NodeId, Weight, INFINITY};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid node ID: {0}")]
    InvalidNode(usize),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
