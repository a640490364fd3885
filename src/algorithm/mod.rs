pub mod traits;
pub mod dijkstra;
pub mod parallel;

pub use traits::ShortestPathAlgorithm;
