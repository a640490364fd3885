use crate::graph::{Distance, Graph, Node, NodeId};
use crate::Result;

/// Trait for single-source shortest path solvers
pub trait ShortestPathAlgorithm {
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Computes distances from `start` and returns the one of `destination`,
    /// or [`INFINITY`](crate::INFINITY) if it cannot be reached.
    ///
    /// The graph's distances must be reset between runs of the same solver.
    fn shortest_path(
        &self,
        graph: &mut Graph,
        start: NodeId,
        destination: NodeId,
    ) -> Result<Distance>;

    /// The distance field this solver writes
    fn node_distance(&self, node: &Node) -> Distance;

    /// Reads this solver's distance for `node`
    fn stored_distance(&self, graph: &Graph, node: NodeId) -> Result<Distance> {
        graph.node(node).map(|n| self.node_distance(n))
    }

    /// Every node's distance after a run, in node order
    fn stored_distances(&self, graph: &Graph) -> Vec<Distance> {
        graph.nodes().iter().map(|n| self.node_distance(n)).collect()
    }
}
