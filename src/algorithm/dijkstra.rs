use log::debug;

use crate::algorithm::ShortestPathAlgorithm;
use crate::data_structures::IndexedMinHeap;
use crate::graph::{Distance, Graph, Node, NodeId};
use crate::Result;

/// Classic Dijkstra's algorithm over the plain `distance` field
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    pub fn run(&self, graph: &mut Graph, start: NodeId, destination: NodeId) -> Result<Distance> {
        graph.check(start)?;
        graph.check(destination)?;

        graph.node_mut(start)?.set_distance(0);
        let mut queue = IndexedMinHeap::<Distance>::new(graph.node_count());
        queue.push_or_update(start.index(), 0);

        let mut settled = 0usize;
        while let Some((u, dist_u)) = queue.pop() {
            settled += 1;
            // Edges are copied out so targets can be written while iterating
            for i in 0..graph.nodes()[u].outgoing_edges().len() {
                let edge = graph.nodes()[u].outgoing_edges()[i];
                let candidate = dist_u.saturating_add(Distance::from(edge.weight));
                let target = graph.node_mut(edge.to)?;
                if candidate < target.distance() {
                    target.set_distance(candidate);
                    queue.push_or_update(edge.to.index(), candidate);
                }
            }
        }

        let distance = graph.node(destination)?.distance();
        debug!(
            "dijkstra {} -> {}: distance {} ({} nodes settled)",
            start, destination, distance, settled
        );
        Ok(distance)
    }
}

impl ShortestPathAlgorithm for Dijkstra {
    fn name(&self) -> &'static str {
        "Dijkstra"
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
        node.distance()
    }
}

/// Runs the sequential solver; returns [`INFINITY`](crate::INFINITY) if
/// `destination` is unreachable.
pub fn shortest_path_sequential(
    graph: &mut Graph,
    start: NodeId,
    destination: NodeId,
) -> Result<Distance> {
    Dijkstra::new().run(graph, start, destination)
}
