use crate::graph::{Graph, NodeId, Weight};
use crate::{Error, Result};
use log::trace;
use rand::prelude::*;

/// Generates a random graph in which every node is reachable from one root.
///
/// The graph starts as a directed path through a random permutation of all
/// `node_count` nodes (`node_count - 1` edges). `edge_count - (node_count - 1)`
/// further connections are then added between random pairs of distinct nodes
/// that are not yet adjacent in either direction; each of these is undirected,
/// i.e. stored as two directed edges. Weights are uniform in `[0, max_weight)`.
///
/// No pair of nodes ever gets parallel edges in the same direction.
pub fn random_connected_graph<R: Rng + ?Sized>(
    rng: &mut R,
    node_count: usize,
    edge_count: usize,
    max_weight: Weight,
) -> Result<Graph> {
    if node_count == 0 {
        if edge_count > 0 {
            return Err(Error::InvalidArgument(format!(
                "cannot place {} edges in an empty graph",
                edge_count
            )));
        }
        return Ok(Graph::new());
    }
    if edge_count < node_count - 1 {
        return Err(Error::InvalidArgument(format!(
            "a connected graph on {} nodes needs at least {} edges, got {}",
            node_count,
            node_count - 1,
            edge_count
        )));
    }
    if max_weight == 0 {
        return Err(Error::InvalidArgument(
            "max_weight must be positive".to_string(),
        ));
    }

    let extra = edge_count - (node_count - 1);
    // Unordered pairs still free once the path has taken n - 1 of them
    let free_pairs = (node_count as u128 * (node_count as u128 - 1) / 2) - (node_count as u128 - 1);
    if extra as u128 > free_pairs {
        return Err(Error::InvalidArgument(format!(
            "only {} extra connections fit in a graph of {} nodes, got {}",
            free_pairs, node_count, extra
        )));
    }

    let mut graph = Graph::with_capacity(node_count);

    let mut order: Vec<NodeId> = graph.node_ids().collect();
    order.shuffle(rng);
    for pair in order.windows(2) {
        graph.add_edge(pair[0], pair[1], rng.gen_range(0..max_weight))?;
    }
    trace!("spanning path over {} nodes built", node_count);

    for _ in 0..extra {
        loop {
            let first = NodeId(rng.gen_range(0..node_count));
            let second = NodeId(rng.gen_range(0..node_count));
            if first == second || graph.has_edge(first, second) || graph.has_edge(second, first) {
                continue;
            }
            graph.add_undirected_edge(first, second, rng.gen_range(0..max_weight))?;
            break;
        }
    }
    trace!(
        "random graph ready: {} nodes, {} directed edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}

/// [`random_connected_graph`] driven by the thread-local RNG
pub fn generate_connected_graph(
    node_count: usize,
    edge_count: usize,
    max_weight: Weight,
) -> Result<Graph> {
    random_connected_graph(&mut rand::thread_rng(), node_count, edge_count, max_weight)
}
