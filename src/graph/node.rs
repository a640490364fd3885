use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Edge weight. Unsigned, so negative weights cannot be expressed.
pub type Weight = u32;

/// Path length from the start node.
pub type Distance = u64;

/// Sentinel distance for nodes that have not been reached.
///
/// A simple path over fewer than `2^32` nodes with `u32` weights sums to less
/// than `u64::MAX`, so a reachable node can never collide with the sentinel.
pub const INFINITY: Distance = Distance::MAX;

/// Index of a node inside its [`Graph`](super::Graph)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Returns the position of the node in the graph's node list
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

/// A directed, weighted edge. The source is the node that stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Target node
    pub to: NodeId,

    /// Non-negative edge weight
    pub weight: Weight,
}

impl Edge {
    pub fn new(to: NodeId, weight: Weight) -> Self {
        Edge { to, weight }
    }
}

/// A graph node with its outgoing edges and per-run distance state.
///
/// The two distance fields are independent: `distance` belongs to the
/// sequential solver and `atomic_distance` to the parallel one, so running one
/// solver never disturbs the other's result.
#[derive(Debug)]
pub struct Node {
    outgoing_edges: Vec<Edge>,
    distance: Distance,
    atomic_distance: AtomicU64,
}

impl Node {
    /// Creates a node with no edges and both distances set to [`INFINITY`]
    pub fn new() -> Self {
        Node {
            outgoing_edges: Vec::new(),
            distance: INFINITY,
            atomic_distance: AtomicU64::new(INFINITY),
        }
    }

    /// Outgoing edges in insertion order
    pub fn outgoing_edges(&self) -> &[Edge] {
        &self.outgoing_edges
    }

    /// Distance written by the sequential solver
    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Distance written by the parallel solver
    pub fn atomic_distance(&self) -> Distance {
        self.atomic_distance.load(Ordering::Acquire)
    }

    pub(crate) fn add_edge(&mut self, edge: Edge) {
        self.outgoing_edges.push(edge);
    }

    pub(crate) fn set_distance(&mut self, distance: Distance) {
        self.distance = distance;
    }

    pub(crate) fn atomic(&self) -> &AtomicU64 {
        &self.atomic_distance
    }

    /// Puts both distance fields back to [`INFINITY`]
    pub fn reset_distances(&mut self) {
        self.distance = INFINITY;
        *self.atomic_distance.get_mut() = INFINITY;
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::new()
    }
}
