use crate::graph::node::{Distance, Edge, Node, NodeId, Weight};
use crate::{Error, Result};

/// A directed graph that owns all of its nodes.
///
/// Edges refer to their targets by [`NodeId`], so the node list is the single
/// owner of every node. The structure is expected to be fully built before a
/// solver runs; during a run only the distance fields change.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {
    /// Creates a new empty graph
    pub fn new() -> Self {
        Graph { nodes: Vec::new() }
    }

    /// Creates a graph with `nodes` edgeless nodes
    pub fn with_capacity(nodes: usize) -> Self {
        let mut graph = Graph {
            nodes: Vec::with_capacity(nodes),
        };
        for _ in 0..nodes {
            graph.add_node();
        }
        graph
    }

    /// Adds a node and returns its ID
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new());
        id
    }

    /// Adds a directed edge `from -> to`
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) -> Result<()> {
        self.check(to)?;
        self.node_mut(from)?.add_edge(Edge::new(to, weight));
        Ok(())
    }

    /// Adds the two directed edges `a -> b` and `b -> a` with the same weight
    pub fn add_undirected_edge(&mut self, a: NodeId, b: NodeId, weight: Weight) -> Result<()> {
        self.check(a)?;
        self.check(b)?;
        self.nodes[a.0].add_edge(Edge::new(b, weight));
        self.nodes[b.0].add_edge(Edge::new(a, weight));
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.outgoing_edges().len()).sum()
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    /// Returns true if there's an edge `from -> to`
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.nodes
            .get(from.0)
            .map_or(false, |n| n.outgoing_edges().iter().any(|e| e.to == to))
    }

    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id.0).ok_or(Error::InvalidNode(id.0))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes.get_mut(id.0).ok_or(Error::InvalidNode(id.0))
    }

    /// Outgoing edges of a node
    pub fn outgoing_edges(&self, id: NodeId) -> Result<&[Edge]> {
        self.node(id).map(Node::outgoing_edges)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Resets the sequential and parallel distance of every node to
    /// [`INFINITY`](super::INFINITY). Required before reusing the graph for
    /// another run.
    pub fn reset_distances(&mut self) {
        self.nodes.iter_mut().for_each(Node::reset_distances);
    }

    /// Snapshot of the distances written by the sequential solver
    pub fn distances(&self) -> Vec<Distance> {
        self.nodes.iter().map(Node::distance).collect()
    }

    /// Snapshot of the distances written by the parallel solver
    pub fn atomic_distances(&self) -> Vec<Distance> {
        self.nodes.iter().map(Node::atomic_distance).collect()
    }

    pub(crate) fn check(&self, id: NodeId) -> Result<()> {
        if self.has_node(id) {
            Ok(())
        } else {
            Err(Error::InvalidNode(id.0))
        }
    }
}
