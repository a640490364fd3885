pub mod node;
pub mod directed;
pub mod generators;

pub use node::{Distance, Edge, Node, NodeId, Weight, INFINITY};
pub use directed::Graph;
pub use generators::{generate_connected_graph, random_connected_graph};
