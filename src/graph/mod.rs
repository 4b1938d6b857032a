//! Graph representations and the capability traits they implement.
//!
//! - `types`: node/edge identity and the no-edge sentinel
//! - `traits`: independent capability traits
//! - `dense`: adjacency-matrix directed graph
//! - `error`: precondition violations

pub mod dense;
pub mod error;
pub mod traits;
pub mod types;

pub use dense::DenseDirectedGraph;
pub use error::GraphError;
pub use traits::{Compact, EdgeCost, EdgeList, FanIn, FanOut, Graph, HeuristicCost, MutableGraph};
pub use types::{DirectedEdge, Edge, Node, NodeId, INF};
