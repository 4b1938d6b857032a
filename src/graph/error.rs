//! Error type for graph operations.

use thiserror::Error;

/// Precondition violations reported by graph operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum GraphError {
    /// A node ID outside `[0, order)`.
    #[error("node {id} out of range for graph of order {order}")]
    OutOfRange {
        /// The offending node ID.
        id: i64,
        /// Number of nodes in the graph.
        order: usize,
    },

    /// An edge cost equal to the "no edge" sentinel.
    ///
    /// Accepting it would silently delete the edge from every later read.
    #[error("cost of edge {head}->{tail} cannot be the no-edge sentinel (+inf)")]
    AmbiguousCost {
        /// Source node ID.
        head: i64,
        /// Destination node ID.
        tail: i64,
    },
}

/// Result alias for graph operations.
pub type Result<T> = core::result::Result<T, GraphError>;
