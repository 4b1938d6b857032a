//! # `densegraph` - Dense Directed Graphs for Generic Search
//!
//! A dense, matrix-backed directed weighted graph plus a set of small capability
//! traits that let graph-search algorithms run over any graph representation
//! without knowing how it is stored.
//!
//! ## Data Layout
//!
//! A [`DenseDirectedGraph`] of order `n` owns one `n x n` row-major
//! [`DenseMatrix<f64>`]. Cell `(i, j)` holds the cost of edge `i -> j`, or the
//! sentinel [`INF`](graph::INF) when there is no such edge. Node IDs are exactly
//! the row/column indices `0..n`.
//!
//! ## Capability Tiers
//!
//! 1. **Fan-out** ([`SourceSearchGraph`](search::SourceSearchGraph)):
//!    successor lookup. Enough for breadth-first traversal.
//! 2. **Cost** ([`CostSearchGraph`](search::CostSearchGraph)):
//!    fan-out plus edge lookup and costs. Enough for Dijkstra-class search.
//! 3. **Heuristic** ([`HeuristicSearchGraph`](search::HeuristicSearchGraph)):
//!    cost plus an admissible heuristic. Enough for A*-class search.
//!
//! [`UnitNullGraph`](search::UnitNullGraph) lifts a fan-out-only graph into the
//! heuristic tier with unit costs and a zero heuristic.
//!
//! ## Concurrency
//!
//! No internal synchronization. Reads take `&self` and writes take `&mut self`,
//! so the borrow checker rules out a write racing any read.
//!
//! ## Example
//!
//! ```rust
//! use densegraph::graph::{DenseDirectedGraph, DirectedEdge, NodeId};
//!
//! let mut graph = DenseDirectedGraph::new(2, false);
//! graph.set_edge_cost(&DirectedEdge::between(0, 1), 4.5).unwrap();
//!
//! assert_eq!(graph.from(NodeId(0)).collect::<Vec<_>>(), vec![NodeId(1)]);
//! assert_eq!(graph.to(NodeId(1)).collect::<Vec<_>>(), vec![NodeId(0)]);
//! assert_eq!(graph.cost(&DirectedEdge::between(0, 1)), 4.5);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod graph;
pub mod search;

pub use collections::DenseMatrix;
pub use graph::{DenseDirectedGraph, GraphError};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Identity types stay plain integers.
    assert!(mem::size_of::<graph::NodeId>() == mem::size_of::<i64>());
    assert!(mem::size_of::<graph::DirectedEdge>() == 2 * mem::size_of::<i64>());

    // The null-cost view adds nothing on top of a borrowed graph.
    assert!(
        mem::size_of::<search::UnitNullGraph<&'static DenseDirectedGraph>>()
            == mem::size_of::<&'static DenseDirectedGraph>()
    );
};
