//! Dense adjacency-matrix representation for directed weighted graphs.
//!
//! The graph owns one `n x n` [`DenseMatrix<f64>`]: cell `(i, j)` holds the cost
//! of edge `i -> j`, or [`INF`] when there is no such edge. Node identity is the
//! row/column index, so the node set is exactly `{0, ..., n-1}`.
//!
//! This module is vertically split:
//! - `iter`: node, neighbor and edge iteration
//! - `tests`: module-local tests

use crate::collections::DenseMatrix;
use crate::graph::error::{GraphError, Result};
use crate::graph::traits::{Compact, EdgeCost, EdgeList, FanIn, FanOut, Graph, MutableGraph};
use crate::graph::types::{is_present, DirectedEdge, Edge, Node, NodeId, INF};

mod iter;

pub use iter::{DenseEdges, DenseNeighbors, DenseNodes, DensePredecessors, DenseSuccessors};

/// A directed graph backed by a dense cost matrix.
///
/// The order is fixed at construction. Edges are added by giving them a finite
/// cost and removed by resetting the cell to the sentinel.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `has`, `has_edge`, `cost` | \(O(1)\) | Direct cell lookup |
/// | `set_edge_cost`, `remove_edge` | \(O(1)\) | Single cell write |
/// | `from` | \(O(n)\) | Contiguous row scan |
/// | `to` | \(O(n)\) | Strided column scan |
/// | `edges`, `edge_count` | \(O(n^2)\) | Full matrix scan |
/// | `snapshot` | \(O(n^2)\) | Copies the matrix |
///
/// # Panics
/// Read operations other than [`has`](Self::has) and
/// [`edge_between`](Self::edge_between) panic when given a node outside the
/// graph. Guard with `has` first.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseDirectedGraph {
    mat: DenseMatrix<f64>,
}

impl DenseDirectedGraph {
    /// Creates a graph with `order` nodes.
    ///
    /// If `passable` is true every ordered pair, self-loops included, starts
    /// with a unit-cost edge. Otherwise the graph starts with no edges.
    ///
    /// # Panics
    /// Panics if `order * order` overflows `usize`.
    pub fn new(order: usize, passable: bool) -> Self {
        let fill = if passable { 1.0 } else { INF };

        #[cfg(feature = "tracing")]
        tracing::debug!(order, passable, "created dense directed graph");

        let mat = DenseMatrix::filled(order, order, fill);
        debug_assert!(mat.is_square());
        Self { mat }
    }

    #[inline]
    fn index_of(&self, id: i64) -> Result<usize> {
        let order = self.order();
        usize::try_from(id)
            .ok()
            .filter(|&i| i < order)
            .ok_or(GraphError::OutOfRange { id, order })
    }

    #[inline]
    fn expect_index(&self, id: i64) -> usize {
        match self.index_of(id) {
            Ok(i) => i,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns `true` if `node`'s ID lies in `[0, order)`. Never fails.
    #[inline]
    pub fn has(&self, node: impl Node) -> bool {
        self.index_of(node.id()).is_ok()
    }

    /// Returns the number of nodes.
    #[inline(always)]
    pub fn order(&self) -> usize {
        self.mat.rows()
    }

    /// Iterates over all nodes in ID order.
    pub fn nodes(&self) -> DenseNodes {
        DenseNodes {
            range: 0..self.order(),
        }
    }

    /// Iterates over every edge, row by row: all edges leaving node 0 first,
    /// then node 1, and so on.
    pub fn edges(&self) -> DenseEdges<'_> {
        DenseEdges {
            cells: self.mat.as_slice(),
            order: self.order(),
            index: 0,
        }
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.mat
            .as_slice()
            .iter()
            .filter(|&&cost| is_present(cost))
            .count()
    }

    /// Iterates over the successors of `node` in ID order.
    ///
    /// # Panics
    /// Panics if `node` is not in the graph.
    pub fn from(&self, node: impl Node) -> DenseSuccessors<'_> {
        let i = self.expect_index(node.id());
        DenseNeighbors {
            cells: self.mat.row(i).unwrap_or_default().iter().enumerate(),
        }
    }

    /// Iterates over the predecessors of `node` in ID order.
    ///
    /// # Panics
    /// Panics if `node` is not in the graph.
    pub fn to(&self, node: impl Node) -> DensePredecessors<'_> {
        let j = self.expect_index(node.id());
        DenseNeighbors {
            cells: self.mat.column(j).enumerate(),
        }
    }

    /// Returns `true` if the edge `head -> tail` exists.
    ///
    /// # Panics
    /// Panics if either node is not in the graph.
    pub fn has_edge(&self, head: impl Node, tail: impl Node) -> bool {
        let i = self.expect_index(head.id());
        let j = self.expect_index(tail.id());
        is_present(self.mat[(i, j)])
    }

    /// Returns the edge `head -> tail` if it exists.
    ///
    /// Nodes outside the graph have no edges, so this never fails.
    pub fn edge_between<N: Node + Copy>(&self, head: N, tail: N) -> Option<DirectedEdge<N>> {
        let i = self.index_of(head.id()).ok()?;
        let j = self.index_of(tail.id()).ok()?;
        is_present(self.mat[(i, j)]).then_some(DirectedEdge::new(head, tail))
    }

    /// Returns the stored cost of `edge`, which is [`INF`] if the edge is absent.
    ///
    /// # Panics
    /// Panics if either endpoint is not in the graph.
    pub fn cost(&self, edge: &impl Edge) -> f64 {
        let i = self.expect_index(edge.head().id());
        let j = self.expect_index(edge.tail().id());
        self.mat[(i, j)]
    }

    /// Adds `edge` or changes its cost.
    ///
    /// # Errors
    /// - [`GraphError::OutOfRange`] if either endpoint is not in the graph.
    /// - [`GraphError::AmbiguousCost`] if `cost` is [`INF`]. Storing it would make
    ///   the edge indistinguishable from "no edge"; use
    ///   [`remove_edge`](Self::remove_edge) to delete an edge instead.
    ///
    /// The graph is unchanged when an error is returned.
    pub fn set_edge_cost(&mut self, edge: &impl Edge, cost: f64) -> Result<()> {
        let (head, tail) = (edge.head().id(), edge.tail().id());
        let i = self.index_of(head)?;
        let j = self.index_of(tail)?;

        if !is_present(cost) {
            #[cfg(feature = "tracing")]
            tracing::warn!(head, tail, "rejected no-edge sentinel as edge cost");
            return Err(GraphError::AmbiguousCost { head, tail });
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(head, tail, cost, "set edge cost");

        self.mat[(i, j)] = cost;
        Ok(())
    }

    /// Removes `edge`. Removing an absent edge is a no-op.
    ///
    /// # Errors
    /// [`GraphError::OutOfRange`] if either endpoint is not in the graph.
    pub fn remove_edge(&mut self, edge: &impl Edge) -> Result<()> {
        let (head, tail) = (edge.head().id(), edge.tail().id());
        let i = self.index_of(head)?;
        let j = self.index_of(tail)?;

        #[cfg(feature = "tracing")]
        tracing::trace!(head, tail, "remove edge");

        self.mat[(i, j)] = INF;
        Ok(())
    }

    /// Returns a copy of the cost matrix.
    ///
    /// The copy is detached: writes to it never reach the graph, and later
    /// graph mutations never show up in it.
    pub fn snapshot(&self) -> DenseMatrix<f64> {
        self.mat.clone()
    }

    /// Maintenance hook. The dense layout has no derived state, so this does nothing.
    #[inline]
    pub fn compact(&mut self) {}
}

impl Default for DenseDirectedGraph {
    fn default() -> Self {
        Self::new(0, false)
    }
}

impl Graph for DenseDirectedGraph {
    type Node = NodeId;

    #[inline]
    fn has(&self, node: NodeId) -> bool {
        Self::has(self, node)
    }

    #[inline]
    fn order(&self) -> usize {
        Self::order(self)
    }

    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        Self::nodes(self)
    }
}

impl FanOut for DenseDirectedGraph {
    fn from(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        Self::from(self, node)
    }
}

impl FanIn for DenseDirectedGraph {
    fn to(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        Self::to(self, node)
    }
}

impl EdgeList for DenseDirectedGraph {
    fn edges(&self) -> impl Iterator<Item = DirectedEdge> + '_ {
        Self::edges(self)
    }
}

impl EdgeCost for DenseDirectedGraph {
    #[inline]
    fn has_edge(&self, head: NodeId, tail: NodeId) -> bool {
        Self::has_edge(self, head, tail)
    }

    #[inline]
    fn edge_between(&self, head: NodeId, tail: NodeId) -> Option<DirectedEdge> {
        Self::edge_between(self, head, tail)
    }

    #[inline]
    fn cost<E: Edge<Node = NodeId>>(&self, edge: &E) -> f64 {
        Self::cost(self, edge)
    }
}

impl MutableGraph for DenseDirectedGraph {
    fn set_edge_cost<E: Edge<Node = NodeId>>(&mut self, edge: &E, cost: f64) -> Result<()> {
        Self::set_edge_cost(self, edge, cost)
    }

    fn remove_edge<E: Edge<Node = NodeId>>(&mut self, edge: &E) -> Result<()> {
        Self::remove_edge(self, edge)
    }
}

impl Compact for DenseDirectedGraph {
    fn compact(&mut self) {
        Self::compact(self);
    }
}
