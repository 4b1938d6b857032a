//! Unit-cost, null-heuristic view over an unweighted graph.

use crate::graph::traits::{EdgeCost, FanOut, Graph, HeuristicCost};
use crate::graph::types::{DirectedEdge, Edge};

/// Presents any [`FanOut`] graph as a [`HeuristicSearchGraph`](super::HeuristicSearchGraph).
///
/// Every edge costs `1` and the heuristic is always `0`, which is admissible and
/// consistent. Informed search over this view degrades to uniform-cost search,
/// expanding nodes in breadth-first order.
///
/// Wrap a reference (`UnitNullGraph::new(&graph)`) to leave ownership with the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitNullGraph<G> {
    graph: G,
}

impl<G> UnitNullGraph<G> {
    /// Wraps `graph`.
    pub const fn new(graph: G) -> Self {
        Self { graph }
    }

    /// Returns the wrapped graph.
    pub fn get_ref(&self) -> &G {
        &self.graph
    }

    /// Unwraps the view.
    pub fn into_inner(self) -> G {
        self.graph
    }
}

impl<G: Graph> Graph for UnitNullGraph<G> {
    type Node = G::Node;

    #[inline]
    fn has(&self, node: Self::Node) -> bool {
        self.graph.has(node)
    }

    #[inline]
    fn order(&self) -> usize {
        self.graph.order()
    }

    fn nodes(&self) -> impl Iterator<Item = Self::Node> + '_ {
        self.graph.nodes()
    }
}

impl<G: FanOut> FanOut for UnitNullGraph<G> {
    fn from(&self, node: Self::Node) -> impl Iterator<Item = Self::Node> + '_ {
        self.graph.from(node)
    }
}

impl<G: FanOut> EdgeCost for UnitNullGraph<G> {
    fn has_edge(&self, head: Self::Node, tail: Self::Node) -> bool {
        self.graph.has(head) && self.graph.from(head).any(|succ| succ == tail)
    }

    fn edge_between(&self, head: Self::Node, tail: Self::Node) -> Option<DirectedEdge<Self::Node>> {
        self.has_edge(head, tail).then_some(DirectedEdge::new(head, tail))
    }

    #[inline]
    fn cost<E: Edge<Node = Self::Node>>(&self, _edge: &E) -> f64 {
        1.0
    }
}

impl<G: FanOut> HeuristicCost for UnitNullGraph<G> {
    #[inline]
    fn heuristic_cost(&self, _from: Self::Node, _to: Self::Node) -> f64 {
        0.0
    }
}
