//! Capability traits for graph representations.
//!
//! Each trait is a small, independent operation set. A representation implements
//! whichever subset it can support; algorithms bound on the subset they need.
//! The only shared base is [`Graph`], which names the node type.
//!
//! | Trait | Operations |
//! |-------|------------|
//! | [`Graph`] | `has`, `order`, `nodes` |
//! | [`FanOut`] | `from` |
//! | [`FanIn`] | `to` |
//! | [`EdgeList`] | `edges` |
//! | [`EdgeCost`] | `has_edge`, `edge_between`, `cost` |
//! | [`HeuristicCost`] | `heuristic_cost` |
//! | [`MutableGraph`] | `set_edge_cost`, `remove_edge` |
//! | [`Compact`] | `compact` |
//!
//! Read traits are also implemented for `&G`, so wrappers and algorithms can
//! borrow a graph instead of owning it.

use super::error::Result;
use super::types::{DirectedEdge, Edge, Node};

/// A finite set of nodes.
pub trait Graph {
    /// Node identity type.
    type Node: Node + Copy + PartialEq;

    /// Returns `true` if `node` belongs to the graph. Never fails.
    fn has(&self, node: Self::Node) -> bool;

    /// Returns the number of nodes.
    fn order(&self) -> usize;

    /// Iterates over every node. Each call starts a fresh iteration.
    fn nodes(&self) -> impl Iterator<Item = Self::Node> + '_;
}

/// Successor lookup.
pub trait FanOut: Graph {
    /// Iterates over every node reachable from `node` through one edge.
    fn from(&self, node: Self::Node) -> impl Iterator<Item = Self::Node> + '_;
}

/// Predecessor lookup.
pub trait FanIn: Graph {
    /// Iterates over every node with an edge into `node`.
    fn to(&self, node: Self::Node) -> impl Iterator<Item = Self::Node> + '_;
}

/// Full edge enumeration.
pub trait EdgeList: Graph {
    /// Iterates over every edge in the graph.
    fn edges(&self) -> impl Iterator<Item = DirectedEdge<Self::Node>> + '_;
}

/// Edge lookup and edge costs.
pub trait EdgeCost: Graph {
    /// Returns `true` if the edge `head -> tail` exists.
    fn has_edge(&self, head: Self::Node, tail: Self::Node) -> bool;

    /// Returns the edge `head -> tail` if it exists.
    fn edge_between(&self, head: Self::Node, tail: Self::Node) -> Option<DirectedEdge<Self::Node>>;

    /// Returns the cost of traversing `edge`.
    fn cost<E: Edge<Node = Self::Node>>(&self, edge: &E) -> f64;
}

/// Remaining-cost estimates for informed search.
pub trait HeuristicCost: Graph {
    /// Estimates the cost of the cheapest path from `from` to `to`.
    ///
    /// Implementations must never overestimate (admissible).
    fn heuristic_cost(&self, from: Self::Node, to: Self::Node) -> f64;
}

/// Edge mutation.
pub trait MutableGraph: Graph {
    /// Adds `edge` or changes its cost.
    ///
    /// # Errors
    /// Implementations reject costs that their storage cannot tell apart from
    /// "no edge", and endpoints outside the graph.
    fn set_edge_cost<E: Edge<Node = Self::Node>>(&mut self, edge: &E, cost: f64) -> Result<()>;

    /// Removes `edge`. Removing an absent edge is a no-op.
    ///
    /// # Errors
    /// Implementations reject endpoints outside the graph.
    fn remove_edge<E: Edge<Node = Self::Node>>(&mut self, edge: &E) -> Result<()>;
}

/// Deferred maintenance hook.
///
/// Representations that rebuild derived indices lazily do so here; callers
/// invoke it after a batch of mutations and before the next batch of reads.
/// Must be idempotent.
pub trait Compact {
    /// Brings derived state up to date with the latest mutations.
    fn compact(&mut self);
}

impl<G: Graph + ?Sized> Graph for &G {
    type Node = G::Node;

    #[inline]
    fn has(&self, node: Self::Node) -> bool {
        (**self).has(node)
    }

    #[inline]
    fn order(&self) -> usize {
        (**self).order()
    }

    #[inline]
    fn nodes(&self) -> impl Iterator<Item = Self::Node> + '_ {
        (**self).nodes()
    }
}

impl<G: FanOut + ?Sized> FanOut for &G {
    #[inline]
    fn from(&self, node: Self::Node) -> impl Iterator<Item = Self::Node> + '_ {
        (**self).from(node)
    }
}

impl<G: FanIn + ?Sized> FanIn for &G {
    #[inline]
    fn to(&self, node: Self::Node) -> impl Iterator<Item = Self::Node> + '_ {
        (**self).to(node)
    }
}

impl<G: EdgeList + ?Sized> EdgeList for &G {
    #[inline]
    fn edges(&self) -> impl Iterator<Item = DirectedEdge<Self::Node>> + '_ {
        (**self).edges()
    }
}

impl<G: EdgeCost + ?Sized> EdgeCost for &G {
    #[inline]
    fn has_edge(&self, head: Self::Node, tail: Self::Node) -> bool {
        (**self).has_edge(head, tail)
    }

    #[inline]
    fn edge_between(&self, head: Self::Node, tail: Self::Node) -> Option<DirectedEdge<Self::Node>> {
        (**self).edge_between(head, tail)
    }

    #[inline]
    fn cost<E: Edge<Node = Self::Node>>(&self, edge: &E) -> f64 {
        (**self).cost(edge)
    }
}

impl<G: HeuristicCost + ?Sized> HeuristicCost for &G {
    #[inline]
    fn heuristic_cost(&self, from: Self::Node, to: Self::Node) -> f64 {
        (**self).heuristic_cost(from, to)
    }
}
