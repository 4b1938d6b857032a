//! Node and edge identity types shared by every graph representation.
//!
//! Nodes are identified by a signed integer so that callers can ask about IDs
//! that can never be valid (e.g. `-1`) without a conversion step.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cost sentinel that encodes the absence of an edge.
///
/// Dense graphs store one cost per ordered node pair; a cell holding `INF`
/// means "no edge". A real edge's cost must never be `INF`.
pub const INF: f64 = f64::INFINITY;

/// Returns `true` if a stored cost denotes a real edge.
#[inline(always)]
#[allow(clippy::float_cmp)]
pub(crate) fn is_present(cost: f64) -> bool {
    cost != INF
}

/// A graph node with a stable integer identity.
pub trait Node {
    /// Returns the node's identifier.
    fn id(&self) -> i64;
}

/// A directed edge from `head` to `tail`.
pub trait Edge {
    /// The node type at both ends of the edge.
    type Node: Node;

    /// Source node.
    fn head(&self) -> Self::Node;

    /// Destination node.
    fn tail(&self) -> Self::Node;
}

/// A plain node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(pub i64);

impl NodeId {
    /// Builds the node that sits at row/column `index` of a dense buffer.
    #[inline]
    #[allow(clippy::cast_possible_wrap)]
    pub(crate) fn from_index(index: usize) -> Self {
        NodeId(index as i64)
    }
}

impl Node for NodeId {
    #[inline(always)]
    fn id(&self) -> i64 {
        self.0
    }
}

impl From<i64> for NodeId {
    fn from(id: i64) -> Self {
        NodeId(id)
    }
}

impl core::fmt::Display for NodeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered `(head, tail)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DirectedEdge<N = NodeId> {
    head: N,
    tail: N,
}

impl<N> DirectedEdge<N> {
    /// Creates the edge `head -> tail`.
    #[inline]
    pub const fn new(head: N, tail: N) -> Self {
        Self { head, tail }
    }

    /// Returns the same edge pointing the other way.
    pub fn reversed(self) -> Self {
        Self {
            head: self.tail,
            tail: self.head,
        }
    }
}

impl DirectedEdge<NodeId> {
    /// Shorthand for an edge between two raw IDs.
    pub const fn between(head: i64, tail: i64) -> Self {
        Self::new(NodeId(head), NodeId(tail))
    }
}

impl<N: Node + Copy> Edge for DirectedEdge<N> {
    type Node = N;

    #[inline(always)]
    fn head(&self) -> N {
        self.head
    }

    #[inline(always)]
    fn tail(&self) -> N {
        self.tail
    }
}
