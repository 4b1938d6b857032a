//! Capability tiers for graph-search algorithms.
//!
//! A search algorithm bounds its graph parameter on the weakest tier it needs:
//!
//! - [`SourceSearchGraph`]: fan out from a node. Enough for BFS, DFS and
//!   connectivity.
//! - [`CostSearchGraph`]: fan out plus edge lookup and costs. Enough for
//!   Dijkstra-class shortest paths.
//! - [`HeuristicSearchGraph`]: all of the above plus an admissible heuristic.
//!   Enough for A*-class informed search.
//!
//! Tiers are blanket-implemented: any type with the underlying
//! [capabilities](crate::graph::traits) belongs to the tier automatically.
//! [`UnitNullGraph`] lifts a fan-out-only graph into the top tier.

use crate::graph::traits::{EdgeCost, FanOut, HeuristicCost};

mod unit_null;

pub use unit_null::UnitNullGraph;

/// The minimal capability set for fanning out from a single source node.
pub trait SourceSearchGraph: FanOut {}

impl<G: FanOut + ?Sized> SourceSearchGraph for G {}

/// The minimal capability set for a weighted search from a single source node.
pub trait CostSearchGraph: FanOut + EdgeCost {}

impl<G: FanOut + EdgeCost + ?Sized> CostSearchGraph for G {}

/// The minimal capability set for a heuristic search from a single source node.
pub trait HeuristicSearchGraph: CostSearchGraph + HeuristicCost {}

impl<G: CostSearchGraph + HeuristicCost + ?Sized> HeuristicSearchGraph for G {}
