//! Reference searches written against the capability tiers.
//!
//! The crate ships no search algorithms; these minimal ones exist to check that
//! each tier carries exactly what its class of algorithm needs.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use densegraph::graph::{DenseDirectedGraph, DirectedEdge, FanOut, Graph, Node, NodeId};
use densegraph::search::{CostSearchGraph, HeuristicSearchGraph, SourceSearchGraph, UnitNullGraph};

/// Breadth-first visitation order from `start`.
fn breadth_first<G: SourceSearchGraph>(g: &G, start: G::Node) -> Vec<G::Node> {
    let mut seen = HashSet::from([start.id()]);
    let mut queue = VecDeque::from([start]);
    let mut order = Vec::new();

    while let Some(u) = queue.pop_front() {
        order.push(u);
        for v in g.from(u) {
            if seen.insert(v.id()) {
                queue.push_back(v);
            }
        }
    }
    order
}

/// Min-heap entry ordered by `f`, ties broken by insertion sequence (FIFO).
struct Entry<N> {
    f: f64,
    seq: u64,
    node: N,
}

impl<N> PartialEq for Entry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for Entry<N> {}

impl<N> PartialOrd for Entry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for Entry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Best-first search; returns the expansion order and the cost to every settled node.
fn best_first<G, H>(g: &G, start: G::Node, heuristic: H) -> (Vec<G::Node>, HashMap<i64, f64>)
where
    G: CostSearchGraph,
    H: Fn(G::Node) -> f64,
{
    let mut dist = HashMap::from([(start.id(), 0.0)]);
    let mut closed = HashSet::new();
    let mut heap = BinaryHeap::new();
    let mut seq = 0;
    let mut order = Vec::new();

    heap.push(Entry {
        f: heuristic(start),
        seq,
        node: start,
    });

    while let Some(Entry { node: u, .. }) = heap.pop() {
        if !closed.insert(u.id()) {
            continue;
        }
        order.push(u);
        let du = dist[&u.id()];

        for v in g.from(u) {
            let Some(edge) = g.edge_between(u, v) else {
                continue;
            };
            let dv = du + g.cost(&edge);
            if dist.get(&v.id()).map_or(true, |&old| dv < old) {
                dist.insert(v.id(), dv);
                seq += 1;
                heap.push(Entry {
                    f: dv + heuristic(v),
                    seq,
                    node: v,
                });
            }
        }
    }

    let settled = dist
        .into_iter()
        .filter(|(id, _)| closed.contains(id))
        .collect();
    (order, settled)
}

fn uniform_cost<G: CostSearchGraph>(g: &G, start: G::Node) -> (Vec<G::Node>, HashMap<i64, f64>) {
    best_first(g, start, |_| 0.0)
}

fn a_star<G: HeuristicSearchGraph>(g: &G, start: G::Node, goal: G::Node) -> Vec<G::Node> {
    best_first(g, start, |n| g.heuristic_cost(n, goal)).0
}

/// An unweighted graph with fan-out only: no costs, no edge lookup.
struct Adjacency(Vec<Vec<i64>>);

impl Graph for Adjacency {
    type Node = NodeId;

    fn has(&self, node: NodeId) -> bool {
        usize::try_from(node.0).is_ok_and(|i| i < self.0.len())
    }

    fn order(&self) -> usize {
        self.0.len()
    }

    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.0.len() as i64).map(NodeId)
    }
}

impl FanOut for Adjacency {
    fn from(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.0[node.0 as usize].iter().copied().map(NodeId)
    }
}

fn ids(nodes: &[NodeId]) -> Vec<i64> {
    nodes.iter().map(|n| n.0).collect()
}

#[test]
fn heuristic_search_over_unit_null_matches_bfs() {
    // 0 -> 3,1 ; 1 -> 4 ; 3 -> 2,4 ; 2 -> 5 ; 4 -> 5 ; 5 -> 0
    let graph = Adjacency(vec![
        vec![3, 1],
        vec![4],
        vec![5],
        vec![2, 4],
        vec![5],
        vec![0],
        vec![],
    ]);

    let bfs = breadth_first(&graph, NodeId(0));
    let informed = a_star(&UnitNullGraph::new(&graph), NodeId(0), NodeId(5));

    assert_eq!(ids(&bfs), vec![0, 3, 1, 2, 4, 5]);
    assert_eq!(ids(&informed), ids(&bfs));
}

#[test]
fn heuristic_search_over_unit_null_matches_bfs_on_complete_graph() {
    let graph = DenseDirectedGraph::new(6, true);

    let bfs = breadth_first(&graph, NodeId(2));
    let informed = a_star(&UnitNullGraph::new(&graph), NodeId(2), NodeId(0));

    assert_eq!(ids(&bfs), vec![2, 0, 1, 3, 4, 5]);
    assert_eq!(ids(&informed), ids(&bfs));
}

#[test]
fn uniform_cost_search_uses_dense_costs() {
    // 0 -1-> 1 -1-> 2, plus a direct 0 -5-> 2 shortcut that is more expensive.
    let mut graph = DenseDirectedGraph::new(3, false);
    graph.set_edge_cost(&DirectedEdge::between(0, 1), 1.0).unwrap();
    graph.set_edge_cost(&DirectedEdge::between(1, 2), 1.0).unwrap();
    graph.set_edge_cost(&DirectedEdge::between(0, 2), 5.0).unwrap();

    let (order, dist) = uniform_cost(&graph, NodeId(0));
    assert_eq!(ids(&order), vec![0, 1, 2]);
    assert_eq!(dist[&2], 2.0);

    // Through the unit-cost view the shortcut wins.
    let (_, hops) = uniform_cost(&UnitNullGraph::new(&graph), NodeId(0));
    assert_eq!(hops[&2], 1.0);
}

#[test]
fn unreachable_nodes_are_not_visited() {
    let mut graph = DenseDirectedGraph::new(4, false);
    graph.set_edge_cost(&DirectedEdge::between(0, 1), 1.0).unwrap();
    graph.set_edge_cost(&DirectedEdge::between(3, 0), 1.0).unwrap();

    assert_eq!(ids(&breadth_first(&graph, NodeId(0))), vec![0, 1]);
    let (order, dist) = uniform_cost(&graph, NodeId(0));
    assert_eq!(ids(&order), vec![0, 1]);
    assert!(!dist.contains_key(&3));
}
