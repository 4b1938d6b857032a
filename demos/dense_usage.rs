//! Builds a small weighted road map and inspects it through the capability traits.
//!
//! Run with `cargo run --example dense_usage`.

use anyhow::{ensure, Context, Result};
use densegraph::graph::{DenseDirectedGraph, DirectedEdge, NodeId, INF};
use densegraph::search::{HeuristicSearchGraph, UnitNullGraph};

const TOWNS: [&str; 4] = ["Avon", "Brill", "Calder", "Dunmore"];

fn describe<G: HeuristicSearchGraph<Node = NodeId>>(label: &str, graph: &G) {
    println!("{label}:");
    for head in 0..TOWNS.len() as i64 {
        for tail in graph.from(NodeId(head)) {
            let cost = graph
                .edge_between(NodeId(head), tail)
                .map_or(f64::NAN, |e| graph.cost(&e));
            println!("  {} -> {} costs {cost}", TOWNS[head as usize], TOWNS[tail.0 as usize]);
        }
    }
}

fn main() -> Result<()> {
    let mut roads = DenseDirectedGraph::new(TOWNS.len(), false);

    for (head, tail, km) in [(0, 1, 12.5), (1, 2, 7.0), (2, 3, 3.25), (0, 3, 30.0)] {
        // Roads are two-way: store both directions.
        let edge = DirectedEdge::between(head, tail);
        roads
            .set_edge_cost(&edge, km)
            .with_context(|| format!("adding road {head}->{tail}"))?;
        roads.set_edge_cost(&edge.reversed(), km)?;
    }

    ensure!(roads.edge_count() == 8, "expected 8 directed roads");

    // The sentinel is refused rather than silently deleting the road.
    if let Err(err) = roads.set_edge_cost(&DirectedEdge::between(0, 1), INF) {
        println!("setting an infinite cost: {err}");
    }

    roads.remove_edge(&DirectedEdge::between(0, 3))?;
    roads.compact();

    describe("hop view", &UnitNullGraph::new(&roads));

    let snapshot = roads.snapshot();
    println!("snapshot is {}x{}", snapshot.rows(), snapshot.cols());
    Ok(())
}
