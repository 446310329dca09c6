//! Graph algorithms over a [`GraphProblem`](crate::model::GraphProblem)
//!
//! - [`dijkstra`]: single-source shortest path with a linear priority list
//! - [`bellman_ford`]: edge-by-edge relaxation with negative cycle detection
//! - [`kruskal`]: minimum spanning tree over a union-find
//! - [`topological`]: Kahn's algorithm, reporting leftover nodes as a cycle
//!
//! Distances are `Option<i64>` throughout, with `None` standing for infinity.

pub mod bellman_ford;
pub mod dijkstra;
pub mod kruskal;
pub mod topological;

use crate::model::graph::NodeId;
use std::collections::BTreeMap;

pub use bellman_ford::BellmanFordState;
pub use dijkstra::DijkstraState;
pub use kruskal::KruskalState;
pub use topological::TopologicalState;

/// Render a tentative distance, `∞` when unreached
pub fn format_distance(distance: Option<i64>) -> String {
    match distance {
        Some(d) => d.to_string(),
        None => String::from("∞"),
    }
}

/// True when `candidate` beats `current` (where `None` is infinite)
fn shorter(candidate: i64, current: Option<i64>) -> bool {
    current.map_or(true, |d| candidate < d)
}

/// Follow `previous` links back from `end`, returning the path start-first
fn walk_back(previous: &BTreeMap<NodeId, NodeId>, end: &str) -> Vec<NodeId> {
    let mut path = vec![end.to_string()];
    let mut cursor = end;
    while let Some(prev) = previous.get(cursor) {
        // predecessor links never loop for a finalised node, the bound is a backstop
        if path.len() > previous.len() {
            break;
        }
        path.push(prev.clone());
        cursor = prev;
    }
    path.reverse();
    path
}
