//! Kruskal's minimum spanning tree
//!
//! Edges are deduplicated and stable-sorted by weight once, when the state
//! is built. Each step considers the next edge and keeps it when its
//! endpoints sit in different union-find components.

use crate::algorithms::StepMachine;
use crate::model::graph::{Edge, NodeId};
use crate::model::GraphProblem;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Union-find over node ids with path compression
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisjointSet {
    parent: FxHashMap<NodeId, NodeId>,
}

impl DisjointSet {
    pub fn new<'a>(ids: impl IntoIterator<Item = &'a NodeId>) -> Self {
        DisjointSet {
            parent: ids.into_iter().map(|id| (id.clone(), id.clone())).collect(),
        }
    }

    /// Representative of `id`'s set. Unknown ids are their own set.
    pub fn find(&mut self, id: &str) -> NodeId {
        let mut root = id.to_string();
        while let Some(parent) = self.parent.get(&root) {
            if *parent == root {
                break;
            }
            root = parent.clone();
        }

        let mut cursor = id.to_string();
        while cursor != root {
            match self.parent.insert(cursor, root.clone()) {
                Some(next) => cursor = next,
                None => break,
            }
        }
        root
    }

    /// Merge the sets of `a` and `b`; `a`'s root is hung under `b`'s.
    /// Returns false when they were already joined.
    pub fn union(&mut self, a: &str, b: &str) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parent.insert(root_a, root_b);
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KruskalState {
    /// Unique edges in ascending weight, ties in discovery order
    pub edges: Vec<Edge>,
    pub edge_index: usize,
    pub mst: Vec<Edge>,
    pub sets: DisjointSet,
    /// Component representative per node, refreshed after every union
    pub components: BTreeMap<NodeId, NodeId>,
    pub highlight: Option<Edge>,
    pub complete: bool,
    pub status: String,
}

impl KruskalState {
    pub fn new(problem: &GraphProblem) -> Self {
        let mut edges = problem.graph.unique_edges();
        edges.sort_by_key(|edge| edge.weight);
        let ids = problem.graph.node_ids();
        KruskalState {
            edges,
            edge_index: 0,
            mst: Vec::new(),
            sets: DisjointSet::new(&ids),
            components: ids.iter().map(|id| (id.clone(), id.clone())).collect(),
            highlight: None,
            complete: false,
            status: String::from("Edges are sorted. Ready to begin."),
        }
    }

    pub fn total_weight(&self) -> i64 {
        self.mst.iter().map(|edge| edge.weight).sum()
    }

    fn refresh_components(&mut self) {
        let ids: Vec<NodeId> = self.components.keys().cloned().collect();
        for id in ids {
            let root = self.sets.find(&id);
            self.components.insert(id, root);
        }
    }
}

impl StepMachine for KruskalState {
    type Problem = GraphProblem;

    fn advance(&mut self, problem: &GraphProblem) {
        self.highlight = None;
        let target = problem.graph.len().saturating_sub(1);
        let next = self.edges.get(self.edge_index).filter(|_| self.mst.len() < target);
        let Some(edge) = next.cloned() else {
            self.complete = true;
            self.status = format!(
                "Minimum Spanning Tree found! Total weight {}.",
                self.total_weight()
            );
            return;
        };

        if self.sets.union(&edge.from, &edge.to) {
            self.status = format!(
                "Adding edge {} ↔ {}. Nodes are in different components.",
                edge.from, edge.to
            );
            self.mst.push(edge.clone());
            self.refresh_components();
        } else {
            self.status = format!(
                "Discarding edge {} ↔ {}. It would form a cycle.",
                edge.from, edge.to
            );
        }
        self.highlight = Some(edge);
        self.edge_index += 1;
    }

    fn is_done(&self) -> bool {
        self.complete
    }

    fn status(&self) -> &str {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::graph::Graph;

    #[test]
    fn test_find_compresses_paths() {
        let ids: Vec<NodeId> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
        let mut sets = DisjointSet::new(&ids);
        assert!(sets.union("A", "B"));
        assert!(sets.union("B", "C"));
        assert!(!sets.union("A", "C"));
        assert_eq!(sets.find("A"), "C");
        assert_eq!(sets.parent.get("A"), Some(&"C".to_string()));
    }

    #[test]
    fn test_square_with_diagonal() {
        let mut graph = Graph::undirected();
        graph.add_edge("A", "B", 1);
        graph.add_edge("B", "C", 2);
        graph.add_edge("C", "D", 1);
        graph.add_edge("D", "A", 3);
        graph.add_edge("A", "C", 2);
        let problem = GraphProblem::new(graph);
        let (state, _) = KruskalState::new(&problem).run(&problem, 100);
        assert_eq!(state.mst.len(), 3);
        assert_eq!(state.total_weight(), 4);
        let roots: std::collections::BTreeSet<_> = state.components.values().collect();
        assert_eq!(roots.len(), 1);
    }
}
