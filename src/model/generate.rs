//! Random problem-instance generation
//!
//! Every session owns one [`InstanceGenerator`]. Seeding it makes a session
//! reproducible, which the tests rely on.

use super::graph::{node_label, Graph, Position};
use super::tree::{Direction, Tree, TreeNode};
use crate::engine::constants::{CANVAS_HEIGHT, CANVAS_MARGIN, CANVAS_WIDTH};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// Weight ranges for the spanning-tree edges and the extra edges of a graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightRange {
    pub tree: RangeInclusive<i64>,
    pub extra: RangeInclusive<i64>,
}

/// Shape of a generated binary tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeShape {
    #[default]
    Bst,
    Random,
}

/// Source of random arrays, graphs and trees
#[derive(Debug, Clone)]
pub struct InstanceGenerator {
    rng: StdRng,
}

impl InstanceGenerator {
    /// Seeded generator, or one seeded from the OS when `seed` is `None`
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        InstanceGenerator { rng }
    }

    /// Uniform index into a collection of `len` items (`len` must be non-zero)
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    pub fn value(&mut self, range: RangeInclusive<i64>) -> i64 {
        self.rng.random_range(range)
    }

    /// `len` values drawn independently from `range`
    pub fn array(&mut self, len: usize, range: RangeInclusive<i64>) -> Vec<i64> {
        (0..len).map(|_| self.rng.random_range(range.clone())).collect()
    }

    /// Up to `len` distinct values from `range`, in draw order
    pub fn distinct(&mut self, len: usize, range: RangeInclusive<i64>) -> Vec<i64> {
        let available = usize::try_from(range.end() - range.start() + 1).unwrap_or(0);
        let target = len.min(available);
        let mut seen = BTreeSet::new();
        let mut values = Vec::with_capacity(target);
        while values.len() < target {
            let value = self.rng.random_range(range.clone());
            if seen.insert(value) {
                values.push(value);
            }
        }
        values
    }

    /// Distinct values in ascending order, as binary search expects
    pub fn sorted_distinct(&mut self, len: usize, range: RangeInclusive<i64>) -> Vec<i64> {
        let mut values = self.distinct(len, range);
        values.sort_unstable();
        values
    }

    fn position(&mut self) -> Position {
        Position {
            x: self.rng.random_range(CANVAS_MARGIN..CANVAS_WIDTH - CANVAS_MARGIN),
            y: self.rng.random_range(CANVAS_MARGIN..CANVAS_HEIGHT - CANVAS_MARGIN),
        }
    }

    fn empty_graph(&mut self, nodes: usize, directed: bool) -> Graph {
        let mut graph = if directed {
            Graph::directed()
        } else {
            Graph::undirected()
        };
        for i in 0..nodes {
            let position = self.position();
            graph.add_node_at(node_label(i), position);
        }
        graph
    }

    /// Connected undirected graph: a random spanning tree plus up to
    /// `extra_edges` additional edges between non-adjacent pairs
    pub fn weighted_graph(&mut self, nodes: usize, extra_edges: usize, weights: &WeightRange) -> Graph {
        let mut graph = self.empty_graph(nodes, false);
        if nodes <= 1 {
            return graph;
        }

        let mut connected = vec![0usize];
        for u in 1..nodes {
            let v = connected[self.index(connected.len())];
            let weight = self.value(weights.tree.clone());
            graph.add_edge(&node_label(u), &node_label(v), weight);
            connected.push(u);
        }

        let mut candidates: Vec<(usize, usize)> = (0..nodes)
            .flat_map(|i| (i + 1..nodes).map(move |j| (i, j)))
            .filter(|&(i, j)| graph.weight(&node_label(i), &node_label(j)).is_none())
            .collect();
        candidates.shuffle(&mut self.rng);
        for (i, j) in candidates.into_iter().take(extra_edges) {
            let weight = self.value(weights.extra.clone());
            graph.add_edge(&node_label(i), &node_label(j), weight);
        }

        graph
    }

    /// Directed acyclic graph: edges only run from lower to higher
    /// generation index. Every node but the last gets one forward edge, then
    /// `extra_edges` more are added while unused forward pairs remain.
    pub fn dag(&mut self, nodes: usize, extra_edges: usize) -> Graph {
        let mut graph = self.empty_graph(nodes, true);
        if nodes <= 1 {
            return graph;
        }

        for i in 0..nodes - 1 {
            let j = i + 1 + self.index(nodes - 1 - i);
            graph.add_edge(&node_label(i), &node_label(j), 1);
        }

        let mut candidates: Vec<(usize, usize)> = (0..nodes)
            .flat_map(|i| (i + 1..nodes).map(move |j| (i, j)))
            .filter(|&(i, j)| graph.weight(&node_label(i), &node_label(j)).is_none())
            .collect();
        candidates.shuffle(&mut self.rng);
        for (i, j) in candidates.into_iter().take(extra_edges) {
            graph.add_edge(&node_label(i), &node_label(j), 1);
        }

        graph
    }

    /// A DAG with one injected back-edge. Prefers closing a path `a -> b -> c`
    /// with `c -> a`; falls back to reversing a random edge. Graphs with fewer
    /// than three nodes are returned acyclic.
    pub fn cyclic_graph(&mut self, nodes: usize, extra_edges: usize) -> Graph {
        let mut graph = self.dag(nodes, extra_edges);
        if nodes < 3 {
            return graph;
        }

        let mut starts = graph.node_ids();
        starts.shuffle(&mut self.rng);
        for start in &starts {
            let mut mids = graph.neighbors(start);
            mids.shuffle(&mut self.rng);
            for mid in &mids {
                let ends = graph.neighbors(mid);
                if ends.is_empty() {
                    continue;
                }
                let end = ends[self.index(ends.len())].clone();
                if &end == start || graph.weight(&end, start).is_some() {
                    continue;
                }
                log::debug!("injected back-edge {} -> {}", end, start);
                graph.add_edge(&end, start, 1);
                return graph;
            }
        }

        let edges = graph.edge_list();
        if !edges.is_empty() {
            let edge = edges[self.index(edges.len())].clone();
            if graph.weight(&edge.to, &edge.from).is_none() {
                graph.add_edge(&edge.to, &edge.from, 1);
            }
        }
        graph
    }

    /// Tree of `count` distinct values
    pub fn tree(&mut self, shape: TreeShape, count: usize, values: RangeInclusive<i64>) -> Tree {
        let values = self.distinct(count, values);
        match shape {
            TreeShape::Bst => Tree::balanced_bst(&values),
            TreeShape::Random => self.random_tree(values),
        }
    }

    fn random_tree(&mut self, mut values: Vec<i64>) -> Tree {
        let mut tree = Tree::new();
        if values.is_empty() {
            return tree;
        }
        values.shuffle(&mut self.rng);
        for (id, value) in values.iter().enumerate() {
            tree.insert(TreeNode::leaf(id, *value));
        }
        tree.set_root(Some(0));

        let mut slots = vec![(0, Direction::Left), (0, Direction::Right)];
        for id in 1..values.len() {
            let (parent, side) = slots.remove(self.index(slots.len()));
            if let Some(node) = tree.node_mut(parent) {
                match side {
                    Direction::Left => node.left = Some(id),
                    Direction::Right => node.right = Some(id),
                }
            }
            slots.push((id, Direction::Left));
            slots.push((id, Direction::Right));
        }
        tree
    }
}
