//! Weighted graph used by the shortest-path, spanning-tree and ordering algorithms
//!
//! Nodes are keyed by a string id (`"A"`, `"B"`, ...) and carry a display
//! position plus an insertion-ordered adjacency list. Insertion order matters:
//! it fixes the order in which Dijkstra visits neighbours, the edge list that
//! Bellman-Ford relaxes, and Kruskal's tie-break between equal weights.

use std::collections::BTreeMap;

/// Node identifier, unique within a graph
pub type NodeId = String;

/// Display-only coordinates supplied by the layout collaborator
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A single graph node with its outgoing edges
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub id: NodeId,
    pub position: Position,
    edges: Vec<(NodeId, i64)>,
}

impl GraphNode {
    pub fn new(id: impl Into<NodeId>, position: Position) -> Self {
        GraphNode {
            id: id.into(),
            position,
            edges: Vec::new(),
        }
    }

    /// Outgoing edges in insertion order
    pub fn edges(&self) -> &[(NodeId, i64)] {
        &self.edges
    }

    pub fn weight_to(&self, neighbor: &str) -> Option<i64> {
        self.edges
            .iter()
            .find(|(id, _)| id == neighbor)
            .map(|(_, weight)| *weight)
    }

    pub fn has_edge_to(&self, neighbor: &str) -> bool {
        self.weight_to(neighbor).is_some()
    }

    /// Insert or overwrite the edge to `neighbor`, keeping its original slot
    fn set_edge(&mut self, neighbor: &str, weight: i64) {
        match self.edges.iter_mut().find(|(id, _)| id == neighbor) {
            Some(edge) => edge.1 = weight,
            None => self.edges.push((neighbor.to_string(), weight)),
        }
    }
}

/// A directed edge `from -> to`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: i64,
}

impl Edge {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, weight: i64) -> Self {
        Edge {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// Graph keyed by node id
///
/// Undirected graphs store every edge in both adjacency lists, so the
/// symmetric invariant holds by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    nodes: BTreeMap<NodeId, GraphNode>,
    directed: bool,
}

impl Graph {
    pub fn undirected() -> Self {
        Graph {
            nodes: BTreeMap::new(),
            directed: false,
        }
    }

    pub fn directed() -> Self {
        Graph {
            nodes: BTreeMap::new(),
            directed: true,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Add a node at the origin, or leave an existing node untouched
    pub fn add_node(&mut self, id: impl Into<NodeId>) {
        self.add_node_at(id, Position::default());
    }

    pub fn add_node_at(&mut self, id: impl Into<NodeId>, position: Position) {
        let id = id.into();
        self.nodes
            .entry(id.clone())
            .or_insert_with(|| GraphNode::new(id, position));
    }

    /// Add an edge, creating missing endpoints. Undirected graphs mirror it.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: i64) {
        self.add_node(from);
        self.add_node(to);
        if let Some(node) = self.nodes.get_mut(from) {
            node.set_edge(to, weight);
        }
        if !self.directed {
            if let Some(node) = self.nodes.get_mut(to) {
                node.set_edge(from, weight);
            }
        }
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values()
    }

    /// Node ids in sorted order
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Neighbour ids of `id` in adjacency order (empty for unknown ids)
    pub fn neighbors(&self, id: &str) -> Vec<NodeId> {
        self.nodes
            .get(id)
            .map(|node| node.edges.iter().map(|(n, _)| n.clone()).collect())
            .unwrap_or_default()
    }

    pub fn weight(&self, from: &str, to: &str) -> Option<i64> {
        self.nodes.get(from).and_then(|node| node.weight_to(to))
    }

    /// Every stored directed edge: nodes in id order, then adjacency order.
    /// An undirected edge therefore appears once per direction.
    pub fn edge_list(&self) -> Vec<Edge> {
        self.nodes
            .values()
            .flat_map(|node| {
                node.edges
                    .iter()
                    .map(move |(to, weight)| Edge::new(node.id.clone(), to.clone(), *weight))
            })
            .collect()
    }

    /// Edges with each undirected pair reported once, in first-seen order
    pub fn unique_edges(&self) -> Vec<Edge> {
        if self.directed {
            return self.edge_list();
        }
        let mut seen = rustc_hash::FxHashSet::default();
        self.edge_list()
            .into_iter()
            .filter(|edge| {
                let key = if edge.from <= edge.to {
                    (edge.from.clone(), edge.to.clone())
                } else {
                    (edge.to.clone(), edge.from.clone())
                };
                seen.insert(key)
            })
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.unique_edges().len()
    }
}

/// Spreadsheet-style id for the `index`-th generated node: A..Z, AA, AB, ...
pub fn node_label(index: usize) -> NodeId {
    let mut label = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        label.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    label.reverse();
    String::from_utf8_lossy(&label).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undirected_edges_are_symmetric() {
        let mut graph = Graph::undirected();
        graph.add_edge("A", "B", 4);
        assert_eq!(graph.weight("A", "B"), Some(4));
        assert_eq!(graph.weight("B", "A"), Some(4));
        assert_eq!(graph.edge_list().len(), 2);
        assert_eq!(graph.unique_edges().len(), 1);
    }

    #[test]
    fn test_directed_edges_are_one_way() {
        let mut graph = Graph::directed();
        graph.add_edge("A", "B", 1);
        assert!(graph.node("A").is_some_and(|n| n.has_edge_to("B")));
        assert!(graph.node("B").is_some_and(|n| !n.has_edge_to("A")));
    }

    #[test]
    fn test_adjacency_keeps_insertion_order() {
        let mut graph = Graph::undirected();
        graph.add_edge("A", "D", 1);
        graph.add_edge("A", "B", 2);
        graph.add_edge("A", "C", 3);
        assert_eq!(graph.neighbors("A"), vec!["D", "B", "C"]);
        graph.add_edge("A", "D", 9);
        assert_eq!(graph.neighbors("A"), vec!["D", "B", "C"]);
        assert_eq!(graph.weight("D", "A"), Some(9));
    }

    #[test]
    fn test_node_labels() {
        assert_eq!(node_label(0), "A");
        assert_eq!(node_label(25), "Z");
        assert_eq!(node_label(26), "AA");
        assert_eq!(node_label(27), "AB");
    }
}
