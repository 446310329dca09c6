//! Session configuration and algorithm selection
//!
//! [`SessionConfig::for_kind`] gives each algorithm its default array size,
//! graph shape and animation delay. Values coming from outside (command
//! line, key bindings) go through [`SessionConfig::clamped`] before a session
//! builds any state from them.

use super::constants::{
    ARRAY_SIZE_MAX, DEFAULT_HISTORY_LIMIT, DELAY_MAX_MS, DELAY_MIN_MS, EXTRA_EDGES_MAX,
    NODE_COUNT_MAX, NODE_COUNT_MIN, TREE_NODES_MAX,
};
use super::errors::VisualizerError;
use crate::algorithms::heap::HeapKind;
use crate::algorithms::sorting::SortKind;
use crate::algorithms::traversal::TraversalKind;
use crate::model::generate::TreeShape;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Algorithm a session runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    Sort(SortKind),
    LinearSearch,
    BinarySearch,
    TreeTraversal,
    HeapOperations,
    Dijkstra,
    BellmanFord,
    Kruskal,
    TopologicalSort,
}

impl AlgorithmKind {
    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::Sort(kind) => kind.name(),
            AlgorithmKind::LinearSearch => "Linear Search",
            AlgorithmKind::BinarySearch => "Binary Search",
            AlgorithmKind::TreeTraversal => "Tree Traversal",
            AlgorithmKind::HeapOperations => "Heap Operations",
            AlgorithmKind::Dijkstra => "Dijkstra's Algorithm",
            AlgorithmKind::BellmanFord => "Bellman-Ford",
            AlgorithmKind::Kruskal => "Kruskal's Algorithm",
            AlgorithmKind::TopologicalSort => "Topological Sort",
        }
    }

    pub fn is_search(self) -> bool {
        matches!(self, AlgorithmKind::LinearSearch | AlgorithmKind::BinarySearch)
    }

    pub fn is_graph(self) -> bool {
        matches!(
            self,
            AlgorithmKind::Dijkstra
                | AlgorithmKind::BellmanFord
                | AlgorithmKind::Kruskal
                | AlgorithmKind::TopologicalSort
        )
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Command-line algorithm names
const ALGORITHM_NAMES: &[&str] = &[
    "bubble",
    "insertion",
    "selection",
    "quick",
    "merge",
    "merge3",
    "heapsort",
    "count",
    "radix",
    "linear",
    "binary",
    "inorder",
    "preorder",
    "postorder",
    "bfs",
    "minheap",
    "maxheap",
    "dijkstra",
    "bellman-ford",
    "kruskal",
    "topo",
];

/// Every accepted algorithm name, for usage text
pub fn algorithm_names() -> &'static [&'static str] {
    ALGORITHM_NAMES
}

/// Resolve a command-line algorithm name to its kind and default config
pub fn parse_algorithm(name: &str) -> Result<(AlgorithmKind, SessionConfig), VisualizerError> {
    let kind: AlgorithmKind = name.parse()?;
    let mut config = SessionConfig::for_kind(kind);
    match name.to_ascii_lowercase().as_str() {
        "preorder" => config.traversal = TraversalKind::Preorder,
        "postorder" => config.traversal = TraversalKind::Postorder,
        "bfs" => config.traversal = TraversalKind::Bfs,
        "maxheap" => config.heap_kind = HeapKind::Max,
        _ => {}
    }
    Ok((kind, config))
}

impl FromStr for AlgorithmKind {
    type Err = VisualizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "bubble" => AlgorithmKind::Sort(SortKind::Bubble),
            "insertion" => AlgorithmKind::Sort(SortKind::Insertion),
            "selection" => AlgorithmKind::Sort(SortKind::Selection),
            "quick" => AlgorithmKind::Sort(SortKind::Quick),
            "merge" => AlgorithmKind::Sort(SortKind::Merge),
            "merge3" => AlgorithmKind::Sort(SortKind::ThreeWayMerge),
            "heapsort" => AlgorithmKind::Sort(SortKind::Heap),
            "count" => AlgorithmKind::Sort(SortKind::Count),
            "radix" => AlgorithmKind::Sort(SortKind::Radix),
            "linear" => AlgorithmKind::LinearSearch,
            "binary" => AlgorithmKind::BinarySearch,
            "inorder" | "preorder" | "postorder" | "bfs" => AlgorithmKind::TreeTraversal,
            "minheap" | "maxheap" => AlgorithmKind::HeapOperations,
            "dijkstra" => AlgorithmKind::Dijkstra,
            "bellman-ford" => AlgorithmKind::BellmanFord,
            "kruskal" => AlgorithmKind::Kruskal,
            "topo" => AlgorithmKind::TopologicalSort,
            _ => {
                return Err(VisualizerError::UnknownAlgorithm {
                    name: s.to_string(),
                })
            }
        })
    }
}

/// Per-session knobs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Array length, node count or tree size depending on the algorithm
    pub size: usize,
    pub extra_edges: usize,
    pub delay: Duration,
    pub heap_kind: HeapKind,
    pub traversal: TraversalKind,
    pub tree_shape: TreeShape,
    /// Inject a cycle into the topological sort graph
    pub cyclic: bool,
    pub seed: Option<u64>,
    pub history_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            size: 20,
            extra_edges: 4,
            delay: Duration::from_millis(400),
            heap_kind: HeapKind::Min,
            traversal: TraversalKind::Inorder,
            tree_shape: TreeShape::Bst,
            cyclic: false,
            seed: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl SessionConfig {
    /// Default sizes and speeds per algorithm
    pub fn for_kind(kind: AlgorithmKind) -> Self {
        let (size, extra_edges, delay_ms) = match kind {
            AlgorithmKind::Sort(SortKind::Bubble) => (20, 0, 50),
            AlgorithmKind::Sort(SortKind::Insertion) => (20, 0, 150),
            AlgorithmKind::Sort(SortKind::Selection) => (20, 0, 75),
            AlgorithmKind::Sort(SortKind::Quick) => (20, 0, 100),
            AlgorithmKind::Sort(SortKind::Merge) => (30, 0, 200),
            AlgorithmKind::Sort(SortKind::ThreeWayMerge) => (30, 0, 300),
            AlgorithmKind::Sort(SortKind::Heap) => (12, 0, 300),
            AlgorithmKind::Sort(SortKind::Count) => (15, 0, 250),
            AlgorithmKind::Sort(SortKind::Radix) => (12, 0, 300),
            AlgorithmKind::LinearSearch => (15, 0, 200),
            AlgorithmKind::BinarySearch => (17, 0, 750),
            AlgorithmKind::TreeTraversal => (9, 0, 500),
            AlgorithmKind::HeapOperations => (0, 0, 400),
            AlgorithmKind::Dijkstra => (10, 4, 400),
            AlgorithmKind::BellmanFord => (8, 4, 400),
            AlgorithmKind::Kruskal => (10, 5, 500),
            AlgorithmKind::TopologicalSort => (10, 3, 500),
        };
        SessionConfig {
            size,
            extra_edges,
            delay: Duration::from_millis(delay_ms),
            ..Self::default()
        }
    }

    /// Copy with every field pulled into the range `kind` accepts.
    /// Each adjustment is logged as a warning.
    pub fn clamped(&self, kind: AlgorithmKind) -> Self {
        let mut config = self.clone();
        let size_range = match kind {
            AlgorithmKind::LinearSearch | AlgorithmKind::BinarySearch => 1..=ARRAY_SIZE_MAX,
            AlgorithmKind::TreeTraversal => 0..=TREE_NODES_MAX,
            AlgorithmKind::HeapOperations => 0..=0,
            k if k.is_graph() => NODE_COUNT_MIN..=NODE_COUNT_MAX,
            _ => 0..=ARRAY_SIZE_MAX,
        };
        config.size = clamp_logged("size", config.size, *size_range.start(), *size_range.end());
        config.extra_edges = clamp_logged("extra_edges", config.extra_edges, 0, EXTRA_EDGES_MAX);

        let delay_ms = u64::try_from(config.delay.as_millis()).unwrap_or(u64::MAX);
        let clamped_ms = clamp_logged("delay_ms", delay_ms, DELAY_MIN_MS, DELAY_MAX_MS);
        config.delay = Duration::from_millis(clamped_ms);
        config
    }
}

fn clamp_logged<T: Ord + Copy + fmt::Display>(field: &str, value: T, min: T, max: T) -> T {
    let clamped = value.clamp(min, max);
    if clamped != value {
        log::warn!("{} {} out of range {}..={}, using {}", field, value, min, max, clamped);
    }
    clamped
}

fn parse_number<T: FromStr>(flag: &str, value: Option<&String>) -> Result<T, VisualizerError> {
    let value = value.ok_or_else(|| VisualizerError::InvalidConfig {
        message: format!("{} needs a value", flag),
    })?;
    value.parse().map_err(|_| VisualizerError::InvalidConfig {
        message: format!("{} expects a number, got '{}'", flag, value),
    })
}

/// Parse `<algorithm> [options]` (program name already stripped)
///
/// Options: `--size N`, `--edges N`, `--delay MS`, `--seed N`,
/// `--random-tree`, `--cyclic`.
pub fn parse_args(args: &[String]) -> Result<(AlgorithmKind, SessionConfig), VisualizerError> {
    let name = args.first().ok_or_else(|| VisualizerError::InvalidConfig {
        message: String::from("no algorithm given"),
    })?;
    let (kind, mut config) = parse_algorithm(name)?;

    let mut rest = args[1..].iter();
    while let Some(flag) = rest.next() {
        match flag.as_str() {
            "--size" => config.size = parse_number(flag, rest.next())?,
            "--edges" => config.extra_edges = parse_number(flag, rest.next())?,
            "--delay" => config.delay = Duration::from_millis(parse_number(flag, rest.next())?),
            "--seed" => config.seed = Some(parse_number(flag, rest.next())?),
            "--random-tree" => config.tree_shape = TreeShape::Random,
            "--cyclic" => config.cyclic = true,
            other => {
                return Err(VisualizerError::InvalidConfig {
                    message: format!("unknown option '{}'", other),
                })
            }
        }
    }
    Ok((kind, config))
}
