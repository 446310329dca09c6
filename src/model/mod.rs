//! Problem instances consumed by the algorithm state machines
//!
//! - [`graph`]: weighted graph keyed by string node ids
//! - [`tree`]: binary tree keyed by integer node ids
//! - [`generate`]: seeded random generator for arrays, graphs and trees
//!
//! A [`ProblemInstance`] is created when a session resets and is never
//! mutated while stepping. Sorts copy the values into their own state.

pub mod generate;
pub mod graph;
pub mod tree;

use graph::{Graph, NodeId};
use tree::Tree;

/// Graph plus the externally chosen endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct GraphProblem {
    pub graph: Graph,
    pub start: Option<NodeId>,
    pub end: Option<NodeId>,
}

impl GraphProblem {
    /// Start at the first node id and end at the last one
    pub fn new(graph: Graph) -> Self {
        let ids = graph.node_ids();
        let start = ids.first().cloned();
        let end = ids.last().cloned().filter(|_| ids.len() > 1);
        GraphProblem { graph, start, end }
    }

    pub fn with_endpoints(graph: Graph, start: Option<&str>, end: Option<&str>) -> Self {
        GraphProblem {
            graph,
            start: start.map(str::to_string),
            end: end.map(str::to_string),
        }
    }
}

/// Values to search and the target, `None` when the entered target was not a number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchProblem {
    pub values: Vec<i64>,
    pub target: Option<i64>,
}

/// Immutable input to a run
#[derive(Debug, Clone, PartialEq)]
pub enum ProblemInstance {
    Array(Vec<i64>),
    Search(SearchProblem),
    Tree(Tree),
    Graph(GraphProblem),
    /// Heap sessions start from an empty heap and take their input as operations
    Heap,
}

impl ProblemInstance {
    pub fn describe(&self) -> &'static str {
        match self {
            ProblemInstance::Array(_) => "array",
            ProblemInstance::Search(_) => "search array",
            ProblemInstance::Tree(_) => "tree",
            ProblemInstance::Graph(_) => "graph",
            ProblemInstance::Heap => "heap",
        }
    }
}
