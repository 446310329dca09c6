//! Kahn's topological sort
//!
//! Runs `InitIndegrees`, then `InitQueue`, then one `ProcessingNode` step per
//! dequeued node. When the queue drains early, the nodes never dequeued are
//! reported as the cycle rather than treated as an error.

use crate::algorithms::StepMachine;
use crate::model::graph::NodeId;
use crate::model::GraphProblem;
use std::collections::{BTreeMap, VecDeque};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologicalPhase {
    Idle,
    InitIndegrees,
    InitQueue,
    ProcessingNode,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologicalState {
    pub phase: TopologicalPhase,
    pub in_degrees: BTreeMap<NodeId, usize>,
    pub queue: VecDeque<NodeId>,
    pub order: Vec<NodeId>,
    pub current: Option<NodeId>,
    /// Nodes left unprocessed when the queue ran dry
    pub cycle_nodes: Vec<NodeId>,
    pub status: String,
}

impl TopologicalState {
    pub fn new() -> Self {
        TopologicalState {
            phase: TopologicalPhase::Idle,
            in_degrees: BTreeMap::new(),
            queue: VecDeque::new(),
            order: Vec::new(),
            current: None,
            cycle_nodes: Vec::new(),
            status: String::from("Ready to find topological order. Press play."),
        }
    }

    pub fn has_cycle(&self) -> bool {
        !self.cycle_nodes.is_empty()
    }
}

impl Default for TopologicalState {
    fn default() -> Self {
        Self::new()
    }
}

impl StepMachine for TopologicalState {
    type Problem = GraphProblem;

    fn advance(&mut self, problem: &GraphProblem) {
        let graph = &problem.graph;
        match self.phase {
            TopologicalPhase::Idle => {
                self.phase = TopologicalPhase::InitIndegrees;
                self.status = String::from("Calculating in-degrees for all nodes.");
            }
            TopologicalPhase::InitIndegrees => {
                self.in_degrees = graph.node_ids().into_iter().map(|id| (id, 0)).collect();
                for edge in graph.edge_list() {
                    *self.in_degrees.entry(edge.to).or_insert(0) += 1;
                }
                self.phase = TopologicalPhase::InitQueue;
                self.status = String::from("Finding starting nodes (in-degree 0).");
            }
            TopologicalPhase::InitQueue => {
                self.queue = self
                    .in_degrees
                    .iter()
                    .filter(|(_, degree)| **degree == 0)
                    .map(|(id, _)| id.clone())
                    .collect();
                self.phase = TopologicalPhase::ProcessingNode;
                self.status = format!("Queue initialized with {} nodes.", self.queue.len());
            }
            TopologicalPhase::ProcessingNode => {
                let Some(node) = self.queue.pop_front() else {
                    self.phase = TopologicalPhase::Done;
                    self.current = None;
                    if self.order.len() < graph.len() {
                        self.cycle_nodes = graph
                            .node_ids()
                            .into_iter()
                            .filter(|id| !self.order.contains(id))
                            .collect();
                        self.status = String::from("Cycle detected! Topological sort not possible.");
                    } else {
                        self.status = String::from("Topological sort complete!");
                    }
                    return;
                };

                for neighbor in graph.neighbors(&node) {
                    if let Some(degree) = self.in_degrees.get_mut(&neighbor) {
                        *degree = degree.saturating_sub(1);
                        if *degree == 0 {
                            self.queue.push_back(neighbor);
                        }
                    }
                }
                self.status = format!("Processed node {}, updated its neighbors' in-degrees.", node);
                self.order.push(node.clone());
                self.current = Some(node);
            }
            TopologicalPhase::Done => {}
        }
    }

    fn is_done(&self) -> bool {
        self.phase == TopologicalPhase::Done
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
    fn test_diamond_order() {
        let mut graph = Graph::directed();
        graph.add_edge("A", "B", 1);
        graph.add_edge("A", "C", 1);
        graph.add_edge("B", "D", 1);
        graph.add_edge("C", "D", 1);
        let problem = GraphProblem::new(graph);
        let (state, _) = TopologicalState::new().run(&problem, 100);
        assert_eq!(state.order, vec!["A", "B", "C", "D"]);
        assert!(!state.has_cycle());
    }

    #[test]
    fn test_partial_cycle_leaves_remainder() {
        let mut graph = Graph::directed();
        graph.add_edge("A", "B", 1);
        graph.add_edge("B", "C", 1);
        graph.add_edge("C", "B", 1);
        let problem = GraphProblem::new(graph);
        let (state, _) = TopologicalState::new().run(&problem, 100);
        assert_eq!(state.order, vec!["A"]);
        assert_eq!(state.cycle_nodes, vec!["B", "C"]);
    }
}
