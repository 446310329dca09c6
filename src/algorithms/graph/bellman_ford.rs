//! Bellman-Ford single-source shortest paths
//!
//! Relaxes one edge of the stored edge list per step. Each finished pass
//! takes its own step to roll over to the next iteration. After `|V| - 1`
//! passes a final checking pass runs; the first edge that still relaxes
//! there proves a reachable negative cycle, which is reconstructed from the
//! predecessor links.

use super::shorter;
use crate::algorithms::StepMachine;
use crate::model::graph::NodeId;
use crate::model::GraphProblem;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BellmanFordPhase {
    Idle,
    Iterating,
    CheckingCycles,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BellmanFordOutcome {
    ShortestPaths,
    /// Nodes around the detected cycle, first node repeated at the end
    NegativeCycle(Vec<NodeId>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BellmanFordState {
    pub phase: BellmanFordPhase,
    pub distances: BTreeMap<NodeId, i64>,
    pub predecessors: BTreeMap<NodeId, NodeId>,
    /// 1-based relaxation pass
    pub iteration: usize,
    pub edge_index: usize,
    pub highlight: Option<(NodeId, NodeId)>,
    pub outcome: Option<BellmanFordOutcome>,
    pub status: String,
}

impl BellmanFordState {
    pub fn new() -> Self {
        BellmanFordState {
            phase: BellmanFordPhase::Idle,
            distances: BTreeMap::new(),
            predecessors: BTreeMap::new(),
            iteration: 0,
            edge_index: 0,
            highlight: None,
            outcome: None,
            status: String::from("Select a start node, then press play."),
        }
    }

    pub fn distance(&self, id: &str) -> Option<i64> {
        self.distances.get(id).copied()
    }

    pub fn negative_cycle(&self) -> Option<&[NodeId]> {
        match &self.outcome {
            Some(BellmanFordOutcome::NegativeCycle(cycle)) => Some(cycle),
            _ => None,
        }
    }

    /// Walk `node_count` predecessor links back from `head` to land inside
    /// the cycle, then collect nodes until one repeats.
    fn reconstruct_cycle(&self, head: &str, node_count: usize) -> Vec<NodeId> {
        let mut landing = head.to_string();
        for _ in 0..node_count {
            match self.predecessors.get(&landing) {
                Some(prev) => landing = prev.clone(),
                None => break,
            }
        }

        let mut cycle = vec![landing.clone()];
        let mut cursor = self.predecessors.get(&landing);
        while let Some(node) = cursor {
            if *node == landing || cycle.contains(node) {
                break;
            }
            cycle.push(node.clone());
            cursor = self.predecessors.get(node);
        }
        cycle.push(landing);
        cycle.reverse();
        cycle
    }

    fn end_of_pass(&mut self, node_count: usize) {
        self.edge_index = 0;
        match self.phase {
            BellmanFordPhase::Iterating => {
                self.iteration += 1;
                if self.iteration >= node_count {
                    self.phase = BellmanFordPhase::CheckingCycles;
                    self.status = String::from("Checking for negative-weight cycles.");
                } else {
                    self.status = format!("Starting Iteration {}.", self.iteration);
                }
            }
            _ => {
                self.phase = BellmanFordPhase::Done;
                self.outcome = Some(BellmanFordOutcome::ShortestPaths);
                self.status = String::from("Finished. Shortest paths are found.");
            }
        }
    }
}

impl Default for BellmanFordState {
    fn default() -> Self {
        Self::new()
    }
}

impl StepMachine for BellmanFordState {
    type Problem = GraphProblem;

    fn advance(&mut self, problem: &GraphProblem) {
        self.highlight = None;
        let node_count = problem.graph.len();
        match self.phase {
            BellmanFordPhase::Idle => match problem.start.as_deref() {
                Some(start) if problem.graph.contains(start) => {
                    self.iteration = 1;
                    self.edge_index = 0;
                    self.distances.insert(start.to_string(), 0);
                    if node_count <= 1 {
                        // no relaxation passes needed
                        self.phase = BellmanFordPhase::CheckingCycles;
                        self.status = String::from("Checking for negative-weight cycles.");
                    } else {
                        self.phase = BellmanFordPhase::Iterating;
                        self.status = format!("Starting. Iteration {}.", self.iteration);
                    }
                }
                _ => {
                    self.phase = BellmanFordPhase::Done;
                    self.outcome = Some(BellmanFordOutcome::ShortestPaths);
                    self.status = String::from("No start node selected.");
                }
            },
            BellmanFordPhase::Iterating | BellmanFordPhase::CheckingCycles => {
                let edges = problem.graph.edge_list();
                let Some(edge) = edges.get(self.edge_index) else {
                    self.end_of_pass(node_count);
                    return;
                };
                self.highlight = Some((edge.from.clone(), edge.to.clone()));
                self.status = format!(
                    "Relaxing edge {} -> {} (weight {}).",
                    edge.from, edge.to, edge.weight
                );

                if let Some(from) = self.distance(&edge.from) {
                    let via = from + edge.weight;
                    if shorter(via, self.distance(&edge.to)) {
                        if self.phase == BellmanFordPhase::CheckingCycles {
                            self.predecessors.insert(edge.to.clone(), edge.from.clone());
                            let cycle = self.reconstruct_cycle(&edge.to, node_count);
                            self.status = format!(
                                "Negative cycle detected at edge {} -> {}!",
                                edge.from, edge.to
                            );
                            self.outcome = Some(BellmanFordOutcome::NegativeCycle(cycle));
                            self.phase = BellmanFordPhase::Done;
                            return;
                        }
                        self.distances.insert(edge.to.clone(), via);
                        self.predecessors.insert(edge.to.clone(), edge.from.clone());
                        self.status = format!("Updated distance to {}: {}", edge.to, via);
                    }
                }
                self.edge_index += 1;
            }
            BellmanFordPhase::Done => {}
        }
    }

    fn is_done(&self) -> bool {
        self.phase == BellmanFordPhase::Done
    }

    fn status(&self) -> &str {
        &self.status
    }
}
