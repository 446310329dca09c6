//! Dijkstra's shortest path
//!
//! `Idle` seeds the start node, `Dequeue` takes the cheapest entry from the
//! priority list, `RelaxEdge` looks at one neighbour per step and
//! `FinishedNode` finalises the dequeued node. Stale list entries are
//! skipped when dequeued; an improved distance replaces the old entry.

use super::{format_distance, shorter, walk_back};
use crate::algorithms::StepMachine;
use crate::model::graph::NodeId;
use crate::model::GraphProblem;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DijkstraPhase {
    Idle,
    Dequeue,
    RelaxEdge,
    FinishedNode,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DijkstraOutcome {
    /// The end node was dequeued; `path` runs start to end
    Reached { path: Vec<NodeId>, distance: i64 },
    /// The queue drained before the end node was reached
    Unreachable,
    /// No end node was chosen; every reachable distance is final
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DijkstraState {
    pub phase: DijkstraPhase,
    /// Tentative distances; missing means infinity
    pub distances: BTreeMap<NodeId, i64>,
    pub previous: BTreeMap<NodeId, NodeId>,
    pub visited: BTreeSet<NodeId>,
    /// `(node, distance)` entries, sorted on every dequeue
    pub queue: Vec<(NodeId, i64)>,
    pub current: Option<NodeId>,
    pub neighbors: Vec<NodeId>,
    pub neighbor_index: usize,
    pub highlight: Option<(NodeId, NodeId)>,
    pub outcome: Option<DijkstraOutcome>,
    pub status: String,
}

impl DijkstraState {
    pub fn new() -> Self {
        DijkstraState {
            phase: DijkstraPhase::Idle,
            distances: BTreeMap::new(),
            previous: BTreeMap::new(),
            visited: BTreeSet::new(),
            queue: Vec::new(),
            current: None,
            neighbors: Vec::new(),
            neighbor_index: 0,
            highlight: None,
            outcome: None,
            status: String::from("Select a start and end node, then press play."),
        }
    }

    pub fn distance(&self, id: &str) -> Option<i64> {
        self.distances.get(id).copied()
    }

    /// Nodes on the reconstructed path, empty until the end is reached
    pub fn path(&self) -> &[NodeId] {
        match &self.outcome {
            Some(DijkstraOutcome::Reached { path, .. }) => path,
            _ => &[],
        }
    }

    fn finish(&mut self, outcome: DijkstraOutcome, status: String) {
        self.phase = DijkstraPhase::Done;
        self.outcome = Some(outcome);
        self.status = status;
    }

    fn dequeue(&mut self, problem: &GraphProblem) {
        if self.queue.is_empty() {
            match &problem.end {
                Some(end) => self.finish(
                    DijkstraOutcome::Unreachable,
                    format!("Finished. {} is not reachable.", end),
                ),
                None => self.finish(
                    DijkstraOutcome::Exhausted,
                    String::from("Finished. All reachable distances are final."),
                ),
            }
            return;
        }

        self.queue.sort_by_key(|(_, distance)| *distance);
        let (id, distance) = self.queue.remove(0);
        if self.visited.contains(&id) {
            self.status = format!("Node {} already finalized. Dequeuing next.", id);
            return;
        }

        if problem.end.as_deref() == Some(id.as_str()) {
            let path = walk_back(&self.previous, &id);
            let status = format!("Reached destination {}! Path length {}.", id, distance);
            self.current = Some(id);
            self.finish(DijkstraOutcome::Reached { path, distance }, status);
            return;
        }

        self.neighbors = problem.graph.neighbors(&id);
        self.neighbor_index = 0;
        self.status = format!("Dequeued {}. Visiting its neighbors.", id);
        self.current = Some(id);
        self.phase = DijkstraPhase::RelaxEdge;
    }

    fn relax(&mut self, problem: &GraphProblem) {
        let Some(node) = self.current.clone() else {
            self.phase = DijkstraPhase::Dequeue;
            return;
        };
        let Some(neighbor) = self.neighbors.get(self.neighbor_index).cloned() else {
            self.phase = DijkstraPhase::FinishedNode;
            self.status = format!("Finished checking neighbors of {}.", node);
            return;
        };

        if !self.visited.contains(&neighbor) {
            let weight = problem.graph.weight(&node, &neighbor).unwrap_or(0);
            let via = self.distance(&node).unwrap_or(0) + weight;
            if shorter(via, self.distance(&neighbor)) {
                self.distances.insert(neighbor.clone(), via);
                self.previous.insert(neighbor.clone(), node.clone());
                self.queue.retain(|(id, _)| *id != neighbor);
                self.queue.push((neighbor.clone(), via));
                self.status = format!("Shorter path to {} found! New distance: {}.", neighbor, via);
            } else {
                self.status = format!(
                    "Path to {} via {} ({}) is not shorter.",
                    neighbor, node, via
                );
            }
            self.highlight = Some((node.clone(), neighbor));
        }

        self.neighbor_index += 1;
        if self.neighbor_index >= self.neighbors.len() {
            self.phase = DijkstraPhase::FinishedNode;
            self.status = format!("Finished checking neighbors of {}.", node);
        }
    }
}

impl Default for DijkstraState {
    fn default() -> Self {
        Self::new()
    }
}

impl StepMachine for DijkstraState {
    type Problem = GraphProblem;

    fn advance(&mut self, problem: &GraphProblem) {
        self.highlight = None;
        match self.phase {
            DijkstraPhase::Idle => match problem.start.as_deref() {
                Some(start) if problem.graph.contains(start) => {
                    self.distances.insert(start.to_string(), 0);
                    self.queue = vec![(start.to_string(), 0)];
                    self.phase = DijkstraPhase::Dequeue;
                    self.status = format!("Ready! Start node {} has distance 0.", start);
                }
                _ => self.finish(
                    DijkstraOutcome::Unreachable,
                    String::from("No start node selected."),
                ),
            },
            DijkstraPhase::Dequeue => self.dequeue(problem),
            DijkstraPhase::RelaxEdge => self.relax(problem),
            DijkstraPhase::FinishedNode => {
                if let Some(node) = self.current.take() {
                    let distance = format_distance(self.distance(&node));
                    self.status = format!("{} is finalized at distance {}.", node, distance);
                    self.visited.insert(node);
                }
                self.phase = DijkstraPhase::Dequeue;
            }
            DijkstraPhase::Done => {}
        }
    }

    fn is_done(&self) -> bool {
        self.phase == DijkstraPhase::Done
    }

    fn status(&self) -> &str {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::graph::Graph;

    fn triangle() -> Graph {
        let mut graph = Graph::undirected();
        for id in ["A", "B", "C"] {
            graph.add_node(id);
        }
        graph.add_edge("A", "B", 1);
        graph.add_edge("B", "C", 2);
        graph.add_edge("A", "C", 5);
        graph
    }

    #[test]
    fn test_prefers_two_hop_path() {
        let problem = GraphProblem::new(triangle());
        let (state, _) = DijkstraState::new().run(&problem, 1000);
        assert_eq!(
            state.outcome,
            Some(DijkstraOutcome::Reached {
                path: vec!["A".into(), "B".into(), "C".into()],
                distance: 3,
            })
        );
    }

    #[test]
    fn test_first_step_seeds_start() {
        let problem = GraphProblem::new(triangle());
        let state = DijkstraState::new().step(&problem);
        assert_eq!(state.phase, DijkstraPhase::Dequeue);
        assert_eq!(state.distance("A"), Some(0));
        assert_eq!(state.queue, vec![("A".to_string(), 0)]);
    }

    #[test]
    fn test_without_end_finalises_everything() {
        let problem = GraphProblem::with_endpoints(triangle(), Some("A"), None);
        let (state, _) = DijkstraState::new().run(&problem, 1000);
        assert_eq!(state.outcome, Some(DijkstraOutcome::Exhausted));
        assert_eq!(state.visited.len(), 3);
        assert_eq!(state.distance("C"), Some(3));
    }

    #[test]
    fn test_unreachable_end() {
        let mut graph = triangle();
        graph.add_node("D");
        let problem = GraphProblem::new(graph);
        let (state, _) = DijkstraState::new().run(&problem, 1000);
        assert_eq!(state.outcome, Some(DijkstraOutcome::Unreachable));
        assert!(state.path().is_empty());
    }
}
