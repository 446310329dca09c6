//! Stepwise algorithm state machines
//!
//! Each algorithm is an explicit, resumable state value advanced one unit of
//! observable work at a time (a comparison, a swap, a pointer move, a queue or
//! stack operation). Nothing here knows about timers or rendering.
//!
//! - [`sorting`]: comparison and distribution sorts over a working copy
//! - [`search`]: linear and binary search
//! - [`traversal`]: tree traversals with an explicit stack or queue
//! - [`heap`]: min/max binary heap insert and extract
//! - [`graph`]: Dijkstra, Bellman-Ford, Kruskal, topological sort
//!
//! # Stepping model
//!
//! [`StepMachine::step`] takes the current state by reference and returns the
//! successor. The owner replaces its state with the result, so a half-applied
//! step is never observable.

pub mod graph;
pub mod heap;
pub mod search;
pub mod sorting;
pub mod traversal;

use crate::model::ProblemInstance;

/// An algorithm encoded as a resumable state machine
pub trait StepMachine: Clone {
    /// Read-only input the machine consults while stepping
    type Problem: ?Sized;

    /// Perform exactly one unit of work in place
    fn advance(&mut self, problem: &Self::Problem);

    /// True once the terminal phase is reached
    fn is_done(&self) -> bool;

    /// Human-readable description of the last step
    fn status(&self) -> &str;

    /// Successor state. A finished machine returns an unchanged copy.
    fn step(&self, problem: &Self::Problem) -> Self {
        let mut next = self.clone();
        if !next.is_done() {
            next.advance(problem);
        }
        next
    }

    /// Step until done or until `max_steps` steps were taken.
    /// Returns the final state and the number of steps performed.
    fn run(&self, problem: &Self::Problem, max_steps: usize) -> (Self, usize) {
        let mut state = self.clone();
        let mut steps = 0;
        while !state.is_done() && steps < max_steps {
            state = state.step(problem);
            steps += 1;
        }
        (state, steps)
    }
}

/// State of whichever algorithm a session is running
#[derive(Debug, Clone, PartialEq)]
pub enum AlgorithmState {
    Sort(sorting::SortState),
    LinearSearch(search::LinearSearch),
    BinarySearch(search::BinarySearch),
    Traversal(traversal::TraversalState),
    Heap(heap::HeapState),
    Dijkstra(graph::dijkstra::DijkstraState),
    BellmanFord(graph::bellman_ford::BellmanFordState),
    Kruskal(graph::kruskal::KruskalState),
    Topological(graph::topological::TopologicalState),
}

impl AlgorithmState {
    /// Successor state for `instance`.
    ///
    /// # Panics
    ///
    /// Panics when the instance belongs to a different algorithm family. The
    /// session never pairs them that way, so this is a programming error.
    pub fn step(&self, instance: &ProblemInstance) -> AlgorithmState {
        match (self, instance) {
            (AlgorithmState::Sort(s), ProblemInstance::Array(_)) => {
                AlgorithmState::Sort(s.step(&()))
            }
            (AlgorithmState::LinearSearch(s), ProblemInstance::Search(p)) => {
                AlgorithmState::LinearSearch(s.step(p))
            }
            (AlgorithmState::BinarySearch(s), ProblemInstance::Search(p)) => {
                AlgorithmState::BinarySearch(s.step(p))
            }
            (AlgorithmState::Traversal(s), ProblemInstance::Tree(t)) => {
                AlgorithmState::Traversal(s.step(t))
            }
            (AlgorithmState::Heap(s), ProblemInstance::Heap) => {
                AlgorithmState::Heap(s.step(&()))
            }
            (AlgorithmState::Dijkstra(s), ProblemInstance::Graph(g)) => {
                AlgorithmState::Dijkstra(s.step(g))
            }
            (AlgorithmState::BellmanFord(s), ProblemInstance::Graph(g)) => {
                AlgorithmState::BellmanFord(s.step(g))
            }
            (AlgorithmState::Kruskal(s), ProblemInstance::Graph(g)) => {
                AlgorithmState::Kruskal(s.step(g))
            }
            (AlgorithmState::Topological(s), ProblemInstance::Graph(g)) => {
                AlgorithmState::Topological(s.step(g))
            }
            (state, instance) => panic!(
                "{} state cannot step over a {} instance",
                state.family(),
                instance.describe()
            ),
        }
    }

    pub fn is_done(&self) -> bool {
        match self {
            AlgorithmState::Sort(s) => s.is_done(),
            AlgorithmState::LinearSearch(s) => s.is_done(),
            AlgorithmState::BinarySearch(s) => s.is_done(),
            AlgorithmState::Traversal(s) => s.is_done(),
            AlgorithmState::Heap(s) => s.is_done(),
            AlgorithmState::Dijkstra(s) => s.is_done(),
            AlgorithmState::BellmanFord(s) => s.is_done(),
            AlgorithmState::Kruskal(s) => s.is_done(),
            AlgorithmState::Topological(s) => s.is_done(),
        }
    }

    pub fn status(&self) -> &str {
        match self {
            AlgorithmState::Sort(s) => s.status(),
            AlgorithmState::LinearSearch(s) => s.status(),
            AlgorithmState::BinarySearch(s) => s.status(),
            AlgorithmState::Traversal(s) => s.status(),
            AlgorithmState::Heap(s) => s.status(),
            AlgorithmState::Dijkstra(s) => s.status(),
            AlgorithmState::BellmanFord(s) => s.status(),
            AlgorithmState::Kruskal(s) => s.status(),
            AlgorithmState::Topological(s) => s.status(),
        }
    }

    pub fn family(&self) -> &'static str {
        match self {
            AlgorithmState::Sort(_) => "sort",
            AlgorithmState::LinearSearch(_) => "linear search",
            AlgorithmState::BinarySearch(_) => "binary search",
            AlgorithmState::Traversal(_) => "tree traversal",
            AlgorithmState::Heap(_) => "heap",
            AlgorithmState::Dijkstra(_) => "Dijkstra",
            AlgorithmState::BellmanFord(_) => "Bellman-Ford",
            AlgorithmState::Kruskal(_) => "Kruskal",
            AlgorithmState::Topological(_) => "topological sort",
        }
    }
}
