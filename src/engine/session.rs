//! Session controller
//!
//! A [`Session`] owns one problem instance and the state of the algorithm
//! running over it. Every step replaces the state with its successor and
//! pushes the superseded one onto a bounded history. Playback is driven by a
//! [`StepTimer`] that the owner pumps with [`Session::tick`].
//!
//! Flags follow the usual player model: `running` is set once a run has
//! started (by play or by a manual step), `paused` stops the timer. A
//! finished state never steps again until the session is restarted or reset.

use super::config::{AlgorithmKind, SessionConfig};
use super::constants::{
    COUNT_SORT_VALUES, DELAY_MAX_MS, DELAY_MIN_MS, HEAP_BUILD_COUNT, HEAP_CAPACITY, HEAP_VALUES,
    RADIX_SORT_VALUES, SEARCH_VALUES, SORT_VALUES, TREE_VALUES,
};
use super::errors::VisualizerError;
use super::timer::StepTimer;
use crate::algorithms::graph::{BellmanFordState, DijkstraState, KruskalState, TopologicalState};
use crate::algorithms::heap::HeapState;
use crate::algorithms::search::{BinarySearch, LinearSearch};
use crate::algorithms::sorting::{SortKind, SortState};
use crate::algorithms::traversal::{TraversalKind, TraversalState};
use crate::algorithms::AlgorithmState;
use crate::model::generate::{InstanceGenerator, WeightRange};
use crate::model::{GraphProblem, ProblemInstance, SearchProblem};
use crate::snapshot::{Snapshot, StateHistory};
use std::time::{Duration, Instant};

/// Current state, the states it replaced, and how many steps were taken
#[derive(Debug, Clone)]
struct Progress {
    state: AlgorithmState,
    history: StateHistory,
    steps: usize,
}

impl Progress {
    fn new(state: AlgorithmState, history_limit: usize) -> Self {
        Progress {
            state,
            history: StateHistory::new(history_limit),
            steps: 0,
        }
    }

    /// Swap in a new state, remembering the old one
    fn replace(&mut self, state: AlgorithmState) {
        let previous = std::mem::replace(&mut self.state, state);
        self.history.push(Snapshot {
            state: previous,
            step: self.steps,
        });
    }

    fn advance(&mut self, instance: &ProblemInstance) {
        let next = self.state.step(instance);
        self.replace(next);
        self.steps += 1;
        if self.state.is_done() {
            log::info!(
                "{} finished after {} steps: {}",
                self.state.family(),
                self.steps,
                self.state.status()
            );
        }
    }
}

#[derive(Debug)]
pub struct Session {
    kind: AlgorithmKind,
    config: SessionConfig,
    generator: InstanceGenerator,
    instance: ProblemInstance,
    progress: Progress,
    timer: StepTimer,
    running: bool,
    paused: bool,
    /// Raw text of the search target, kept so refusals can quote it
    target_input: String,
}

impl Session {
    /// Create a session over a freshly generated instance
    pub fn new(kind: AlgorithmKind, config: SessionConfig) -> Result<Self, VisualizerError> {
        let config = config.clamped(kind);
        let mut generator = InstanceGenerator::new(config.seed);
        let instance = generate_instance(kind, &config, &mut generator);
        Self::build(kind, config, generator, instance)
    }

    /// Create a session over a caller-supplied instance
    pub fn with_instance(
        kind: AlgorithmKind,
        config: SessionConfig,
        instance: ProblemInstance,
    ) -> Result<Self, VisualizerError> {
        let config = config.clamped(kind);
        let generator = InstanceGenerator::new(config.seed);
        Self::build(kind, config, generator, instance)
    }

    fn build(
        kind: AlgorithmKind,
        config: SessionConfig,
        generator: InstanceGenerator,
        instance: ProblemInstance,
    ) -> Result<Self, VisualizerError> {
        let state = initial_state(kind, &config, &instance)?;
        log::info!(
            "new {} session over a {} (size {})",
            kind,
            instance.describe(),
            config.size
        );
        let target_input = match &instance {
            ProblemInstance::Search(problem) => problem
                .target
                .map(|target| target.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        };
        Ok(Session {
            kind,
            timer: StepTimer::new(config.delay),
            progress: Progress::new(state, config.history_limit),
            config,
            generator,
            instance,
            running: false,
            paused: true,
            target_input,
        })
    }

    pub fn kind(&self) -> AlgorithmKind {
        self.kind
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Read-only view of the current algorithm state
    pub fn snapshot(&self) -> &AlgorithmState {
        &self.progress.state
    }

    pub fn instance(&self) -> &ProblemInstance {
        &self.instance
    }

    pub fn steps(&self) -> usize {
        self.progress.steps
    }

    pub fn history_len(&self) -> usize {
        self.progress.history.len()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_finished(&self) -> bool {
        self.progress.state.is_done()
    }

    pub fn delay(&self) -> Duration {
        self.timer.delay()
    }

    pub fn target_input(&self) -> &str {
        &self.target_input
    }

    fn should_run(&self) -> bool {
        self.running && !self.paused && !self.is_finished()
    }

    /// Refuse to step a search whose target is not a number
    fn check_steppable(&self) -> Result<(), VisualizerError> {
        match &self.instance {
            ProblemInstance::Search(SearchProblem { target: None, .. }) => {
                Err(VisualizerError::InvalidTarget {
                    input: self.target_input.clone(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Start or resume playback. A finished run is restarted first, except
    /// for heap sessions, whose state carries the heap itself.
    pub fn play(&mut self) -> Result<(), VisualizerError> {
        self.check_steppable()?;
        if self.is_finished() && self.kind != AlgorithmKind::HeapOperations {
            self.restart()?;
        }
        self.running = true;
        self.paused = false;
        let should_run = self.should_run();
        self.timer.schedule(should_run, Instant::now());
        log::debug!("play {}", self.kind);
        Ok(())
    }

    pub fn pause(&mut self) {
        self.paused = true;
        self.timer.cancel();
    }

    /// Perform exactly one step and leave the session paused.
    /// Returns `Ok(false)` when the run is already finished.
    pub fn step(&mut self) -> Result<bool, VisualizerError> {
        self.check_steppable()?;
        self.timer.cancel();
        if self.is_finished() {
            return Ok(false);
        }
        self.running = true;
        self.paused = true;
        self.progress.advance(&self.instance);
        Ok(true)
    }

    /// Step until finished or `max_steps` were taken; returns the count
    pub fn run_to_completion(&mut self, max_steps: usize) -> Result<usize, VisualizerError> {
        let mut taken = 0;
        while taken < max_steps && self.step()? {
            taken += 1;
        }
        Ok(taken)
    }

    /// Restore the state the last step replaced
    pub fn step_back(&mut self) -> bool {
        self.pause();
        match self.progress.history.pop() {
            Some(snapshot) => {
                self.progress.state = snapshot.state;
                self.progress.steps = snapshot.step;
                true
            }
            None => false,
        }
    }

    /// Fire the pending timer tick if it is due, then re-arm it.
    /// Returns whether a step was taken.
    pub fn tick(&mut self, now: Instant) -> bool {
        let progress = &mut self.progress;
        let instance = &self.instance;
        let fired = self.timer.fire_if_due(now, || progress.advance(instance));
        if fired {
            let should_run = self.should_run();
            self.timer.schedule(should_run, now);
        }
        fired
    }

    /// Time until the next scheduled tick, `None` when not playing
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_next(now)
    }

    /// Regenerate the instance and start over from the initial state
    pub fn reset(&mut self) -> Result<(), VisualizerError> {
        self.timer.cancel();
        let instance = generate_instance(self.kind, &self.config, &mut self.generator);
        let state = initial_state(self.kind, &self.config, &instance)?;
        self.instance = instance;
        if let ProblemInstance::Search(problem) = &self.instance {
            self.target_input = problem
                .target
                .map(|target| target.to_string())
                .unwrap_or_default();
        }
        self.progress = Progress::new(state, self.config.history_limit);
        self.running = false;
        self.paused = true;
        log::info!("reset {} with a new {}", self.kind, self.instance.describe());
        Ok(())
    }

    /// Rebuild the algorithm state over the same instance
    pub fn restart(&mut self) -> Result<(), VisualizerError> {
        self.timer.cancel();
        let state = initial_state(self.kind, &self.config, &self.instance)?;
        self.progress = Progress::new(state, self.config.history_limit);
        self.running = false;
        self.paused = true;
        log::debug!("restart {}", self.kind);
        Ok(())
    }

    /// Change the animation delay, clamped to the accepted range
    pub fn set_delay(&mut self, delay: Duration) {
        let ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        let clamped = Duration::from_millis(ms.clamp(DELAY_MIN_MS, DELAY_MAX_MS));
        if clamped != delay {
            log::warn!("delay {:?} out of range, using {:?}", delay, clamped);
        }
        self.config.delay = clamped;
        self.timer.set_delay(clamped, Instant::now());
    }

    /// Change the array length or node count and regenerate
    pub fn set_size(&mut self, size: usize) -> Result<(), VisualizerError> {
        self.config = SessionConfig {
            size,
            ..self.config.clone()
        }
        .clamped(self.kind);
        self.reset()
    }

    /// Change the number of extra graph edges and regenerate
    pub fn set_extra_edges(&mut self, extra_edges: usize) -> Result<(), VisualizerError> {
        self.config = SessionConfig {
            extra_edges,
            ..self.config.clone()
        }
        .clamped(self.kind);
        self.reset()
    }

    /// Switch to a cyclic (or acyclic) topological sort graph and regenerate
    pub fn set_cyclic(&mut self, cyclic: bool) -> Result<(), VisualizerError> {
        if self.kind != AlgorithmKind::TopologicalSort {
            return Err(self.wrong_algorithm("Cycle injection"));
        }
        self.config.cyclic = cyclic;
        self.reset()
    }

    /// Switch traversal order and restart on the same tree
    pub fn set_traversal(&mut self, traversal: TraversalKind) -> Result<(), VisualizerError> {
        if self.kind != AlgorithmKind::TreeTraversal {
            return Err(self.wrong_algorithm("Traversal order"));
        }
        self.config.traversal = traversal;
        self.restart()
    }

    /// Parse and set the search target. Non-numeric input clears the target
    /// and the session refuses to step until a valid one is set.
    pub fn set_target(&mut self, input: &str) -> Result<(), VisualizerError> {
        let ProblemInstance::Search(problem) = &mut self.instance else {
            return Err(VisualizerError::WrongAlgorithm {
                operation: "Search target",
                kind: self.kind.name(),
            });
        };
        self.target_input = input.trim().to_string();
        match self.target_input.parse::<i64>() {
            Ok(target) => {
                problem.target = Some(target);
                self.restart()
            }
            Err(_) => {
                problem.target = None;
                self.pause();
                log::info!("refused search target '{}'", self.target_input);
                Err(VisualizerError::InvalidTarget {
                    input: self.target_input.clone(),
                })
            }
        }
    }

    fn graph_problem_mut(
        &mut self,
        operation: &'static str,
    ) -> Result<&mut GraphProblem, VisualizerError> {
        let kind = self.kind;
        match &mut self.instance {
            ProblemInstance::Graph(problem) => Ok(problem),
            _ => Err(VisualizerError::WrongAlgorithm {
                operation,
                kind: kind.name(),
            }),
        }
    }

    /// Choose the source node and restart on the same graph
    pub fn set_start_node(&mut self, id: &str) -> Result<(), VisualizerError> {
        let problem = self.graph_problem_mut("Start node")?;
        if !problem.graph.contains(id) {
            return Err(VisualizerError::UnknownNode { id: id.to_string() });
        }
        problem.start = Some(id.to_string());
        self.restart()
    }

    /// Choose the destination node, or none to compute every distance
    pub fn set_end_node(&mut self, id: Option<&str>) -> Result<(), VisualizerError> {
        let problem = self.graph_problem_mut("End node")?;
        if let Some(id) = id {
            if !problem.graph.contains(id) {
                return Err(VisualizerError::UnknownNode { id: id.to_string() });
            }
        }
        problem.end = id.map(str::to_string);
        self.restart()
    }

    fn wrong_algorithm(&self, operation: &'static str) -> VisualizerError {
        VisualizerError::WrongAlgorithm {
            operation,
            kind: self.kind.name(),
        }
    }

    /// Apply `operation` to a copy of the heap state and install the copy on
    /// success, then let the sift animate. On error nothing changes.
    fn heap_operation<T>(
        &mut self,
        name: &'static str,
        operation: impl FnOnce(&mut HeapState) -> Result<T, VisualizerError>,
    ) -> Result<T, VisualizerError> {
        let AlgorithmState::Heap(heap) = &self.progress.state else {
            return Err(self.wrong_algorithm(name));
        };
        let mut next = heap.clone();
        let result = operation(&mut next)
            .inspect_err(|err| log::info!("{} refused: {}", name, err))?;
        self.progress.replace(AlgorithmState::Heap(next));
        self.running = true;
        self.paused = false;
        let should_run = self.should_run();
        self.timer.schedule(should_run, Instant::now());
        Ok(result)
    }

    pub fn insert(&mut self, value: i64) -> Result<(), VisualizerError> {
        self.heap_operation("Insert", |heap| heap.insert(value))
    }

    pub fn insert_random(&mut self) -> Result<i64, VisualizerError> {
        let value = self.generator.value(HEAP_VALUES);
        self.heap_operation("Insert", |heap| heap.insert(value))?;
        Ok(value)
    }

    /// Remove the root; the replacement sifts down on the following steps
    pub fn extract(&mut self) -> Result<i64, VisualizerError> {
        self.heap_operation("Extract", |heap| heap.extract())
    }

    /// Clear the heap and insert a fresh set of distinct random values
    pub fn build_random(&mut self) -> Result<usize, VisualizerError> {
        let values = self.generator.distinct(HEAP_BUILD_COUNT, HEAP_VALUES);
        let kind = self.config.heap_kind;
        self.heap_operation("Build", |heap| {
            if heap.is_busy() {
                return Err(VisualizerError::OperationInProgress);
            }
            *heap = HeapState::new(kind, HEAP_CAPACITY);
            heap.build(&values)
        })
    }
}

fn generate_instance(
    kind: AlgorithmKind,
    config: &SessionConfig,
    generator: &mut InstanceGenerator,
) -> ProblemInstance {
    let size = config.size;
    match kind {
        AlgorithmKind::Sort(sort) => {
            let range = match sort {
                SortKind::Count => COUNT_SORT_VALUES,
                SortKind::Radix => RADIX_SORT_VALUES,
                _ => SORT_VALUES,
            };
            ProblemInstance::Array(generator.array(size, range))
        }
        AlgorithmKind::LinearSearch | AlgorithmKind::BinarySearch => {
            let values = if kind == AlgorithmKind::BinarySearch {
                generator.sorted_distinct(size, SEARCH_VALUES)
            } else {
                generator.array(size, SEARCH_VALUES)
            };
            let target = (!values.is_empty()).then(|| values[generator.index(values.len())]);
            ProblemInstance::Search(SearchProblem { values, target })
        }
        AlgorithmKind::TreeTraversal => {
            ProblemInstance::Tree(generator.tree(config.tree_shape, size, TREE_VALUES))
        }
        AlgorithmKind::HeapOperations => ProblemInstance::Heap,
        AlgorithmKind::Dijkstra => {
            let weights = WeightRange {
                tree: 1..=15,
                extra: 1..=20,
            };
            let graph = generator.weighted_graph(size, config.extra_edges, &weights);
            ProblemInstance::Graph(GraphProblem::new(graph))
        }
        AlgorithmKind::BellmanFord => {
            let weights = WeightRange {
                tree: 1..=15,
                extra: -10..=15,
            };
            let graph = generator.weighted_graph(size, config.extra_edges, &weights);
            ProblemInstance::Graph(GraphProblem::new(graph))
        }
        AlgorithmKind::Kruskal => {
            let weights = WeightRange {
                tree: 1..=20,
                extra: 1..=25,
            };
            let graph = generator.weighted_graph(size, config.extra_edges, &weights);
            ProblemInstance::Graph(GraphProblem::new(graph))
        }
        AlgorithmKind::TopologicalSort => {
            let graph = if config.cyclic {
                generator.cyclic_graph(size, config.extra_edges)
            } else {
                generator.dag(size, config.extra_edges)
            };
            ProblemInstance::Graph(GraphProblem::new(graph))
        }
    }
}

/// Initial state of `kind` over `instance`
fn initial_state(
    kind: AlgorithmKind,
    config: &SessionConfig,
    instance: &ProblemInstance,
) -> Result<AlgorithmState, VisualizerError> {
    let state = match (kind, instance) {
        (AlgorithmKind::Sort(sort), ProblemInstance::Array(values)) => {
            AlgorithmState::Sort(SortState::new(sort, values)?)
        }
        (AlgorithmKind::LinearSearch, ProblemInstance::Search(_)) => {
            AlgorithmState::LinearSearch(LinearSearch::new())
        }
        (AlgorithmKind::BinarySearch, ProblemInstance::Search(problem)) => {
            AlgorithmState::BinarySearch(BinarySearch::new(problem.values.len()))
        }
        (AlgorithmKind::TreeTraversal, ProblemInstance::Tree(tree)) => {
            AlgorithmState::Traversal(TraversalState::new(config.traversal, tree))
        }
        (AlgorithmKind::HeapOperations, ProblemInstance::Heap) => {
            AlgorithmState::Heap(HeapState::new(config.heap_kind, HEAP_CAPACITY))
        }
        (AlgorithmKind::Dijkstra, ProblemInstance::Graph(_)) => {
            AlgorithmState::Dijkstra(DijkstraState::new())
        }
        (AlgorithmKind::BellmanFord, ProblemInstance::Graph(_)) => {
            AlgorithmState::BellmanFord(BellmanFordState::new())
        }
        (AlgorithmKind::Kruskal, ProblemInstance::Graph(problem)) => {
            AlgorithmState::Kruskal(KruskalState::new(problem))
        }
        (AlgorithmKind::TopologicalSort, ProblemInstance::Graph(_)) => {
            AlgorithmState::Topological(TopologicalState::new())
        }
        (kind, instance) => {
            return Err(VisualizerError::InvalidConfig {
                message: format!("{} cannot run over a {}", kind, instance.describe()),
            })
        }
    };
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(kind: AlgorithmKind) -> Session {
        let config = SessionConfig {
            seed: Some(7),
            ..SessionConfig::for_kind(kind)
        };
        Session::new(kind, config).expect("valid session")
    }

    #[test]
    fn test_tick_only_fires_when_due() {
        let mut session = seeded(AlgorithmKind::Sort(SortKind::Bubble));
        session.play().expect("play");
        let now = Instant::now();
        assert!(!session.tick(now));
        assert!(session.tick(now + Duration::from_secs(1)));
        assert_eq!(session.steps(), 1);
        assert!(session.next_tick_in(now).is_some());
    }

    #[test]
    fn test_pause_cancels_pending_tick() {
        let mut session = seeded(AlgorithmKind::Sort(SortKind::Bubble));
        session.play().expect("play");
        session.pause();
        assert!(!session.tick(Instant::now() + Duration::from_secs(5)));
        assert_eq!(session.steps(), 0);
    }

    #[test]
    fn test_mismatched_instance_is_rejected() {
        let result = Session::with_instance(
            AlgorithmKind::Dijkstra,
            SessionConfig::default(),
            ProblemInstance::Array(vec![1, 2]),
        );
        assert!(matches!(result, Err(VisualizerError::InvalidConfig { .. })));
    }
}
