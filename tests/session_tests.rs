// Integration tests for the session controller

use algotty::algorithms::graph::dijkstra::DijkstraOutcome;
use algotty::algorithms::heap::HeapKind;
use algotty::algorithms::sorting::SortKind;
use algotty::algorithms::traversal::TraversalKind;
use algotty::algorithms::AlgorithmState;
use algotty::engine::config::{algorithm_names, parse_args};
use algotty::engine::constants::{HEAP_BUILD_COUNT, HEAP_CAPACITY};
use algotty::engine::{AlgorithmKind, Session, SessionConfig, VisualizerError};
use algotty::model::graph::Graph;
use algotty::model::{GraphProblem, ProblemInstance, SearchProblem};
use std::time::{Duration, Instant};

const MAX_STEPS: usize = 100_000;

fn seeded(kind: AlgorithmKind) -> Session {
    let config = SessionConfig {
        seed: Some(1234),
        ..SessionConfig::for_kind(kind)
    };
    Session::new(kind, config).expect("valid session")
}

fn sorted_values(session: &Session) -> Vec<i64> {
    match session.snapshot() {
        AlgorithmState::Sort(sort) => sort.values().to_vec(),
        other => panic!("expected a sort, got {}", other.family()),
    }
}

fn search_session(kind: AlgorithmKind, values: Vec<i64>, target: Option<i64>) -> Session {
    Session::with_instance(
        kind,
        SessionConfig::for_kind(kind),
        ProblemInstance::Search(SearchProblem { values, target }),
    )
    .expect("valid session")
}

#[test]
fn test_every_algorithm_runs_to_completion() {
    for name in algorithm_names() {
        let args = vec![name.to_string(), "--seed".to_string(), "9".to_string()];
        let (kind, config) = parse_args(&args).expect("known algorithm");
        if kind == AlgorithmKind::HeapOperations {
            // heap sessions start idle and only move after an operation
            continue;
        }
        let mut session = Session::new(kind, config).expect("valid session");
        session.run_to_completion(MAX_STEPS).expect("steppable");
        assert!(session.is_finished(), "{} did not finish", name);
        assert!(session.steps() > 0, "{} took no steps", name);
    }
}

#[test]
fn test_step_pauses_and_counts() {
    let mut session = seeded(AlgorithmKind::Sort(SortKind::Insertion));
    assert_eq!(session.steps(), 0);
    assert!(!session.is_running());

    assert_eq!(session.step(), Ok(true));
    assert_eq!(session.steps(), 1);
    assert!(session.is_running());
    assert!(session.is_paused());
    assert_eq!(session.next_tick_in(Instant::now()), None);
}

#[test]
fn test_finished_session_refuses_to_step() {
    let mut session = Session::with_instance(
        AlgorithmKind::Sort(SortKind::Bubble),
        SessionConfig::default(),
        ProblemInstance::Array(vec![2, 1]),
    )
    .expect("valid session");
    session.run_to_completion(MAX_STEPS).expect("steppable");
    assert_eq!(sorted_values(&session), vec![1, 2]);

    let steps = session.steps();
    assert_eq!(session.step(), Ok(false));
    assert_eq!(session.steps(), steps);
}

#[test]
fn test_play_restarts_a_finished_run() {
    let mut session = seeded(AlgorithmKind::Sort(SortKind::Selection));
    session.run_to_completion(MAX_STEPS).expect("steppable");
    assert!(session.is_finished());

    session.play().expect("play");
    assert!(!session.is_finished());
    assert_eq!(session.steps(), 0);
    assert!(session.next_tick_in(Instant::now()).is_some());
}

#[test]
fn test_ticks_follow_the_delay() {
    let mut session = seeded(AlgorithmKind::Sort(SortKind::Quick));
    session.set_delay(Duration::from_millis(100));
    session.play().expect("play");

    let start = Instant::now();
    let mut fired = 0;
    for ms in (0..=1000).step_by(10) {
        if session.tick(start + Duration::from_millis(ms)) {
            fired += 1;
        }
    }
    // one tick per elapsed delay, never more
    assert!((9..=11).contains(&fired), "fired {} times", fired);
    assert_eq!(session.steps(), fired);
}

#[test]
fn test_delay_is_clamped() {
    let mut session = seeded(AlgorithmKind::Sort(SortKind::Bubble));
    session.set_delay(Duration::from_millis(1));
    assert_eq!(session.delay(), Duration::from_millis(10));
    session.set_delay(Duration::from_secs(60));
    assert_eq!(session.delay(), Duration::from_millis(2000));
}

#[test]
fn test_step_back_restores_previous_states() {
    let mut session = seeded(AlgorithmKind::Sort(SortKind::Bubble));
    let initial = session.snapshot().clone();
    session.step().expect("step");
    let after_one = session.snapshot().clone();
    session.step().expect("step");

    assert!(session.step_back());
    assert_eq!(session.snapshot(), &after_one);
    assert_eq!(session.steps(), 1);
    assert!(session.step_back());
    assert_eq!(session.snapshot(), &initial);
    assert_eq!(session.steps(), 0);
    assert!(!session.step_back());
}

#[test]
fn test_restart_keeps_instance_and_reset_regenerates() {
    let mut session = seeded(AlgorithmKind::Sort(SortKind::Merge));
    let instance = session.instance().clone();
    session.run_to_completion(5).expect("steppable");

    session.restart().expect("restart");
    assert_eq!(session.instance(), &instance);
    assert_eq!(session.steps(), 0);
    assert_eq!(session.history_len(), 0);

    session.reset().expect("reset");
    assert_ne!(session.instance(), &instance);
    assert!(!session.is_running());
}

#[test]
fn test_invalid_target_blocks_stepping() {
    let mut session = search_session(AlgorithmKind::LinearSearch, vec![4, 8, 15], Some(8));
    assert_eq!(
        session.set_target("eight"),
        Err(VisualizerError::InvalidTarget {
            input: String::from("eight")
        })
    );
    assert!(matches!(session.step(), Err(VisualizerError::InvalidTarget { .. })));
    assert!(matches!(session.play(), Err(VisualizerError::InvalidTarget { .. })));
    assert_eq!(session.steps(), 0);

    session.set_target(" 15 ").expect("numeric target");
    assert_eq!(session.target_input(), "15");
    session.run_to_completion(MAX_STEPS).expect("steppable");
    assert!(session.snapshot().status().contains("index 2"));
}

#[test]
fn test_binary_search_session() {
    let mut session = search_session(AlgorithmKind::BinarySearch, vec![1, 3, 5, 7, 9, 11], Some(7));
    session.run_to_completion(MAX_STEPS).expect("steppable");
    match session.snapshot() {
        AlgorithmState::BinarySearch(search) => assert_eq!(search.mid, Some(3)),
        other => panic!("expected binary search, got {}", other.family()),
    }
}

#[test]
fn test_heap_operations_animate() {
    let mut session = seeded(AlgorithmKind::HeapOperations);
    for value in [5, 2, 8] {
        session.insert(value).expect("room in heap");
        session.run_to_completion(MAX_STEPS).expect("steppable");
    }
    match session.snapshot() {
        AlgorithmState::Heap(heap) => assert_eq!(heap.items, vec![2, 5, 8]),
        other => panic!("expected heap, got {}", other.family()),
    }

    assert_eq!(session.extract(), Ok(2));
    assert_eq!(session.insert(1), Err(VisualizerError::OperationInProgress));
    session.run_to_completion(MAX_STEPS).expect("steppable");

    // a settled heap does not restart on play
    session.play().expect("play");
    match session.snapshot() {
        AlgorithmState::Heap(heap) => assert_eq!(heap.items, vec![5, 8]),
        other => panic!("expected heap, got {}", other.family()),
    }
}

#[test]
fn test_heap_build_and_limits() {
    let (kind, config) = parse_args(&["maxheap".to_string()]).expect("known algorithm");
    assert_eq!(config.heap_kind, HeapKind::Max);
    let mut session = Session::new(kind, config).expect("valid session");

    assert_eq!(session.extract(), Err(VisualizerError::HeapEmpty));
    assert_eq!(session.build_random(), Ok(HEAP_BUILD_COUNT));
    session.run_to_completion(MAX_STEPS).expect("steppable");

    for _ in HEAP_BUILD_COUNT..HEAP_CAPACITY {
        session.insert_random().expect("room in heap");
        session.run_to_completion(MAX_STEPS).expect("steppable");
    }
    assert!(matches!(
        session.insert_random(),
        Err(VisualizerError::HeapFull { .. })
    ));
    match session.snapshot() {
        AlgorithmState::Heap(heap) => {
            assert_eq!(heap.len(), HEAP_CAPACITY);
            assert!(heap.is_heap());
        }
        other => panic!("expected heap, got {}", other.family()),
    }
}

#[test]
fn test_operations_for_other_algorithms_are_refused() {
    let mut session = seeded(AlgorithmKind::Sort(SortKind::Bubble));
    assert!(matches!(
        session.insert(3),
        Err(VisualizerError::WrongAlgorithm { .. })
    ));
    assert!(matches!(
        session.set_target("3"),
        Err(VisualizerError::WrongAlgorithm { .. })
    ));
    assert!(matches!(
        session.set_start_node("A"),
        Err(VisualizerError::WrongAlgorithm { .. })
    ));
    assert!(matches!(
        session.set_traversal(TraversalKind::Bfs),
        Err(VisualizerError::WrongAlgorithm { .. })
    ));
}

#[test]
fn test_graph_endpoints() {
    let mut graph = Graph::undirected();
    graph.add_edge("A", "B", 4);
    graph.add_edge("B", "C", 1);
    graph.add_edge("A", "C", 9);
    let mut session = Session::with_instance(
        AlgorithmKind::Dijkstra,
        SessionConfig::for_kind(AlgorithmKind::Dijkstra),
        ProblemInstance::Graph(GraphProblem::new(graph)),
    )
    .expect("valid session");

    assert_eq!(
        session.set_start_node("Z"),
        Err(VisualizerError::UnknownNode { id: String::from("Z") })
    );
    session.set_start_node("C").expect("known node");
    session.set_end_node(Some("A")).expect("known node");
    session.run_to_completion(MAX_STEPS).expect("steppable");
    match session.snapshot() {
        AlgorithmState::Dijkstra(dijkstra) => assert_eq!(
            dijkstra.outcome,
            Some(DijkstraOutcome::Reached {
                path: vec!["C".to_string(), "B".to_string(), "A".to_string()],
                distance: 5,
            })
        ),
        other => panic!("expected Dijkstra, got {}", other.family()),
    }
}

#[test]
fn test_traversal_switch_restarts_on_same_tree() {
    let mut session = seeded(AlgorithmKind::TreeTraversal);
    let tree = session.instance().clone();
    session.run_to_completion(3).expect("steppable");
    session.set_traversal(TraversalKind::Postorder).expect("tree session");
    assert_eq!(session.instance(), &tree);
    assert_eq!(session.steps(), 0);
    assert_eq!(session.config().traversal, TraversalKind::Postorder);
}

#[test]
fn test_unknown_algorithm_and_bad_options() {
    assert_eq!(
        parse_args(&["shell".to_string()]).map(|_| ()),
        Err(VisualizerError::UnknownAlgorithm {
            name: String::from("shell")
        })
    );
    assert!(matches!(
        parse_args(&["quick".to_string(), "--size".to_string(), "many".to_string()]),
        Err(VisualizerError::InvalidConfig { .. })
    ));
}
