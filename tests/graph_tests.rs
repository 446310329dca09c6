// Integration tests for the graph algorithms, checked against brute-force references

use algotty::algorithms::graph::bellman_ford::BellmanFordOutcome;
use algotty::algorithms::graph::dijkstra::DijkstraOutcome;
use algotty::algorithms::graph::{BellmanFordState, DijkstraState, KruskalState, TopologicalState};
use algotty::algorithms::StepMachine;
use algotty::model::generate::{InstanceGenerator, WeightRange};
use algotty::model::graph::{Graph, NodeId};
use algotty::model::GraphProblem;
use std::collections::{BTreeMap, BTreeSet};

const MAX_STEPS: usize = 100_000;

fn positive_weights() -> WeightRange {
    WeightRange {
        tree: 1..=15,
        extra: 1..=20,
    }
}

/// Floyd-Warshall distances from `start`
fn reference_distances(graph: &Graph, start: &str) -> BTreeMap<NodeId, i64> {
    let ids = graph.node_ids();
    let index: BTreeMap<&NodeId, usize> = ids.iter().enumerate().map(|(i, id)| (id, i)).collect();
    let n = ids.len();
    let mut dist = vec![vec![None::<i64>; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = Some(0);
    }
    for edge in graph.edge_list() {
        let (a, b) = (index[&edge.from], index[&edge.to]);
        if dist[a][b].map_or(true, |d| edge.weight < d) {
            dist[a][b] = Some(edge.weight);
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(ik), Some(kj)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].map_or(true, |d| ik + kj < d) {
                        dist[i][j] = Some(ik + kj);
                    }
                }
            }
        }
    }
    let s = index[&start.to_string()];
    ids.iter()
        .enumerate()
        .filter_map(|(j, id)| dist[s][j].map(|d| (id.clone(), d)))
        .collect()
}

fn path_weight(graph: &Graph, path: &[NodeId]) -> i64 {
    path.windows(2)
        .map(|pair| graph.weight(&pair[0], &pair[1]).expect("path follows edges"))
        .sum()
}

#[test]
fn test_dijkstra_matches_floyd_warshall() {
    let mut generator = InstanceGenerator::new(Some(101));
    for nodes in [2, 5, 10, 14] {
        let graph = generator.weighted_graph(nodes, 6, &positive_weights());
        let expected = reference_distances(&graph, "A");

        let problem = GraphProblem::with_endpoints(graph.clone(), Some("A"), None);
        let (state, _) = DijkstraState::new().run(&problem, MAX_STEPS);
        assert_eq!(state.outcome, Some(DijkstraOutcome::Exhausted));
        assert_eq!(state.distances, expected);

        let problem = GraphProblem::new(graph.clone());
        let end = problem.end.clone().expect("more than one node");
        let (state, _) = DijkstraState::new().run(&problem, MAX_STEPS);
        match state.outcome {
            Some(DijkstraOutcome::Reached { path, distance }) => {
                assert_eq!(distance, expected[&end]);
                assert_eq!(path.first().map(String::as_str), Some("A"));
                assert_eq!(path.last(), Some(&end));
                assert_eq!(path_weight(&graph, &path), distance);
            }
            other => panic!("expected a path to {}, got {:?}", end, other),
        }
    }
}

#[test]
fn test_bellman_ford_matches_floyd_warshall_without_negative_edges() {
    let mut generator = InstanceGenerator::new(Some(202));
    for nodes in [3, 6, 8] {
        let graph = generator.weighted_graph(nodes, 4, &positive_weights());
        let problem = GraphProblem::new(graph.clone());
        let (state, _) = BellmanFordState::new().run(&problem, MAX_STEPS);
        assert_eq!(state.outcome, Some(BellmanFordOutcome::ShortestPaths));
        assert_eq!(state.distances, reference_distances(&graph, "A"));
    }
}

#[test]
fn test_bellman_ford_reports_negative_cycle() {
    let mut graph = Graph::directed();
    graph.add_edge("A", "B", 2);
    graph.add_edge("B", "C", 4);
    graph.add_edge("C", "D", -3);
    graph.add_edge("D", "B", -2);
    let problem = GraphProblem::with_endpoints(graph, Some("A"), None);
    let (state, _) = BellmanFordState::new().run(&problem, MAX_STEPS);

    let cycle = state.negative_cycle().expect("negative cycle");
    assert_eq!(cycle.first(), cycle.last());
    let members: BTreeSet<&str> = cycle.iter().map(String::as_str).collect();
    assert_eq!(members, BTreeSet::from(["B", "C", "D"]));
}

/// Prim's algorithm over the whole graph, O(V^2)
fn reference_mst_weight(graph: &Graph) -> i64 {
    let ids = graph.node_ids();
    let mut in_tree = BTreeSet::from([ids[0].clone()]);
    let mut total = 0;
    while in_tree.len() < ids.len() {
        let (weight, next) = graph
            .edge_list()
            .into_iter()
            .filter(|edge| in_tree.contains(&edge.from) && !in_tree.contains(&edge.to))
            .map(|edge| (edge.weight, edge.to))
            .min()
            .expect("connected graph");
        total += weight;
        in_tree.insert(next);
    }
    total
}

#[test]
fn test_kruskal_matches_prim() {
    let mut generator = InstanceGenerator::new(Some(303));
    let weights = WeightRange {
        tree: 1..=20,
        extra: 1..=25,
    };
    for nodes in [2, 4, 10, 16] {
        let graph = generator.weighted_graph(nodes, 5, &weights);
        let problem = GraphProblem::new(graph.clone());
        let (state, _) = KruskalState::new(&problem).run(&problem, MAX_STEPS);
        assert!(state.is_done());
        assert_eq!(state.mst.len(), nodes - 1);
        assert_eq!(state.total_weight(), reference_mst_weight(&graph));

        let roots: BTreeSet<&NodeId> = state.components.values().collect();
        assert_eq!(roots.len(), 1, "spanning tree joins every node");
    }
}

#[test]
fn test_topological_order_respects_every_edge() {
    let mut generator = InstanceGenerator::new(Some(404));
    for nodes in [1, 5, 10, 18] {
        let graph = generator.dag(nodes, 6);
        let problem = GraphProblem::new(graph.clone());
        let (state, _) = TopologicalState::new().run(&problem, MAX_STEPS);
        assert!(!state.has_cycle());
        assert_eq!(state.order.len(), nodes);

        let position: BTreeMap<&NodeId, usize> =
            state.order.iter().enumerate().map(|(i, id)| (id, i)).collect();
        for edge in graph.edge_list() {
            assert!(
                position[&edge.from] < position[&edge.to],
                "{} -> {} out of order",
                edge.from,
                edge.to
            );
        }
    }
}

#[test]
fn test_topological_sort_on_pure_cycle() {
    let mut graph = Graph::directed();
    graph.add_edge("A", "B", 1);
    graph.add_edge("B", "C", 1);
    graph.add_edge("C", "D", 1);
    graph.add_edge("D", "A", 1);
    let problem = GraphProblem::new(graph);

    let mut state = TopologicalState::new();
    while !state.is_done() {
        state = state.step(&problem);
        assert!(state.queue.is_empty());
    }
    assert!(state.order.is_empty());
    assert!(state.has_cycle());
    assert_eq!(state.cycle_nodes, vec!["A", "B", "C", "D"]);
}

#[test]
fn test_generated_cyclic_graph_is_detected() {
    let mut generator = InstanceGenerator::new(Some(505));
    let graph = generator.cyclic_graph(8, 3);
    let problem = GraphProblem::new(graph);
    let (state, _) = TopologicalState::new().run(&problem, MAX_STEPS);
    assert!(state.has_cycle());
    assert_eq!(state.order.len() + state.cycle_nodes.len(), 8);
}
