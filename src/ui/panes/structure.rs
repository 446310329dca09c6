//! Structure pane: tree, heap and graph shapes, or sort bookkeeping

use super::{pane_block, placeholder, render_scrolled};
use crate::algorithms::graph::{BellmanFordState, DijkstraState, KruskalState, TopologicalState};
use crate::algorithms::heap::HeapState;
use crate::algorithms::search::{BinarySearch, LinearSearch};
use crate::algorithms::sorting::count::CountPhase;
use crate::algorithms::sorting::heap_sort::HeapSortPhase;
use crate::algorithms::sorting::radix::RadixPhase;
use crate::algorithms::sorting::SortState;
use crate::algorithms::traversal::TraversalState;
use crate::algorithms::AlgorithmState;
use crate::model::graph::NodeId;
use crate::model::tree::{Tree, TreeNodeId};
use crate::model::{GraphProblem, ProblemInstance};
use crate::ui::theme::{COMPONENT_COLORS, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
    Frame,
};
use std::collections::BTreeMap;

/// Render the structure pane for whatever algorithm `state` holds
pub fn render_structure_pane(
    frame: &mut Frame,
    area: Rect,
    state: &AlgorithmState,
    instance: &ProblemInstance,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let (title, items) = match (state, instance) {
        (AlgorithmState::Sort(sort), _) => (" Progress ", sort_items(sort)),
        (AlgorithmState::LinearSearch(search), _) => (" Progress ", linear_items(search)),
        (AlgorithmState::BinarySearch(search), _) => (" Progress ", binary_items(search)),
        (AlgorithmState::Traversal(traversal), ProblemInstance::Tree(tree)) => {
            (" Tree ", tree_items(tree, traversal))
        }
        (AlgorithmState::Heap(heap), _) => (" Heap ", heap_items(heap)),
        (_, ProblemInstance::Graph(problem)) => {
            let marks = graph_marks(state);
            (" Graph ", graph_items(problem, &marks))
        }
        _ => (" Structure ", vec![placeholder("(nothing to show)")]),
    };

    render_scrolled(frame, area, pane_block(title, is_focused), items, scroll_offset);
}

fn text(line: String, color: Color) -> ListItem<'static> {
    ListItem::new(line).style(Style::default().fg(color))
}

fn counter(label: &str, value: usize) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(format!("{:<12}", label), Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(value.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
    ]))
}

fn sort_items(sort: &SortState) -> Vec<ListItem<'static>> {
    let view = sort.view();
    let mut items = vec![
        counter("Comparisons", view.comparisons),
        counter("Swaps", view.swaps),
        counter("Writes", view.writes),
        counter("Sorted", view.sorted.len()),
        ListItem::new(""),
    ];

    match sort {
        SortState::Quick(quick) => {
            if let Some(pivot) = quick.pivot_index() {
                items.push(text(
                    format!("Pivot: {} at index {}", view.values[pivot], pivot),
                    DEFAULT_THEME.secondary,
                ));
            }
            if let Some(partition) = &quick.partition {
                items.push(text(
                    format!(
                        "Partition {}..={}  wall {}  scan {}",
                        partition.low, partition.high, partition.wall, partition.j
                    ),
                    DEFAULT_THEME.fg,
                ));
            }
            let pending: Vec<String> = quick
                .stack
                .iter()
                .rev()
                .map(|(low, high)| format!("{}..={}", low, high))
                .collect();
            items.push(text(format!("Stack: [{}]", pending.join(", ")), DEFAULT_THEME.comment));
        }
        SortState::Merge(merge) => {
            items.push(text(format!("{}-way merge", merge.ways), DEFAULT_THEME.primary));
            if let Some(active) = &merge.current {
                items.push(text(
                    format!("Merging {}..={}", active.op.left, active.op.right),
                    DEFAULT_THEME.fg,
                ));
                for &(head, end) in &active.heads {
                    let run: Vec<String> = active
                        .aux
                        .get(head..end)
                        .unwrap_or_default()
                        .iter()
                        .map(|v| v.to_string())
                        .collect();
                    items.push(text(format!("  run [{}]", run.join(" ")), DEFAULT_THEME.fg));
                }
                let merged: Vec<String> = view
                    .values
                    .get(active.op.left..active.k)
                    .unwrap_or_default()
                    .iter()
                    .map(|v| v.to_string())
                    .collect();
                items.push(text(format!("  merged [{}]", merged.join(" ")), DEFAULT_THEME.success));
            }
            items.push(text(
                format!("{} merges queued", merge.queue.len()),
                DEFAULT_THEME.comment,
            ));
        }
        SortState::Heap(heap) => {
            let phase = match heap.phase {
                HeapSortPhase::Building | HeapSortPhase::Sifting { .. }
                    if heap.build_index.is_some() =>
                {
                    "building max-heap"
                }
                HeapSortPhase::Done => "done",
                _ => "extracting maximum",
            };
            items.push(text(format!("Phase: {}", phase), DEFAULT_THEME.primary));
            items.push(text(format!("Heap size: {}", heap.heap_size), DEFAULT_THEME.fg));
        }
        SortState::Count(count) => {
            let phase = match count.phase {
                CountPhase::Counting { .. } => "counting",
                CountPhase::ModifyingCount { .. } => "prefix sums",
                CountPhase::BuildingOutput { .. } => "placing output",
                CountPhase::Copying { .. } => "copying back",
                CountPhase::Done => "done",
            };
            items.push(text(format!("Phase: {}", phase), DEFAULT_THEME.primary));
            for (slot, &n) in count.counts.iter().enumerate() {
                if n > 0 {
                    items.push(text(
                        format!("{:>4}: {}", count.offset + slot as i64, n),
                        DEFAULT_THEME.fg,
                    ));
                }
            }
            let output: Vec<String> = count
                .output
                .iter()
                .map(|cell| cell.map_or_else(|| String::from("_"), |v| v.to_string()))
                .collect();
            items.push(text(format!("Output [{}]", output.join(" ")), DEFAULT_THEME.success));
        }
        SortState::Radix(radix) => {
            let phase = match radix.phase {
                RadixPhase::Distributing { .. } => "distributing",
                RadixPhase::Collecting => "collecting",
                RadixPhase::Done => "done",
            };
            items.push(text(
                format!("Digit place {}  ({})", radix.digit_place, phase),
                DEFAULT_THEME.primary,
            ));
            for (digit, bucket) in radix.buckets.iter().enumerate() {
                let values: Vec<String> = bucket.iter().map(|v| v.to_string()).collect();
                items.push(text(format!("{}: {}", digit, values.join(" ")), DEFAULT_THEME.fg));
            }
        }
        SortState::Bubble(_) | SortState::Insertion(_) | SortState::Selection(_) => {}
    }

    items.push(ListItem::new(""));
    items.push(text(view.status.clone(), DEFAULT_THEME.fg));
    items
}

fn linear_items(search: &LinearSearch) -> Vec<ListItem<'static>> {
    vec![
        counter("Comparisons", search.comparisons),
        ListItem::new(""),
        text(search.status.clone(), DEFAULT_THEME.fg),
    ]
}

fn binary_items(search: &BinarySearch) -> Vec<ListItem<'static>> {
    let window = search.window();
    vec![
        counter("Comparisons", search.comparisons),
        counter("Window size", window.len()),
        text(
            format!(
                "low {}  high {}  mid {}",
                search.low,
                search.high,
                search.mid.map_or_else(|| String::from("-"), |m| m.to_string())
            ),
            DEFAULT_THEME.fg,
        ),
        ListItem::new(""),
        text(search.status.clone(), DEFAULT_THEME.fg),
    ]
}

fn tree_node_color(id: TreeNodeId, traversal: &TraversalState) -> Color {
    if traversal.current == Some(id) {
        DEFAULT_THEME.comparing
    } else if traversal.visited.contains(&id) {
        DEFAULT_THEME.visited
    } else if traversal.stack.contains(&id) || traversal.queue.contains(&id) {
        DEFAULT_THEME.secondary
    } else {
        DEFAULT_THEME.fg
    }
}

fn tree_items(tree: &Tree, traversal: &TraversalState) -> Vec<ListItem<'static>> {
    let Some(root) = tree.root() else {
        return vec![placeholder("(empty tree)")];
    };

    let mut items = Vec::new();
    // (node, prefix for its children, connector drawn before it, side label)
    let mut pending: Vec<(TreeNodeId, String, &str, &str)> = vec![(root, String::new(), "", "")];
    while let Some((id, prefix, connector, side)) = pending.pop() {
        let Some(node) = tree.node(id) else {
            continue;
        };
        let mut label = node.value.to_string();
        if traversal.current == Some(id) {
            label.push_str("  ◀");
        }
        items.push(ListItem::new(Line::from(vec![
            Span::styled(
                format!("{}{}{}", prefix, connector, side),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(
                label,
                Style::default()
                    .fg(tree_node_color(id, traversal))
                    .add_modifier(Modifier::BOLD),
            ),
        ])));

        let child_prefix = match connector {
            "" => prefix.clone(),
            "├─" => format!("{}│ ", prefix),
            _ => format!("{}  ", prefix),
        };
        // Right is pushed first so the left child prints first
        match (node.left, node.right) {
            (Some(left), Some(right)) => {
                pending.push((right, child_prefix.clone(), "└─", "R "));
                pending.push((left, child_prefix, "├─", "L "));
            }
            (Some(left), None) => pending.push((left, child_prefix, "└─", "L ")),
            (None, Some(right)) => pending.push((right, child_prefix, "└─", "R ")),
            (None, None) => {}
        }
    }
    items
}

fn heap_items(heap: &HeapState) -> Vec<ListItem<'static>> {
    if heap.is_empty() {
        return vec![placeholder("(empty heap)")];
    }

    let mut items = Vec::new();
    let mut start = 0;
    let mut width = 1;
    while start < heap.len() {
        let end = (start + width).min(heap.len());
        let spans: Vec<Span> = (start..end)
            .flat_map(|index| {
                let color = if heap.swapping.contains(&index) {
                    DEFAULT_THEME.swapping
                } else if heap.comparing.contains(&index) {
                    DEFAULT_THEME.comparing
                } else {
                    DEFAULT_THEME.fg
                };
                [
                    Span::styled(format!("{:>4}", heap.items[index]), Style::default().fg(color)),
                    Span::raw("  "),
                ]
            })
            .collect();
        items.push(ListItem::new(Line::from(spans)));
        start = end;
        width *= 2;
    }
    items.push(ListItem::new(""));
    items.push(text(heap.status.clone(), DEFAULT_THEME.fg));
    items
}

/// Per-node colors and highlighted edges derived from a graph algorithm
#[derive(Default)]
struct GraphMarks {
    nodes: BTreeMap<NodeId, Color>,
    hot_edge: Option<(NodeId, NodeId)>,
    chosen: Vec<(NodeId, NodeId)>,
}

impl GraphMarks {
    fn is_chosen(&self, from: &str, to: &str) -> bool {
        self.chosen
            .iter()
            .any(|(a, b)| (a == from && b == to) || (a == to && b == from))
    }
}

fn graph_marks(state: &AlgorithmState) -> GraphMarks {
    match state {
        AlgorithmState::Dijkstra(dijkstra) => dijkstra_marks(dijkstra),
        AlgorithmState::BellmanFord(bellman) => bellman_ford_marks(bellman),
        AlgorithmState::Kruskal(kruskal) => kruskal_marks(kruskal),
        AlgorithmState::Topological(topo) => topological_marks(topo),
        _ => GraphMarks::default(),
    }
}

fn dijkstra_marks(state: &DijkstraState) -> GraphMarks {
    let mut marks = GraphMarks::default();
    for id in &state.visited {
        marks.nodes.insert(id.clone(), DEFAULT_THEME.visited);
    }
    for pair in state.path().windows(2) {
        marks.chosen.push((pair[0].clone(), pair[1].clone()));
    }
    for id in state.path() {
        marks.nodes.insert(id.clone(), DEFAULT_THEME.success);
    }
    if let Some(current) = &state.current {
        marks.nodes.insert(current.clone(), DEFAULT_THEME.comparing);
    }
    marks.hot_edge = state.highlight.clone();
    marks
}

fn bellman_ford_marks(state: &BellmanFordState) -> GraphMarks {
    let mut marks = GraphMarks::default();
    for (node, previous) in &state.predecessors {
        marks.chosen.push((previous.clone(), node.clone()));
    }
    if let Some(cycle) = state.negative_cycle() {
        for id in cycle {
            marks.nodes.insert(id.clone(), DEFAULT_THEME.error);
        }
    }
    marks.hot_edge = state.highlight.clone();
    marks
}

fn kruskal_marks(state: &KruskalState) -> GraphMarks {
    let mut marks = GraphMarks::default();
    let mut roots: Vec<&NodeId> = state.components.values().collect();
    roots.sort();
    roots.dedup();
    for (node, root) in &state.components {
        let slot = roots.iter().position(|r| *r == root).unwrap_or(0);
        marks
            .nodes
            .insert(node.clone(), COMPONENT_COLORS[slot % COMPONENT_COLORS.len()]);
    }
    for edge in &state.mst {
        marks.chosen.push((edge.from.clone(), edge.to.clone()));
    }
    marks.hot_edge = state
        .highlight
        .as_ref()
        .map(|edge| (edge.from.clone(), edge.to.clone()));
    marks
}

fn topological_marks(state: &TopologicalState) -> GraphMarks {
    let mut marks = GraphMarks::default();
    for id in &state.order {
        marks.nodes.insert(id.clone(), DEFAULT_THEME.success);
    }
    for id in &state.queue {
        marks.nodes.insert(id.clone(), DEFAULT_THEME.secondary);
    }
    for id in &state.cycle_nodes {
        marks.nodes.insert(id.clone(), DEFAULT_THEME.error);
    }
    if let Some(current) = &state.current {
        marks.nodes.insert(current.clone(), DEFAULT_THEME.comparing);
    }
    marks
}

fn graph_items(problem: &GraphProblem, marks: &GraphMarks) -> Vec<ListItem<'static>> {
    let graph = &problem.graph;
    if graph.is_empty() {
        return vec![placeholder("(empty graph)")];
    }

    let arrow = if graph.is_directed() { "→" } else { "─" };
    let mut items = Vec::with_capacity(graph.len());
    for id in graph.node_ids() {
        let node_color = marks.nodes.get(&id).copied().unwrap_or(DEFAULT_THEME.fg);
        let mut badge = String::new();
        if problem.start.as_ref() == Some(&id) {
            badge.push_str(" (start)");
        }
        if problem.end.as_ref() == Some(&id) {
            badge.push_str(" (end)");
        }
        let mut spans = vec![
            Span::styled(
                format!("{:<3}", id),
                Style::default().fg(node_color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("{} ", arrow), Style::default().fg(DEFAULT_THEME.comment)),
        ];
        for neighbor in graph.neighbors(&id) {
            let weight = graph.weight(&id, &neighbor).unwrap_or_default();
            let is_hot = marks
                .hot_edge
                .as_ref()
                .is_some_and(|(from, to)| {
                    (*from == id && *to == neighbor)
                        || (!graph.is_directed() && *from == neighbor && *to == id)
                });
            let style = if is_hot {
                Style::default()
                    .fg(DEFAULT_THEME.comparing)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else if marks.is_chosen(&id, &neighbor) {
                Style::default().fg(DEFAULT_THEME.success)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            spans.push(Span::styled(format!("{}({}) ", neighbor, weight), style));
        }
        spans.push(Span::styled(badge, Style::default().fg(DEFAULT_THEME.secondary)));
        items.push(ListItem::new(Line::from(spans)));
    }
    items
}
