//! Data pane: the working values of the running algorithm
//!
//! Sorts draw one horizontal bar per element, searches mark the probe and
//! the remaining window, graph algorithms list their per-node tables.

use super::{pane_block, placeholder, render_scrolled};
use crate::algorithms::graph::{
    format_distance, BellmanFordState, DijkstraState, KruskalState, TopologicalState,
};
use crate::algorithms::heap::HeapState;
use crate::algorithms::search::{BinarySearch, LinearSearch, SearchOutcome};
use crate::algorithms::sorting::SortView;
use crate::algorithms::traversal::TraversalState;
use crate::algorithms::AlgorithmState;
use crate::model::tree::Tree;
use crate::model::{GraphProblem, ProblemInstance, SearchProblem};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
    Frame,
};

/// Render the data pane for whatever algorithm `state` holds
pub fn render_data_pane(
    frame: &mut Frame,
    area: Rect,
    state: &AlgorithmState,
    instance: &ProblemInstance,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let content_width = area.width.saturating_sub(3) as usize; // borders + padding

    let (title, items) = match (state, instance) {
        (AlgorithmState::Sort(sort), _) => (" Array ", sort_items(sort.view(), content_width)),
        (AlgorithmState::LinearSearch(search), ProblemInstance::Search(problem)) => {
            (" Linear Search ", linear_items(search, problem))
        }
        (AlgorithmState::BinarySearch(search), ProblemInstance::Search(problem)) => {
            (" Binary Search ", binary_items(search, problem))
        }
        (AlgorithmState::Traversal(traversal), ProblemInstance::Tree(tree)) => {
            (" Traversal ", traversal_items(traversal, tree))
        }
        (AlgorithmState::Heap(heap), _) => (" Heap Array ", heap_items(heap)),
        (AlgorithmState::Dijkstra(dijkstra), ProblemInstance::Graph(problem)) => {
            (" Distances ", dijkstra_items(dijkstra, problem))
        }
        (AlgorithmState::BellmanFord(bellman), ProblemInstance::Graph(problem)) => {
            (" Distances ", bellman_ford_items(bellman, problem))
        }
        (AlgorithmState::Kruskal(kruskal), _) => (" Sorted Edges ", kruskal_items(kruskal)),
        (AlgorithmState::Topological(topo), _) => (" In-degrees ", topological_items(topo)),
        _ => (" Data ", vec![placeholder("(nothing to show)")]),
    };

    render_scrolled(frame, area, pane_block(title, is_focused), items, scroll_offset);
}

fn plain(text: String) -> ListItem<'static> {
    ListItem::new(text).style(Style::default().fg(DEFAULT_THEME.fg))
}

fn heading(text: &str) -> ListItem<'static> {
    ListItem::new(text.to_string()).style(
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    )
}

fn sort_items(view: &SortView, content_width: usize) -> Vec<ListItem<'static>> {
    if view.is_empty() {
        return vec![placeholder("(empty array)")];
    }
    let max = view.values.iter().copied().max().unwrap_or(1).max(1);
    let bar_room = content_width.saturating_sub(10).max(1);

    view.values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let color = if view.swapping.contains(&index) {
                DEFAULT_THEME.swapping
            } else if view.comparing.contains(&index) {
                DEFAULT_THEME.comparing
            } else if view.sorted.contains(&index) {
                DEFAULT_THEME.success
            } else {
                DEFAULT_THEME.primary
            };
            let len = ((value.max(0) as usize) * bar_room / max as usize).max(1);
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>3} {:>4} ", index, value),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled("█".repeat(len), Style::default().fg(color)),
            ]))
        })
        .collect()
}

fn search_line(index: usize, value: i64, color: Color, tag: &str) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(format!("[{:>2}] ", index), Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(format!("{:>4}", value), Style::default().fg(color)),
        Span::styled(format!("  {}", tag), Style::default().fg(DEFAULT_THEME.secondary)),
    ]))
}

fn target_heading(problem: &SearchProblem) -> ListItem<'static> {
    match problem.target {
        Some(target) => heading(&format!("Target: {}", target)),
        None => ListItem::new("Target: (enter a number with t)")
            .style(Style::default().fg(DEFAULT_THEME.error)),
    }
}

fn linear_items(search: &LinearSearch, problem: &SearchProblem) -> Vec<ListItem<'static>> {
    let mut items = vec![target_heading(problem)];
    for (index, &value) in problem.values.iter().enumerate() {
        let (color, tag) = match search.outcome {
            SearchOutcome::Found(found) if found == index => (DEFAULT_THEME.success, "found"),
            _ if search.current == Some(index) => (DEFAULT_THEME.comparing, "checking"),
            _ if search.current.is_some_and(|current| index < current) => {
                (DEFAULT_THEME.comment, "")
            }
            _ => (DEFAULT_THEME.fg, ""),
        };
        items.push(search_line(index, value, color, tag));
    }
    items
}

fn binary_items(search: &BinarySearch, problem: &SearchProblem) -> Vec<ListItem<'static>> {
    let mut items = vec![target_heading(problem)];
    let window = search.window();
    for (index, &value) in problem.values.iter().enumerate() {
        let mut tags = Vec::new();
        if window.start == index && !window.is_empty() {
            tags.push("low");
        }
        if window.end == index + 1 && !window.is_empty() {
            tags.push("high");
        }
        if search.mid == Some(index) {
            tags.push("mid");
        }
        let color = match search.outcome {
            SearchOutcome::Found(found) if found == index => DEFAULT_THEME.success,
            _ if search.mid == Some(index) => DEFAULT_THEME.comparing,
            _ if window.contains(&index) => DEFAULT_THEME.fg,
            _ => DEFAULT_THEME.comment,
        };
        items.push(search_line(index, value, color, &tags.join(" ")));
    }
    items
}

fn value_list(tree: &Tree, ids: impl Iterator<Item = usize>) -> String {
    let values: Vec<String> = ids
        .filter_map(|id| tree.value(id))
        .map(|value| value.to_string())
        .collect();
    if values.is_empty() {
        String::from("(empty)")
    } else {
        values.join(", ")
    }
}

fn traversal_items(traversal: &TraversalState, tree: &Tree) -> Vec<ListItem<'static>> {
    let output: Vec<String> = traversal.output.iter().map(|v| v.to_string()).collect();
    vec![
        heading(traversal.kind.name()),
        plain(format!("Visited: {}", output.join(" → "))),
        plain(format!(
            "Stack:   {}",
            value_list(tree, traversal.stack.iter().copied())
        )),
        plain(format!(
            "Queue:   {}",
            value_list(tree, traversal.queue.iter().copied())
        )),
        plain(format!(
            "Current: {}",
            traversal
                .current
                .and_then(|id| tree.value(id))
                .map_or_else(|| String::from("null"), |v| v.to_string())
        )),
    ]
}

fn heap_items(heap: &HeapState) -> Vec<ListItem<'static>> {
    let mut items = vec![heading(&format!(
        "{} ({}/{})",
        heap.kind.name(),
        heap.len(),
        heap.capacity
    ))];
    if heap.is_empty() {
        items.push(placeholder("(empty heap)"));
    }
    for (index, &value) in heap.items.iter().enumerate() {
        let color = if heap.swapping.contains(&index) {
            DEFAULT_THEME.swapping
        } else if heap.comparing.contains(&index) {
            DEFAULT_THEME.comparing
        } else {
            DEFAULT_THEME.fg
        };
        items.push(search_line(index, value, color, ""));
    }
    if !heap.pending.is_empty() {
        let pending: Vec<String> = heap.pending.iter().map(|v| v.to_string()).collect();
        items.push(plain(format!("Pending: {}", pending.join(", "))));
    }
    if let Some(extracted) = heap.last_extracted {
        items.push(plain(format!("Last extracted: {}", extracted)));
    }
    items
}

fn distance_line(
    id: &str,
    distance: Option<i64>,
    previous: Option<&String>,
    color: Color,
) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{:<3}", id),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:>6}", format_distance(distance)),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        Span::styled(
            format!("   via {}", previous.map_or("-", String::as_str)),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ]))
}

fn dijkstra_items(state: &DijkstraState, problem: &GraphProblem) -> Vec<ListItem<'static>> {
    let mut items = vec![heading(&format!(
        "Start {}  End {}",
        problem.start.as_deref().unwrap_or("-"),
        problem.end.as_deref().unwrap_or("(all)")
    ))];
    for id in problem.graph.node_ids() {
        let color = if state.current.as_ref() == Some(&id) {
            DEFAULT_THEME.comparing
        } else if state.path().contains(&id) {
            DEFAULT_THEME.success
        } else if state.visited.contains(&id) {
            DEFAULT_THEME.visited
        } else {
            DEFAULT_THEME.fg
        };
        items.push(distance_line(&id, state.distance(&id), state.previous.get(&id), color));
    }
    let queue: Vec<String> = state
        .queue
        .iter()
        .map(|(id, distance)| format!("{}:{}", id, distance))
        .collect();
    items.push(plain(format!("Queue: [{}]", queue.join(", "))));
    if !state.path().is_empty() {
        items.push(plain(format!("Path: {}", state.path().join(" → "))));
    }
    items
}

fn bellman_ford_items(state: &BellmanFordState, problem: &GraphProblem) -> Vec<ListItem<'static>> {
    let mut items = vec![heading(&format!(
        "Start {}  Iteration {}",
        problem.start.as_deref().unwrap_or("-"),
        state.iteration
    ))];
    let cycle = state.negative_cycle().unwrap_or(&[]);
    for id in problem.graph.node_ids() {
        let color = if cycle.contains(&id) {
            DEFAULT_THEME.error
        } else if state
            .highlight
            .as_ref()
            .is_some_and(|(from, to)| *from == id || *to == id)
        {
            DEFAULT_THEME.comparing
        } else {
            DEFAULT_THEME.fg
        };
        items.push(distance_line(&id, state.distance(&id), state.predecessors.get(&id), color));
    }
    if !cycle.is_empty() {
        items.push(
            ListItem::new(format!("Negative cycle: {}", cycle.join(" → ")))
                .style(Style::default().fg(DEFAULT_THEME.error)),
        );
    }
    items
}

fn kruskal_items(state: &KruskalState) -> Vec<ListItem<'static>> {
    let mut items = vec![heading(&format!(
        "MST edges {}  total weight {}",
        state.mst.len(),
        state.total_weight()
    ))];
    for (index, edge) in state.edges.iter().enumerate() {
        let (color, tag) = if state.highlight.as_ref() == Some(edge) {
            (DEFAULT_THEME.comparing, "considering")
        } else if state.mst.contains(edge) {
            (DEFAULT_THEME.success, "in tree")
        } else if index < state.edge_index {
            (DEFAULT_THEME.comment, "discarded")
        } else {
            (DEFAULT_THEME.fg, "")
        };
        items.push(
            ListItem::new(format!("{} ↔ {}  {:>3}  {}", edge.from, edge.to, edge.weight, tag))
                .style(Style::default().fg(color)),
        );
    }
    items
}

fn topological_items(state: &TopologicalState) -> Vec<ListItem<'static>> {
    let mut items = Vec::new();
    for (id, degree) in &state.in_degrees {
        let color = if state.current.as_ref() == Some(id) {
            DEFAULT_THEME.comparing
        } else if state.order.contains(id) {
            DEFAULT_THEME.success
        } else if state.cycle_nodes.contains(id) {
            DEFAULT_THEME.error
        } else {
            DEFAULT_THEME.fg
        };
        items.push(
            ListItem::new(format!("{:<3} {:>2}", id, degree)).style(Style::default().fg(color)),
        );
    }
    let queue: Vec<&str> = state.queue.iter().map(String::as_str).collect();
    items.push(plain(format!("Queue: [{}]", queue.join(", "))));
    items.push(plain(format!("Order: {}", state.order.join(" → "))));
    if state.has_cycle() {
        items.push(
            ListItem::new(format!("Cycle nodes: {}", state.cycle_nodes.join(", ")))
                .style(Style::default().fg(DEFAULT_THEME.error)),
        );
    }
    items
}
