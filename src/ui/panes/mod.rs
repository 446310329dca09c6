//! TUI pane rendering modules
//!
//! Every pane reads the session's current state and never changes it.
//!
//! # Pane Modules
//!
//! - [`array`]: working data of the algorithm (array bars, distances, queues)
//! - [`structure`]: tree, heap or graph shape with per-node highlights
//! - [`status`]: status bar with keybindings and playback state

pub mod array;
pub mod status;
pub mod structure;

pub use array::render_data_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use structure::render_structure_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

/// Bordered block whose border brightens when focused
fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 0, 0, 0))
}

/// Render `items` inside `block`, clamping the scroll offset to the content
fn render_scrolled(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    items: Vec<ListItem>,
    scroll_offset: &mut usize,
) {
    let total_items = items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    if total_items > visible_height {
        *scroll_offset = (*scroll_offset).min(total_items - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}

fn placeholder(text: &str) -> ListItem<'_> {
    ListItem::new(text).style(Style::default().fg(DEFAULT_THEME.comment))
}
