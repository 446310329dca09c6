//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus, line input
//!   for search targets, heap values and graph endpoints
//! - **[`panes`]**: stateless render functions for each visible pane (data,
//!   structure, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Session`] and
//! call [`App::run`] to start the event loop. The loop sleeps until the next
//! key press or the session's next scheduled step.
//!
//! [`Session`]: crate::engine::Session
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
