//! Main TUI application state and logic

use crate::algorithms::traversal::TraversalKind;
use crate::engine::{AlgorithmKind, Session, VisualizerError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Longest the loop waits for input before checking the step timer again
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Data,
    Structure,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Data => FocusedPane::Structure,
            FocusedPane::Structure => FocusedPane::Data,
        }
    }
}

/// What a line typed into the status bar will be used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Target,
    HeapValue,
    StartNode,
    EndNode,
}

impl InputMode {
    fn prompt(self) -> &'static str {
        match self {
            InputMode::Target => "Search target: ",
            InputMode::HeapValue => "Insert value: ",
            InputMode::StartNode => "Start node: ",
            InputMode::EndNode => "End node (empty for none): ",
        }
    }
}

/// The main application state
pub struct App {
    pub session: Session,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub data_scroll: usize,
    pub structure_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display; the algorithm's own message is shown when empty
    pub status_message: String,

    /// Set when `status_message` reports a refused operation
    pub is_error: bool,

    /// Active line input and what has been typed so far
    pub input: Option<(InputMode, String)>,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(session: Session) -> Self {
        App {
            session,
            focused_pane: FocusedPane::Data,
            data_scroll: 0,
            structure_scroll: 0,
            should_quit: false,
            status_message: String::new(),
            is_error: false,
            input: None,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.session.tick(Instant::now()) && self.session.is_finished() {
                self.notify(String::new());
            }

            // Wake up for the next step or for input, whichever comes first
            let timeout = self
                .session
                .next_tick_in(Instant::now())
                .map_or(POLL_INTERVAL, |wait| wait.min(POLL_INTERVAL));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn is_playing(&self) -> bool {
        self.session.is_running() && !self.session.is_paused() && !self.session.is_finished()
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[0]);

        super::panes::render_data_pane(
            frame,
            columns[0],
            self.session.snapshot(),
            self.session.instance(),
            self.focused_pane == FocusedPane::Data,
            &mut self.data_scroll,
        );

        super::panes::render_structure_pane(
            frame,
            columns[1],
            self.session.snapshot(),
            self.session.instance(),
            self.focused_pane == FocusedPane::Structure,
            &mut self.structure_scroll,
        );

        let prompt = self
            .input
            .as_ref()
            .map(|(mode, typed)| format!("{}{}", mode.prompt(), typed));
        let message = if self.status_message.is_empty() {
            self.session.snapshot().status()
        } else {
            self.status_message.as_str()
        };

        let data = super::panes::StatusRenderData {
            algorithm: self.session.kind().name(),
            message,
            steps: self.session.steps(),
            delay_ms: self.session.delay().as_millis(),
            is_playing: self.is_playing(),
            is_finished: self.session.is_finished(),
            is_error: self.is_error,
            input: prompt.as_deref(),
            is_heap: self.session.kind() == AlgorithmKind::HeapOperations,
        };
        super::panes::render_status_bar(frame, main_chunks[1], &data);
    }

    /// Show `message` in the status bar, or the algorithm's message when empty
    fn notify(&mut self, message: String) {
        self.status_message = message;
        self.is_error = false;
    }

    fn report(&mut self, result: Result<(), VisualizerError>) {
        if let Err(err) = result {
            log::warn!("{}", err);
            self.status_message = err.to_string();
            self.is_error = true;
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.input.is_some() {
            self.handle_input_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let result = self.session.run_to_completion(n);
                match result {
                    Ok(stepped) => self.notify(format!("Stepped forward {} step(s)", stepped)),
                    Err(err) => self.report(Err(err)),
                }
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                if self.session.step_back() {
                    self.notify(String::new());
                } else {
                    self.notify(String::from("Already at the first step"));
                }
            }
            KeyCode::Right => {
                self.notify(String::new());
                let result = self.session.step().map(|_| ());
                self.report(result);
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Data => self.data_scroll = self.data_scroll.saturating_sub(1),
                FocusedPane::Structure => {
                    self.structure_scroll = self.structure_scroll.saturating_sub(1)
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Data => self.data_scroll = self.data_scroll.saturating_add(1),
                FocusedPane::Structure => {
                    self.structure_scroll = self.structure_scroll.saturating_add(1)
                }
            },
            KeyCode::Char(' ') => {
                // Toggle playback (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    if self.is_playing() {
                        self.session.pause();
                        self.notify(String::from("Paused"));
                    } else {
                        self.notify(String::new());
                        let result = self.session.play();
                        self.report(result);
                    }
                }
            }
            KeyCode::Char('r') => {
                self.notify(String::from("New instance"));
                let result = self.session.reset();
                self.report(result);
            }
            KeyCode::Enter => {
                self.notify(String::from("Restarted"));
                let result = self.session.restart();
                self.report(result);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                // Faster means a shorter delay between steps
                let delay = self.session.delay() / 2;
                self.session.set_delay(delay);
                self.notify(format!("Delay {}ms", self.session.delay().as_millis()));
            }
            KeyCode::Char('-') => {
                let delay = self.session.delay() * 2;
                self.session.set_delay(delay);
                self.notify(format!("Delay {}ms", self.session.delay().as_millis()));
            }
            KeyCode::Char('o') if self.session.kind() == AlgorithmKind::TreeTraversal => {
                let next = match self.session.config().traversal {
                    TraversalKind::Inorder => TraversalKind::Preorder,
                    TraversalKind::Preorder => TraversalKind::Postorder,
                    TraversalKind::Postorder => TraversalKind::Bfs,
                    TraversalKind::Bfs => TraversalKind::Inorder,
                };
                self.notify(next.name().to_string());
                let result = self.session.set_traversal(next);
                self.report(result);
            }
            KeyCode::Char('t') if self.session.kind().is_search() => {
                let typed = self.session.target_input().to_string();
                self.input = Some((InputMode::Target, typed));
            }
            KeyCode::Char('s') if self.session.kind().is_graph() => {
                self.input = Some((InputMode::StartNode, String::new()));
            }
            KeyCode::Char('e') if self.session.kind() == AlgorithmKind::Dijkstra => {
                self.input = Some((InputMode::EndNode, String::new()));
            }
            KeyCode::Char('i') if self.session.kind() == AlgorithmKind::HeapOperations => {
                match self.session.insert_random() {
                    Ok(value) => self.notify(format!("Inserting {}", value)),
                    Err(err) => self.report(Err(err)),
                }
            }
            KeyCode::Char('I') if self.session.kind() == AlgorithmKind::HeapOperations => {
                self.input = Some((InputMode::HeapValue, String::new()));
            }
            KeyCode::Char('x') if self.session.kind() == AlgorithmKind::HeapOperations => {
                match self.session.extract() {
                    Ok(value) => self.notify(format!("Extracted {}", value)),
                    Err(err) => self.report(Err(err)),
                }
            }
            KeyCode::Char('b') if self.session.kind() == AlgorithmKind::HeapOperations => {
                match self.session.build_random() {
                    Ok(count) => self.notify(format!("Building heap from {} values", count)),
                    Err(err) => self.report(Err(err)),
                }
            }
            _ => {}
        }
    }

    /// Keys while a line of input is being typed
    fn handle_input_key(&mut self, key: KeyEvent) {
        let Some((mode, mut typed)) = self.input.take() else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.notify(String::from("Cancelled")),
            KeyCode::Enter => self.submit_input(mode, typed.trim()),
            KeyCode::Backspace => {
                typed.pop();
                self.input = Some((mode, typed));
            }
            KeyCode::Char(c) => {
                typed.push(c);
                self.input = Some((mode, typed));
            }
            _ => self.input = Some((mode, typed)),
        }
    }

    fn submit_input(&mut self, mode: InputMode, typed: &str) {
        self.notify(String::new());
        let result = match mode {
            InputMode::Target => self.session.set_target(typed),
            InputMode::StartNode => self.session.set_start_node(&typed.to_uppercase()),
            InputMode::EndNode => {
                let end = typed.to_uppercase();
                self.session
                    .set_end_node(Some(end.as_str()).filter(|id| !id.is_empty()))
            }
            InputMode::HeapValue => match typed.parse::<i64>() {
                Ok(value) => self.session.insert(value),
                Err(_) => Err(VisualizerError::InvalidConfig {
                    message: format!("'{}' is not a number", typed),
                }),
            },
        };
        self.report(result);
    }
}
