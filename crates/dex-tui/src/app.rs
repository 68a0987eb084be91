//! Application state, focus routing and the frame loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. The catalog arrives on a
//! oneshot channel that the loop polls between frames; until then the
//! session stays in its loading state.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent, Direction, Keymap},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        detail::DetailPane,
        help::HelpPopup,
        query_bar::{QueryBar, QueryBarState},
        results::{ResultsList, ResultsState},
        status_bar::{CatalogStatus, StatusBar},
    },
};
use crossterm::{
    event::{self as ct_event, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dex_catalog::{CatalogError, CatalogSource};
use dex_core::{config::Config, Entity, Session};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{io, time::Duration};
use tokio::sync::oneshot::{self, error::TryRecvError};

/// Receiving end of a background catalog load.
pub type CatalogFeed = oneshot::Receiver<dex_catalog::Result<Vec<Entity>>>;

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    QueryBar,
    Results,
    /// The `:` command line owns the keyboard.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub session: Session,
    pub query: QueryBarState,
    pub results: ResultsState,
    pub focus: Focus,
    /// Where focus returns once the command bar closes.
    pub prev_focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub keymap: Keymap,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub quit: bool,
    /// Shown in the status bar while the catalog loads.
    pub source_label: String,
}

impl AppState {
    /// Push the query bar text into the session and start the selection over.
    pub fn sync_query(&mut self) {
        self.session.set_query(self.query.input.clone());
        self.results.reset();
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
    pending: Option<CatalogFeed>,
}

impl App {
    /// Build the shell around `session`. Fails when a configured keybinding
    /// cannot be parsed.
    pub fn new(session: Session, config: Config, theme: Theme) -> anyhow::Result<Self> {
        let keymap = Keymap::from_config(&config.keybindings)?;
        let query = QueryBarState::with_input(session.query());
        let source_label = config.catalog.source.clone();

        let state = AppState {
            session,
            query,
            results: ResultsState::default(),
            focus: Focus::QueryBar,
            prev_focus: Focus::QueryBar,
            theme,
            config,
            keymap,
            show_help: false,
            command_bar: CommandBarState::default(),
            quit: false,
            source_label,
        };

        Ok(App { state, pending: None })
    }

    /// Wait for the catalog on `feed` while the UI is already running.
    pub fn loading_from(mut self, source: &CatalogSource, feed: CatalogFeed) -> Self {
        self.state.source_label = source.to_string();
        self.pending = Some(feed);
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Take over the terminal until the user quits, then hand it back.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Restore the terminal whatever the loop returned
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            self.poll_catalog();

            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Text widgets get the insert-mode keymap
                        let app_event = if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            self.state.keymap.to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = self.state.keymap.to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Move the catalog into the session once the loader has delivered it.
    ///
    /// A failed or abandoned load leaves the session in its loading state.
    pub fn poll_catalog(&mut self) {
        let Some(feed) = self.pending.as_mut() else {
            return;
        };
        match feed.try_recv() {
            Err(TryRecvError::Empty) => return,
            Ok(Ok(catalog)) => self.state.session.set_catalog(catalog),
            Ok(Err(e)) => {
                tracing::debug!(error = %e, "catalog unavailable, staying in loading state");
            }
            Err(TryRecvError::Closed) => {
                tracing::error!(error = %CatalogError::Cancelled, "catalog unavailable");
            }
        }
        self.pending = None;
    }

    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // While help is open only the close keys do anything.
        if s.show_help {
            let help_key =
                matches!(event, AppEvent::Char(c) if s.keymap.help == KeyCode::Char(c));
            if help_key || matches!(event, AppEvent::Help | AppEvent::Escape | AppEvent::Quit) {
                tracing::debug!("help popup closed");
                s.show_help = false;
            }
            return;
        }

        // The command bar swallows every key while open.
        if s.focus == Focus::Command {
            match event {
                AppEvent::Quit => s.quit = true,
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                AppEvent::Enter => {
                    let input = s.command_bar.input.clone();
                    match Command::parse(&input) {
                        Ok(cmd) => {
                            tracing::debug!(command = ?cmd, "executing command");
                            s.focus = s.prev_focus;
                            match execute_command(s, cmd) {
                                Ok(()) => s.command_bar.clear(),
                                Err(msg) => {
                                    // Keep the bar open to show the error
                                    s.command_bar.error = Some(msg);
                                    s.focus = Focus::Command;
                                }
                            }
                        }
                        Err(msg) if msg.is_empty() => {
                            // Empty input closes the bar
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                        }
                        Err(msg) => {
                            // Keep the bar open with the error shown
                            s.command_bar.error = Some(msg);
                        }
                    }
                }
                other => s.command_bar.handle(&other),
            }
            return;
        }

        match event {
            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            AppEvent::Help => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            AppEvent::Command => {
                tracing::debug!(prev_focus = ?s.focus, "entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            // The checkbox works from every pane
            AppEvent::ToggleStrength => {
                s.session.toggle_mode();
                s.results.reset();
            }

            AppEvent::Escape => {
                if s.focus == Focus::QueryBar {
                    tracing::debug!("focus: QueryBar -> Results");
                    s.focus = Focus::Results;
                }
            }

            // Enter confirms the search and moves into the results
            AppEvent::Enter if s.focus == Focus::QueryBar => {
                tracing::debug!("focus: QueryBar -> Results");
                s.focus = Focus::Results;
            }

            AppEvent::FocusNext => {
                let next = match s.focus {
                    Focus::QueryBar => Focus::Results,
                    Focus::Results | Focus::Command => Focus::QueryBar,
                };
                tracing::debug!(from = ?s.focus, to = ?next, "focus cycle");
                s.focus = next;
            }

            AppEvent::QueryFocus => {
                tracing::debug!("focus -> QueryBar");
                s.focus = Focus::QueryBar;
            }

            // ratatui re-lays out on the next draw
            AppEvent::Resize(_, _) => {}

            // Typing from the results pane starts editing the query
            AppEvent::Char(_) | AppEvent::Backspace | AppEvent::ClearInput
                if s.focus == Focus::Results =>
            {
                tracing::debug!("focus: Results -> QueryBar (typing)");
                s.focus = Focus::QueryBar;
                dispatch_to_focused(s, event);
            }

            other => dispatch_to_focused(s, other),
        }
    }
}

/// Whether letters typed now are text rather than shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::QueryBar | Focus::Command)
}

/// Hand an unclaimed event to whichever pane has focus.
fn dispatch_to_focused(s: &mut AppState, event: AppEvent) {
    match (s.focus, &event) {
        // Up/down always move through the hits, even while typing
        (_, AppEvent::Nav(Direction::Up | Direction::Down)) => s.results.handle(&event),
        (Focus::QueryBar, _) => {
            if s.query.handle(&event) {
                s.sync_query();
            }
        }
        (Focus::Results, _) => s.results.handle(&event),
        (Focus::Command, _) => {} // handled before dispatch, should not reach here
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let view = state.session.view();
    let hits = view.hits();

    // Vertical: 3-line query bar | body | 1-line status bar
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(area);

    // Horizontal body split: results | details
    let pct = state.config.ui.detail_pane_width_pct.min(80);
    let horiz = Layout::default()
        .direction(LayoutDir::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Percentage(pct)])
        .split(vert[1]);

    let by_strength = state.session.mode().is_strength();
    frame.render_widget(
        QueryBar::new(&state.query, by_strength, state.focus == Focus::QueryBar, &state.theme),
        vert[0],
    );
    frame.render_widget(
        ResultsList::new(
            &view,
            &state.results,
            state.focus == Focus::Results,
            state.config.ui.show_strength,
            &state.theme,
        ),
        horiz[0],
    );
    frame.render_widget(
        DetailPane::new(
            hits,
            state.results.selected_in(hits.len()),
            state.session.mode(),
            &state.theme,
        ),
        horiz[1],
    );

    let catalog = match state.session.catalog() {
        Some(entities) => CatalogStatus::Loaded { count: entities.len() },
        None => CatalogStatus::Loading { source: &state.source_label },
    };
    frame.render_widget(
        StatusBar::new(catalog, state.session.mode(), &state.keymap, &state.theme),
        vert[2],
    );

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.keymap, &state.theme), area);
    }

    // The command bar is drawn over the status line
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom() - 1, height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return;
    }

    // Caret for the query input
    if state.focus == Focus::QueryBar {
        let qb = QueryBar::new(&state.query, by_strength, true, &state.theme);
        let (cx, cy) = qb.cursor_position(vert[0]);
        frame.set_cursor_position((cx, cy));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
