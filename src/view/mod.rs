//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod detail_modal;
mod help;
pub(crate) mod helpers;
mod layout;
mod search_input;
mod status_bar;
pub mod styles;
mod table;

pub use detail_modal::render_detail_modal;
pub use help::render_help_overlay;
pub use layout::{render_layout, RenderOptions};
pub use search_input::SearchBar;
pub use status_bar::build_status_text;
pub use styles::{ColorConfig, TableStyles};
pub use table::render_comment_table;

use crate::config::keybindings::KeyBindings;
use crate::controller::QueryController;
use crate::model::KeyAction;
use crate::state::{
    search_input_handler, step_page_size, AppState, SearchOrigin, ViewEvent, ViewState,
};
use constants::TICK_INTERVAL;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    controller: QueryController,
    options: RenderOptions,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        controller: QueryController,
        initial_view: ViewState,
        options: RenderOptions,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(
            terminal,
            AppState::new(initial_view),
            KeyBindings::default(),
            controller,
            options,
        ))
    }

    /// Run the main event loop
    ///
    /// Issues the initial load, then alternates between key handling and
    /// draining finished requests until the user quits (q or Ctrl+C).
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.dispatch(ViewEvent::Init);
        self.draw()?;

        loop {
            let mut dirty = false;

            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        if self.handle_key(key) {
                            info!("Quit requested");
                            return Ok(());
                        }
                        dirty = true;
                    }
                    Event::Resize(width, height) => {
                        debug!("Handling resize to {}x{}", width, height);
                        dirty = true;
                    }
                    _ => {}
                }
            }

            if self.drain_completions() {
                dirty = true;
            }

            if dirty {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        controller: QueryController,
        options: RenderOptions,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            controller,
            options,
        }
    }

    /// Run the reducer and hand any resulting request to the controller.
    fn dispatch(&mut self, event: ViewEvent) {
        if let Some(ticket) = self.app_state.dispatch(event) {
            self.controller.issue(ticket);
        }
    }

    /// Feed every finished request through the reducer.
    ///
    /// Returns true if anything arrived.
    fn drain_completions(&mut self) -> bool {
        let mut any = false;
        while let Some(completion) = self.controller.try_next_completion() {
            any = true;
            if self.app_state.view().latest_request() != Some(completion.seq) {
                debug!(seq = %completion.seq, query = %completion.query, "Dropping stale response");
            }
            self.dispatch(completion.into_event());
        }
        any
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, whatever has focus
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Detail modal swallows everything except its close keys
        if self.app_state.detail_open() {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')
            ) {
                self.dispatch(ViewEvent::CloseDetail);
            }
            return false;
        }

        if key.code == KeyCode::Esc && self.app_state.help_visible {
            self.app_state.help_visible = false;
            return false;
        }

        if self.app_state.search_input.is_typing() {
            self.handle_search_key(key);
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false; // Unknown key, ignore
        };

        if self.app_state.help_visible && !action.allowed_over_help() {
            return false;
        }

        self.apply_action(action)
    }

    /// Keys while the search input is open. Never quits.
    fn handle_search_key(&mut self, key: KeyEvent) {
        let input = std::mem::take(&mut self.app_state.search_input);
        self.app_state.search_input = match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                search_input_handler::reset_input(input)
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                search_input_handler::handle_char_input(input, ch)
            }
            KeyCode::Backspace => search_input_handler::handle_backspace(input),
            KeyCode::Left => search_input_handler::handle_cursor_left(input),
            KeyCode::Right => search_input_handler::handle_cursor_right(input),
            KeyCode::Esc => search_input_handler::cancel_search(input),
            KeyCode::Enter => {
                let (input, submitted) = search_input_handler::submit_search(input);
                if let Some((text, origin)) = submitted {
                    info!(?origin, text = %text, "Search submitted");
                    self.dispatch(ViewEvent::SubmitSearch { text, origin });
                }
                input
            }
            _ => input,
        };
    }

    /// Apply a bound action. Returns true on quit.
    fn apply_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::CursorUp => self.dispatch(ViewEvent::CursorUp),
            KeyAction::CursorDown => self.dispatch(ViewEvent::CursorDown),
            KeyAction::NextPage => self.dispatch(ViewEvent::NextPage),
            KeyAction::PrevPage => self.dispatch(ViewEvent::PrevPage),
            KeyAction::FirstPage => self.dispatch(ViewEvent::FirstPage),
            KeyAction::LastPage => self.dispatch(ViewEvent::LastPage),
            KeyAction::GrowPageSize | KeyAction::ShrinkPageSize => {
                let current = self.app_state.view().page_size();
                let next = step_page_size(current, action == KeyAction::GrowPageSize);
                if next != current {
                    self.dispatch(ViewEvent::SetPageSize(next));
                }
            }
            KeyAction::StartSearch => self.open_search(SearchOrigin::SearchBox),
            KeyAction::StartColumnFilter => self.open_search(SearchOrigin::ColumnFilter),
            KeyAction::ClearSearch => self.dispatch(ViewEvent::ClearSearch),
            KeyAction::OpenDetail => self.dispatch(ViewEvent::OpenDetail),
            KeyAction::Refresh => self.dispatch(ViewEvent::Refresh),
            KeyAction::Help => self.app_state.toggle_help(),
            KeyAction::Quit => return true,
        }
        false
    }

    /// Open the search input pre-filled with the active filter.
    fn open_search(&mut self, origin: SearchOrigin) {
        let prefill = self
            .app_state
            .view()
            .mode()
            .filter()
            .map(|f| f.as_str().to_string())
            .unwrap_or_default();
        let input = std::mem::take(&mut self.app_state.search_input);
        self.app_state.search_input =
            search_input_handler::activate_search_input(input, origin, &prefill);
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let options = &self.options;
        self.terminal
            .draw(|frame| render_layout(frame, state, options))?;
        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without touching the real terminal.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        initial_view: ViewState,
        controller: QueryController,
    ) -> Self {
        let options = RenderOptions {
            styles: TableStyles::with_color_config(ColorConfig::new(false)),
            debug_status: true,
        };
        Self::with_terminal(
            terminal,
            AppState::new(initial_view),
            KeyBindings::default(),
            controller,
            options,
        )
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn controller(&self) -> &QueryController {
        &self.controller
    }

    pub(crate) fn dispatch_test(&mut self, event: ViewEvent) {
        self.dispatch(event)
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    pub(crate) fn drain_completions_test(&mut self) -> bool {
        self.drain_completions()
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application.
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// even if the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_app(
    controller: QueryController,
    initial_view: ViewState,
    options: RenderOptions,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(controller, initial_view, options)?;

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
