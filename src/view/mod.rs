//! Terminal UI: event loop, key dispatch and rendering.
//!
//! The loop is synchronous: block on the next terminal event, apply it to
//! [`AppState`], redraw. Filtering runs to completion inside the key
//! handler, so a newer keystroke simply replaces the previous result.

pub mod constants;
pub mod help;
pub mod layout;
pub mod results;
pub mod search_input;
pub mod styles;

pub use help::render_help_overlay;
pub use layout::{calculate_areas, render_layout, ScreenAreas};
pub use results::{fit_to_width, render_results, results_title};
pub use search_input::SearchBar;
pub use styles::{ColorConfig, ViewStyles};

use crate::catalog::ScreenKind;
use crate::config::keybindings::KeyBindings;
use crate::state::AppState;
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

/// Startup options for the interactive UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Screen shown first.
    pub screen: ScreenKind,
    /// Initial search field contents.
    pub query: String,
    /// Open with the help overlay visible.
    pub show_help: bool,
    /// Color output setting.
    pub colors: ColorConfig,
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
    styles: ViewStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(options: &RunOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(terminal, options))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (Ctrl+C, or Esc on an empty query).
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Resize(width, height) => {
                    debug!("Handling resize to {}x{}", width, height);
                }
                _ => continue,
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the app on an already initialized terminal.
    ///
    /// Used by [`TuiApp::new`] and by tests running on a `TestBackend`.
    pub fn with_terminal(terminal: Terminal<B>, options: &RunOptions) -> Self {
        let mut app_state = AppState::new(options.screen, &options.query);
        app_state.help_visible = options.show_help;

        info!(
            screen = %options.screen,
            query = %options.query,
            visible = app_state.results().len(),
            "Screen opened"
        );

        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles: ViewStyles::with_color_config(options.colors),
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Special case: Ctrl+C should always quit, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if let Some(action) = self.key_bindings.get(key) {
            debug!(?action, "Key action");
            return self.app_state.apply(action);
        }

        // Unbound printable characters edit the query
        if let KeyCode::Char(ch) = key.code {
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                self.app_state.insert_char(ch);
            }
        }

        false
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            render_layout(frame, state, styles);
        })?;
        Ok(())
    }

    /// Current application state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Underlying terminal, for inspecting the rendered buffer.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit, even when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(options: &RunOptions) -> Result<(), TuiError> {
    let mut app = match TuiApp::new(options) {
        Ok(app) => app,
        Err(err) => {
            // Raw mode may already be on when the alternate screen fails
            let _ = restore_terminal();
            return Err(err);
        }
    };

    let result = app.run();

    restore_terminal()?;

    info!("Terminal restored");
    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves the alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn options(screen: ScreenKind, query: &str) -> RunOptions {
        RunOptions {
            screen,
            query: query.to_string(),
            show_help: false,
            colors: ColorConfig::new(false),
        }
    }

    fn create_test_app(screen: ScreenKind, query: &str) -> TuiApp<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        TuiApp::with_terminal(terminal, &options(screen, query))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn tui_error_from_io_error() {
        let io_err = io::Error::other("test error");
        let tui_err: TuiError = io_err.into();
        assert!(matches!(tui_err, TuiError::Io(_)));
    }

    #[test]
    fn handle_key_ctrl_c_returns_true() {
        let mut app = create_test_app(ScreenKind::Directory, "");
        let should_quit = app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(should_quit, "Ctrl+C should trigger quit");
    }

    #[test]
    fn handle_key_q_types_into_query() {
        let mut app = create_test_app(ScreenKind::Directory, "");
        let should_quit = app.handle_key(key(KeyCode::Char('q')));
        assert!(!should_quit, "'q' is a search character, not quit");
        assert_eq!(app.app_state().input().text(), "q");
    }

    #[test]
    fn shifted_characters_are_typed() {
        let mut app = create_test_app(ScreenKind::Directory, "");
        app.handle_key(KeyEvent::new(KeyCode::Char('F'), KeyModifiers::SHIFT));
        app.handle_key(key(KeyCode::Char('I')));
        assert_eq!(app.app_state().input().text(), "FI");
        assert_eq!(app.app_state().results().len(), 3);
    }

    #[test]
    fn unbound_control_chords_are_ignored() {
        let mut app = create_test_app(ScreenKind::Directory, "");
        let should_quit = app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL));
        assert!(!should_quit);
        assert!(app.app_state().input().is_empty());
    }

    #[test]
    fn esc_on_empty_query_quits() {
        let mut app = create_test_app(ScreenKind::Directory, "");
        assert!(app.handle_key(key(KeyCode::Esc)));
    }

    #[test]
    fn esc_with_query_clears_it_first() {
        let mut app = create_test_app(ScreenKind::Directory, "fire");
        assert!(!app.handle_key(key(KeyCode::Esc)));
        assert!(app.app_state().input().is_empty());
        assert_eq!(app.app_state().results().len(), 9);
    }

    #[test]
    fn tab_switches_screen() {
        let mut app = create_test_app(ScreenKind::Directory, "");
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.app_state().kind(), ScreenKind::Extended);
    }

    #[test]
    fn draw_renders_without_error() {
        let mut app = create_test_app(ScreenKind::Extended, "shelter");
        assert!(app.draw().is_ok(), "Drawing should succeed");
    }

    #[test]
    fn show_help_option_opens_overlay() {
        let terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let mut opts = options(ScreenKind::Directory, "");
        opts.show_help = true;
        let app = TuiApp::with_terminal(terminal, &opts);
        assert!(app.app_state().help_visible);
    }
}
