//! Application state for the terminal UI.
//!
//! Pure state transitions only: nothing here touches the terminal. The
//! view layer reads this state to render and feeds key actions back in.

pub mod results;
pub mod search_input;

pub use results::ResultsList;
pub use search_input::SearchInput;

use crate::catalog::{RowHandle, ScreenKind};
use crate::filter::SearchScreen;
use crate::model::KeyAction;
use tracing::info;

/// Everything the UI needs to draw one frame.
///
/// Invariant: the screen's query always equals the search field text,
/// and `results` holds the rows for that query.
#[derive(Debug, Clone)]
pub struct AppState {
    kind: ScreenKind,
    screen: SearchScreen<RowHandle>,
    input: SearchInput,
    results: ResultsList,
    /// Whether the key binding overlay is shown.
    pub help_visible: bool,
}

impl AppState {
    /// Open `kind` with the search field pre-filled with `query`.
    pub fn new(kind: ScreenKind, query: &str) -> Self {
        let mut state = Self {
            kind,
            screen: kind.build(),
            input: SearchInput::with_text(query),
            results: ResultsList::default(),
            help_visible: false,
        };
        state.apply_query();
        state
    }

    /// Screen currently shown.
    pub fn kind(&self) -> ScreenKind {
        self.kind
    }

    /// Search session of the active screen.
    pub fn screen(&self) -> &SearchScreen<RowHandle> {
        &self.screen
    }

    /// Search field contents and cursor.
    pub fn input(&self) -> &SearchInput {
        &self.input
    }

    /// Rows visible for the current query.
    pub fn results(&self) -> &ResultsList {
        &self.results
    }

    /// Number of rows on the active screen, ignoring the query.
    pub fn total_rows(&self) -> usize {
        self.screen.list().len()
    }

    /// Type a character into the search field.
    pub fn insert_char(&mut self, ch: char) {
        self.input.insert(ch);
        self.apply_query();
    }

    /// Replace the active screen with a fresh session of `kind`.
    ///
    /// Each screen owns its own search field, so the query starts empty.
    pub fn switch_screen(&mut self, kind: ScreenKind) {
        info!(from = %self.kind, to = %kind, "Switching screen");
        self.kind = kind;
        self.screen = kind.build();
        self.input = SearchInput::default();
        self.results = ResultsList::default();
        self.apply_query();
    }

    /// Apply a key action. Returns `true` when the application should quit.
    pub fn apply(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::SelectPrevious => self.results.select_previous(),
            KeyAction::SelectNext => self.results.select_next(),
            KeyAction::SelectFirst => self.results.select_first(),
            KeyAction::SelectLast => self.results.select_last(),
            KeyAction::DeleteBackward => {
                if self.input.backspace() {
                    self.apply_query();
                }
            }
            KeyAction::DeleteForward => {
                if self.input.delete() {
                    self.apply_query();
                }
            }
            KeyAction::CursorLeft => self.input.move_left(),
            KeyAction::CursorRight => self.input.move_right(),
            KeyAction::CursorHome => self.input.move_home(),
            KeyAction::CursorEnd => self.input.move_end(),
            KeyAction::ClearQuery => {
                if self.input.clear() {
                    self.apply_query();
                }
            }
            KeyAction::NextScreen => self.switch_screen(self.kind.next()),
            KeyAction::Cancel => {
                if self.help_visible {
                    self.help_visible = false;
                } else if self.input.is_empty() {
                    return true;
                } else if self.input.clear() {
                    self.apply_query();
                }
            }
            KeyAction::Help => self.help_visible = !self.help_visible,
            KeyAction::Quit => return true,
        }
        false
    }

    fn apply_query(&mut self) {
        self.screen.set_query(self.input.text(), &mut self.results);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ScreenKind::default(), "")
    }
}
