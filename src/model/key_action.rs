//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
/// Printable characters are not actions: they always edit the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Results navigation
    /// Move the selection up one row. Default: ↑/Ctrl+p
    SelectPrevious,
    /// Move the selection down one row. Default: ↓/Ctrl+n
    SelectNext,
    /// Jump to the first visible row. Default: Page Up
    SelectFirst,
    /// Jump to the last visible row. Default: Page Down
    SelectLast,

    // Query editing
    /// Delete the character before the cursor. Default: Backspace
    DeleteBackward,
    /// Delete the character under the cursor. Default: Delete
    DeleteForward,
    /// Move the cursor one character left. Default: ←
    CursorLeft,
    /// Move the cursor one character right. Default: →
    CursorRight,
    /// Move the cursor to the start of the query. Default: Home/Ctrl+a
    CursorHome,
    /// Move the cursor to the end of the query. Default: End/Ctrl+e
    CursorEnd,
    /// Empty the query, showing every row again. Default: Ctrl+u
    ClearQuery,

    // Screens
    /// Switch to the next resource screen. Default: Tab
    NextScreen,

    // Application
    /// Clear the query, or quit when it is already empty. Default: Esc
    Cancel,
    /// Show or hide the key binding overlay. Default: F1
    Help,
    /// Exit the application. Default: Ctrl+c
    Quit,
}
