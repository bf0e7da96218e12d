//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Table cursor
    /// Move the row highlight up. Default: k/↑
    CursorUp,
    /// Move the row highlight down. Default: j/↓
    CursorDown,

    // Pagination
    /// Fetch the next page. Default: n/l/→/Page Down
    NextPage,
    /// Fetch the previous page. Default: p/h/←/Page Up
    PrevPage,
    /// Jump to page 1. Default: g/Home
    FirstPage,
    /// Jump to the last page reported by the server. Default: G/End
    LastPage,
    /// Switch to the next larger page size. Default: +
    GrowPageSize,
    /// Switch to the next smaller page size. Default: -
    ShrinkPageSize,

    // Search
    /// Open the top-level email search box. Default: /
    StartSearch,
    /// Open the email column filter. Default: f
    StartColumnFilter,
    /// Drop the email filter and go back to the plain listing. Default: c
    ClearSearch,

    // Detail modal
    /// Show the highlighted comment in the detail modal. Default: Enter
    OpenDetail,

    // Application
    /// Re-issue the current query. Default: r
    Refresh,
    /// Toggle the key binding overlay. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether the action is still allowed while the help overlay is open.
    pub fn allowed_over_help(self) -> bool {
        matches!(self, KeyAction::Help | KeyAction::Quit)
    }
}
