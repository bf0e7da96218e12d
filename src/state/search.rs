//! Email search filter and search input state.
//!
//! SearchInput is a sum type for the search bar:
//! - Inactive: bar hidden, keys go to the table
//! - Typing: user is editing a query
//!
//! Whether the *table* is filtered lives in `QueryMode`, not here. Cancelling
//! the input never changes the active filter.

// ===== EmailFilter =====

/// Validated email filter. Never empty.
/// Smart constructor enforces the non-empty invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailFilter(String);

impl EmailFilter {
    /// Smart constructor: trims surrounding whitespace.
    /// Returns None if the result is empty.
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The exact text sent as the `email` query parameter.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== SearchOrigin =====

/// Which control a search was submitted from.
///
/// Both behave identically; the origin only changes the input title and
/// what gets logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOrigin {
    /// Top-level search box (`/`).
    SearchBox,
    /// Filter dropdown on the email column (`f`).
    ColumnFilter,
}

impl SearchOrigin {
    /// Title shown on the input widget.
    pub fn title(self) -> &'static str {
        match self {
            SearchOrigin::SearchBox => "Search email",
            SearchOrigin::ColumnFilter => "Filter: email",
        }
    }
}

// ===== SearchInput =====

/// Search bar state machine.
/// Sum type enforces exactly one state at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchInput {
    /// Bar not shown.
    #[default]
    Inactive,
    /// User is typing a query. `cursor` is a char index into `query`.
    Typing {
        /// Text typed so far.
        query: String,
        /// Cursor position in chars, `0..=query.chars().count()`.
        cursor: usize,
        /// Control the input was opened from.
        origin: SearchOrigin,
    },
}

impl SearchInput {
    /// Whether the input currently captures keystrokes.
    pub fn is_typing(&self) -> bool {
        matches!(self, SearchInput::Typing { .. })
    }
}

// ===== Tests =====
