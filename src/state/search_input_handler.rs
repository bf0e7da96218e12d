//! Search input handling (pure state transitions).
//!
//! Handles text input for the SearchInput::Typing variant.
//! All functions are pure - no side effects, testable without TUI.
//! Cursor positions are char indices, so multi-byte input is safe.

use crate::state::{SearchInput, SearchOrigin};

/// Byte offset of char index `cursor` in `query`.
fn byte_offset(query: &str, cursor: usize) -> usize {
    query
        .char_indices()
        .nth(cursor)
        .map(|(offset, _)| offset)
        .unwrap_or(query.len())
}

/// Handle character input when in Typing state.
/// Inserts the character at cursor position and advances cursor.
///
/// Returns updated SearchInput. No-op if not in Typing state.
pub fn handle_char_input(state: SearchInput, ch: char) -> SearchInput {
    match state {
        SearchInput::Typing {
            mut query,
            cursor,
            origin,
        } => {
            query.insert(byte_offset(&query, cursor), ch);
            SearchInput::Typing {
                query,
                cursor: cursor + 1,
                origin,
            }
        }
        // No-op for other states
        other => other,
    }
}

/// Handle backspace when in Typing state.
/// Deletes character before cursor if cursor > 0.
///
/// Returns updated SearchInput. No-op if not in Typing state.
pub fn handle_backspace(state: SearchInput) -> SearchInput {
    match state {
        SearchInput::Typing {
            mut query,
            cursor,
            origin,
        } if cursor > 0 => {
            query.remove(byte_offset(&query, cursor - 1));
            SearchInput::Typing {
                query,
                cursor: cursor - 1,
                origin,
            }
        }
        other => other,
    }
}

/// Move cursor left by one position.
/// Saturates at 0 (does not wrap).
pub fn handle_cursor_left(state: SearchInput) -> SearchInput {
    match state {
        SearchInput::Typing {
            query,
            cursor,
            origin,
        } => SearchInput::Typing {
            query,
            cursor: cursor.saturating_sub(1),
            origin,
        },
        other => other,
    }
}

/// Move cursor right by one position.
/// Saturates at query length (does not wrap).
pub fn handle_cursor_right(state: SearchInput) -> SearchInput {
    match state {
        SearchInput::Typing {
            query,
            cursor,
            origin,
        } => {
            let max_cursor = query.chars().count();
            SearchInput::Typing {
                query,
                cursor: (cursor + 1).min(max_cursor),
                origin,
            }
        }
        other => other,
    }
}

/// Activate search input mode.
/// Transitions from Inactive to Typing, pre-filled with `prefill` and the
/// cursor at its end.
///
/// No-op if already Typing.
pub fn activate_search_input(state: SearchInput, origin: SearchOrigin, prefill: &str) -> SearchInput {
    match state {
        SearchInput::Inactive => SearchInput::Typing {
            query: prefill.to_string(),
            cursor: prefill.chars().count(),
            origin,
        },
        other => other,
    }
}

/// Clear the typed text but keep the input open (column filter "Reset").
pub fn reset_input(state: SearchInput) -> SearchInput {
    match state {
        SearchInput::Typing { origin, .. } => SearchInput::Typing {
            query: String::new(),
            cursor: 0,
            origin,
        },
        other => other,
    }
}

/// Cancel search input.
/// Transitions from Typing to Inactive without submitting anything.
pub fn cancel_search(_state: SearchInput) -> SearchInput {
    SearchInput::Inactive
}

/// Submit search query.
/// Transitions from Typing to Inactive and hands back the raw text and
/// origin for the reducer. Empty text is returned as-is; the reducer treats
/// it as "no filter".
///
/// Returns `(Inactive, None)` if not in Typing state.
pub fn submit_search(state: SearchInput) -> (SearchInput, Option<(String, SearchOrigin)>) {
    match state {
        SearchInput::Typing { query, origin, .. } => (SearchInput::Inactive, Some((query, origin))),
        SearchInput::Inactive => (SearchInput::Inactive, None),
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
