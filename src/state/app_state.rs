//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state.
//! The table itself is [`ViewState`]; everything here is chrome around it
//! (search bar, help overlay). All transitions are pure.

use crate::state::query::RequestTicket;
use crate::state::view_state::{reduce, ViewEvent, ViewState};
use crate::state::SearchInput;

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # Overlays
///
/// At most one overlay captures keys at a time, checked in this order:
///
/// - **Detail modal**: `view.selected()` is `Some`
/// - **Help**: `help_visible`
/// - **Search input**: `search_input` is `Typing`
///
/// When none is active, keys go to the table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    /// Pagination/search state for the table.
    view: ViewState,

    /// Search bar editing state.
    pub search_input: SearchInput,

    /// Whether the help overlay is visible.
    pub help_visible: bool,
}

impl AppState {
    /// Wrap an initial view state.
    pub fn new(view: ViewState) -> Self {
        Self {
            view,
            search_input: SearchInput::Inactive,
            help_visible: false,
        }
    }

    /// Immutable access to the table state.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Run the reducer in place and return the request to execute, if any.
    ///
    /// This is the only way the shell mutates the table state.
    pub fn dispatch(&mut self, event: ViewEvent) -> Option<RequestTicket> {
        let transition = reduce(std::mem::take(&mut self.view), event);
        self.view = transition.state;
        transition.request
    }

    /// Whether the detail modal is open.
    pub fn detail_open(&self) -> bool {
        self.view.selected().is_some()
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }
}

// ===== Tests =====
