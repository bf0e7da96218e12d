//! Screen layout.
//!
//! Search bar (when visible) on top, table in the middle, status bar at the
//! bottom. Overlays are drawn last: the detail modal, then help.

use super::constants::{SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT};
use super::detail_modal::render_detail_modal;
use super::help::render_help_overlay;
use super::search_input::SearchBar;
use super::status_bar::render_status_bar;
use super::styles::TableStyles;
use super::table::render_comment_table;
use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Rendering settings fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Palette.
    pub styles: TableStyles,
    /// Show the last fetch error in the status bar.
    pub debug_status: bool,
}

/// Render one full frame for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, options: &RenderOptions) {
    let view = state.view();
    let styles = &options.styles;
    let search_bar = SearchBar::new(&state.search_input, view.mode().filter(), styles);
    let search_height = if search_bar.is_visible() {
        SEARCH_INPUT_HEIGHT
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(search_height), // Search bar (hidden when idle)
            Constraint::Min(0),                // Table
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    if search_height > 0 {
        frame.render_widget(search_bar, chunks[0]);
    }
    render_comment_table(frame, chunks[1], view, styles);
    render_status_bar(frame, chunks[2], view, styles, options.debug_status);

    if let Some(comment) = view.selected() {
        render_detail_modal(frame, comment, styles);
    }
    if state.help_visible {
        render_help_overlay(frame, styles);
    }
}
