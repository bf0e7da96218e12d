//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for layout-related numeric values to enable
//! consistent tuning across the application.

use std::time::Duration;

/// Height of the search input widget in lines.
///
/// Includes border and text input area. Only allocated while the input is
/// open or a filter is active.
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the id column in cells.
pub const ID_COLUMN_WIDTH: u16 = 6;

/// Share of the table width given to the name column.
pub const NAME_COLUMN_PERCENT: u16 = 30;

/// Share of the table width given to the email column.
pub const EMAIL_COLUMN_PERCENT: u16 = 25;

/// Longest body preview shown in the table, in display cells.
pub const BODY_PREVIEW_WIDTH: usize = 120;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width percentage for the comment detail modal.
pub const DETAIL_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for the comment detail modal.
pub const DETAIL_POPUP_HEIGHT_PERCENT: u16 = 60;

/// Event loop poll timeout. Completions are drained once per tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
