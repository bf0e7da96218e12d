//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod query;
pub mod search;
pub mod search_input_handler;
pub mod view_state;

// Re-export for convenience
pub use app_state::AppState;
pub use query::{CommentQuery, OffsetRange, QueryMode, RequestSeq, RequestTicket};
pub use search::{EmailFilter, SearchInput, SearchOrigin};
pub use view_state::{reduce, step_page_size, Transition, ViewEvent, ViewState};
