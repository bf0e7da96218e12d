//! Domain model types (pure).
//!
//! All types in this module are plain data with no I/O.

pub mod comment;
pub mod error;
pub mod key_action;

// Re-export for convenience
pub use comment::{Comment, CommentPage};
pub use error::{AppError, FetchError};
pub use key_action::KeyAction;
