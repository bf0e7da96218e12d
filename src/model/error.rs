//! Error types for comview.
//!
//! A small `thiserror` taxonomy, composing through `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - startup/terminal failures that end the program
//!   - [`ConfigError`](crate::config::ConfigError) - config file read/parse/validation
//!   - [`LoggingError`](crate::logging::LoggingError) - log file setup
//!   - [`TuiError`](crate::view::TuiError) - terminal setup and drawing
//!   - `std::io::Error` - tokio runtime construction
//! - [`FetchError`] - a single failed request; never fatal
//!
//! # Recovery Strategy
//!
//! Fetch failures are **non-fatal**: they are logged, the loading flag is
//! cleared and the previous rows stay on screen. Everything else propagates
//! to `main`.

use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// The log file could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Raw I/O failure outside the TUI, e.g. building the tokio runtime.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The TUI failed while running.
    #[error("TUI error: {0}")]
    Tui(#[from] crate::view::TuiError),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(String),
}

/// Why a single fetch failed.
///
/// Carried inside `ViewEvent::FetchCompleted`, so it is `Clone + PartialEq`
/// and stores rendered messages instead of source errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never completed (DNS, connect, timeout, TLS...).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("API returned status: {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The body was not a JSON array of comments.
    #[error("Failed to decode comments: {0}")]
    Decode(String),
}

impl FetchError {
    /// Build a transport error from any displayable source.
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    /// Build a decode error from any displayable source.
    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }
}
