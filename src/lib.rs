//! comview
//!
//! TUI table viewer for a paginated comments API.
//!
//! The pure core (`model`, `state`) owns pagination, search and response
//! ordering. The impure shell (`client`, `controller`, `view`) talks to the
//! network and the terminal.

pub mod client;
pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;
