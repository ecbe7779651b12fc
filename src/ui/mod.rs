//! Terminal UI for the calculator
//!
//! This module implements the ratatui front end:
//!
//! - `app`: event loop, keyboard dispatch, and the error display timer
//! - `panes`: stateless rendering functions for each screen region
//! - `theme`: the color palette
//!
//! The UI owns no calculator state of its own beyond the status
//! message and the error timer. Every key press is translated into a
//! [`crate::session::Session`] call, and every frame is drawn from the
//! session's current state.

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
