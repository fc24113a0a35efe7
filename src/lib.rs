//! dataview
//!
//! Paginated, sortable list/grid viewer for record collections.
//!
//! The crate follows a Pure Core / Impure Shell split:
//! - [`model`], [`view_state`] and [`state`] are pure and testable without a terminal.
//! - [`view`] is the ratatui rendering collaborator and event loop.
//! - [`config`], [`logging`], [`parser`] and [`source`] are the ambient shell for the `dataview` binary.

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;
