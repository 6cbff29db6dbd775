//! headlines — a terminal news reader demo.
//!
//! A scrollable list of static headlines, a detail view per headline, a
//! bookmark toggle, and a light/dark theme switch. All state is in-memory
//! and scoped to one session; nothing is fetched or persisted.

pub mod app;
pub mod catalog;
pub mod config;
pub mod keybindings;
pub mod session;
pub mod theme;
pub mod ui;
