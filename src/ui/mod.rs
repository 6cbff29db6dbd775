//! Terminal User Interface module.
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard input handling
//! - `render` - View rendering dispatch
//! - `topbar` - Top bar widget (screen title, bookmark, theme switch)
//! - `feed` - Headline list widget
//! - `detail` - Article detail widget
//! - `status` - Status bar widget
//! - `help` - Help overlay
//! - `helpers` - Shared utility functions

mod detail;
mod feed;
mod help;
mod helpers;
mod input;
mod loop_runner;
mod render;
mod status;
mod topbar;

// Re-export the public API
pub use loop_runner::{run, Action};
