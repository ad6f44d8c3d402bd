//! User Interface module
//!
//! Terminal UI using ratatui.

pub mod app;
pub mod display;

pub use app::App;
pub use display::Display;
