//! Input layer
//!
//! Turns raw terminal events and accelerometer samples into player actions.

pub mod shake;
pub mod terminal;

pub use shake::{ShakeDetector, SHAKE_THRESHOLD};
pub use terminal::{map_event, InputAction, KEYBOARD_JOLT};
