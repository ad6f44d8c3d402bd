//! Reflex Rush - A press, swipe, shake reflex minigame
//!
//! Each round asks for one action. Do it and score; get it wrong and lose
//! a heart. Three lost hearts end the session.

pub mod game;
pub mod input;
pub mod audio;
pub mod ui;
pub mod config;

// Re-export commonly used types
pub use game::{
    ActionEvent, Cue, GameState, InstructionKind, InstructionSource, Phase,
    PresentationSink, RandomInstructions, RoundEngine, ScriptedInstructions,
};
pub use config::Settings;
