//! Game module - Round rules and session state

mod engine;
mod instruction;
mod sink;
mod source;
mod state;

pub use engine::RoundEngine;
pub use instruction::{is_correct_action, ActionEvent, Cue, InstructionKind};
pub use sink::{PresentationSink, RecordingSink, SinkCall};
pub use source::{InstructionSource, RandomInstructions, ScriptedInstructions, SourceError};
pub use state::{GameState, Phase, MAX_LIVES};
