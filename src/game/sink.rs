//! Presentation sink
//!
//! The engine never touches the screen or the speakers. It tells a sink
//! what changed, and the sink decides how to show or play it.

use super::instruction::{Cue, InstructionKind};

/// Receiver for everything the engine wants presented
pub trait PresentationSink {
    fn show_level(&mut self, level: u32);
    fn show_score(&mut self, score: u32);
    /// Remaining lives, 0 to 3
    fn show_lives(&mut self, lives: u8);
    fn show_instruction(&mut self, instruction: InstructionKind);
    fn play_cue(&mut self, cue: Cue);
    fn start_ambience(&mut self);
    fn stop_ambience(&mut self);
    fn show_game_over(&mut self);
    fn enable_start_control(&mut self);
    fn disable_start_control(&mut self);
    fn reset_start_label(&mut self);
}

/// One call made on a sink, as recorded by [`RecordingSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCall {
    Level(u32),
    Score(u32),
    Lives(u8),
    Instruction(InstructionKind),
    Cue(Cue),
    StartAmbience,
    StopAmbience,
    GameOver,
    EnableStart,
    DisableStart,
    ResetStartLabel,
}

/// Sink that remembers every call in order
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub calls: Vec<SinkCall>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything recorded so far
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl PresentationSink for RecordingSink {
    fn show_level(&mut self, level: u32) {
        self.calls.push(SinkCall::Level(level));
    }

    fn show_score(&mut self, score: u32) {
        self.calls.push(SinkCall::Score(score));
    }

    fn show_lives(&mut self, lives: u8) {
        self.calls.push(SinkCall::Lives(lives));
    }

    fn show_instruction(&mut self, instruction: InstructionKind) {
        self.calls.push(SinkCall::Instruction(instruction));
    }

    fn play_cue(&mut self, cue: Cue) {
        self.calls.push(SinkCall::Cue(cue));
    }

    fn start_ambience(&mut self) {
        self.calls.push(SinkCall::StartAmbience);
    }

    fn stop_ambience(&mut self) {
        self.calls.push(SinkCall::StopAmbience);
    }

    fn show_game_over(&mut self) {
        self.calls.push(SinkCall::GameOver);
    }

    fn enable_start_control(&mut self) {
        self.calls.push(SinkCall::EnableStart);
    }

    fn disable_start_control(&mut self) {
        self.calls.push(SinkCall::DisableStart);
    }

    fn reset_start_label(&mut self) {
        self.calls.push(SinkCall::ResetStartLabel);
    }
}
