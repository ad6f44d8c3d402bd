//! Display model
//!
//! What the screen currently shows, updated through the presentation sink.
//! Cues and ambience are forwarded to the audio manager when there is one.

use crate::audio::{AudioManager, SoundId};
use crate::game::{Cue, InstructionKind, PresentationSink, MAX_LIVES};

/// Instruction text before the first session
pub const IDLE_TEXT: &str = "Press START";
/// Instruction text after the last life is lost
pub const GAME_OVER_TEXT: &str = "GAME OVER";
/// Start control label when it can be used
pub const START_LABEL: &str = "START";
/// Start control label while a session runs
pub const PLAYING_LABEL: &str = "PLAYING";

/// Screen state driven by the round engine
pub struct Display {
    level: u32,
    score: u32,
    /// Heart slots left to right; `true` is a full heart
    hearts: [bool; MAX_LIVES as usize],
    instruction_text: String,
    start_enabled: bool,
    start_label: String,
    last_cue: Option<Cue>,
    ambience: bool,
    audio: Option<AudioManager>,
}

impl Display {
    /// Create a display that plays sounds through `audio`
    pub fn new(audio: Option<AudioManager>) -> Self {
        Self {
            level: 1,
            score: 0,
            hearts: [true; MAX_LIVES as usize],
            instruction_text: IDLE_TEXT.to_string(),
            start_enabled: true,
            start_label: START_LABEL.to_string(),
            last_cue: None,
            ambience: false,
            audio,
        }
    }

    /// A display with no audio backend
    pub fn silent() -> Self {
        Self::new(None)
    }

    pub fn level_text(&self) -> String {
        format!("Level: {}", self.level)
    }

    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn hearts(&self) -> &[bool] {
        &self.hearts
    }

    pub fn instruction_text(&self) -> &str {
        &self.instruction_text
    }

    pub fn start_enabled(&self) -> bool {
        self.start_enabled
    }

    pub fn start_label(&self) -> &str {
        &self.start_label
    }

    pub fn last_cue(&self) -> Option<Cue> {
        self.last_cue
    }

    pub fn ambience(&self) -> bool {
        self.ambience
    }
}

impl PresentationSink for Display {
    fn show_level(&mut self, level: u32) {
        self.level = level;
    }

    fn show_score(&mut self, score: u32) {
        self.score = score;
    }

    fn show_lives(&mut self, lives: u8) {
        // Hearts empty from the left
        let lost = MAX_LIVES.saturating_sub(lives.min(MAX_LIVES)) as usize;
        for (slot, heart) in self.hearts.iter_mut().enumerate() {
            *heart = slot >= lost;
        }
    }

    fn show_instruction(&mut self, instruction: InstructionKind) {
        self.instruction_text = instruction.label().to_string();
    }

    fn play_cue(&mut self, cue: Cue) {
        self.last_cue = Some(cue);
        if let Some(audio) = &mut self.audio {
            audio.play(SoundId::from(cue));
        }
    }

    fn start_ambience(&mut self) {
        self.ambience = true;
        if let Some(audio) = &mut self.audio {
            audio.start_ambience();
        }
    }

    fn stop_ambience(&mut self) {
        self.ambience = false;
        if let Some(audio) = &mut self.audio {
            audio.stop_ambience();
        }
    }

    fn show_game_over(&mut self) {
        self.instruction_text = GAME_OVER_TEXT.to_string();
    }

    fn enable_start_control(&mut self) {
        self.start_enabled = true;
    }

    fn disable_start_control(&mut self) {
        self.start_enabled = false;
        self.start_label = PLAYING_LABEL.to_string();
    }

    fn reset_start_label(&mut self) {
        self.start_label = START_LABEL.to_string();
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::silent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{ActionEvent, RoundEngine, ScriptedInstructions};

    #[test]
    fn test_hearts_empty_from_the_left() {
        let mut display = Display::silent();

        display.show_lives(2);
        assert_eq!(display.hearts(), &[false, true, true]);
        display.show_lives(1);
        assert_eq!(display.hearts(), &[false, false, true]);
        display.show_lives(0);
        assert_eq!(display.hearts(), &[false, false, false]);
        display.show_lives(3);
        assert_eq!(display.hearts(), &[true, true, true]);
    }

    #[test]
    fn test_idle_display() {
        let display = Display::silent();
        assert_eq!(display.instruction_text(), IDLE_TEXT);
        assert!(display.start_enabled());
        assert_eq!(display.start_label(), START_LABEL);
        assert!(!display.ambience());
    }

    #[test]
    fn test_session_drives_display() {
        let mut engine = RoundEngine::new(
            ScriptedInstructions::repeating(InstructionKind::Shake),
            Display::silent(),
        );
        engine.start_session();

        assert_eq!(engine.sink().instruction_text(), "SHAKE!");
        assert_eq!(engine.sink().last_cue(), Some(Cue::Shake));
        assert!(!engine.sink().start_enabled());
        assert!(engine.sink().ambience());

        engine.submit_action(ActionEvent::ShakeDetected);
        assert_eq!(engine.sink().score_text(), "Score: 1");
        assert_eq!(engine.sink().level_text(), "Level: 2");

        engine.submit_action(ActionEvent::TapPerformed);
        assert_eq!(engine.sink().hearts(), &[false, true, true]);
    }

    #[test]
    fn test_game_over_then_restart() {
        let mut engine = RoundEngine::new(
            ScriptedInstructions::repeating(InstructionKind::Shake),
            Display::silent(),
        );
        engine.start_session();
        for _ in 0..3 {
            engine.submit_action(ActionEvent::TapPerformed);
        }

        let display = engine.sink();
        assert_eq!(display.instruction_text(), GAME_OVER_TEXT);
        assert_eq!(display.hearts(), &[true, true, true]);
        assert!(display.start_enabled());
        assert_eq!(display.start_label(), START_LABEL);
        assert_eq!(display.last_cue(), Some(Cue::Defeat));
        assert!(!display.ambience());

        engine.start_session();
        let display = engine.sink();
        assert_eq!(display.hearts(), &[true, true, true]);
        assert_eq!(display.level_text(), "Level: 1");
        assert_eq!(display.score_text(), "Score: 0");
        assert_eq!(display.instruction_text(), "SHAKE!");
    }
}
