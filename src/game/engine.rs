//! Round engine
//!
//! Owns the session state, draws an instruction per round, judges the
//! player's actions and drives the Idle -> Active -> GameOver machine.
//! Every visible consequence goes out through the presentation sink.

use super::instruction::{is_correct_action, ActionEvent, Cue, InstructionKind};
use super::sink::PresentationSink;
use super::source::InstructionSource;
use super::state::{GameState, Phase, MAX_LIVES};

/// The game's rules, wired to an instruction source and a sink
pub struct RoundEngine<S, P> {
    state: GameState,
    source: S,
    sink: P,
}

impl<S: InstructionSource, P: PresentationSink> RoundEngine<S, P> {
    /// Create an idle engine; nothing is emitted until a session starts
    pub fn new(source: S, sink: P) -> Self {
        Self {
            state: GameState::new(),
            source,
            sink,
        }
    }

    /// Begin a fresh session, whatever happened before.
    ///
    /// Callers are expected to ignore the start control while a session is
    /// already active.
    pub fn start_session(&mut self) {
        self.state.reset_for_session();
        log::info!("Session started");

        self.sink.show_level(self.state.level);
        self.sink.show_score(self.state.score);
        self.sink.show_lives(self.state.lives);
        self.sink.disable_start_control();
        self.sink.start_ambience();

        self.start_new_round();
    }

    /// Draw and announce the next instruction. No-op outside a session.
    pub fn start_new_round(&mut self) {
        if !self.state.is_active() {
            return;
        }

        let instruction = self.source.draw_instruction();
        log::debug!("Level {}: {:?}", self.state.level, instruction);
        self.state.current_instruction = Some(instruction);

        self.sink.show_instruction(instruction);
        self.sink.play_cue(instruction.cue());
    }

    /// Judge one player action and resolve the round.
    ///
    /// Silently ignored unless a session is active.
    pub fn submit_action(&mut self, event: ActionEvent) {
        if !self.state.is_active() {
            return;
        }
        let Some(instruction) = self.state.current_instruction else {
            return;
        };

        let correct = is_correct_action(instruction, event);
        log::debug!(
            "{:?} against {:?}: {}",
            event,
            instruction,
            if correct { "correct" } else { "wrong" }
        );

        if correct {
            self.state.score += 1;
            self.sink.show_score(self.state.score);
        } else {
            self.state.lives = self.state.lives.saturating_sub(1);
            self.sink.show_lives(self.state.lives);

            if self.state.lives == 0 {
                self.end_session();
                return;
            }
        }

        self.state.level += 1;
        self.sink.show_level(self.state.level);

        self.start_new_round();
    }

    fn end_session(&mut self) {
        self.state.phase = Phase::GameOver;
        self.state.current_instruction = None;
        log::info!(
            "Game over at level {} with score {}",
            self.state.level,
            self.state.score
        );

        self.sink.stop_ambience();
        self.sink.play_cue(Cue::Defeat);
        self.sink.show_game_over();
        self.sink.enable_start_control();
        self.sink.reset_start_label();
        self.sink.show_lives(MAX_LIVES);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn level(&self) -> u32 {
        self.state.level()
    }

    pub fn score(&self) -> u32 {
        self.state.score()
    }

    pub fn lives(&self) -> u8 {
        self.state.lives()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn started(&self) -> bool {
        self.state.started()
    }

    pub fn over(&self) -> bool {
        self.state.over()
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn current_instruction(&self) -> Option<InstructionKind> {
        self.state.current_instruction()
    }

    pub fn sink(&self) -> &P {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut P {
        &mut self.sink
    }
}
