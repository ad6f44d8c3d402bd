//! Session state
//!
//! Level, score, lives and the phase of the current session.

use super::instruction::InstructionKind;

/// Lives at the start of every session
pub const MAX_LIVES: u8 = 3;

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing started yet
    #[default]
    Idle,
    /// Rounds are being played
    Active,
    /// Lives ran out; frozen until the next session
    GameOver,
}

/// The mutable record of one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) level: u32,
    pub(crate) score: u32,
    pub(crate) lives: u8,
    pub(crate) phase: Phase,
    pub(crate) current_instruction: Option<InstructionKind>,
}

impl GameState {
    /// State before any session has been played
    pub fn new() -> Self {
        Self {
            level: 1,
            score: 0,
            lives: MAX_LIVES,
            phase: Phase::Idle,
            current_instruction: None,
        }
    }

    /// Fresh values for a session that is starting now
    pub(crate) fn reset_for_session(&mut self) {
        self.level = 1;
        self.score = 0;
        self.lives = MAX_LIVES;
        self.phase = Phase::Active;
        self.current_instruction = None;
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True only while rounds are being played
    pub fn started(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Input is only judged in this state
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// Defined only while the session is active
    pub fn current_instruction(&self) -> Option<InstructionKind> {
        self.current_instruction
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.started());
        assert!(!state.over());
        assert_eq!(state.current_instruction(), None);
    }

    #[test]
    fn test_reset_for_session() {
        let mut state = GameState {
            level: 9,
            score: 4,
            lives: 0,
            phase: Phase::GameOver,
            current_instruction: None,
        };
        state.reset_for_session();

        assert_eq!(state.level(), 1);
        assert_eq!(state.score(), 0);
        assert_eq!(state.lives(), MAX_LIVES);
        assert!(state.started());
        assert!(!state.over());
    }
}
