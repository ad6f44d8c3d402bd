//! Instructions, player actions, and the judging table
//!
//! An instruction is what the screen asks for this round; an action event
//! is what the player actually did.

/// The action the player is asked to perform this round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionKind {
    Press,
    Swipe,
    Shake,
}

impl InstructionKind {
    /// Every instruction, in draw order
    pub const ALL: [InstructionKind; 3] = [
        InstructionKind::Press,
        InstructionKind::Swipe,
        InstructionKind::Shake,
    ];

    /// Text shown while this instruction is active
    pub fn label(&self) -> &'static str {
        match self {
            InstructionKind::Press => "PRESS!",
            InstructionKind::Swipe => "SWIPE!",
            InstructionKind::Shake => "SHAKE!",
        }
    }

    /// Sound cue announcing this instruction
    pub fn cue(&self) -> Cue {
        match self {
            InstructionKind::Press => Cue::Press,
            InstructionKind::Swipe => Cue::Swipe,
            InstructionKind::Shake => Cue::Shake,
        }
    }
}

/// A discrete input signal delivered to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionEvent {
    /// Pointer or touch went down
    TapPerformed,
    /// Accelerometer magnitude crossed the shake threshold
    ShakeDetected,
}

/// Named sound cues the presentation layer can be asked to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Press,
    Swipe,
    Shake,
    Defeat,
}

/// Judge an action against the current instruction.
///
/// Press and Swipe accept any action event: the input layer has no swipe
/// gesture of its own, so a tap and a swipe look the same here. Only Shake
/// insists on a detected shake.
pub fn is_correct_action(instruction: InstructionKind, event: ActionEvent) -> bool {
    match instruction {
        InstructionKind::Press | InstructionKind::Swipe => true,
        InstructionKind::Shake => event == ActionEvent::ShakeDetected,
    }
}
