//! Sound definitions and mappings
//!
//! Defines every sound the game can play.

use crate::game::Cue;

/// Sound event identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    /// Looping background track while a session runs
    Ambience,
    /// "Press" instruction announced
    Press,
    /// "Swipe" instruction announced
    Swipe,
    /// "Shake" instruction announced
    Shake,
    /// Lives ran out
    Defeat,
}

impl SoundId {
    /// Every sound, in preload order
    pub const ALL: [SoundId; 5] = [
        SoundId::Ambience,
        SoundId::Press,
        SoundId::Swipe,
        SoundId::Shake,
        SoundId::Defeat,
    ];

    /// Get the file path for this sound
    pub fn file_path(&self) -> &'static str {
        match self {
            SoundId::Ambience => "assets/sounds/ambience.ogg",
            SoundId::Press => "assets/sounds/press.ogg",
            SoundId::Swipe => "assets/sounds/swipe.ogg",
            SoundId::Shake => "assets/sounds/shake.ogg",
            SoundId::Defeat => "assets/sounds/defeat.ogg",
        }
    }

    /// Get the default volume for this sound (0.0 - 1.0)
    pub fn default_volume(&self) -> f64 {
        match self {
            SoundId::Ambience => 0.4,
            SoundId::Defeat => 0.9,
            _ => 0.7,
        }
    }
}

impl From<Cue> for SoundId {
    fn from(cue: Cue) -> Self {
        match cue {
            Cue::Press => SoundId::Press,
            Cue::Swipe => SoundId::Swipe,
            Cue::Shake => SoundId::Shake,
            Cue::Defeat => SoundId::Defeat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cues_map_to_distinct_sounds() {
        let sounds: Vec<SoundId> = [Cue::Press, Cue::Swipe, Cue::Shake, Cue::Defeat]
            .into_iter()
            .map(SoundId::from)
            .collect();
        assert_eq!(sounds, vec![SoundId::Press, SoundId::Swipe, SoundId::Shake, SoundId::Defeat]);
        assert!(!sounds.contains(&SoundId::Ambience));
    }
}
