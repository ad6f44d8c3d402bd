//! Audio manager using Kira
//!
//! Handles loading and playing cues, plus the looping ambience track.

use std::collections::HashMap;
use std::path::Path;

use kira::{
    manager::{AudioManager as KiraManager, AudioManagerSettings, backend::DefaultBackend},
    sound::static_sound::{StaticSoundData, StaticSoundHandle, StaticSoundSettings},
    tween::Tween,
    Volume,
};

use super::sounds::SoundId;

/// Audio manager that handles all sound playback
pub struct AudioManager {
    /// Kira audio manager
    manager: Option<KiraManager>,
    /// Preloaded sound data
    sounds: HashMap<SoundId, StaticSoundData>,
    /// Handle to the ambience loop while it plays
    ambience: Option<StaticSoundHandle>,
    /// Master volume (0.0 - 1.0)
    master_volume: f64,
    /// SFX volume multiplier (0.0 - 1.0)
    sfx_volume: f64,
}

impl AudioManager {
    /// Create a new audio manager
    pub fn new() -> Self {
        let manager = match KiraManager::<DefaultBackend>::new(AudioManagerSettings::default()) {
            Ok(m) => {
                log::info!("Audio manager initialized successfully");
                Some(m)
            }
            Err(e) => {
                log::warn!("Failed to initialize audio manager: {}. Audio disabled.", e);
                None
            }
        };

        let mut audio = Self {
            manager,
            sounds: HashMap::new(),
            ambience: None,
            master_volume: 1.0,
            sfx_volume: 0.7,
        };

        audio.preload_sounds();

        audio
    }

    fn preload_sounds(&mut self) {
        if self.manager.is_none() {
            return;
        }
        for sound_id in SoundId::ALL {
            if let Err(e) = self.load_sound(sound_id) {
                log::debug!("Could not preload sound {:?}: {}", sound_id, e);
            }
        }
    }

    /// Load a sound from file
    fn load_sound(&mut self, sound_id: SoundId) -> Result<(), String> {
        if self.sounds.contains_key(&sound_id) {
            return Ok(());
        }

        let path = sound_id.file_path();
        if !Path::new(path).exists() {
            return Err(format!("Sound file not found: {}", path));
        }

        match StaticSoundData::from_file(path) {
            Ok(data) => {
                self.sounds.insert(sound_id, data);
                Ok(())
            }
            Err(e) => Err(format!("Failed to load sound {}: {:?}", path, e)),
        }
    }

    /// Sound data with the final volume applied, if it can be played at all
    fn prepared(&mut self, sound_id: SoundId, looping: bool) -> Option<StaticSoundData> {
        self.manager.as_ref()?;

        if let Err(e) = self.load_sound(sound_id) {
            log::debug!("Cannot play sound {:?}: {}", sound_id, e);
            return None;
        }

        let sound_data = self.sounds.get(&sound_id)?.clone();
        let volume = final_volume(sound_id, self.sfx_volume, self.master_volume);
        let mut settings = StaticSoundSettings::new().volume(Volume::Amplitude(volume));
        if looping {
            settings = settings.loop_region(..);
        }
        Some(sound_data.with_settings(settings))
    }

    /// Play a one-shot sound
    pub fn play(&mut self, sound_id: SoundId) {
        let Some(sound) = self.prepared(sound_id, false) else {
            return;
        };

        if let Some(manager) = &mut self.manager {
            if let Err(e) = manager.play(sound) {
                log::debug!("Failed to play sound {:?}: {:?}", sound_id, e);
            }
        }
    }

    /// Start the looping ambience track, replacing any that is playing
    pub fn start_ambience(&mut self) {
        self.stop_ambience();

        let Some(sound) = self.prepared(SoundId::Ambience, true) else {
            return;
        };

        if let Some(manager) = &mut self.manager {
            match manager.play(sound) {
                Ok(handle) => self.ambience = Some(handle),
                Err(e) => log::debug!("Failed to start ambience: {:?}", e),
            }
        }
    }

    /// Stop the ambience track if it is playing
    pub fn stop_ambience(&mut self) {
        if let Some(mut handle) = self.ambience.take() {
            handle.stop(Tween::default());
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, volume: f64) {
        self.master_volume = volume.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, volume: f64) {
        self.sfx_volume = volume.clamp(0.0, 1.0);
    }
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Playback amplitude for a sound after the SFX and master multipliers
fn final_volume(sound_id: SoundId, sfx_volume: f64, master_volume: f64) -> f64 {
    sound_id.default_volume() * sfx_volume * master_volume
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_volume_scales_by_both_multipliers() {
        assert_eq!(final_volume(SoundId::Defeat, 1.0, 1.0), 0.9);
        assert_eq!(final_volume(SoundId::Ambience, 0.5, 0.5), 0.1);
        assert_eq!(final_volume(SoundId::Press, 0.7, 0.0), 0.0);
    }
}
