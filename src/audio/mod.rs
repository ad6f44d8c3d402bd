//! Audio system
//!
//! Plays instruction cues and the session ambience using the Kira audio library.

pub mod manager;
pub mod sounds;

pub use manager::AudioManager;
pub use sounds::SoundId;
