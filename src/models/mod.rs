//! Models module for C.L.A.R.A lighting configs
//!
//! The config document itself, the note sequence stored in its `music`
//! field, and note naming.

pub mod config;
pub mod note_name;
pub mod song;

// Re-export commonly used types
pub use config::{Command, ConfigDocument, LightingConfig, Pattern, MUSIC_FIELD};
pub use note_name::{note_name, NOTE_NAMES};
pub use song::{Music, SongEntry, REST_NAME};
