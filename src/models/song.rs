//! Note sequence ("music") of a lighting config
//!
//! Each entry is written to JSON as `{ "note", "volume", "duration" }`, where
//! `note` is a note name such as `"CS4"` or the literal `"Rest"`.

use serde::{Deserialize, Serialize};

/// Name used for silent entries
pub const REST_NAME: &str = "Rest";

/// One step of the song
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(from = "SongEntryRecord", into = "SongEntryRecord")]
pub enum SongEntry {
    Note {
        name: String,
        /// Note-on velocity (0-127)
        volume: u8,
        duration: u64,
    },
    /// Silence; volume is always 0
    Rest { duration: u64 },
}

impl SongEntry {
    pub fn note(name: impl Into<String>, volume: u8, duration: u64) -> Self {
        SongEntry::Note {
            name: name.into(),
            volume,
            duration,
        }
    }

    pub fn rest(duration: u64) -> Self {
        SongEntry::Rest { duration }
    }

    pub fn name(&self) -> &str {
        match self {
            SongEntry::Note { name, .. } => name,
            SongEntry::Rest { .. } => REST_NAME,
        }
    }

    pub fn volume(&self) -> u8 {
        match self {
            SongEntry::Note { volume, .. } => *volume,
            SongEntry::Rest { .. } => 0,
        }
    }

    /// Duration in ticks
    pub fn duration(&self) -> u64 {
        match self {
            SongEntry::Note { duration, .. } | SongEntry::Rest { duration } => *duration,
        }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, SongEntry::Rest { .. })
    }
}

/// Wire shape of a [`SongEntry`]
#[derive(Serialize, Deserialize, Clone, Debug)]
struct SongEntryRecord {
    note: String,
    volume: u8,
    duration: u64,
}

impl From<SongEntry> for SongEntryRecord {
    fn from(entry: SongEntry) -> Self {
        match entry {
            SongEntry::Note { name, volume, duration } => Self { note: name, volume, duration },
            SongEntry::Rest { duration } => Self {
                note: REST_NAME.to_string(),
                volume: 0,
                duration,
            },
        }
    }
}

impl From<SongEntryRecord> for SongEntry {
    fn from(record: SongEntryRecord) -> Self {
        if record.note == REST_NAME {
            SongEntry::Rest { duration: record.duration }
        } else {
            SongEntry::Note {
                name: record.note,
                volume: record.volume,
                duration: record.duration,
            }
        }
    }
}

/// Contents of the `music` field
///
/// A failed conversion stores a human-readable message instead of a song.
/// Such a config is not playable; it only exists so the UI can show it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum Music {
    Song(Vec<SongEntry>),
    Error(String),
}

impl Music {
    pub fn is_error(&self) -> bool {
        matches!(self, Music::Error(_))
    }
}
