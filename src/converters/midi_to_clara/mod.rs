//! MIDI to C.L.A.R.A config conversion
//!
//! Reads the first track of a Standard MIDI File and turns it into the
//! `music` field of a lighting config.
//!
//! # Behaviour
//! - The existing config is reused when it's a JSON object; otherwise a new
//!   one is created from [`ConverterOptions`] with a fresh id.
//! - A file that can't be parsed as MIDI doesn't fail the conversion: the
//!   `music` field is set to [`MIDI_PARSE_ERROR_MESSAGE`] instead.
//! - Only `music` is touched; all other fields keep their value and order.
//!
//! # Usage
//! ```rust,ignore
//! use clara_config_wasm::converters::midi_to_clara::convert_midi_to_clara;
//!
//! let json = convert_midi_to_clara(&midi_bytes, Some(&existing_json))?;
//! ```

pub mod events;
pub mod options;
pub mod sequence;

pub use events::{first_track_events, EventKind, MidiEvent};
pub use options::{
    ConverterOptions, IdGenerator, UuidGenerator, DEFAULT_CONFIG_NAME, DEFAULT_REST_THRESHOLD,
    MIDI_PARSE_ERROR_MESSAGE,
};
pub use sequence::build_song;

use thiserror::Error;

use crate::models::config::ConfigDocument;
use crate::models::song::Music;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("midi parse error: {0}")]
    MidiParse(#[from] midly::Error),
    #[error("config serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Converter with its settings and id source
#[derive(Debug, Clone)]
pub struct MidiConverter<G = UuidGenerator> {
    options: ConverterOptions,
    ids: G,
}

impl Default for MidiConverter {
    fn default() -> Self {
        Self::new(ConverterOptions::default(), UuidGenerator)
    }
}

impl<G: IdGenerator> MidiConverter<G> {
    pub fn new(options: ConverterOptions, ids: G) -> Self {
        Self { options, ids }
    }

    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    /// The config to write music into
    ///
    /// Malformed or missing JSON, or JSON that isn't an object, gives a new
    /// default config.
    pub fn base_config(&mut self, existing: Option<&str>) -> Result<ConfigDocument> {
        if let Some(document) = existing.and_then(ConfigDocument::parse) {
            return Ok(document);
        }

        let id = self.ids.fresh_id();
        log::info!("creating new lighting config {}", id);
        Ok(self.options.new_config(id).into_document()?)
    }

    /// Music for a MIDI file: a song, or the parse error message
    pub fn music_for(&self, midi_bytes: &[u8]) -> Music {
        match first_track_events(midi_bytes) {
            Ok(events) => {
                let song = build_song(&events, self.options.rest_threshold);
                log::debug!("built song: {} events -> {} entries", events.len(), song.len());
                Music::Song(song)
            }
            Err(e) => {
                log::warn!("{}", e);
                Music::Error(self.options.parse_error_message.clone())
            }
        }
    }

    /// Convert to a config document
    pub fn convert_document(
        &mut self,
        midi_bytes: &[u8],
        existing: Option<&str>,
    ) -> Result<ConfigDocument> {
        let mut document = self.base_config(existing)?;
        document.set_music(&self.music_for(midi_bytes))?;
        Ok(document)
    }

    /// Convert to pretty-printed config JSON
    pub fn convert(&mut self, midi_bytes: &[u8], existing: Option<&str>) -> Result<String> {
        Ok(self.convert_document(midi_bytes, existing)?.to_pretty_json()?)
    }
}

/// Convert with the stock settings and random ids
pub fn convert_midi_to_clara(midi_bytes: &[u8], existing: Option<&str>) -> Result<String> {
    MidiConverter::default().convert(midi_bytes, existing)
}
