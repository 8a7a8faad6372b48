//! MIDI conversion for the WASM API

use wasm_bindgen::prelude::*;

use crate::api::helpers::js_error;
use crate::converters::midi_to_clara::MidiConverter;
use crate::{wasm_info, wasm_warn};

/// Convert a MIDI file into a C.L.A.R.A lighting config
///
/// # Parameters
/// - `midi`: contents of the MIDI file
/// - `existing_config`: JSON of the config being edited; invalid or missing
///   JSON creates a new config
///
/// # Returns
/// Pretty-printed config JSON. If the file isn't MIDI, the `music` field
/// holds an error message; callers should check for that and tell the user.
#[wasm_bindgen(js_name = convertMidiToClara)]
pub fn convert_midi_to_clara(
    midi: &[u8],
    existing_config: Option<String>,
) -> Result<String, JsValue> {
    wasm_info!(
        "convertMidiToClara called: {} bytes, existing config: {}",
        midi.len(),
        existing_config.is_some()
    );

    let mut converter = MidiConverter::default();
    let document = converter
        .convert_document(midi, existing_config.as_deref())
        .map_err(|e| js_error("Config serialization error", e))?;

    if document.get("music").map_or(false, |music| music.is_string()) {
        wasm_warn!("MIDI file could not be parsed");
    }

    document
        .to_pretty_json()
        .map_err(|e| js_error("Config serialization error", e))
}
