//! C.L.A.R.A Lighting Config WASM Module
//!
//! Turns MIDI files into the note sequence of a C.L.A.R.A lighting config and
//! talks to the config store. Everything outside `api` is plain Rust and can
//! be used natively.

pub mod models;
pub mod converters;
pub mod transport;
pub mod api;

// Re-export commonly used types
pub use models::config::{Command, ConfigDocument, LightingConfig, Pattern};
pub use models::note_name::note_name;
pub use models::song::{Music, SongEntry};
pub use converters::midi_to_clara::{convert_midi_to_clara, ConverterOptions, MidiConverter};
pub use transport::{ConfigClient, DisplayConfig};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&format!("logger already initialized: {}", e).into());
        }
    }

    log::info!("C.L.A.R.A config WASM module initialized");
}
