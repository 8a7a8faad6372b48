//! C.L.A.R.A config WASM API
//!
//! This module provides the JavaScript-facing API.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros and JS value conversion
//! - `convert`: MIDI file to lighting config conversion
//! - `configs`: display parsing and config store requests

pub mod helpers;
pub mod convert;
pub mod configs;

pub use convert::convert_midi_to_clara;
pub use configs::{
    create_config, delete_config, fetch_config, parse_config, parse_config_list, replace_config,
};
