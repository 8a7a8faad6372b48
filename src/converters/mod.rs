//! Format converters
//!
//! This module contains converters from external formats into lighting configs.

pub mod midi_to_clara;

// Re-export for convenience
pub use midi_to_clara::{convert_midi_to_clara, ConvertError, MidiConverter};
