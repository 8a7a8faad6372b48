//! Note names as understood by the C.L.A.R.A player
//!
//! Names are a pitch class followed by an octave number, e.g. `"A0"`,
//! `"CS4"`. Sharps use an `S` suffix instead of `#`. The scale starts at A
//! (MIDI 21), while octave numbers change at C, so MIDI 60 is `C3`.

/// Pitch classes in semitone order, starting at A
pub const NOTE_NAMES: [&str; 12] = [
    "A", "AS", "B", "C", "CS", "D", "DS", "E", "F", "FS", "G", "GS",
];

/// MIDI note number the pitch classes are counted from
pub const REFERENCE_NOTE: i32 = 21;

/// MIDI note number where octave 0 begins
pub const OCTAVE_ORIGIN: i32 = 24;

/// Pitch class name of a MIDI note number
///
/// Uses a non-negative remainder, so notes below MIDI 21 still map into the
/// scale (MIDI 20 is `GS`).
pub fn pitch_class(midi_number: u8) -> &'static str {
    let offset = i32::from(midi_number) - REFERENCE_NOTE;
    NOTE_NAMES[offset.rem_euclid(12) as usize]
}

/// Octave of a MIDI note number: `floor((n - 24) / 12)`
///
/// Floors towards negative infinity, so MIDI 21 to 23 are in octave -1.
pub fn octave(midi_number: u8) -> i32 {
    (i32::from(midi_number) - OCTAVE_ORIGIN).div_euclid(12)
}

/// Full note name, e.g. 60 -> `"C3"`
pub fn note_name(midi_number: u8) -> String {
    format!("{}{}", pitch_class(midi_number), octave(midi_number))
}
