use midly::{MidiMessage, Smf, TrackEvent, TrackEventKind};

use super::Result;

/// Kind of a track event, as far as note sequencing is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    NoteOn,
    NoteOff,
    Other,
}

/// A decoded MIDI event with delta time relative to the previous event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MidiEvent {
    pub kind: EventKind,
    pub note_number: u8,
    pub velocity: u8,
    pub delta_time: u32,
}

impl MidiEvent {
    pub fn note_on(note_number: u8, velocity: u8, delta_time: u32) -> Self {
        Self { kind: EventKind::NoteOn, note_number, velocity, delta_time }
    }

    pub fn note_off(note_number: u8, delta_time: u32) -> Self {
        Self { kind: EventKind::NoteOff, note_number, velocity: 0, delta_time }
    }

    pub fn other(delta_time: u32) -> Self {
        Self { kind: EventKind::Other, note_number: 0, velocity: 0, delta_time }
    }
}

impl From<&TrackEvent<'_>> for MidiEvent {
    fn from(event: &TrackEvent<'_>) -> Self {
        let delta_time = event.delta.as_int();
        match event.kind {
            // Note-on with zero velocity is a note-off
            TrackEventKind::Midi {
                message: MidiMessage::NoteOn { key, vel },
                ..
            } if vel.as_int() == 0 => MidiEvent::note_off(key.as_int(), delta_time),
            TrackEventKind::Midi {
                message: MidiMessage::NoteOn { key, vel },
                ..
            } => MidiEvent::note_on(key.as_int(), vel.as_int(), delta_time),
            TrackEventKind::Midi {
                message: MidiMessage::NoteOff { key, vel },
                ..
            } => MidiEvent {
                kind: EventKind::NoteOff,
                note_number: key.as_int(),
                velocity: vel.as_int(),
                delta_time,
            },
            _ => MidiEvent::other(delta_time),
        }
    }
}

/// Parse a Standard MIDI File and return the events of its first track
///
/// A file without tracks yields no events.
pub fn first_track_events(bytes: &[u8]) -> Result<Vec<MidiEvent>> {
    let smf = Smf::parse(bytes)?;

    log::debug!(
        "parsed MIDI file: {:?}, {} track(s)",
        smf.header.format,
        smf.tracks.len()
    );

    Ok(smf
        .tracks
        .first()
        .map(|track| track.iter().map(MidiEvent::from).collect())
        .unwrap_or_default())
}
