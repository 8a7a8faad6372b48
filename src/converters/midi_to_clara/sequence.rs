//! Note/rest sequencing
//!
//! Walks a single track and pairs note-on with note-off events. Playback is
//! monophonic: overlapping notes are each emitted when they end, in the
//! order their note-offs arrive.

use std::collections::HashMap;

use crate::models::note_name::note_name;
use crate::models::song::SongEntry;

use super::events::{EventKind, MidiEvent};

/// A note that has started but not yet ended
#[derive(Debug, Clone, Copy)]
struct OpenNote {
    velocity: u8,
    start_time: u64,
}

/// Build the song for one track
///
/// A rest is inserted before a note-on when more than `rest_threshold` ticks
/// have passed since the last note-off. A note-off without a matching open
/// note is skipped and leaves the clock of the last note-off untouched.
pub fn build_song(events: &[MidiEvent], rest_threshold: u64) -> Vec<SongEntry> {
    let mut open_notes: HashMap<u8, OpenNote> = HashMap::new();
    let mut song = Vec::new();
    let mut current_time: u64 = 0;
    let mut last_note_off: Option<u64> = None;

    for event in events {
        current_time += u64::from(event.delta_time);

        match event.kind {
            EventKind::NoteOn => {
                if let Some(off_time) = last_note_off {
                    let gap = current_time - off_time;
                    if gap > rest_threshold {
                        song.push(SongEntry::rest(gap));
                    }
                }

                open_notes.insert(
                    event.note_number,
                    OpenNote {
                        velocity: event.velocity,
                        start_time: current_time,
                    },
                );
            }
            EventKind::NoteOff => {
                let Some(open) = open_notes.remove(&event.note_number) else {
                    log::warn!(
                        "skipping note-off for note {} at tick {}: note is not playing",
                        event.note_number,
                        current_time
                    );
                    continue;
                };

                song.push(SongEntry::note(
                    note_name(event.note_number),
                    open.velocity,
                    current_time - open.start_time,
                ));
                last_note_off = Some(current_time);
            }
            EventKind::Other => {}
        }
    }

    song
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: u64 = 50;

    #[test]
    fn test_single_note() {
        let events = [MidiEvent::note_on(60, 100, 0), MidiEvent::note_off(60, 480)];
        assert_eq!(build_song(&events, THRESHOLD), vec![SongEntry::note("C3", 100, 480)]);
    }

    #[test]
    fn test_rest_inserted_above_threshold() {
        let events = [
            MidiEvent::note_on(69, 80, 0),
            MidiEvent::note_off(69, 240),
            MidiEvent::note_on(71, 90, 51),
            MidiEvent::note_off(71, 240),
        ];
        assert_eq!(
            build_song(&events, THRESHOLD),
            vec![
                SongEntry::note("A3", 80, 240),
                SongEntry::rest(51),
                SongEntry::note("B3", 90, 240),
            ]
        );
    }

    #[test]
    fn test_no_rest_at_threshold() {
        let events = [
            MidiEvent::note_on(69, 80, 0),
            MidiEvent::note_off(69, 240),
            MidiEvent::note_on(71, 90, 50),
            MidiEvent::note_off(71, 240),
        ];
        let song = build_song(&events, THRESHOLD);
        assert_eq!(song.len(), 2);
        assert!(song.iter().all(|entry| !entry.is_rest()));
    }

    #[test]
    fn test_no_rest_before_first_note() {
        let events = [MidiEvent::note_on(60, 64, 1000), MidiEvent::note_off(60, 100)];
        let song = build_song(&events, THRESHOLD);
        assert_eq!(song, vec![SongEntry::note("C3", 64, 100)]);
    }

    #[test]
    fn test_other_events_advance_the_clock() {
        let events = [
            MidiEvent::note_on(60, 64, 0),
            MidiEvent::other(100),
            MidiEvent::note_off(60, 20),
            MidiEvent::other(40),
            MidiEvent::note_on(62, 64, 40),
            MidiEvent::note_off(62, 10),
        ];
        assert_eq!(
            build_song(&events, THRESHOLD),
            vec![
                SongEntry::note("C3", 64, 120),
                SongEntry::rest(80),
                SongEntry::note("D3", 64, 10),
            ]
        );
    }

    #[test]
    fn test_unmatched_note_off_is_skipped() {
        let events = [
            MidiEvent::note_on(60, 64, 0),
            MidiEvent::note_off(60, 100),
            MidiEvent::note_off(60, 500),
            MidiEvent::note_on(62, 64, 10),
            MidiEvent::note_off(62, 10),
        ];
        // The orphaned note-off doesn't move the rest reference point
        assert_eq!(
            build_song(&events, THRESHOLD),
            vec![
                SongEntry::note("C3", 64, 100),
                SongEntry::rest(510),
                SongEntry::note("D3", 64, 10),
            ]
        );
    }

    #[test]
    fn test_retriggered_note_overwrites_start() {
        let events = [
            MidiEvent::note_on(60, 40, 0),
            MidiEvent::note_on(60, 90, 100),
            MidiEvent::note_off(60, 100),
        ];
        assert_eq!(build_song(&events, THRESHOLD), vec![SongEntry::note("C3", 90, 100)]);
    }

    #[test]
    fn test_overlapping_notes_emit_in_note_off_order() {
        let events = [
            MidiEvent::note_on(60, 64, 0),
            MidiEvent::note_on(64, 70, 10),
            MidiEvent::note_off(64, 100),
            MidiEvent::note_off(60, 10),
        ];
        assert_eq!(
            build_song(&events, THRESHOLD),
            vec![SongEntry::note("E3", 70, 100), SongEntry::note("C3", 64, 120)]
        );
    }

    #[test]
    fn test_entry_count_matches_note_offs_plus_rests() {
        let events = [
            MidiEvent::note_on(60, 64, 0),
            MidiEvent::note_off(60, 100),
            MidiEvent::note_on(62, 64, 200),
            MidiEvent::note_off(62, 100),
            MidiEvent::note_on(64, 64, 20),
            MidiEvent::note_off(64, 100),
        ];
        let song = build_song(&events, THRESHOLD);
        let rests = song.iter().filter(|entry| entry.is_rest()).count();
        assert_eq!(rests, 1);
        assert_eq!(song.len(), 3 + rests);
    }

    #[test]
    fn test_note_off_at_tick_zero_counts_for_rests() {
        let events = [
            MidiEvent::note_on(60, 64, 0),
            MidiEvent::note_off(60, 0),
            MidiEvent::note_on(62, 64, 100),
            MidiEvent::note_off(62, 10),
        ];
        assert_eq!(
            build_song(&events, THRESHOLD),
            vec![
                SongEntry::note("C3", 64, 0),
                SongEntry::rest(100),
                SongEntry::note("D3", 64, 10),
            ]
        );
    }

    #[test]
    fn test_empty_track() {
        assert!(build_song(&[], THRESHOLD).is_empty());
    }
}
