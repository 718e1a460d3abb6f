//! Data model for the conversion pipeline.
//!
//! A MIDI track is reduced to a flat list of [`TrackMessage`]s, which the
//! extractor folds into closed [`NoteInterval`]s measured in ticks.

use serde::{Deserialize, Serialize};

/// One time-tagged message from the first track of a MIDI file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackMessage {
    /// Ticks elapsed since the previous message
    pub delta: u32,
    pub kind: MessageKind,
}

/// The parts of a MIDI message the extractor cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    NoteOn { pitch: u8, velocity: u8 },
    NoteOff { pitch: u8 },
    /// Any other event. It carries no note data but its delta still counts.
    Other,
}

impl TrackMessage {
    pub fn note_on(delta: u32, pitch: u8, velocity: u8) -> Self {
        Self { delta, kind: MessageKind::NoteOn { pitch, velocity } }
    }

    pub fn note_off(delta: u32, pitch: u8) -> Self {
        Self { delta, kind: MessageKind::NoteOff { pitch } }
    }

    pub fn other(delta: u32) -> Self {
        Self { delta, kind: MessageKind::Other }
    }
}

/// A sounding note closed by its matching note-off, in absolute ticks.
///
/// `end_tick >= start_tick` holds for every interval the extractor emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteInterval {
    /// MIDI note number (0-127)
    pub pitch: u8,
    /// Strike velocity of the opening note-on (1-127)
    pub velocity: u8,
    pub start_tick: u64,
    pub end_tick: u64,
}

impl NoteInterval {
    pub fn new(pitch: u8, velocity: u8, start_tick: u64, end_tick: u64) -> Self {
        Self { pitch, velocity, start_tick, end_tick }
    }

    /// Length in ticks. Zero for an instantaneous note.
    pub fn duration_ticks(&self) -> u64 {
        self.end_tick.saturating_sub(self.start_tick)
    }
}

const NOTE_NAMES: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];

/// Scientific pitch name for a MIDI note number (60 → "C4", 24 → "C1").
pub fn note_name(pitch: u8) -> String {
    let octave = i32::from(pitch / 12) - 1;
    format!("{}{}", NOTE_NAMES[usize::from(pitch % 12)], octave)
}
