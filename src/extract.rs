//! Note extraction — folds a track's note-on/note-off messages into
//! closed [`NoteInterval`]s.
//!
//! Time is a running sum of message deltas.  At most one note per pitch
//! is open at a time; a note still open when the track ends is closed at
//! the final tick.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{note_name, MessageKind, NoteInterval, TrackMessage};

/// What to do when a note-on arrives for a pitch that is already sounding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlapPolicy {
    /// Forget the sounding note and start over from the new note-on.
    /// The earlier note never reaches the output.
    #[default]
    Replace,
    /// Close the sounding note at the overlap tick, then open the new one.
    Truncate,
}

/// A note that has been struck but not yet released.
#[derive(Debug, Clone, Copy)]
struct OpenNote {
    velocity: u8,
    start_tick: u64,
    /// Order in which the note was struck
    seq: usize,
}

/// Extract note intervals from one track's messages.
///
/// Intervals come out in the order their closing message appears; notes
/// left open at the end follow in the order they were struck.
pub fn extract_notes(messages: &[TrackMessage], policy: OverlapPolicy) -> Vec<NoteInterval> {
    let mut intervals = Vec::new();
    let mut open: HashMap<u8, OpenNote> = HashMap::new();
    let mut tick: u64 = 0;
    let mut struck: usize = 0;

    for message in messages {
        tick += u64::from(message.delta);

        match message.kind {
            MessageKind::NoteOn { pitch, velocity } if velocity > 0 => {
                if let Some(previous) = open.get(&pitch) {
                    log::warn!(
                        "Overlapping note {} ({}) at tick {}, previous note started at tick {}",
                        pitch,
                        note_name(pitch),
                        tick,
                        previous.start_tick
                    );
                    if policy == OverlapPolicy::Truncate {
                        intervals.push(NoteInterval::new(
                            pitch,
                            previous.velocity,
                            previous.start_tick,
                            tick,
                        ));
                    }
                }
                open.insert(pitch, OpenNote { velocity, start_tick: tick, seq: struck });
                struck += 1;
            }
            // Note-on with velocity 0 is a note-off under running status.
            MessageKind::NoteOn { pitch, .. } | MessageKind::NoteOff { pitch } => {
                if let Some(note) = open.remove(&pitch) {
                    intervals.push(NoteInterval::new(pitch, note.velocity, note.start_tick, tick));
                }
            }
            MessageKind::Other => {}
        }
    }

    // Close dangling notes at the last tick.
    let mut dangling: Vec<(u8, OpenNote)> = open.into_iter().collect();
    dangling.sort_by_key(|(_, note)| note.seq);
    if !dangling.is_empty() {
        log::debug!("Closing {} note(s) still sounding at tick {}", dangling.len(), tick);
    }
    intervals.extend(
        dangling
            .into_iter()
            .map(|(pitch, note)| NoteInterval::new(pitch, note.velocity, note.start_tick, tick)),
    );

    intervals
}
