//! Pitch range filter — keeps only notes the sensor band can show.

use serde::{Deserialize, Serialize};

use crate::model::{note_name, NoteInterval};
use crate::renderer::constants::{BAND_SEMITONES, LOWEST_PITCH};

/// A closed range of MIDI pitches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchRange {
    pub lowest: u8,
    pub highest: u8,
}

impl PitchRange {
    /// C1..=B8, the eight octaves covered by the sensor band.
    pub const SENSOR_BAND: PitchRange = PitchRange::anchored_at(LOWEST_PITCH);

    /// The band-sized range starting at `lowest`, clamped to MIDI note 127.
    pub const fn anchored_at(lowest: u8) -> Self {
        let top = lowest as u16 + BAND_SEMITONES as u16 - 1;
        let highest = if top > 127 { 127 } else { top as u8 };
        Self { lowest, highest }
    }

    pub fn contains(&self, pitch: u8) -> bool {
        (self.lowest..=self.highest).contains(&pitch)
    }

    /// Human-readable bounds, e.g. ("C1", "B8").
    pub fn names(&self) -> (String, String) {
        (note_name(self.lowest), note_name(self.highest))
    }
}

impl Default for PitchRange {
    fn default() -> Self {
        Self::SENSOR_BAND
    }
}

/// Drop every interval whose pitch lies outside `range`, warning once per drop.
pub fn filter_to_range(intervals: Vec<NoteInterval>, range: &PitchRange) -> Vec<NoteInterval> {
    let total = intervals.len();
    let kept: Vec<NoteInterval> = intervals
        .into_iter()
        .filter(|note| {
            let inside = range.contains(note.pitch);
            if !inside {
                let (low, high) = range.names();
                log::warn!(
                    "Dropping note {} ({}) at tick {} (outside {}-{})",
                    note.pitch,
                    note_name(note.pitch),
                    note.start_tick,
                    low,
                    high
                );
            }
            inside
        })
        .collect();

    log::debug!("Kept {} of {} notes inside the pitch band", kept.len(), total);
    kept
}
