//! Layout computation — maps tick/pitch intervals onto the physical page.
//!
//! Every mapping here is a pure function of the constants in
//! [`super::constants`], so the page geometry can be checked without
//! touching a drawing backend.

use serde::{Deserialize, Serialize};

use super::constants::*;
use crate::error::ConvertError;
use crate::filter::PitchRange;
use crate::model::NoteInterval;

// ═══════════════════════════════════════════════════════════════════════
// Layout structures
// ═══════════════════════════════════════════════════════════════════════

/// One note bar in page millimetres, origin at the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoteRect {
    pub pitch: u8,
    pub velocity: u8,
    pub x_mm: f64,
    pub y_mm: f64,
    pub width_mm: f64,
    pub height_mm: f64,
    /// Fill grey, 1.0 = white (no ink), 0.0 = black
    pub grey: f64,
}

/// The whole page: its size plus one rectangle per note, in drawing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub width_mm: f64,
    pub height_mm: f64,
    pub mm_per_tick: f64,
    pub ticks_per_quarter: u16,
    pub notes: Vec<NoteRect>,
}

impl PageLayout {
    /// Lay out `intervals` for a source with `ticks_per_quarter` resolution.
    ///
    /// Notes keep their input order.  An interval that ends before it
    /// starts is rejected rather than drawn with a negative width.
    pub fn compute(
        intervals: &[NoteInterval],
        ticks_per_quarter: u16,
        range: &PitchRange,
    ) -> Result<Self, ConvertError> {
        if ticks_per_quarter == 0 {
            return Err(ConvertError::ZeroTicksPerQuarter);
        }
        let scale = mm_per_tick(ticks_per_quarter);

        let notes = intervals
            .iter()
            .map(|note| {
                if note.end_tick < note.start_tick {
                    return Err(ConvertError::InvertedInterval {
                        pitch: note.pitch,
                        start_tick: note.start_tick,
                        end_tick: note.end_tick,
                    });
                }
                Ok(NoteRect {
                    pitch: note.pitch,
                    velocity: note.velocity,
                    x_mm: tick_to_x_mm(note.start_tick, scale),
                    y_mm: pitch_to_y_mm(note.pitch, range.lowest),
                    width_mm: note.duration_ticks() as f64 * scale,
                    height_mm: NOTE_HEIGHT_MM,
                    grey: velocity_to_grey(note.velocity),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            width_mm: page_width_mm(intervals, scale),
            height_mm: PAGE_HEIGHT_MM,
            mm_per_tick: scale,
            ticks_per_quarter,
            notes,
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Unit mappings
// ═══════════════════════════════════════════════════════════════════════

/// Millimetres per tick for a source resolution.
pub fn mm_per_tick(ticks_per_quarter: u16) -> f64 {
    MM_PER_QUARTER / f64::from(ticks_per_quarter)
}

/// Horizontal page position of an absolute tick.
pub fn tick_to_x_mm(tick: u64, mm_per_tick: f64) -> f64 {
    START_OFFSET_MM + tick as f64 * mm_per_tick
}

/// Vertical page position of a pitch, measured from the bottom edge.
///
/// `lowest` lands exactly on [`BOTTOM_OFFSET_MM`]; each semitone above it
/// adds [`POINTS_PER_SEMITONE`] sensor points.
pub fn pitch_to_y_mm(pitch: u8, lowest: u8) -> f64 {
    let semitones = f64::from(pitch) - f64::from(lowest);
    BOTTOM_OFFSET_MM + semitones * f64::from(POINTS_PER_SEMITONE) * MM_PER_POINT
}

/// Linear velocity → grey: 0 is white (1.0), 127 is black (0.0).
pub fn velocity_to_grey(velocity: u8) -> f64 {
    1.0 - f64::from(velocity.min(127)) / 127.0
}

/// Page width: left offset, the furthest note end, and the right margin.
pub fn page_width_mm(intervals: &[NoteInterval], mm_per_tick: f64) -> f64 {
    let last_tick = intervals.iter().map(|n| n.end_tick).max().unwrap_or(0);
    tick_to_x_mm(last_tick, mm_per_tick) + RIGHT_MARGIN_MM
}

/// Millimetres to the output format's native unit (points).
pub fn mm_to_pt(mm: f64) -> f64 {
    mm * MM_TO_PT
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EPS: f64 = 1e-9;

    #[test]
    fn derived_constants() {
        assert_eq!(POINTS_PER_SEMITONE, 36);
        assert_eq!(HIGHEST_PITCH, 119);
        assert!((MM_PER_POINT - 0.062_702_546).abs() < 1e-8);
    }

    #[test]
    fn velocity_grey_endpoints_and_midpoint() {
        assert_eq!(velocity_to_grey(0), 1.0);
        assert_eq!(velocity_to_grey(127), 0.0);
        assert!((velocity_to_grey(64) - 0.496).abs() < 1e-3);
        assert!((velocity_to_grey(100) - 0.213).abs() < 1e-3);
    }

    #[test]
    fn velocity_grey_is_decreasing() {
        for v in 0..127u8 {
            assert!(velocity_to_grey(v) > velocity_to_grey(v + 1));
        }
    }

    #[test]
    fn lowest_pitch_sits_on_bottom_offset() {
        assert_eq!(pitch_to_y_mm(LOWEST_PITCH, LOWEST_PITCH), BOTTOM_OFFSET_MM);
    }

    #[test]
    fn pitch_mapping_is_linear_and_increasing() {
        let step = f64::from(POINTS_PER_SEMITONE) * MM_PER_POINT;
        for p in LOWEST_PITCH..HIGHEST_PITCH {
            let gap = pitch_to_y_mm(p + 1, LOWEST_PITCH) - pitch_to_y_mm(p, LOWEST_PITCH);
            assert!((gap - step).abs() < EPS);
        }
        // The top of the band stays inside the band length.
        let top = pitch_to_y_mm(HIGHEST_PITCH, LOWEST_PITCH) - BOTTOM_OFFSET_MM;
        assert!(top < PITCH_BAND_MM);
    }

    #[test]
    fn quarter_note_is_fixed_width() {
        for tpq in [96u16, 480, 960] {
            let scale = mm_per_tick(tpq);
            assert!((f64::from(tpq) * scale - MM_PER_QUARTER).abs() < EPS);
            assert_eq!(tick_to_x_mm(0, scale), START_OFFSET_MM);
        }
    }

    #[test]
    fn page_width_uses_latest_end() {
        let notes = [
            NoteInterval::new(60, 100, 0, 960),
            NoteInterval::new(62, 100, 100, 480),
        ];
        let width = page_width_mm(&notes, mm_per_tick(480));
        assert!((width - (START_OFFSET_MM + 2.0 * MM_PER_QUARTER + RIGHT_MARGIN_MM)).abs() < EPS);
    }

    #[test]
    fn compute_maps_each_note() {
        let notes = [
            NoteInterval::new(60, 100, 0, 480),
            NoteInterval::new(24, 127, 480, 480),
        ];
        let layout = PageLayout::compute(&notes, 480, &PitchRange::SENSOR_BAND).unwrap();

        assert_eq!(layout.height_mm, PAGE_HEIGHT_MM);
        assert_eq!(layout.notes.len(), 2);

        let first = layout.notes[0];
        assert_eq!(first.x_mm, START_OFFSET_MM);
        assert!((first.width_mm - MM_PER_QUARTER).abs() < EPS);
        assert_eq!(first.height_mm, NOTE_HEIGHT_MM);
        assert!((first.y_mm - (BOTTOM_OFFSET_MM + 36.0 * 36.0 * MM_PER_POINT)).abs() < EPS);

        let second = layout.notes[1];
        assert_eq!(second.width_mm, 0.0);
        assert_eq!(second.y_mm, BOTTOM_OFFSET_MM);
        assert_eq!(second.grey, 0.0);
    }

    #[test]
    fn compute_rejects_inverted_interval() {
        let notes = [NoteInterval::new(60, 100, 500, 400)];
        let result = PageLayout::compute(&notes, 480, &PitchRange::SENSOR_BAND);
        assert!(matches!(
            result,
            Err(ConvertError::InvertedInterval { pitch: 60, start_tick: 500, end_tick: 400 })
        ));
    }

    #[test]
    fn mm_to_pt_inch() {
        assert!((mm_to_pt(25.4) - 72.0).abs() < EPS);
    }
}
