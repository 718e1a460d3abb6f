//! Physical layout constants for the sensor score (millimetres unless noted).
//!
//! These describe the instrument's reading head and are fixed by its
//! hardware; none of them is user-configurable.

// ── Time axis ───────────────────────────────────────────────────────
/// Horizontal length of one quarter note.
pub const MM_PER_QUARTER: f64 = 7.0;
/// Offset of tick 0 from the left page edge.
pub const START_OFFSET_MM: f64 = 23.0;
/// Blank space after the end of the last note.
pub const RIGHT_MARGIN_MM: f64 = 10.0;

// ── Pitch axis ──────────────────────────────────────────────────────
/// Physical length of the sensor pitch band.
pub const PITCH_BAND_MM: f64 = 216.7;
/// Sensor points across the whole band.
pub const SENSOR_POINTS: u32 = 3456;
pub const SEMITONES_PER_OCTAVE: u8 = 12;
pub const BAND_OCTAVES: u8 = 8;
pub const BAND_SEMITONES: u8 = SEMITONES_PER_OCTAVE * BAND_OCTAVES;
/// Sensor points per semitone (36).
pub const POINTS_PER_SEMITONE: u32 = SENSOR_POINTS / BAND_SEMITONES as u32;
/// Height of one sensor point (~0.0627 mm).
pub const MM_PER_POINT: f64 = PITCH_BAND_MM / SENSOR_POINTS as f64;
/// Offset of the band origin above the bottom page edge.
pub const BOTTOM_OFFSET_MM: f64 = 49.5;
/// MIDI note at the bottom of the band (C1).
pub const LOWEST_PITCH: u8 = 24;
/// MIDI note at the top of the band (B8).
pub const HIGHEST_PITCH: u8 = LOWEST_PITCH + BAND_SEMITONES - 1;

// ── Marks ───────────────────────────────────────────────────────────
/// Printed thickness of every note bar.
pub const NOTE_HEIGHT_MM: f64 = 0.25;
/// Side of the black calibration square at the page origin.
pub const CALIBRATION_MARK_MM: f64 = 1.0;

// ── Page ────────────────────────────────────────────────────────────
/// Fixed page height (A4 portrait).
pub const PAGE_HEIGHT_MM: f64 = 297.0;
/// Millimetres to PostScript points.
pub const MM_TO_PT: f64 = 72.0 / 25.4;
