//! Error type shared by every stage of the conversion.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid MIDI data: {0}")]
    Midi(#[from] midly::Error),

    #[error("MIDI file contains no tracks")]
    NoTracks,

    #[error("SMPTE timecode timing is not supported; the file must use ticks per quarter note")]
    TimecodeTiming,

    #[error("MIDI header declares zero ticks per quarter note")]
    ZeroTicksPerQuarter,

    #[error("no notes found in {0}")]
    NoNotes(String),

    #[error("all notes were outside {low}-{high}; nothing to render")]
    AllNotesOutOfRange { low: String, high: String },

    #[error("note {pitch} ends at tick {end_tick} before it starts at tick {start_tick}")]
    InvertedInterval { pitch: u8, start_tick: u64, end_tick: u64 },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
