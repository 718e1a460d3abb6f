//! Standard MIDI File input.
//!
//! Parses an SMF with `midly` and flattens its first track into
//! [`TrackMessage`]s.  Channels are ignored and every other track is
//! skipped; the converter assumes a single monophonic voice.

use std::path::Path;

use midly::{MidiMessage, Smf, Timing, TrackEventKind};

use crate::error::ConvertError;
use crate::model::{MessageKind, TrackMessage};

/// The first track of a MIDI file, ready for note extraction.
#[derive(Debug, Clone)]
pub struct MidiSource {
    /// Ticks per quarter note declared in the file header
    pub ticks_per_quarter: u16,
    /// Number of tracks in the file (only the first is used)
    pub track_count: usize,
    pub messages: Vec<TrackMessage>,
}

impl MidiSource {
    /// Read and parse a MIDI file from disk.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ConvertError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&data)
    }

    /// Parse MIDI file bytes.
    pub fn parse(data: &[u8]) -> Result<Self, ConvertError> {
        let smf = Smf::parse(data)?;

        let ticks_per_quarter = match smf.header.timing {
            Timing::Metrical(tpq) => tpq.as_int(),
            Timing::Timecode(..) => return Err(ConvertError::TimecodeTiming),
        };
        if ticks_per_quarter == 0 {
            return Err(ConvertError::ZeroTicksPerQuarter);
        }

        let track = smf.tracks.first().ok_or(ConvertError::NoTracks)?;
        if smf.tracks.len() > 1 {
            log::debug!("Ignoring {} track(s) after the first", smf.tracks.len() - 1);
        }

        let messages = track
            .iter()
            .map(|event| TrackMessage {
                delta: event.delta.as_int(),
                kind: match event.kind {
                    TrackEventKind::Midi { message, .. } => message_kind(message),
                    _ => MessageKind::Other,
                },
            })
            .collect();

        Ok(Self {
            ticks_per_quarter,
            track_count: smf.tracks.len(),
            messages,
        })
    }
}

fn message_kind(message: MidiMessage) -> MessageKind {
    match message {
        MidiMessage::NoteOn { key, vel } => MessageKind::NoteOn {
            pitch: key.as_int(),
            velocity: vel.as_int(),
        },
        MidiMessage::NoteOff { key, .. } => MessageKind::NoteOff { pitch: key.as_int() },
        _ => MessageKind::Other,
    }
}
