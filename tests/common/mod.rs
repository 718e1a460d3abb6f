//! Helpers shared by the integration tests: Standard MIDI Files built
//! with midly's writer, and scratch output directories.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use midly::num::{u15, u28, u4, u7};
use midly::{Format, Header, MetaMessage, MidiMessage, Smf, Timing, TrackEvent, TrackEventKind};

pub const TICKS_PER_QUARTER: u16 = 480;

/// A single MIDI message at an absolute tick.
#[derive(Debug, Clone, Copy)]
pub struct MidiEvent {
    pub tick: u32,
    pub message: MidiMessage,
}

pub fn note_on(tick: u32, pitch: u8, velocity: u8) -> MidiEvent {
    MidiEvent {
        tick,
        message: MidiMessage::NoteOn { key: u7::new(pitch), vel: u7::new(velocity) },
    }
}

pub fn note_off(tick: u32, pitch: u8) -> MidiEvent {
    MidiEvent {
        tick,
        message: MidiMessage::NoteOff { key: u7::new(pitch), vel: u7::new(0) },
    }
}

/// Assemble a type 1 file with one track per event list (events in tick order).
pub fn smf(ticks_per_quarter: u16, tracks: &[Vec<MidiEvent>]) -> Smf<'static> {
    let mut smf = Smf::new(Header::new(
        Format::Parallel,
        Timing::Metrical(u15::new(ticks_per_quarter)),
    ));
    for events in tracks {
        let mut last_tick = 0;
        let mut track: Vec<TrackEvent<'static>> = events
            .iter()
            .map(|event| {
                let delta = event.tick - last_tick;
                last_tick = event.tick;
                TrackEvent {
                    delta: u28::new(delta),
                    kind: TrackEventKind::Midi { channel: u4::new(0), message: event.message },
                }
            })
            .collect();
        track.push(TrackEvent {
            delta: u28::new(0),
            kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
        });
        smf.tracks.push(track);
    }
    smf
}

/// Encode the file built by [`smf`] to bytes.
pub fn build_smf(ticks_per_quarter: u16, tracks: &[Vec<MidiEvent>]) -> Vec<u8> {
    let mut buf = Vec::new();
    smf(ticks_per_quarter, tracks).write_std(&mut buf).unwrap();
    buf
}

/// A clean per-test directory under `test_output/`.
pub fn output_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_output").join(name);
    std::fs::remove_dir_all(&dir).ok();
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Save an SMF into `dir` and return its path.
pub fn write_midi(dir: &Path, file_name: &str, tracks: &[Vec<MidiEvent>]) -> PathBuf {
    let path = dir.join(file_name);
    smf(TICKS_PER_QUARTER, tracks).save(&path).unwrap();
    path
}
