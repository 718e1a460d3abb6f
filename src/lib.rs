//! sp3ctra_score — turns a monophonic MIDI file into a printable sensor score.
//!
//! Pitch becomes vertical position on the instrument's sensor band, time
//! becomes horizontal position at a fixed width per quarter note, and
//! velocity becomes grey ink.  The result is a single PDF (or SVG) page
//! whose width grows with the piece.
//!
//! # Example
//! ```no_run
//! use sp3ctra_score::{convert_file, ConvertOptions};
//!
//! let layout = convert_file("midi/song.mid", "pdf/song.pdf", &ConvertOptions::default()).unwrap();
//! println!("{} notes, {:.1} mm wide", layout.notes.len(), layout.width_mm);
//! ```

pub mod error;
pub mod extract;
pub mod filter;
pub mod midi;
pub mod model;
pub mod renderer;

#[cfg(test)]
mod test_log;

use std::path::{Path, PathBuf};

pub use error::ConvertError;
pub use extract::{extract_notes, OverlapPolicy};
pub use filter::{filter_to_range, PitchRange};
pub use midi::MidiSource;
pub use model::*;
pub use renderer::constants;
pub use renderer::{render_page, DisplayList, OutputFormat, PageLayout, PageSink};

/// Run-time choices for one conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// How a note-on for an already sounding pitch is handled
    pub overlap: OverlapPolicy,
    /// Pitches that survive the range filter
    pub pitch_range: PitchRange,
    /// Output document format. `None` infers it from the output path.
    pub format: Option<OutputFormat>,
}

/// Extract, filter and lay out the notes of an already parsed source.
///
/// `source_name` only appears in error messages.
pub fn layout_source(
    source: &MidiSource,
    source_name: &str,
    options: &ConvertOptions,
) -> Result<PageLayout, ConvertError> {
    let raw = extract_notes(&source.messages, options.overlap);
    log::debug!("Extracted {} notes from {}", raw.len(), source_name);
    if raw.is_empty() {
        return Err(ConvertError::NoNotes(source_name.to_string()));
    }

    let notes = filter_to_range(raw, &options.pitch_range);
    if notes.is_empty() {
        let (low, high) = options.pitch_range.names();
        return Err(ConvertError::AllNotesOutOfRange { low, high });
    }

    PageLayout::compute(&notes, source.ticks_per_quarter, &options.pitch_range)
}

/// Parse MIDI bytes and lay out their first track.
pub fn layout_bytes(
    data: &[u8],
    source_name: &str,
    options: &ConvertOptions,
) -> Result<PageLayout, ConvertError> {
    let source = MidiSource::parse(data)?;
    layout_source(&source, source_name, options)
}

/// Read a MIDI file and lay out its first track.
pub fn layout_file<P: AsRef<Path>>(
    path: P,
    options: &ConvertOptions,
) -> Result<PageLayout, ConvertError> {
    let path = path.as_ref();
    let source = MidiSource::read(path)?;
    layout_source(&source, &path.display().to_string(), options)
}

/// Convert `input` into a one-page document at `output`.
///
/// The output directory is created if needed.  Nothing is written when
/// the input has no notes or none inside the pitch band.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &ConvertOptions,
) -> Result<PageLayout, ConvertError> {
    let output = output.as_ref();
    let layout = layout_file(input, options)?;

    let write_err = |source| ConvertError::Write { path: output.to_path_buf(), source };
    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(write_err)?;
    }

    let format = options.format.unwrap_or_else(|| OutputFormat::from_path(output));
    let mut sink = format.sink(output);
    render_page(&layout, sink.as_mut()).map_err(write_err)?;

    log::info!(
        "Written {} - {:.1} mm x {:.1} mm | start offset {:.1} mm | bottom offset {:.1} mm",
        output.display(),
        layout.width_mm,
        layout.height_mm,
        constants::START_OFFSET_MM,
        constants::BOTTOM_OFFSET_MM,
    );

    Ok(layout)
}

/// Default output location: a `pdf` directory beside the input's parent.
///
/// `scores/midi/song.mid` becomes `scores/pdf/song.pdf`.
pub fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    let parent = input.parent().unwrap_or_else(|| Path::new(""));
    let base = parent.parent().unwrap_or(parent);
    let stem = input.file_stem().unwrap_or_else(|| "output".as_ref());

    let mut file_name = stem.to_os_string();
    file_name.push(".");
    file_name.push(format.extension());
    base.join("pdf").join(file_name)
}

/// Convert a computed layout to a JSON string.
pub fn layout_to_json(layout: &PageLayout) -> Result<String, ConvertError> {
    Ok(serde_json::to_string_pretty(layout)?)
}
