//! Page renderer — draws a [`PageLayout`] onto a single vector page.
//!
//! Drawing goes through the small [`PageSink`] capability trait so the
//! layout can be checked against an in-memory [`DisplayList`] without
//! serializing a real document.  Sinks work in points with the origin at
//! the bottom-left corner of the page.

pub mod constants;
pub mod layout;
mod display_list;
mod pdf_builder;
mod svg_builder;

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use constants::CALIBRATION_MARK_MM;
pub use display_list::{DisplayList, DrawOp, FilledRect};
pub use layout::{mm_to_pt, NoteRect, PageLayout};
pub use pdf_builder::PdfBuilder;
pub use svg_builder::SvgBuilder;

// ═══════════════════════════════════════════════════════════════════════
// Sink capability
// ═══════════════════════════════════════════════════════════════════════

/// A drawing backend able to produce one page of filled rectangles.
pub trait PageSink {
    /// Open the page. Called once, before any drawing.
    fn begin_page(&mut self, width_pt: f64, height_pt: f64) -> io::Result<()>;

    /// Set the fill for following rectangles: 1.0 = white, 0.0 = black.
    fn set_fill_grey(&mut self, grey: f64) -> io::Result<()>;

    /// Fill an axis-aligned rectangle with no outline.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> io::Result<()>;

    /// Close the page and flush the document.
    fn finish(&mut self) -> io::Result<()>;
}

/// Draw the calibration mark and every note of `layout`, then finish.
///
/// Notes are drawn in layout order, so a later note covers an earlier
/// one where they overlap.
pub fn render_page<S: PageSink + ?Sized>(layout: &PageLayout, sink: &mut S) -> io::Result<()> {
    sink.begin_page(mm_to_pt(layout.width_mm), mm_to_pt(layout.height_mm))?;

    // Calibration mark
    let side = mm_to_pt(CALIBRATION_MARK_MM);
    sink.set_fill_grey(0.0)?;
    sink.fill_rect(0.0, 0.0, side, side)?;

    for note in &layout.notes {
        sink.set_fill_grey(note.grey)?;
        sink.fill_rect(
            mm_to_pt(note.x_mm),
            mm_to_pt(note.y_mm),
            mm_to_pt(note.width_mm),
            mm_to_pt(note.height_mm),
        )?;
    }

    sink.finish()
}

/// 8-bit grey level for a 0.0-1.0 fill value (255 = white).
pub(crate) fn grey_level(grey: f64) -> u8 {
    (grey.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Write `path` through a hidden sibling file that is renamed over it only
/// once `write` succeeds.  On failure the sibling is removed and `path` is
/// left as it was.
pub(crate) fn write_replacing<F>(path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&Path) -> io::Result<()>,
{
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_else(|| "output".as_ref()));
    name.push(".partial");
    let partial = path.with_file_name(name);

    match write(&partial).and_then(|()| std::fs::rename(&partial, path)) {
        Ok(()) => Ok(()),
        Err(e) => {
            std::fs::remove_file(&partial).ok();
            Err(e)
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Output formats
// ═══════════════════════════════════════════════════════════════════════

/// Document format written by [`crate::convert_file`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Pdf,
    /// Standalone SVG, mostly for on-screen preview
    Svg,
}

impl OutputFormat {
    /// Guess from a file extension: `.svg` is SVG, anything else PDF.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => OutputFormat::Svg,
            _ => OutputFormat::Pdf,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Svg => "svg",
        }
    }

    /// A sink that writes this format to `path` when finished.
    pub fn sink(self, path: impl Into<PathBuf>) -> Box<dyn PageSink> {
        match self {
            OutputFormat::Pdf => Box::new(PdfBuilder::new(path)),
            OutputFormat::Svg => Box::new(SvgBuilder::new(path)),
        }
    }
}
