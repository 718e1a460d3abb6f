//! PDF builder — buffers the page and writes it with `pdf-canvas`.
//!
//! Nothing touches the file system until [`PageSink::finish`], and the
//! document only replaces the target path once `pdf-canvas` has finished
//! it, so a failed conversion leaves no partial document.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use pdf_canvas::graphicsstate::Color;
use pdf_canvas::Pdf;

use super::display_list::{DisplayList, DrawOp};
use super::{grey_level, write_replacing, PageSink};

#[derive(Debug)]
pub struct PdfBuilder {
    path: PathBuf,
    page: DisplayList,
}

impl PdfBuilder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            page: DisplayList::new(),
        }
    }

    fn write(&self) -> io::Result<()> {
        let (width, height) = self.page.page_size().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "PDF page was never opened")
        })?;

        write_replacing(&self.path, |partial| {
            let mut pdf = Pdf::new(File::create(partial)?)?;
            pdf.render_page(width as f32, height as f32, |canvas| {
                for op in &self.page.ops {
                    match *op {
                        DrawOp::SetFillGrey(grey) => {
                            canvas.set_fill_color(Color::gray(grey_level(grey)))?;
                        }
                        DrawOp::FillRect { x, y, width, height } => {
                            canvas.rectangle(x as f32, y as f32, width as f32, height as f32)?;
                            canvas.fill()?;
                        }
                        DrawOp::BeginPage { .. } | DrawOp::Finish => {}
                    }
                }
                Ok(())
            })?;
            pdf.finish()
        })
    }
}

impl PageSink for PdfBuilder {
    fn begin_page(&mut self, width_pt: f64, height_pt: f64) -> io::Result<()> {
        self.page.begin_page(width_pt, height_pt)
    }

    fn set_fill_grey(&mut self, grey: f64) -> io::Result<()> {
        self.page.set_fill_grey(grey)
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> io::Result<()> {
        self.page.fill_rect(x, y, width, height)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.write()
    }
}
