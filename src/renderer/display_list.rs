//! In-memory sink that records drawing operations.

use std::io;

use super::PageSink;

/// A single recorded call on a [`PageSink`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    BeginPage { width: f64, height: f64 },
    SetFillGrey(f64),
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    Finish,
}

/// A filled rectangle together with the grey it was drawn in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilledRect {
    pub grey: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    pub ops: Vec<DrawOp>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page size from the first `BeginPage`, if any.
    pub fn page_size(&self) -> Option<(f64, f64)> {
        self.ops.iter().find_map(|op| match *op {
            DrawOp::BeginPage { width, height } => Some((width, height)),
            _ => None,
        })
    }

    /// Every rectangle with the fill grey active when it was drawn.
    /// Fill starts out black, as in PDF.
    pub fn filled_rects(&self) -> Vec<FilledRect> {
        let mut grey = 0.0;
        let mut rects = Vec::new();
        for op in &self.ops {
            match *op {
                DrawOp::SetFillGrey(g) => grey = g,
                DrawOp::FillRect { x, y, width, height } => {
                    rects.push(FilledRect { grey, x, y, width, height });
                }
                DrawOp::BeginPage { .. } | DrawOp::Finish => {}
            }
        }
        rects
    }
}

impl PageSink for DisplayList {
    fn begin_page(&mut self, width_pt: f64, height_pt: f64) -> io::Result<()> {
        self.ops.push(DrawOp::BeginPage { width: width_pt, height: height_pt });
        Ok(())
    }

    fn set_fill_grey(&mut self, grey: f64) -> io::Result<()> {
        self.ops.push(DrawOp::SetFillGrey(grey));
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> io::Result<()> {
        self.ops.push(DrawOp::FillRect { x, y, width, height });
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.ops.push(DrawOp::Finish);
        Ok(())
    }
}
