//! SVG builder — accumulates SVG elements and produces the final string.
//!
//! SVG's y axis points down, so every rectangle is flipped against the
//! page height to keep the sink's bottom-left origin.

use std::io;
use std::path::PathBuf;

use super::{grey_level, write_replacing, PageSink};

pub struct SvgBuilder {
    path: PathBuf,
    pub(super) elements: Vec<String>,
    width: f64,
    height: f64,
    fill: String,
}

impl SvgBuilder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            elements: Vec::new(),
            width: 0.0,
            height: 0.0,
            fill: grey_fill(0.0),
        }
    }

    /// The complete document for everything drawn so far.
    pub fn build(&self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {:.2} {:.2}" width="{:.2}pt" height="{:.2}pt">"#,
            self.width, self.height, self.width, self.height
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }
}

impl PageSink for SvgBuilder {
    fn begin_page(&mut self, width_pt: f64, height_pt: f64) -> io::Result<()> {
        self.width = width_pt;
        self.height = height_pt;
        self.elements.clear();
        // Paper
        self.elements.push(format!(
            r#"<rect x="0" y="0" width="{:.2}" height="{:.2}" fill="white"/>"#,
            width_pt, height_pt
        ));
        Ok(())
    }

    fn set_fill_grey(&mut self, grey: f64) -> io::Result<()> {
        self.fill = grey_fill(grey);
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> io::Result<()> {
        self.elements.push(format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
            x,
            self.height - y - height,
            width,
            height,
            self.fill
        ));
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        let doc = self.build();
        write_replacing(&self.path, |partial| std::fs::write(partial, doc))
    }
}

fn grey_fill(grey: f64) -> String {
    let level = grey_level(grey);
    format!("#{level:02x}{level:02x}{level:02x}")
}
