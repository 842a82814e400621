//! Glyph bitmaps drawn as text, and laid-out text rendered back to text.
//!
//! Art rows use `#` or `X` for ink and anything else for background. All
//! rows must have the same length.

use ibmf_core::Fix16;
use ibmf_text::{Bitmap, GlyphCode, GlyphMetrics, GlyphRef, LayoutResult};
use std::sync::Arc;

/// Build a bitmap from rows of art.
///
/// # Panics
///
/// Panics when rows differ in length.
pub fn bitmap_from_art(rows: &[&str]) -> Bitmap {
    let width = rows.first().map_or(0, |r| r.chars().count());
    let mut pixels = Vec::with_capacity(width * rows.len());
    for row in rows {
        assert_eq!(row.chars().count(), width, "ragged glyph art: {:?}", row);
        pixels.extend(row.chars().map(|c| u8::from(c == '#' || c == 'X')));
    }
    Bitmap::new(width as u16, rows.len() as u16, pixels).expect("art dimensions match pixels")
}

/// Metrics for a bitmap sitting on the baseline with the given advance.
pub fn metrics_for(bitmap: &Bitmap, advance: i32) -> GlyphMetrics {
    GlyphMetrics {
        bitmap_width: bitmap.width(),
        bitmap_height: bitmap.height(),
        vertical_offset: bitmap.height() as i16,
        advance: Fix16::from_pixels(advance),
        ..Default::default()
    }
}

/// A glyph drawn as art, sitting on the baseline.
pub fn glyph_from_art(code: u16, rows: &[&str], advance: i32) -> GlyphRef {
    let bitmap = bitmap_from_art(rows);
    let metrics = metrics_for(&bitmap, advance);
    GlyphRef::new(GlyphCode(code), metrics, Arc::new(bitmap))
}

/// A solid rectangle of ink sitting on the baseline.
pub fn block_glyph(code: u16, width: u16, height: u16, advance: i32) -> GlyphRef {
    let bitmap = Bitmap::new(width, height, vec![1; width as usize * height as usize])
        .expect("block dimensions match pixels");
    let metrics = metrics_for(&bitmap, advance);
    GlyphRef::new(GlyphCode(code), metrics, Arc::new(bitmap))
}

/// Character canvas for eyeballing layout output.
///
/// Each device pixel becomes one character: `#` for ink, `.` otherwise.
#[derive(Debug, Clone)]
pub struct AsciiCanvas {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl AsciiCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// A canvas sized to the result, with every placement's ink painted.
    pub fn from_layout(result: &LayoutResult) -> Self {
        let mut canvas = Self::new(result.size.width as usize, result.size.height as usize);
        for placement in &result.placements {
            for run in placement.ink_runs() {
                canvas.fill(run.x, run.y, run.width, run.height);
            }
        }
        canvas
    }

    /// Paint a rectangle, clipped to the canvas.
    pub fn fill(&mut self, x: i32, y: i32, width: i32, height: i32) {
        for row in y.max(0)..y.saturating_add(height).min(self.height as i32) {
            for col in x.max(0)..x.saturating_add(width).min(self.width as i32) {
                self.cells[row as usize * self.width + col as usize] = true;
            }
        }
    }

    pub fn is_ink(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[y * self.width + x]
    }

    pub fn ink_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Rows as strings, top to bottom.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1))
            .take(self.height)
            .map(|row| row.iter().map(|&c| if c { '#' } else { '.' }).collect())
            .collect()
    }
}

impl std::fmt::Display for AsciiCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
