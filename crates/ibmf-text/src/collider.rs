//! Optical kerning.
//!
//! The first glyph is stamped into a scratch raster; the second one then
//! slides leftwards from its nominal position, one pixel per trial, until
//! one of its ink pixels touches (or sits vertically next to) ink of the
//! first glyph. The slide distance, padded by a minimum gap, becomes the
//! kern value.

use std::fmt;

use ibmf_core::profiling::profile_function;
use ibmf_core::Fix16;

use crate::glyph::GlyphRef;
use crate::provider::FaceMetrics;

/// Default minimum gap, in pixels, kept between two kerned glyphs.
pub const DEFAULT_KERNING_SIZE: i32 = 1;

/// Horizontal position of the first glyph's pen origin in the raster.
const ORIGIN_X: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    /// Ink of the first glyph.
    Ink,
    /// Where the second glyph met the first.
    Hit,
    /// Tested by the second glyph without contact.
    Probe,
}

/// Bounds-checked scratch raster. Reads outside are empty, writes are dropped.
struct ScratchRaster {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl ScratchRaster {
    fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; (width * height) as usize],
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            None
        } else {
            Some((y * self.width + x) as usize)
        }
    }

    #[inline]
    fn get(&self, x: i32, y: i32) -> Cell {
        self.index(x, y).map(|i| self.cells[i]).unwrap_or(Cell::Empty)
    }

    #[inline]
    fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    fn stamp(&mut self, glyph: &GlyphRef, pen_x: i32, baseline: i32) {
        let bitmap = &glyph.bitmap;
        let left = pen_x - glyph.metrics.horizontal_offset as i32;
        let top = baseline - glyph.metrics.vertical_offset as i32;
        for row in 0..bitmap.height() {
            for col in 0..bitmap.width() {
                if bitmap.is_ink(col, row) {
                    self.set(left + col as i32, top + row as i32, Cell::Ink);
                }
            }
        }
    }

    /// Test every ink pixel of `glyph` at the given pen position. Returns
    /// true on contact with the stamped glyph.
    fn probe(&mut self, glyph: &GlyphRef, pen_x: i32, baseline: i32) -> bool {
        let bitmap = &glyph.bitmap;
        let left = pen_x - glyph.metrics.horizontal_offset as i32;
        let top = baseline - glyph.metrics.vertical_offset as i32;
        for col in 0..bitmap.width() {
            for row in 0..bitmap.height() {
                if !bitmap.is_ink(col, row) {
                    continue;
                }
                let x = left + col as i32;
                let y = top + row as i32;
                for ny in [y, y - 1, y + 1] {
                    if self.get(x, ny) == Cell::Ink {
                        self.set(x, ny, Cell::Hit);
                        return true;
                    }
                }
                self.set(x, y, Cell::Probe);
            }
        }
        false
    }
}

impl fmt::Display for ScratchRaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "-".repeat(self.width as usize);
        writeln!(f, "+{}+", border)?;
        for y in 0..self.height {
            f.write_str("|")?;
            for x in 0..self.width {
                let ch = match self.get(x, y) {
                    Cell::Empty => ' ',
                    Cell::Ink => 'X',
                    Cell::Hit => '*',
                    Cell::Probe => '?',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "+{}+", border)
    }
}

/// Estimate the kerning between two adjacent glyphs from their ink.
///
/// Returns `(slide + min_gap + 1)` pixels in 26.6, saturating, where `slide` is the
/// (non-positive) number of pixels the second glyph moved left before
/// touching the first. Returns zero when the glyphs never touch within
/// `advance - 1` trials, or when either bitmap is empty.
pub fn estimate_kerning(
    first: &GlyphRef,
    second: &GlyphRef,
    face: &FaceMetrics,
    min_gap: i32,
) -> Fix16 {
    profile_function!();

    if first.bitmap.is_empty() || second.bitmap.is_empty() {
        return Fix16::ZERO;
    }

    let advance = first.metrics.advance_pixels();
    let (m1, m2) = (&first.metrics, &second.metrics);
    let (b1, b2) = (&first.bitmap, &second.bitmap);

    // Nominal raster is twice the em wide and two lines high, grown so that
    // both glyphs always land fully inside it.
    let origin_x = ORIGIN_X
        .max(m1.horizontal_offset as i32)
        .max(m2.horizontal_offset as i32 - 1);
    let right = (origin_x - m1.horizontal_offset as i32 + b1.width() as i32)
        .max(origin_x + advance - m2.horizontal_offset as i32 + b2.width() as i32);
    let width = (face.em_pixels() * 2).max(right + 1);

    let nominal_height = face.line_height as i32 * 2;
    let baseline = ((nominal_height / 3) * 2)
        .max(m1.vertical_offset as i32 + 1)
        .max(m2.vertical_offset as i32 + 1);
    let bottom = (baseline - m1.vertical_offset as i32 + b1.height() as i32)
        .max(baseline - m2.vertical_offset as i32 + b2.height() as i32);
    let height = nominal_height.max(bottom + 1);

    let mut raster = ScratchRaster::new(width, height);
    raster.stamp(first, origin_x, baseline);

    let mut pen_x = origin_x + advance;
    let mut slide: i32 = 0;
    let mut budget = advance - 1;
    let mut collided = false;

    while budget > 0 {
        if raster.probe(second, pen_x, baseline) {
            collided = true;
            break;
        }
        pen_x -= 1;
        slide -= 1;
        budget -= 1;
    }

    if tracing::enabled!(tracing::Level::TRACE) {
        tracing::trace!(
            "Optical kerning {} + {}: slide {}, collided {}\n{}",
            first.code,
            second.code,
            slide,
            collided,
            raster
        );
    }

    if collided {
        Fix16::from_pixels(slide.saturating_add(min_gap).saturating_add(1))
    } else {
        Fix16::ZERO
    }
}
