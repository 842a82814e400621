//! Monochrome glyph bitmaps.

use crate::error::{FontError, FontResult};

/// A monochrome pixel grid, row-major, where any nonzero byte is ink.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bitmap {
    width: u16,
    height: u16,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Create a bitmap, checking that `pixels` covers exactly `width * height`.
    pub fn new(width: u16, height: u16, pixels: Vec<u8>) -> FontResult<Self> {
        if pixels.len() != width as usize * height as usize {
            return Err(FontError::BitmapSizeMismatch {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A bitmap without any pixel.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// True when the bitmap has no area.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Ink test; out-of-range coordinates are blank.
    #[inline]
    pub fn is_ink(&self, col: u16, row: u16) -> bool {
        if col >= self.width || row >= self.height {
            return false;
        }
        self.pixels[row as usize * self.width as usize + col as usize] != 0
    }

    pub fn ink_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p != 0).count()
    }

    /// Horizontal runs of consecutive ink pixels, top to bottom.
    pub fn row_runs(&self) -> impl Iterator<Item = RowRun> + '_ {
        let width = self.width as usize;
        (0..self.height).flat_map(move |row| {
            let start = row as usize * width;
            let line = &self.pixels[start..start + width];
            RowRuns {
                line,
                row,
                col: 0,
            }
        })
    }
}

/// A run of ink pixels inside one bitmap row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRun {
    pub row: u16,
    pub col: u16,
    pub len: u16,
}

struct RowRuns<'a> {
    line: &'a [u8],
    row: u16,
    col: usize,
}

impl Iterator for RowRuns<'_> {
    type Item = RowRun;

    fn next(&mut self) -> Option<RowRun> {
        while self.col < self.line.len() && self.line[self.col] == 0 {
            self.col += 1;
        }
        if self.col >= self.line.len() {
            return None;
        }
        let start = self.col;
        while self.col < self.line.len() && self.line[self.col] != 0 {
            self.col += 1;
        }
        Some(RowRun {
            row: self.row,
            col: start as u16,
            len: (self.col - start) as u16,
        })
    }
}
