//! Glyph identity, metrics and the live-edit bypass snapshot.

use std::fmt;
use std::sync::Arc;

use ibmf_core::Fix16;

use crate::bitmap::Bitmap;

/// Identifies a glyph within a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlyphCode(pub u16);

impl GlyphCode {
    /// Reserved code meaning "no glyph".
    pub const NO_GLYPH: GlyphCode = GlyphCode(0xFFFF);

    /// Reserved code returned when translating a space character.
    pub const SPACE: GlyphCode = GlyphCode(0xFFFE);

    /// True for codes that can name a real glyph.
    pub fn is_glyph(self) -> bool {
        self != Self::NO_GLYPH && self != Self::SPACE
    }
}

impl fmt::Display for GlyphCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Placement data for one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlyphMetrics {
    /// Code point the glyph was generated from.
    pub char_code: u16,
    pub bitmap_width: u16,
    pub bitmap_height: u16,
    /// Pixels from the pen origin back to the bitmap's left edge.
    pub horizontal_offset: i16,
    /// Pixels from the baseline up to the bitmap's top edge.
    pub vertical_offset: i16,
    pub advance: Fix16,
    /// Start of the glyph's lig/kern program, `None` when it has none.
    pub lig_kern_pgm_index: Option<u16>,
}

impl GlyphMetrics {
    /// Pixel step of the pen after this glyph. Always positive.
    pub fn advance_pixels(&self) -> i32 {
        let advance = self.advance.round_shift();
        if advance <= 0 {
            self.bitmap_width as i32 + 1
        } else {
            advance
        }
    }

    /// Advance in 26.6, with the same zero-advance fallback as
    /// [`advance_pixels`](Self::advance_pixels).
    pub fn advance_fix(&self) -> Fix16 {
        if self.advance.round_shift() <= 0 {
            Fix16::from_pixels(self.bitmap_width as i32 + 1)
        } else {
            self.advance
        }
    }
}

/// A glyph as handed out by a provider: code, metrics and shared bitmap.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRef {
    pub code: GlyphCode,
    pub metrics: GlyphMetrics,
    pub bitmap: Arc<Bitmap>,
}

impl GlyphRef {
    pub fn new(code: GlyphCode, metrics: GlyphMetrics, bitmap: Arc<Bitmap>) -> Self {
        Self {
            code,
            metrics,
            bitmap,
        }
    }
}

/// Immutable snapshot of a glyph being edited but not yet saved.
///
/// When passed to a layout call it replaces the provider's glyph carrying
/// the same code.
#[derive(Debug, Clone, PartialEq)]
pub struct BypassGlyph {
    glyph: GlyphRef,
}

impl BypassGlyph {
    pub fn new(code: GlyphCode, metrics: GlyphMetrics, bitmap: Arc<Bitmap>) -> Self {
        Self {
            glyph: GlyphRef::new(code, metrics, bitmap),
        }
    }

    pub fn code(&self) -> GlyphCode {
        self.glyph.code
    }

    pub fn glyph(&self) -> &GlyphRef {
        &self.glyph
    }

    pub fn matches(&self, code: GlyphCode) -> bool {
        self.glyph.code != GlyphCode::NO_GLYPH && self.glyph.code == code
    }
}

/// Where a glyph lookup is served from.
#[derive(Debug, Clone, Copy)]
pub enum GlyphSource<'a> {
    Bypass(&'a BypassGlyph),
    Provider,
}

impl<'a> GlyphSource<'a> {
    pub fn resolve(code: GlyphCode, bypass: Option<&'a BypassGlyph>) -> Self {
        match bypass {
            Some(b) if b.matches(code) => GlyphSource::Bypass(b),
            _ => GlyphSource::Provider,
        }
    }

    pub fn is_bypass(&self) -> bool {
        matches!(self, GlyphSource::Bypass(_))
    }
}
