//! The glyph provider capability consumed by layout and kerning.

use ibmf_core::Fix16;

use crate::glyph::{GlyphCode, GlyphRef};
use crate::lig_kern::{GlyphLigKern, LigKernOutcome};

/// Index of a face (a point size) within a font.
pub type FaceIndex = usize;

/// Face-level constants, mirroring the IBMF face header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceMetrics {
    pub point_size: u8,
    /// Baseline to baseline distance in pixels.
    pub line_height: u16,
    pub dpi: u16,
    pub x_height: Fix16,
    pub em_size: Fix16,
    pub slant_correction: Fix16,
    /// Pixels below the baseline reserved for descenders.
    pub descender_height: u16,
    /// Width of a space character in pixels.
    pub space_size: u16,
}

impl FaceMetrics {
    /// Em size in whole pixels (truncated, as the IBMF tools do).
    pub fn em_pixels(&self) -> i32 {
        self.em_size.raw() >> 6
    }
}

impl Default for FaceMetrics {
    fn default() -> Self {
        Self {
            point_size: 12,
            line_height: 20,
            dpi: 150,
            x_height: Fix16::from_pixels(8),
            em_size: Fix16::from_pixels(16),
            slant_correction: Fix16::ZERO,
            descender_height: 5,
            space_size: 5,
        }
    }
}

/// Source of glyphs, face constants and lig/kern programs.
///
/// Implementations own the font data. Layout only reads through this trait
/// and never mutates the provider.
pub trait GlyphProvider {
    /// Map a code point to a glyph code, `GlyphCode::NO_GLYPH` when unmapped.
    fn translate(&self, ch: char) -> GlyphCode;

    fn face_metrics(&self, face: FaceIndex) -> Option<FaceMetrics>;

    /// Metrics and bitmap of a glyph, `None` when absent.
    fn glyph(&self, face: FaceIndex, code: GlyphCode) -> Option<GlyphRef>;

    /// One lookup in `first`'s lig/kern program against `next`.
    ///
    /// Callers walk `Ligature` results as a chain.
    fn lig_kern(&self, face: FaceIndex, first: GlyphCode, next: GlyphCode) -> LigKernOutcome;

    /// The ligature and kern steps of a glyph's program, split apart.
    fn glyph_lig_kern(&self, face: FaceIndex, code: GlyphCode) -> Option<GlyphLigKern> {
        let _ = (face, code);
        None
    }
}

impl<P: GlyphProvider + ?Sized> GlyphProvider for &P {
    fn translate(&self, ch: char) -> GlyphCode {
        (**self).translate(ch)
    }

    fn face_metrics(&self, face: FaceIndex) -> Option<FaceMetrics> {
        (**self).face_metrics(face)
    }

    fn glyph(&self, face: FaceIndex, code: GlyphCode) -> Option<GlyphRef> {
        (**self).glyph(face, code)
    }

    fn lig_kern(&self, face: FaceIndex, first: GlyphCode, next: GlyphCode) -> LigKernOutcome {
        (**self).lig_kern(face, first, next)
    }

    fn glyph_lig_kern(&self, face: FaceIndex, code: GlyphCode) -> Option<GlyphLigKern> {
        (**self).glyph_lig_kern(face, code)
    }
}
