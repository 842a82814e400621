//! An IBMF font held entirely in memory.
//!
//! The binary format and its persistence live elsewhere; this is the shape
//! such a font takes once loaded, and the provider the layout engine reads.

use std::sync::Arc;

use ibmf_core::alloc::HashMap;

use crate::bitmap::Bitmap;
use crate::error::{FontError, FontResult};
use crate::glyph::{GlyphCode, GlyphMetrics, GlyphRef};
use crate::lig_kern::{self, GlyphLigKern, LigKernAction, LigKernOutcome, LigKernStep};
use crate::provider::{FaceIndex, FaceMetrics, GlyphProvider};

/// One face (point size) of a font.
#[derive(Debug, Clone)]
pub struct MemoryFace {
    metrics: FaceMetrics,
    glyphs: HashMap<GlyphCode, GlyphRef>,
    lig_kern_steps: Vec<LigKernStep>,
}

impl MemoryFace {
    pub fn metrics(&self) -> &FaceMetrics {
        &self.metrics
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    pub fn lig_kern_steps(&self) -> &[LigKernStep] {
        &self.lig_kern_steps
    }

    /// Glyph codes present in the face, ascending.
    pub fn glyph_codes(&self) -> Vec<GlyphCode> {
        let mut codes: Vec<_> = self.glyphs.keys().copied().collect();
        codes.sort();
        codes
    }

    fn program(&self, code: GlyphCode) -> &[LigKernStep] {
        self.glyphs
            .get(&code)
            .and_then(|g| g.metrics.lig_kern_pgm_index)
            .map(|index| lig_kern::program_at(&self.lig_kern_steps, index as usize))
            .unwrap_or(&[])
    }
}

/// A multi-face font sharing one code point map.
#[derive(Debug, Clone)]
pub struct MemoryFont {
    faces: Vec<MemoryFace>,
    char_map: HashMap<char, GlyphCode>,
}

impl MemoryFont {
    pub fn builder() -> MemoryFontBuilder {
        MemoryFontBuilder::default()
    }

    pub fn face(&self, face: FaceIndex) -> Option<&MemoryFace> {
        self.faces.get(face)
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Report the characters of `text` that a face cannot show.
    ///
    /// Layout skips such characters silently; callers wanting strict
    /// behaviour check coverage first.
    pub fn coverage(&self, face: FaceIndex, text: &str) -> Coverage {
        let mut missing = Vec::new();
        for ch in text.chars() {
            if ch == ' ' || ch == '\n' || missing.contains(&ch) {
                continue;
            }
            if self.glyph(face, self.translate(ch)).is_none() {
                missing.push(ch);
            }
        }
        Coverage { missing }
    }
}

/// Characters a face is unable to display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coverage {
    /// In order of first appearance, without duplicates.
    pub missing: Vec<char>,
}

impl Coverage {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

impl GlyphProvider for MemoryFont {
    fn translate(&self, ch: char) -> GlyphCode {
        if ch == ' ' {
            return GlyphCode::SPACE;
        }
        self.char_map
            .get(&ch)
            .copied()
            .unwrap_or(GlyphCode::NO_GLYPH)
    }

    fn face_metrics(&self, face: FaceIndex) -> Option<FaceMetrics> {
        self.faces.get(face).map(|f| f.metrics)
    }

    fn glyph(&self, face: FaceIndex, code: GlyphCode) -> Option<GlyphRef> {
        self.faces.get(face)?.glyphs.get(&code).cloned()
    }

    fn lig_kern(&self, face: FaceIndex, first: GlyphCode, next: GlyphCode) -> LigKernOutcome {
        match self.faces.get(face) {
            Some(f) => lig_kern::lookup(f.program(first), next),
            None => LigKernOutcome::NoMatch,
        }
    }

    fn glyph_lig_kern(&self, face: FaceIndex, code: GlyphCode) -> Option<GlyphLigKern> {
        let f = self.faces.get(face)?;
        f.glyphs.get(&code)?;
        Some(GlyphLigKern::from_program(f.program(code)))
    }
}

/// Collects the content of one face before validation.
#[derive(Debug, Clone)]
pub struct MemoryFaceBuilder {
    metrics: FaceMetrics,
    glyphs: Vec<(GlyphCode, GlyphMetrics, Bitmap)>,
    lig_kern_steps: Vec<LigKernStep>,
}

impl MemoryFaceBuilder {
    pub fn new(metrics: FaceMetrics) -> Self {
        Self {
            metrics,
            glyphs: Vec::new(),
            lig_kern_steps: Vec::new(),
        }
    }

    pub fn glyph(mut self, code: GlyphCode, metrics: GlyphMetrics, bitmap: Bitmap) -> Self {
        self.glyphs.push((code, metrics, bitmap));
        self
    }

    pub fn lig_kern_steps(mut self, steps: Vec<LigKernStep>) -> Self {
        self.lig_kern_steps = steps;
        self
    }

    fn build(self, face: FaceIndex) -> FontResult<MemoryFace> {
        if self.metrics.line_height == 0 {
            return Err(FontError::InvalidFaceMetrics(format!(
                "face {} has a zero line height",
                face
            )));
        }

        let mut glyphs = HashMap::with_capacity(self.glyphs.len());
        for (code, metrics, bitmap) in self.glyphs {
            if !code.is_glyph() {
                return Err(FontError::InvalidGlyphCode { face, glyph: code });
            }
            if (metrics.bitmap_width, metrics.bitmap_height) != (bitmap.width(), bitmap.height()) {
                return Err(FontError::MetricsMismatch {
                    glyph: code,
                    metrics: (metrics.bitmap_width, metrics.bitmap_height),
                    bitmap: (bitmap.width(), bitmap.height()),
                });
            }
            if let Some(index) = metrics.lig_kern_pgm_index
                && index as usize >= self.lig_kern_steps.len()
            {
                return Err(FontError::InvalidLigKernIndex {
                    glyph: code,
                    index,
                    step_count: self.lig_kern_steps.len(),
                });
            }
            if glyphs
                .insert(code, GlyphRef::new(code, metrics, Arc::new(bitmap)))
                .is_some()
            {
                return Err(FontError::DuplicateGlyph { face, glyph: code });
            }
        }

        for step in &self.lig_kern_steps {
            if let LigKernAction::Ligature(replacement) = step.action
                && !glyphs.contains_key(&replacement)
            {
                return Err(FontError::InvalidGlyphCode {
                    face,
                    glyph: replacement,
                });
            }
        }

        tracing::debug!(
            "Built face {}: {} glyphs, {} lig/kern steps",
            face,
            glyphs.len(),
            self.lig_kern_steps.len()
        );

        Ok(MemoryFace {
            metrics: self.metrics,
            glyphs,
            lig_kern_steps: self.lig_kern_steps,
        })
    }
}

/// Builder for [`MemoryFont`].
///
/// ```
/// use ibmf_text::{Bitmap, FaceMetrics, GlyphCode, GlyphMetrics, MemoryFaceBuilder, MemoryFont};
/// use ibmf_core::Fix16;
///
/// let metrics = GlyphMetrics {
///     bitmap_width: 1,
///     bitmap_height: 1,
///     advance: Fix16::from_pixels(2),
///     ..Default::default()
/// };
/// let font = MemoryFont::builder()
///     .map_char('.', GlyphCode(0))
///     .face(MemoryFaceBuilder::new(FaceMetrics::default()).glyph(
///         GlyphCode(0),
///         metrics,
///         Bitmap::new(1, 1, vec![1]).unwrap(),
///     ))
///     .build()
///     .unwrap();
/// assert_eq!(font.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFontBuilder {
    char_map: Vec<(char, GlyphCode)>,
    faces: Vec<MemoryFaceBuilder>,
}

impl MemoryFontBuilder {
    pub fn map_char(mut self, ch: char, code: GlyphCode) -> Self {
        self.char_map.push((ch, code));
        self
    }

    pub fn face(mut self, face: MemoryFaceBuilder) -> Self {
        self.faces.push(face);
        self
    }

    pub fn build(self) -> FontResult<MemoryFont> {
        let mut char_map = HashMap::with_capacity(self.char_map.len());
        for (ch, code) in self.char_map {
            if char_map.insert(ch, code).is_some() {
                return Err(FontError::DuplicateCodePoint(ch));
            }
        }

        let faces = self
            .faces
            .into_iter()
            .enumerate()
            .map(|(index, face)| face.build(index))
            .collect::<FontResult<Vec<_>>>()?;

        Ok(MemoryFont { faces, char_map })
    }
}
