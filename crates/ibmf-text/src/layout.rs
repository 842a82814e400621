//! Word-wrapping text layout over a glyph provider.
//!
//! Text is consumed one code point at a time. Glyphs accumulate into a word
//! until a space, a newline or the end of the text flushes it onto the
//! current line. Between adjacent glyphs of a word, the lig/kern program of
//! the left glyph may substitute a ligature or supply a kern; optical
//! kerning fills in for pairs the program does not cover.
//!
//! Pen positions are in font pixels with the baseline of the first line at
//! `line_height`. Placements are reported in device pixels, i.e. multiplied
//! by the pixel scale. Position arithmetic saturates rather than wrapping.

use std::sync::Arc;

use ibmf_core::profiling::profile_function;
use ibmf_core::{Fix16, Pos, Rect, Size};

use crate::bitmap::Bitmap;
use crate::cache::OpticalKerningCache;
use crate::collider::estimate_kerning;
use crate::glyph::{BypassGlyph, GlyphCode, GlyphRef, GlyphSource};
use crate::lig_kern::resolve_chain;
use crate::options::{KerningMode, LayoutOptions};
use crate::provider::{FaceIndex, FaceMetrics, GlyphProvider};

/// Where the layout stands relative to words and lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineState {
    /// Nothing placed since the last explicit newline; spaces are swallowed.
    StartOfLine,
    /// Collecting glyphs into a word.
    InWord,
    /// Just after a space.
    AtWhitespace,
}

/// A glyph waiting in a word, with the kern to apply before it.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutGlyph {
    pub glyph: GlyphRef,
    pub kern: Fix16,
}

impl LaidOutGlyph {
    /// Pixel contribution of the glyph to its word's width.
    pub fn width(&self) -> i32 {
        (self.glyph.metrics.advance_fix() + self.kern).round_shift()
    }
}

#[derive(Debug, Default)]
struct Word {
    glyphs: Vec<LaidOutGlyph>,
    width: i32,
}

impl Word {
    fn push(&mut self, glyph: LaidOutGlyph) {
        self.width = self.width.saturating_add(glyph.width());
        self.glyphs.push(glyph);
    }

    fn pop(&mut self) -> Option<LaidOutGlyph> {
        let glyph = self.glyphs.pop()?;
        self.width = self.width.saturating_sub(glyph.width());
        Some(glyph)
    }

    fn last(&self) -> Option<&LaidOutGlyph> {
        self.glyphs.last()
    }

    fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// A glyph positioned on the output surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub glyph: GlyphCode,
    pub bitmap: Arc<Bitmap>,
    /// Pen position (baseline origin) in font pixels.
    pub origin: Pos<i32>,
    /// Bitmap bounds in device pixels.
    pub rect: Rect<i32>,
    pub scale: u32,
    /// Zero-based line index.
    pub line: u32,
}

impl Placement {
    /// Device-pixel rectangles covering the glyph's ink, one per horizontal
    /// run of a bitmap row.
    pub fn ink_runs(&self) -> impl Iterator<Item = Rect<i32>> + '_ {
        let s = self.scale.min(i32::MAX as u32) as i32;
        self.bitmap.row_runs().map(move |run| {
            Rect::new(
                self.rect.x.saturating_add((run.col as i32).saturating_mul(s)),
                self.rect.y.saturating_add((run.row as i32).saturating_mul(s)),
                (run.len as i32).saturating_mul(s),
                s,
            )
        })
    }
}

/// Outcome of a layout pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutResult {
    /// Content size in device pixels.
    pub size: Size<u32>,
    pub lines: u32,
    /// Glyphs placed.
    pub glyph_count: usize,
    /// Code points skipped for lack of a glyph.
    pub skipped: usize,
    /// Filled by [`TextLayout::layout`] only.
    pub placements: Vec<Placement>,
}

/// Pen, word and counters of one pass. Created fresh by every call.
struct LayoutState<'s> {
    pen: Pos<i32>,
    word: Word,
    line_state: LineState,
    line: u32,
    max_x: i32,
    glyph_count: usize,
    skipped: usize,
    line_height: i32,
    emit: Option<&'s mut dyn FnMut(&Placement)>,
    cache: Option<&'s mut OpticalKerningCache>,
}

impl<'s> LayoutState<'s> {
    fn new(
        line_height: i32,
        emit: Option<&'s mut dyn FnMut(&Placement)>,
        cache: Option<&'s mut OpticalKerningCache>,
    ) -> Self {
        Self {
            pen: Pos::new(0, line_height),
            word: Word::default(),
            line_state: LineState::StartOfLine,
            line: 0,
            max_x: 0,
            glyph_count: 0,
            skipped: 0,
            line_height,
            emit,
            cache,
        }
    }

    fn new_line(&mut self) {
        self.pen.x = 0;
        self.pen.y = self.pen.y.saturating_add(self.line_height);
        self.line += 1;
    }
}

/// Lays out text with one face of a glyph provider.
///
/// ```
/// # use ibmf_text::{GlyphProvider, LayoutOptions, TextLayout};
/// # fn preview<P: GlyphProvider>(font: &P) {
/// let layout = TextLayout::new(font, 0)
///     .expect("face 0 exists")
///     .options(LayoutOptions::new().auto_kerning(true).line_width(320));
/// let size = layout.measure("Hello world");
/// # let _ = size;
/// # }
/// ```
pub struct TextLayout<'a, P: GlyphProvider + ?Sized> {
    provider: &'a P,
    face_index: FaceIndex,
    face: FaceMetrics,
    options: LayoutOptions,
    bypass: Option<&'a BypassGlyph>,
}

impl<'a, P: GlyphProvider + ?Sized> TextLayout<'a, P> {
    /// Layout for a face of `provider`, `None` when the face does not exist.
    pub fn new(provider: &'a P, face_index: FaceIndex) -> Option<Self> {
        let face = provider.face_metrics(face_index)?;
        Some(Self::with_face(provider, face_index, face))
    }

    /// Layout with explicitly supplied face metrics.
    pub fn with_face(provider: &'a P, face_index: FaceIndex, face: FaceMetrics) -> Self {
        Self {
            provider,
            face_index,
            face,
            options: LayoutOptions::default(),
            bypass: None,
        }
    }

    pub fn options(mut self, options: LayoutOptions) -> Self {
        self.options = options;
        self
    }

    /// Show `glyph` in place of the provider's glyph with the same code.
    pub fn bypass(mut self, glyph: Option<&'a BypassGlyph>) -> Self {
        self.bypass = glyph;
        self
    }

    pub fn face_metrics(&self) -> &FaceMetrics {
        &self.face
    }

    /// Content size in device pixels, without producing placements.
    pub fn measure(&self, text: &str) -> Size<u32> {
        self.run(text, None, None).size
    }

    /// Lay out `text` and collect every placement.
    pub fn layout(&self, text: &str) -> LayoutResult {
        let mut placements = Vec::new();
        let mut collect = |p: &Placement| placements.push(p.clone());
        let mut result = self.run(text, Some(&mut collect), None);
        result.placements = placements;
        result
    }

    /// Lay out `text`, handing each placement to `place` as it is produced.
    pub fn layout_with<F: FnMut(&Placement)>(&self, text: &str, mut place: F) -> LayoutResult {
        self.run(text, Some(&mut place), None)
    }

    /// Like [`layout_with`](Self::layout_with), reusing optical kerning
    /// estimates from `cache`.
    pub fn layout_cached<F: FnMut(&Placement)>(
        &self,
        text: &str,
        cache: &mut OpticalKerningCache,
        mut place: F,
    ) -> LayoutResult {
        self.run(text, Some(&mut place), Some(cache))
    }

    fn run<'s>(
        &self,
        text: &str,
        emit: Option<&'s mut dyn FnMut(&Placement)>,
        cache: Option<&'s mut OpticalKerningCache>,
    ) -> LayoutResult {
        profile_function!();

        let mut st = LayoutState::new(self.face.line_height as i32, emit, cache);

        for ch in text.chars() {
            match ch {
                '\n' => {
                    self.flush(&mut st);
                    st.new_line();
                    st.line_state = LineState::StartOfLine;
                }
                ' ' => {
                    self.flush(&mut st);
                    if st.line_state != LineState::StartOfLine {
                        st.pen.x = st.pen.x.saturating_add(self.face.space_size as i32);
                        st.line_state = LineState::AtWhitespace;
                    }
                }
                _ => self.push_char(ch, &mut st),
            }
        }
        self.flush(&mut st);

        // One line height below the last baseline
        let height = st.pen.y.saturating_add(self.face.line_height as i32);
        let result = LayoutResult {
            size: Size::new(self.to_device(st.max_x), self.to_device(height)),
            lines: st.line + 1,
            glyph_count: st.glyph_count,
            skipped: st.skipped,
            placements: Vec::new(),
        };

        tracing::trace!(
            "Laid out {} glyphs on {} lines ({} skipped), size {}x{}",
            result.glyph_count,
            result.lines,
            result.skipped,
            result.size.width,
            result.size.height
        );

        result
    }

    fn fetch(&self, code: GlyphCode) -> Option<GlyphRef> {
        match GlyphSource::resolve(code, self.bypass) {
            GlyphSource::Bypass(glyph) => Some(glyph.glyph().clone()),
            GlyphSource::Provider => self.provider.glyph(self.face_index, code),
        }
    }

    fn push_char(&self, ch: char, st: &mut LayoutState<'_>) {
        let code = self.provider.translate(ch);
        let Some(glyph) = self.fetch(code) else {
            tracing::debug!("No glyph for U+{:04X}, skipping", ch as u32);
            st.skipped += 1;
            return;
        };

        let mut kern = Fix16::ZERO;
        let kerning = self.options.kerning;

        if let Some(prev) = st.word.last().map(|g| g.glyph.clone())
            && !kerning.is_empty()
        {
            let mut pair_present = false;

            if kerning.contains(KerningMode::NORMAL) {
                let chain = resolve_chain(
                    self.provider,
                    self.face_index,
                    prev.code,
                    glyph.code,
                    self.options.max_lig_kern_chain,
                );

                if chain.is_ligature(glyph.code) {
                    match self.fetch(chain.glyph) {
                        Some(ligature) => {
                            // The ligature takes the left glyph's slot, and its
                            // kern unless the chain ended on a kern step
                            if let Some(left) = st.word.pop() {
                                tracing::trace!(
                                    "Ligature {} + {} -> {}",
                                    left.glyph.code,
                                    glyph.code,
                                    ligature.code
                                );
                                st.word.push(LaidOutGlyph {
                                    glyph: ligature,
                                    kern: chain.kern.unwrap_or(left.kern),
                                });
                            }
                            st.line_state = LineState::InWord;
                            return;
                        }
                        None => tracing::debug!(
                            "Ligature glyph {} missing, keeping {} + {}",
                            chain.glyph,
                            prev.code,
                            glyph.code
                        ),
                    }
                } else if let Some(explicit) = chain.kern {
                    kern = explicit;
                    pair_present = true;
                }
            }

            if !pair_present && kerning.contains(KerningMode::AUTO) {
                kern = self.optical_kern(&prev, &glyph, st);
            }
        }

        st.word.push(LaidOutGlyph { glyph, kern });
        st.line_state = LineState::InWord;
    }

    fn optical_kern(&self, first: &GlyphRef, second: &GlyphRef, st: &mut LayoutState<'_>) -> Fix16 {
        let involves_bypass = self
            .bypass
            .is_some_and(|b| b.matches(first.code) || b.matches(second.code));

        match st.cache.as_deref_mut() {
            Some(cache) if !involves_bypass => cache.get_or_estimate(
                self.face_index,
                first,
                second,
                &self.face,
                self.options.min_gap,
            ),
            _ => estimate_kerning(first, second, &self.face, self.options.min_gap),
        }
    }

    fn flush(&self, st: &mut LayoutState<'_>) {
        if st.word.is_empty() {
            return;
        }

        let scale = self.options.scale();
        let line_width = self.options.line_width as i64;
        let word_width = st.word.width as i64;

        // Move the whole word down when it would overflow but fits a line
        if (st.pen.x as i64 + word_width).saturating_mul(scale) > line_width
            && word_width.saturating_mul(scale) <= line_width
        {
            st.new_line();
        }

        let mut glyphs = std::mem::take(&mut st.word.glyphs);
        st.word.width = 0;

        for laid in glyphs.drain(..) {
            st.pen.x = st.pen.x.saturating_add(laid.kern.to_pixels_round());
            let advance = laid.glyph.metrics.advance_pixels();

            if st.pen.x > 0
                && (st.pen.x as i64 + advance as i64).saturating_mul(scale) > line_width
            {
                st.new_line();
            }

            if let Some(emit) = st.emit.as_deref_mut() {
                let placement = self.place(&laid.glyph, st.pen, st.line);
                emit(&placement);
            }

            st.pen.x = st.pen.x.saturating_add(advance);
            st.max_x = st.max_x.max(st.pen.x);
            st.glyph_count += 1;
        }

        // Hand the emptied buffer back to keep its capacity
        st.word.glyphs = glyphs;
    }

    /// Font pixels to device pixels, clamped to the `u32` range.
    fn to_device(&self, pixels: i32) -> u32 {
        let device = pixels.max(0) as u64 * self.options.scale() as u64;
        device.min(u32::MAX as u64) as u32
    }

    fn place(&self, glyph: &GlyphRef, pen: Pos<i32>, line: u32) -> Placement {
        // `LayoutOptions` keeps the scale within i32
        let s = self.options.scale() as i32;
        let metrics = &glyph.metrics;
        let left = pen.x.saturating_sub(metrics.horizontal_offset as i32);
        let top = pen.y.saturating_sub(metrics.vertical_offset as i32);
        Placement {
            glyph: glyph.code,
            bitmap: glyph.bitmap.clone(),
            origin: pen,
            rect: Rect::new(
                left.saturating_mul(s),
                top.saturating_mul(s),
                (glyph.bitmap.width() as i32).saturating_mul(s),
                (glyph.bitmap.height() as i32).saturating_mul(s),
            ),
            scale: s as u32,
            line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{MemoryFaceBuilder, MemoryFont};
    use crate::glyph::GlyphMetrics;
    use crate::lig_kern::{LigKernOutcome, LigKernStep};

    fn block_metrics(width: u16, height: u16, advance: i32, pgm: Option<u16>) -> GlyphMetrics {
        GlyphMetrics {
            bitmap_width: width,
            bitmap_height: height,
            vertical_offset: height as i16,
            advance: Fix16::from_pixels(advance),
            lig_kern_pgm_index: pgm,
            ..Default::default()
        }
    }

    fn block_bitmap(width: u16, height: u16) -> Bitmap {
        Bitmap::new(width, height, vec![1; width as usize * height as usize]).unwrap()
    }

    fn test_font() -> MemoryFont {
        let glyphs: [(u16, u16, i32, Option<u16>); 7] = [
            (4, 6, 5, Some(0)), // a
            (3, 6, 4, None),    // b
            (3, 6, 4, Some(1)), // f
            (1, 6, 2, None),    // i
            (5, 6, 6, None),    // fi
            (4, 6, 7, None),    // o
            (4, 6, 0, None),    // z, zero advance
        ];
        let mut face = MemoryFaceBuilder::new(FaceMetrics::default()).lig_kern_steps(vec![
            LigKernStep::kern(GlyphCode(1), Fix16::from_pixels(-1)).stop(),
            LigKernStep::ligature(GlyphCode(3), GlyphCode(4)).stop(),
        ]);
        for (code, (w, h, adv, pgm)) in glyphs.into_iter().enumerate() {
            face = face.glyph(
                GlyphCode(code as u16),
                block_metrics(w, h, adv, pgm),
                block_bitmap(w, h),
            );
        }

        MemoryFont::builder()
            .map_char('a', GlyphCode(0))
            .map_char('b', GlyphCode(1))
            .map_char('f', GlyphCode(2))
            .map_char('i', GlyphCode(3))
            .map_char('o', GlyphCode(5))
            .map_char('z', GlyphCode(6))
            .face(face)
            .build()
            .unwrap()
    }

    fn layout_of<'a>(font: &'a MemoryFont, options: LayoutOptions) -> TextLayout<'a, MemoryFont> {
        TextLayout::new(font, 0).unwrap().options(options)
    }

    #[test]
    fn test_missing_face() {
        let font = test_font();
        assert!(TextLayout::new(&font, 3).is_none());
    }

    #[test]
    fn test_empty_text() {
        let font = test_font();
        let result = layout_of(&font, LayoutOptions::new()).layout("");
        assert_eq!(result.size, Size::new(0, 40));
        assert_eq!(result.lines, 1);
        assert_eq!(result.glyph_count, 0);
        assert!(result.placements.is_empty());
    }

    #[test]
    fn test_single_glyph_width() {
        let font = test_font();
        let layout = layout_of(&font, LayoutOptions::new().kerning(KerningMode::NONE));
        assert_eq!(layout.measure("a").width, 5);
        assert_eq!(layout.measure("b").width, 4);
    }

    #[test]
    fn test_zero_advance_falls_back_to_width() {
        let font = test_font();
        let layout = layout_of(&font, LayoutOptions::new());
        assert_eq!(layout.measure("z").width, 5);
        assert_eq!(layout.measure("zz").width, 10);
    }

    #[test]
    fn test_spaces() {
        let font = test_font();
        let layout = layout_of(&font, LayoutOptions::new().kerning(KerningMode::NONE));
        // leading spaces are swallowed
        assert_eq!(layout.measure("  a").width, 5);
        assert_eq!(layout.measure("a a").width, 15);
        // trailing space moves the pen but places nothing
        assert_eq!(layout.measure("a ").width, 5);
    }

    #[test]
    fn test_newline() {
        let font = test_font();
        let result = layout_of(&font, LayoutOptions::new()).layout("a\nb");
        assert_eq!(result.lines, 2);
        assert_eq!(result.size, Size::new(5, 60));

        let origins: Vec<_> = result.placements.iter().map(|p| (p.origin, p.line)).collect();
        assert_eq!(origins, vec![(Pos::new(0, 20), 0), (Pos::new(0, 40), 1)]);
    }

    #[test]
    fn test_space_after_newline_swallowed() {
        let font = test_font();
        let result = layout_of(&font, LayoutOptions::new()).layout("a\n b");
        assert_eq!(result.placements[1].origin, Pos::new(0, 40));
    }

    #[test]
    fn test_explicit_kern() {
        let font = test_font();
        let kerned = layout_of(&font, LayoutOptions::new()).layout("ab");
        assert_eq!(kerned.size.width, 8);
        assert_eq!(kerned.placements[1].origin.x, 4);

        let plain = layout_of(&font, LayoutOptions::new().kerning(KerningMode::NONE));
        assert_eq!(plain.measure("ab").width, 9);
    }

    #[test]
    fn test_kern_does_not_cross_spaces() {
        let font = test_font();
        let layout = layout_of(&font, LayoutOptions::new());
        assert_eq!(layout.measure("a b").width, 14);
    }

    #[test]
    fn test_ligature() {
        let font = test_font();
        let result = layout_of(&font, LayoutOptions::new()).layout("fi");
        assert_eq!(result.glyph_count, 1);
        assert_eq!(result.placements[0].glyph, GlyphCode(4));
        assert_eq!(result.size.width, 6);

        let plain = layout_of(&font, LayoutOptions::new().normal_kerning(false)).layout("fi");
        assert_eq!(plain.glyph_count, 2);
        assert_eq!(plain.size.width, 6);
    }

    #[test]
    fn test_ligature_takes_kern_ending_its_chain() {
        // f + i -> fi, then f + fi kerns by -1px
        let glyphs: [(u16, u16, i32, Option<u16>); 4] = [
            (4, 6, 5, None),    // a
            (3, 6, 4, Some(0)), // f
            (1, 6, 2, None),    // i
            (5, 6, 6, None),    // fi
        ];
        let mut face = MemoryFaceBuilder::new(FaceMetrics::default()).lig_kern_steps(vec![
            LigKernStep::ligature(GlyphCode(2), GlyphCode(3)),
            LigKernStep::kern(GlyphCode(3), Fix16::from_pixels(-1)).stop(),
        ]);
        for (code, (w, h, adv, pgm)) in glyphs.into_iter().enumerate() {
            face = face.glyph(
                GlyphCode(code as u16),
                block_metrics(w, h, adv, pgm),
                block_bitmap(w, h),
            );
        }
        let font = MemoryFont::builder()
            .map_char('a', GlyphCode(0))
            .map_char('f', GlyphCode(1))
            .map_char('i', GlyphCode(2))
            .face(face)
            .build()
            .unwrap();

        let result = layout_of(&font, LayoutOptions::new()).layout("afi");
        assert_eq!(result.glyph_count, 2);
        assert_eq!(result.placements[1].glyph, GlyphCode(3));
        assert_eq!(result.placements[1].origin.x, 4);
        assert_eq!(result.size.width, 10);
    }

    #[test]
    fn test_optical_kerning_only_without_explicit_pair() {
        let font = test_font();
        let auto = LayoutOptions::new().auto_kerning(true);

        // 3px of air between the blocks, min gap 1
        assert_eq!(layout_of(&font, auto).measure("oo").width, 12);
        // the explicit pair wins over the estimate
        assert_eq!(layout_of(&font, auto).measure("ab").width, 8);
        assert_eq!(
            layout_of(&font, auto.normal_kerning(false)).measure("ab").width,
            9
        );
    }

    #[test]
    fn test_cached_matches_uncached() {
        let font = test_font();
        let layout = layout_of(&font, LayoutOptions::new().auto_kerning(true));
        let text = "oo ab oo\nooo";
        let expected = layout.layout(text);

        let mut cache = OpticalKerningCache::new();
        let mut placements = Vec::new();
        let result = layout.layout_cached(text, &mut cache, |p| placements.push(p.clone()));
        assert_eq!(result.size, expected.size);
        assert_eq!(placements, expected.placements);

        // "oo" is estimated once and reused
        assert_eq!(cache.misses, 1);
        assert!(cache.hits >= 2);
    }

    #[test]
    fn test_missing_glyph_skipped() {
        let font = test_font();
        let result = layout_of(&font, LayoutOptions::new().kerning(KerningMode::NONE)).layout("a?a");
        assert_eq!(result.skipped, 1);
        assert_eq!(result.glyph_count, 2);
        assert_eq!(result.size.width, 10);
    }

    #[test]
    fn test_word_moves_to_next_line() {
        let font = test_font();
        let layout = layout_of(
            &font,
            LayoutOptions::new().kerning(KerningMode::NONE).line_width(20),
        );
        let result = layout.layout("ab ab");
        assert_eq!(result.lines, 2);
        assert_eq!(result.size, Size::new(9, 60));
        assert_eq!(result.placements[2].origin, Pos::new(0, 40));
    }

    #[test]
    fn test_long_word_breaks_between_glyphs() {
        let font = test_font();
        let layout = layout_of(
            &font,
            LayoutOptions::new().kerning(KerningMode::NONE).line_width(12),
        );
        let result = layout.layout("aaaa");
        assert_eq!(result.glyph_count, 4);
        assert_eq!(result.lines, 2);
        let xs: Vec<_> = result.placements.iter().map(|p| p.origin.x).collect();
        assert_eq!(xs, vec![0, 5, 0, 5]);
    }

    #[test]
    fn test_glyph_wider_than_line_still_placed() {
        let font = test_font();
        let layout = layout_of(&font, LayoutOptions::new().line_width(2));
        let result = layout.layout("a");
        assert_eq!(result.lines, 1);
        assert_eq!(result.placements[0].origin.x, 0);
    }

    #[test]
    fn test_pixel_scale() {
        let font = test_font();
        let result = layout_of(&font, LayoutOptions::new().pixel_scale(3)).layout("a");
        assert_eq!(result.size, Size::new(15, 120));

        let placement = &result.placements[0];
        assert_eq!(placement.origin, Pos::new(0, 20));
        assert_eq!(placement.rect, Rect::new(0, 42, 12, 18));
        assert_eq!(placement.ink_runs().count(), 6);
        assert_eq!(placement.ink_runs().next(), Some(Rect::new(0, 42, 12, 3)));
    }

    #[test]
    fn test_huge_pixel_scale_saturates() {
        let font = test_font();
        let result = layout_of(&font, LayoutOptions::new().pixel_scale(u32::MAX)).layout("aa");
        assert_eq!(result.glyph_count, 2);
        assert_eq!(result.lines, 2);
        assert_eq!(result.size, Size::new(u32::MAX, u32::MAX));

        let placement = &result.placements[0];
        assert_eq!(placement.scale, i32::MAX as u32);
        assert_eq!(placement.rect, Rect::new(0, i32::MAX, i32::MAX, i32::MAX));
        assert_eq!(placement.ink_runs().count(), 6);
    }

    #[test]
    fn test_pixel_scale_affects_wrapping() {
        let font = test_font();
        let options = LayoutOptions::new().kerning(KerningMode::NONE).line_width(20);
        assert_eq!(layout_of(&font, options).layout("a a").lines, 1);
        assert_eq!(layout_of(&font, options.pixel_scale(2)).layout("a a").lines, 2);
    }

    #[test]
    fn test_measure_matches_layout() {
        let font = test_font();
        let layout = layout_of(&font, LayoutOptions::new().auto_kerning(true).line_width(30));
        let text = "fi ab\noo za ab ab";
        assert_eq!(layout.measure(text), layout.layout(text).size);
    }

    #[test]
    fn test_bypass_glyph() {
        let font = test_font();
        let wide = BypassGlyph::new(
            GlyphCode(0),
            block_metrics(9, 2, 10, None),
            Arc::new(block_bitmap(9, 2)),
        );

        let layout = layout_of(&font, LayoutOptions::new()).bypass(Some(&wide));
        let result = layout.layout("ab");
        assert_eq!(result.placements[0].rect.width, 9);
        assert_eq!(result.placements[0].rect.height, 2);
        // lig/kern programs still come from the provider
        assert_eq!(result.size.width, 13);
    }

    /// Answers `outcome` for `a` + `b` and nothing for any other pair.
    struct PairOverride(MemoryFont, LigKernOutcome);

    impl GlyphProvider for PairOverride {
        fn translate(&self, ch: char) -> GlyphCode {
            self.0.translate(ch)
        }

        fn face_metrics(&self, face: FaceIndex) -> Option<FaceMetrics> {
            self.0.face_metrics(face)
        }

        fn glyph(&self, face: FaceIndex, code: GlyphCode) -> Option<GlyphRef> {
            self.0.glyph(face, code)
        }

        fn lig_kern(&self, _face: FaceIndex, first: GlyphCode, next: GlyphCode) -> LigKernOutcome {
            if (first, next) == (GlyphCode(0), GlyphCode(1)) {
                self.1
            } else {
                LigKernOutcome::NoMatch
            }
        }
    }

    #[test]
    fn test_missing_ligature_glyph_ignored() {
        // the face has no glyph 99
        let provider = PairOverride(test_font(), LigKernOutcome::Ligature(GlyphCode(99)));
        let layout = TextLayout::new(&provider, 0).unwrap();
        let result = layout.layout("ab");
        assert_eq!(result.glyph_count, 2);
        assert_eq!(result.size.width, 9);
    }

    #[test]
    fn test_extreme_kern_saturates() {
        let provider = PairOverride(test_font(), LigKernOutcome::Kern(Fix16::from_raw(i32::MAX)));
        let layout = TextLayout::new(&provider, 0).unwrap();
        // 5px + (i32::MAX + 32) / 64 px + 4px
        let size = layout.measure("ab");
        assert_eq!(size.width, 33_554_441);
        assert_eq!(size.height, 40);

        let provider = PairOverride(test_font(), LigKernOutcome::Kern(Fix16::from_raw(i32::MIN)));
        let layout = TextLayout::new(&provider, 0).unwrap();
        assert_eq!(layout.layout("ab").glyph_count, 2);
    }

    #[test]
    fn test_layout_with_callback() {
        let font = test_font();
        let layout = layout_of(&font, LayoutOptions::new());
        let mut codes = Vec::new();
        let result = layout.layout_with("ab a", |p| codes.push(p.glyph));
        assert_eq!(codes, vec![GlyphCode(0), GlyphCode(1), GlyphCode(0)]);
        assert!(result.placements.is_empty());
        assert_eq!(result.glyph_count, 3);
    }
}
