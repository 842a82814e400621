//! Kerning table rows, explicit or optically estimated.

use ibmf_core::Fix16;
use ibmf_core::profiling::profile_function;

use crate::collider::estimate_kerning;
use crate::glyph::GlyphCode;
use crate::provider::{FaceIndex, GlyphProvider};

/// One row of a kerning table: the adjustment between a glyph and the glyph
/// that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernEntry {
    pub glyph_code: GlyphCode,
    pub next_glyph_code: GlyphCode,
    pub kern: Fix16,
}

impl KernEntry {
    pub fn new(glyph_code: GlyphCode, next_glyph_code: GlyphCode, kern: Fix16) -> Self {
        Self {
            glyph_code,
            next_glyph_code,
            kern,
        }
    }

    /// Kern as a fractional pixel count, the way editors display it.
    pub fn kern_pixels(&self) -> f32 {
        self.kern.to_f32()
    }
}

/// Estimate optical kerning for each pair, in input order.
///
/// Pairs whose glyphs are missing, and pairs needing no adjustment, produce
/// no row.
pub fn build_kern_table<P, I>(
    provider: &P,
    face: FaceIndex,
    pairs: I,
    min_gap: i32,
) -> Vec<KernEntry>
where
    P: GlyphProvider + ?Sized,
    I: IntoIterator<Item = (GlyphCode, GlyphCode)>,
{
    profile_function!();

    let Some(metrics) = provider.face_metrics(face) else {
        tracing::warn!("No face {} to build a kerning table for", face);
        return Vec::new();
    };

    let mut table = Vec::new();
    for (first, second) in pairs {
        let (Some(g1), Some(g2)) = (provider.glyph(face, first), provider.glyph(face, second))
        else {
            tracing::debug!("Skipping kerning pair {} + {}: glyph missing", first, second);
            continue;
        };
        let kern = estimate_kerning(&g1, &g2, &metrics, min_gap);
        if !kern.is_zero() {
            table.push(KernEntry::new(first, second, kern));
        }
    }

    tracing::debug!("Built optical kerning table with {} entries", table.len());
    table
}
