//! Optical kerning cache.
//!
//! Estimating a pair means rasterizing both glyphs and sliding one of them,
//! which dominates the cost of a layout pass with automatic kerning. A
//! preview that lays out the same text on every keystroke can keep one of
//! these around and hand it to each pass.

use ibmf_core::alloc::HashMap;
use ibmf_core::Fix16;

use crate::collider::estimate_kerning;
use crate::glyph::{GlyphCode, GlyphRef};
use crate::provider::{FaceIndex, FaceMetrics};

/// Key for a cached optical kerning estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KernKey {
    pub face: FaceIndex,
    pub first: GlyphCode,
    pub second: GlyphCode,
    pub min_gap: i32,
}

/// Memoized optical kerning estimates.
///
/// Entries are keyed by glyph codes only, so the cache must be cleared when
/// glyph bitmaps change. Layout never caches pairs involving a bypass glyph.
#[derive(Debug)]
pub struct OpticalKerningCache {
    entries: HashMap<KernKey, Fix16>,
    /// Statistics for monitoring cache performance
    pub hits: u64,
    pub misses: u64,
}

impl OpticalKerningCache {
    pub fn new() -> Self {
        Self {
            entries: HashMap::with_capacity(256),
            hits: 0,
            misses: 0,
        }
    }

    /// Cached estimate for the pair, computing it on a miss.
    pub fn get_or_estimate(
        &mut self,
        face_index: FaceIndex,
        first: &GlyphRef,
        second: &GlyphRef,
        face: &FaceMetrics,
        min_gap: i32,
    ) -> Fix16 {
        let key = KernKey {
            face: face_index,
            first: first.code,
            second: second.code,
            min_gap,
        };
        if let Some(&kern) = self.entries.get(&key) {
            self.hits += 1;
            return kern;
        }

        self.misses += 1;
        let kern = estimate_kerning(first, second, face, min_gap);
        self.entries.insert(key, kern);
        kern
    }

    pub fn get(&self, key: &KernKey) -> Option<Fix16> {
        self.entries.get(key).copied()
    }

    /// Clear the cache (needed whenever a glyph bitmap is saved).
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Drop every entry involving `code`.
    pub fn invalidate_glyph(&mut self, code: GlyphCode) {
        self.entries
            .retain(|key, _| key.first != code && key.second != code);
    }

    pub fn hit_rate(&self) -> f32 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f32 / total as f32
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats_string(&self) -> String {
        format!(
            "KerningCache: {} pairs, {:.1}% hit rate ({} hits, {} misses)",
            self.len(),
            self.hit_rate() * 100.0,
            self.hits,
            self.misses
        )
    }
}

impl Default for OpticalKerningCache {
    fn default() -> Self {
        Self::new()
    }
}
