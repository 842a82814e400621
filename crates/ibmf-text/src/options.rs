use bitflags::bitflags;

use crate::collider::DEFAULT_KERNING_SIZE;
use crate::lig_kern::MAX_LIG_KERN_CHAIN;

bitflags! {
    /// Kerning sources enabled for a layout pass.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KerningMode: u8 {
        /// No kerning at all.
        const NONE = 0;
        /// Ligatures and kern pairs from the glyph programs.
        const NORMAL = 1 << 0;
        /// Optical kerning for pairs the programs do not cover.
        const AUTO = 1 << 1;
    }
}

/// Knobs of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    pub kerning: KerningMode,
    /// Device pixels per font pixel, at least 1.
    pub pixel_scale: u32,
    /// Available line width in device pixels.
    pub line_width: u32,
    /// Minimum gap kept by optical kerning, in font pixels.
    pub min_gap: i32,
    /// Bound on chained ligature substitutions.
    pub max_lig_kern_chain: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            kerning: KerningMode::NORMAL,
            pixel_scale: 1,
            line_width: u32::MAX,
            min_gap: DEFAULT_KERNING_SIZE,
            max_lig_kern_chain: MAX_LIG_KERN_CHAIN,
        }
    }
}

impl LayoutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kerning(mut self, mode: KerningMode) -> Self {
        self.kerning = mode;
        self
    }

    /// Toggle optical kerning.
    pub fn auto_kerning(mut self, enabled: bool) -> Self {
        self.kerning.set(KerningMode::AUTO, enabled);
        self
    }

    /// Toggle program-driven ligatures and kerning.
    pub fn normal_kerning(mut self, enabled: bool) -> Self {
        self.kerning.set(KerningMode::NORMAL, enabled);
        self
    }

    /// Set the pixel scale, clamped to `1..=i32::MAX`.
    pub fn pixel_scale(mut self, scale: u32) -> Self {
        self.pixel_scale = scale.clamp(1, i32::MAX as u32);
        self
    }

    pub fn line_width(mut self, width: u32) -> Self {
        self.line_width = width;
        self
    }

    pub fn min_gap(mut self, gap: i32) -> Self {
        self.min_gap = gap;
        self
    }

    pub fn max_lig_kern_chain(mut self, steps: usize) -> Self {
        self.max_lig_kern_chain = steps;
        self
    }

    pub(crate) fn scale(&self) -> i64 {
        self.pixel_scale.clamp(1, i32::MAX as u32) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = LayoutOptions::default();
        assert_eq!(options.kerning, KerningMode::NORMAL);
        assert_eq!(options.pixel_scale, 1);
        assert_eq!(options.min_gap, 1);
        assert_eq!(options.max_lig_kern_chain, 16);
    }

    #[test]
    fn test_kerning_toggles() {
        let options = LayoutOptions::new().auto_kerning(true);
        assert_eq!(options.kerning, KerningMode::NORMAL | KerningMode::AUTO);

        let options = options.normal_kerning(false);
        assert_eq!(options.kerning, KerningMode::AUTO);

        let options = options.auto_kerning(false);
        assert!(options.kerning.is_empty());
    }

    #[test]
    fn test_pixel_scale_clamped() {
        assert_eq!(LayoutOptions::new().pixel_scale(0).pixel_scale, 1);
        assert_eq!(LayoutOptions::new().pixel_scale(3).scale(), 3);
        assert_eq!(
            LayoutOptions::new().pixel_scale(u32::MAX).scale(),
            i32::MAX as i64
        );
    }
}
