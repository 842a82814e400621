//! Ready-made fonts for tests, benches and demos.

use ibmf_core::Fix16;
use ibmf_text::{
    Bitmap, FaceMetrics, GlyphCode, GlyphMetrics, LigKernStep, MemoryFaceBuilder, MemoryFont,
};

use crate::glyph_art::{bitmap_from_art, metrics_for};

/// Glyph codes of [`sample_font`].
pub mod codes {
    use ibmf_text::GlyphCode;

    pub const A: GlyphCode = GlyphCode(0);
    pub const B: GlyphCode = GlyphCode(1);
    pub const V: GlyphCode = GlyphCode(2);
    pub const F: GlyphCode = GlyphCode(3);
    pub const I: GlyphCode = GlyphCode(4);
    /// Ligature of `f` and `i`, not mapped to a character.
    pub const FI: GlyphCode = GlyphCode(5);
    pub const X: GlyphCode = GlyphCode(6);
    pub const Y: GlyphCode = GlyphCode(7);
    /// Target of the cyclic `x` program, not mapped to a character.
    pub const CYCLE: GlyphCode = GlyphCode(8);
    pub const O: GlyphCode = GlyphCode(9);
}

/// Face metrics shared by the sample fonts: 20px lines, 6px spaces.
pub fn sample_metrics() -> FaceMetrics {
    FaceMetrics {
        line_height: 20,
        descender_height: 5,
        space_size: 6,
        em_size: Fix16::from_pixels(16),
        ..Default::default()
    }
}

const ART_A: &[&str] = &[
    "...##...", "..#..#..", "..#..#..", ".#....#.", ".#....#.", ".######.", "#......#", "#......#",
    "#......#", "#......#",
];

const ART_B: &[&str] = &[
    "#####.", "#....#", "#....#", "#....#", "#####.", "#....#", "#....#", "#....#", "#....#",
    "#####.",
];

const ART_V: &[&str] = &[
    "#......#", "#......#", ".#....#.", ".#....#.", ".#....#.", "..#..#..", "..#..#..", "..#..#..",
    "...##...", "...##...",
];

const ART_F: &[&str] = &[
    "..###", ".#...", ".#...", "####.", ".#...", ".#...", ".#...", ".#...", ".#...", ".#...",
];

const ART_I: &[&str] = &["#", ".", "#", "#", "#", "#", "#", "#"];

const ART_FI: &[&str] = &[
    "..###.#", ".#.....", ".#....#", "####..#", ".#....#", ".#....#", ".#....#", ".#....#",
    ".#....#", ".#....#",
];

const ART_O: &[&str] = &[".####.", "#....#", "#....#", "#....#", "#....#", ".####."];

fn art(rows: &[&str], advance: i32, program: Option<u16>) -> (GlyphMetrics, Bitmap) {
    let bitmap = bitmap_from_art(rows);
    let metrics = GlyphMetrics {
        lig_kern_pgm_index: program,
        ..metrics_for(&bitmap, advance)
    };
    (metrics, bitmap)
}

fn block(width: u16, height: u16, advance: i32, program: Option<u16>) -> (GlyphMetrics, Bitmap) {
    let bitmap = Bitmap::new(width, height, vec![1; width as usize * height as usize])
        .expect("block dimensions match pixels");
    let metrics = GlyphMetrics {
        lig_kern_pgm_index: program,
        ..metrics_for(&bitmap, advance)
    };
    (metrics, bitmap)
}

/// A single-face font covering `A B V f i x y o`.
///
/// - `A` advances 10px, `B` 8px, spaces 6px
/// - `V` followed by `A` kerns by -2px
/// - `f` followed by `i` becomes the `fi` ligature
/// - `x` followed by `y` starts a ligature cycle that never settles
pub fn sample_font() -> MemoryFont {
    let steps = vec![
        // V
        LigKernStep::kern(codes::A, Fix16::from_pixels(-2)).stop(),
        // f
        LigKernStep::ligature(codes::I, codes::FI).stop(),
        // x
        LigKernStep::ligature(codes::Y, codes::CYCLE),
        LigKernStep::ligature(codes::CYCLE, codes::Y).stop(),
    ];

    let glyphs = [
        (codes::A, art(ART_A, 10, None)),
        (codes::B, art(ART_B, 8, None)),
        (codes::V, art(ART_V, 10, Some(0))),
        (codes::F, art(ART_F, 5, Some(1))),
        (codes::I, art(ART_I, 3, None)),
        (codes::FI, art(ART_FI, 8, None)),
        (codes::X, block(4, 6, 6, Some(2))),
        (codes::Y, block(4, 6, 6, None)),
        (codes::CYCLE, block(4, 6, 6, None)),
        (codes::O, art(ART_O, 8, None)),
    ];

    let mut face = MemoryFaceBuilder::new(sample_metrics()).lig_kern_steps(steps);
    for (code, (metrics, bitmap)) in glyphs {
        face = face.glyph(code, metrics, bitmap);
    }

    MemoryFont::builder()
        .map_char('A', codes::A)
        .map_char('B', codes::B)
        .map_char('V', codes::V)
        .map_char('f', codes::F)
        .map_char('i', codes::I)
        .map_char('x', codes::X)
        .map_char('y', codes::Y)
        .map_char('o', codes::O)
        .face(face)
        .build()
        .expect("sample font is valid")
}

/// A font of solid blocks, one per `(char, width, advance)`, 6px tall.
///
/// Glyph codes follow the order of `glyphs`. No lig/kern programs.
pub fn block_font(glyphs: &[(char, u16, i32)]) -> MemoryFont {
    let mut face = MemoryFaceBuilder::new(sample_metrics());
    let mut builder = MemoryFont::builder();
    for (index, &(ch, width, advance)) in glyphs.iter().enumerate() {
        let code = GlyphCode(index as u16);
        let (metrics, bitmap) = block(width, 6, advance, None);
        face = face.glyph(code, metrics, bitmap);
        builder = builder.map_char(ch, code);
    }
    builder.face(face).build().expect("block font is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ibmf_text::GlyphProvider;

    #[test]
    fn test_sample_font_is_complete() {
        let font = sample_font();
        assert!(font.coverage(0, "AB V fi xy o").is_complete());
        assert_eq!(font.face(0).map(|f| f.glyph_count()), Some(10));
    }

    #[test]
    fn test_sample_programs() {
        let font = sample_font();
        let v = font.glyph_lig_kern(0, codes::V).unwrap();
        assert_eq!(v.kern_steps.len(), 1);
        let x = font.glyph_lig_kern(0, codes::X).unwrap();
        assert_eq!(x.lig_steps.len(), 2);
    }

    #[test]
    fn test_block_font() {
        let font = block_font(&[('a', 4, 5), ('b', 2, 0)]);
        assert_eq!(font.translate('b'), GlyphCode(1));
        let b = font.glyph(0, GlyphCode(1)).unwrap();
        assert_eq!(b.metrics.advance_pixels(), 3);
    }
}
