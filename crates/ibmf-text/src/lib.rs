//! IBMF Text - optical kerning and text layout for IBMF bitmap fonts
//!
//! This crate holds the algorithmic core of an IBMF font preview:
//! - A glyph provider capability and an in-memory font implementing it
//! - Ligature/kerning programs walked as bounded chains
//! - Optical kerning estimated from glyph ink collisions
//! - Word-wrapping layout in 26.6 fixed point, for measuring or placing
//!
//! ## Quick Start
//!
//! ```rust
//! use ibmf_core::Fix16;
//! use ibmf_text::{
//!     Bitmap, FaceMetrics, GlyphCode, GlyphMetrics, LayoutOptions, MemoryFaceBuilder, MemoryFont,
//!     TextLayout,
//! };
//!
//! let bar = GlyphMetrics {
//!     bitmap_width: 1,
//!     bitmap_height: 8,
//!     vertical_offset: 8,
//!     advance: Fix16::from_pixels(3),
//!     ..Default::default()
//! };
//! let font = MemoryFont::builder()
//!     .map_char('l', GlyphCode(0))
//!     .face(MemoryFaceBuilder::new(FaceMetrics::default()).glyph(
//!         GlyphCode(0),
//!         bar,
//!         Bitmap::new(1, 8, vec![1; 8]).unwrap(),
//!     ))
//!     .build()
//!     .unwrap();
//!
//! let layout = TextLayout::new(&font, 0)
//!     .unwrap()
//!     .options(LayoutOptions::new().pixel_scale(2));
//!
//! let result = layout.layout("lll");
//! assert_eq!(result.placements.len(), 3);
//! assert_eq!(result.size.width, 3 * 3 * 2);
//! ```
//!
//! ## Soft failures
//!
//! Layout never fails. Code points without a glyph are skipped, zero
//! advances fall back to the bitmap width plus one, and runaway ligature
//! chains are cut off. Use [`MemoryFont::coverage`] to validate text first.

pub mod bitmap;
pub mod cache;
pub mod collider;
pub mod error;
pub mod font;
pub mod glyph;
pub mod kern_table;
pub mod layout;
pub mod lig_kern;
pub mod options;
pub mod provider;

pub use bitmap::{Bitmap, RowRun};
pub use cache::{KernKey, OpticalKerningCache};
pub use collider::{DEFAULT_KERNING_SIZE, estimate_kerning};
pub use error::{FontError, FontResult};
pub use font::{Coverage, MemoryFace, MemoryFaceBuilder, MemoryFont, MemoryFontBuilder};
pub use glyph::{BypassGlyph, GlyphCode, GlyphMetrics, GlyphRef, GlyphSource};
pub use kern_table::{KernEntry, build_kern_table};
pub use layout::{LaidOutGlyph, LayoutResult, LineState, Placement, TextLayout};
pub use lig_kern::{
    ChainResult, GlyphLigKern, KernStep, LigKernAction, LigKernOutcome, LigKernStep, LigStep,
    MAX_LIG_KERN_CHAIN, resolve_chain,
};
pub use options::{KerningMode, LayoutOptions};
pub use provider::{FaceIndex, FaceMetrics, GlyphProvider};

// Re-export the fixed-point type used throughout the public API
pub use ibmf_core::Fix16;
