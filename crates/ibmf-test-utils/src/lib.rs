//! Test utilities for IBMF text layout.
//!
//! Shared by the integration tests, benches and demos of `ibmf-text`.
//!
//! # Overview
//!
//! - [`bitmap_from_art`] and friends - glyphs drawn as rows of text
//! - [`sample_font`] / [`block_font`] - small fonts with known metrics
//! - [`RecordingProvider`] - a provider wrapper recording every call
//! - [`AsciiCanvas`] - layout output rendered back to text
//!
//! # Example
//!
//! ```rust
//! use ibmf_test_utils::{AsciiCanvas, sample_font};
//! use ibmf_text::TextLayout;
//!
//! let font = sample_font();
//! let result = TextLayout::new(&font, 0).unwrap().layout("AB");
//! let canvas = AsciiCanvas::from_layout(&result);
//! assert!(canvas.ink_count() > 0);
//! ```

pub mod fonts;
pub mod glyph_art;
pub mod recording;

pub use fonts::{block_font, codes, sample_font, sample_metrics};
pub use glyph_art::{AsciiCanvas, bitmap_from_art, block_glyph, glyph_from_art, metrics_for};
pub use recording::{ProviderCall, RecordingProvider};
