//! Font Preview Example
//!
//! Lays out a sample text with the built-in test font and prints it as ASCII
//! art, the way a font editor's preview pane would show it:
//! - Word wrapping at a fixed line width
//! - Ligatures and explicit kern pairs from glyph programs
//! - Optical kerning for the remaining pairs
//! - An unsaved glyph edit shown through a bypass glyph
//!
//! ## Usage
//! ```bash
//! cargo run -p ibmf-text --example preview -- "VA fi oo AB"
//! RUST_LOG=ibmf_text=debug cargo run -p ibmf-text --example preview
//! ```

use std::sync::Arc;

use ibmf_core::config::{Config, ProfilingMode};
use ibmf_core::{logging, profiling};
use ibmf_test_utils::{AsciiCanvas, bitmap_from_art, codes, metrics_for, sample_font};
use ibmf_text::{BypassGlyph, LayoutOptions, OpticalKerningCache, TextLayout};

const DEFAULT_TEXT: &str = "VA fi oo AB BAoV\nxy fiVA";

fn main() {
    let config = Config::default().with_log_filter("info,ibmf_text=debug");
    logging::init_with_config(&config);
    profiling::init_profiling(ProfilingMode::Off);

    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_TEXT.to_string());

    let font = sample_font();
    let coverage = font.coverage(0, &text);
    if !coverage.is_complete() {
        tracing::warn!("Characters without glyphs will be skipped: {:?}", coverage.missing);
    }

    let options = LayoutOptions::new()
        .auto_kerning(true)
        .line_width(64)
        .pixel_scale(1);
    let layout = TextLayout::new(&font, 0)
        .expect("sample font has face 0")
        .options(options);

    let mut cache = OpticalKerningCache::new();

    profiling::new_frame();
    let size = layout.measure(&text);
    let mut canvas = AsciiCanvas::new(size.width as usize, size.height as usize);
    let result = layout.layout_cached(&text, &mut cache, |placement| {
        for run in placement.ink_runs() {
            canvas.fill(run.x, run.y, run.width, run.height);
        }
    });

    println!("{}x{} px, {} lines", result.size.width, result.size.height, result.lines);
    println!("{}", canvas);

    // An in-progress edit of `o`, squarer than the saved glyph
    let edited = bitmap_from_art(&["######", "#....#", "#....#", "#....#", "#....#", "######"]);
    let bypass = BypassGlyph::new(codes::O, metrics_for(&edited, 8), Arc::new(edited));

    profiling::new_frame();
    let live = layout.bypass(Some(&bypass)).layout(&text);
    println!("with unsaved edit of 'o':");
    println!("{}", AsciiCanvas::from_layout(&live));

    tracing::info!("{}", cache.stats_string());
}
