//! Benchmarks for text layout and measurement

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use ibmf_test_utils::sample_font;
use ibmf_text::{KerningMode, LayoutOptions, OpticalKerningCache, TextLayout};

const PARAGRAPH: &str = "AVoB fix oBoA VAo BAB xy oo fi AoV ";

fn bench_measure(c: &mut Criterion) {
    let font = sample_font();
    let mut group = c.benchmark_group("measure");

    let long_text = PARAGRAPH.repeat(20);
    let texts: Vec<(&str, &str)> = vec![
        ("single_glyph", "A"),
        ("single_word", "AVoB"),
        ("paragraph", PARAGRAPH),
        ("long_text", &long_text),
    ];

    for (name, content) in texts {
        group.throughput(Throughput::Elements(content.chars().count() as u64));
        group.bench_function(name, |b| {
            let layout = TextLayout::new(&font, 0)
                .unwrap()
                .options(LayoutOptions::new().line_width(240));
            b.iter(|| black_box(layout.measure(black_box(content))));
        });
    }

    group.finish();
}

fn bench_kerning_modes(c: &mut Criterion) {
    let font = sample_font();
    let mut group = c.benchmark_group("kerning_modes");
    let text = PARAGRAPH.repeat(5);

    let modes = [
        ("none", KerningMode::NONE),
        ("normal", KerningMode::NORMAL),
        ("auto", KerningMode::AUTO),
        ("normal_auto", KerningMode::NORMAL | KerningMode::AUTO),
    ];

    for (name, mode) in modes {
        group.bench_with_input(BenchmarkId::from_parameter(name), &mode, |b, &mode| {
            let layout = TextLayout::new(&font, 0)
                .unwrap()
                .options(LayoutOptions::new().kerning(mode).line_width(240));
            b.iter(|| black_box(layout.measure(&text)));
        });
    }

    group.finish();
}

fn bench_layout_placements(c: &mut Criterion) {
    let font = sample_font();
    let mut group = c.benchmark_group("layout_placements");
    let text = PARAGRAPH.repeat(5);
    let options = LayoutOptions::new().auto_kerning(true).line_width(240);

    group.bench_function("collect", |b| {
        let layout = TextLayout::new(&font, 0).unwrap().options(options);
        b.iter(|| black_box(layout.layout(&text)));
    });

    group.bench_function("callback_cached", |b| {
        let layout = TextLayout::new(&font, 0).unwrap().options(options);
        let mut cache = OpticalKerningCache::new();
        b.iter(|| {
            let mut ink = 0usize;
            layout.layout_cached(&text, &mut cache, |p| ink += p.ink_runs().count());
            black_box(ink)
        });
    });

    group.finish();
}

fn bench_pixel_scale(c: &mut Criterion) {
    let font = sample_font();
    let mut group = c.benchmark_group("pixel_scale");
    let text = PARAGRAPH.repeat(5);

    for scale in [1u32, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(scale), &scale, |b, &scale| {
            let layout = TextLayout::new(&font, 0)
                .unwrap()
                .options(LayoutOptions::new().pixel_scale(scale).line_width(960));
            b.iter(|| black_box(layout.measure(&text)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_measure,
    bench_kerning_modes,
    bench_layout_placements,
    bench_pixel_scale
);
criterion_main!(benches);
