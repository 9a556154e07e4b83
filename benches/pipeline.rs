//! Benchmarks for the sprite pipeline.

use std::path::Path;
use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};
use tempfile::TempDir;

use sprites::{stack, Configuration, Orientation, PieceOptions, PieceSize, Sheet};

/// Write `count` small PNGs of varying size under `<root>/sprite_pieces/bench/`.
fn write_fixtures(root: &Path, count: u32) {
    let dir = root.join("sprite_pieces").join("bench");
    std::fs::create_dir_all(&dir).unwrap();
    for i in 0..count {
        let img = RgbaImage::from_pixel(8 + i % 9, 8 + i % 5, Rgba([i as u8, 0, 0, 255]));
        img.save(dir.join(format!("piece-{}.png", i))).unwrap();
    }
}

fn fixture_sheet(root: &Path, count: u32) -> Sheet {
    let config = Configuration::default().with_root(root);
    let mut sheet = Sheet::new("bench", Arc::new(config));
    for i in 0..count {
        sheet.sprite_piece(
            format!("bench/piece-{}.png", i),
            None,
            PieceOptions { padding: i % 3 },
        );
    }
    sheet
}

// -- Layout benchmarks --

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");

    let sizes: Vec<PieceSize> = (0..500)
        .map(|i| PieceSize {
            width: 16 + i % 48,
            height: 16 + i % 32,
            padding: i % 4,
        })
        .collect();

    group.bench_function("stack_vertical", |b| {
        b.iter(|| stack(black_box(&sizes), Orientation::Vertical))
    });

    group.bench_function("stack_horizontal", |b| {
        b.iter(|| stack(black_box(&sizes), Orientation::Horizontal))
    });

    group.finish();
}

// -- Stylesheet benchmarks --

fn bench_stylesheets(c: &mut Criterion) {
    let mut group = c.benchmark_group("stylesheets");

    let dir = TempDir::new().unwrap();
    write_fixtures(dir.path(), 40);
    let sheet = fixture_sheet(dir.path(), 40);
    let style = sheet.style();
    let layout = sheet.pieces().layout(&style).unwrap();

    group.bench_function("read_layout", |b| {
        b.iter(|| sheet.pieces().layout(black_box(&style)).unwrap())
    });

    group.bench_function("render_css", |b| {
        b.iter(|| sheet.pieces().render_css(black_box(&layout), &style))
    });

    group.bench_function("render_scss", |b| {
        b.iter(|| sheet.pieces().render_scss(black_box(&layout), &style))
    });

    group.finish();
}

// -- Compositing benchmarks --

fn bench_compositing(c: &mut Criterion) {
    let mut group = c.benchmark_group("compositing");

    let dir = TempDir::new().unwrap();
    write_fixtures(dir.path(), 40);
    let sheet = fixture_sheet(dir.path(), 40);
    let style = sheet.style();
    let layout = sheet.pieces().layout(&style).unwrap();

    group.bench_function("render_image", |b| {
        b.iter(|| sheet.pieces().render_image(black_box(&layout), &style).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_layout, bench_stylesheets, bench_compositing);
criterion_main!(benches);
