// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced::widget::scrollable::AbsoluteOffset;
use iced::{Point, Rectangle, Size};
use photofolio::content::ImageAsset;
use photofolio::ui::gallery::Gallery;
use photofolio::ui::layout;
use photofolio::ui::lazy_image::LazyImageOptions;
use photofolio::ui::state::{ExpansionPolicy, ListenerRegistry, ScrollViewport, ViewportTracker};
use std::hint::black_box;
use std::time::Instant;

const PHOTOS: usize = 200;

fn photos() -> Vec<ImageAsset> {
    (0..PHOTOS)
        .map(|i| ImageAsset {
            file_id: format!("p{i}"),
            extension: "jpg".to_string(),
            width: 1600,
            height: 900 + (i as u32 % 5) * 200,
            description: if i % 3 == 0 {
                format!("Photo {i}")
            } else {
                String::new()
            },
            focus: None,
        })
        .collect()
}

fn viewport_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport_tracking");
    let window = Size::new(1280.0, 800.0);

    group.bench_function("tracker_recompute", |b| {
        let mut tracker = ViewportTracker::new(ExpansionPolicy::LAZY_LOAD);
        let bounds = Rectangle::new(Point::new(40.0, 3000.0), Size::new(300.0, 200.0));
        b.iter(|| black_box(tracker.recompute(black_box(Some(bounds)), window)));
    });

    let assets = photos();

    group.bench_function("gallery_layout", |b| {
        let registry = ListenerRegistry::new();
        let mut gallery = Gallery::new(&registry, &assets, LazyImageOptions::default());
        let mut width = 1200.0;
        b.iter(|| {
            // Alternate widths so every pass really recomputes placements.
            width = if width == 1200.0 { 1199.0 } else { 1200.0 };
            black_box(gallery.layout(width, Point::new(16.0, 80.0)))
        });
    });

    group.bench_function("gallery_scroll", |b| {
        let registry = ListenerRegistry::new();
        let mut gallery = Gallery::new(&registry, &assets, LazyImageOptions::default());
        let _ = gallery.layout(1200.0, Point::new(16.0, 80.0));
        let mut viewport = ScrollViewport::default();
        viewport.set_size(window);
        let mut y = 0.0;
        b.iter(|| {
            y = (y + 37.0) % gallery.height();
            let bounds = Rectangle::new(Point::ORIGIN, window);
            viewport.update(bounds, AbsoluteOffset { x: 0.0, y });
            black_box(gallery.viewport_changed(&viewport, &registry, Instant::now()))
        });
    });

    group.finish();
}

fn layout_benchmark(c: &mut Criterion) {
    let assets = photos();
    let specs: Vec<_> = assets
        .iter()
        .map(|asset| layout::TileSpec {
            inverse_aspect: asset.inverse_aspect_ratio(),
            has_caption: !asset.description.is_empty(),
        })
        .collect();

    c.bench_function("masonry_columns", |b| {
        b.iter(|| black_box(layout::gallery(1200.0, 4.0, black_box(&specs))));
    });
}

criterion_group!(benches, viewport_benchmark, layout_benchmark);
criterion_main!(benches);
