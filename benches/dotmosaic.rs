use criterion::{criterion_group, criterion_main, Criterion};
use dotmosaic::{downsample, render_dots, DotStyle, OwnedImage, RenderConfig, Rgba};
use std::hint::black_box;

fn make_image(width: usize, height: usize) -> OwnedImage {
    let mut img = OwnedImage::blank(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = ((x * 13) ^ (y * 7) ^ (x * y)) & 0xFF;
            img.set(x, y, Rgba::opaque(v as u8, (x & 0xFF) as u8, (y & 0xFF) as u8));
        }
    }
    img
}

fn bench_pipeline(c: &mut Criterion) {
    let img = make_image(1024, 768);

    c.bench_function("downsample_1024x768_b12", |b| {
        b.iter(|| downsample(black_box(img.view()), 12))
    });

    let reduced = downsample(img.view(), 12);
    let cfg = RenderConfig::default();
    c.bench_function("render_dots_85x64_b24", |b| {
        b.iter(|| render_dots(black_box(reduced.view()), &cfg))
    });

    let style = DotStyle::default();
    c.bench_function("dot_style_1024x768", |b| {
        b.iter(|| style.apply(black_box(img.view())))
    });

    #[cfg(feature = "rayon")]
    c.bench_function("downsample_par_1024x768_b12", |b| {
        b.iter(|| dotmosaic::downsample_par(black_box(img.view()), 12))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
