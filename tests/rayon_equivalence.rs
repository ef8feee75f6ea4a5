#![cfg(feature = "rayon")]

use dotmosaic::{downsample, downsample_par, DotConfig, DotStyle, OwnedImage, Rgba};

fn make_image(width: usize, height: usize) -> OwnedImage {
    let mut img = OwnedImage::blank(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = ((x * 11) ^ (y * 3) ^ (x * y)) & 0xFF;
            img.set(x, y, Rgba::new(v as u8, (v / 2) as u8, (y & 0xFF) as u8, (255 - v / 4) as u8));
        }
    }
    img
}

#[test]
fn parallel_downsample_matches_sequential() {
    let img = make_image(181, 143);
    for block in [0, 1, 3, 7, 12, 200] {
        let seq = downsample(img.view(), block);
        let par = downsample_par(img.view(), block);
        assert_eq!(seq, par, "block {block}");
    }
}

#[test]
fn parallel_dot_style_matches_sequential() {
    let img = make_image(97, 64);
    let seq = DotStyle::new(DotConfig {
        parallel: false,
        ..DotConfig::default()
    })
    .apply(img.view());
    let par = DotStyle::new(DotConfig {
        parallel: true,
        ..DotConfig::default()
    })
    .apply(img.view());
    assert_eq!(seq, par);
}
