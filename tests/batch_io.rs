#![cfg(feature = "image-io")]

use dotmosaic::batch::{
    convert_file, convert_files, list_input_files, output_path_for, BatchSummary,
};
use dotmosaic::io::{
    load_image, owned_from_dynamic_image, owned_from_rgba_image, save_png, to_rgba_image,
};
use dotmosaic::{DotConfig, DotMosaicError, OwnedImage, Rgba};
use std::fs;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("dotmosaic-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn png_round_trip_preserves_pixels() {
    let dir = scratch_dir("roundtrip");
    let mut img = OwnedImage::filled(5, 3, Rgba::new(10, 20, 30, 40));
    img.set(4, 2, Rgba::WHITE);
    let path = dir.join("img.png");
    save_png(img.view(), &path).unwrap();

    let loaded = load_image(&path).unwrap();
    assert_eq!(loaded, img);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn rgba_buffer_conversion_keeps_layout() {
    let mut buffer = image::RgbaImage::new(3, 2);
    buffer.put_pixel(2, 1, image::Rgba([1, 2, 3, 4]));
    let owned = owned_from_rgba_image(&buffer).unwrap();
    assert_eq!(owned.dimensions(), (3, 2));
    assert_eq!(owned.get(2, 1), Some(Rgba::new(1, 2, 3, 4)));
    assert_eq!(owned.get(0, 0), Some(Rgba::TRANSPARENT));
    assert_eq!(to_rgba_image(owned.view()).unwrap(), buffer);

    let gray = image::DynamicImage::ImageLuma8(image::GrayImage::new(4, 1));
    let owned = owned_from_dynamic_image(&gray).unwrap();
    assert_eq!(owned.get(3, 0), Some(Rgba::BLACK));
}

#[test]
fn load_reports_offending_file() {
    let dir = scratch_dir("corrupt");
    let path = dir.join("broken.png");
    fs::write(&path, b"not an image").unwrap();

    match load_image(&path) {
        Err(DotMosaicError::ImageIo { path: reported, .. }) => {
            assert!(reported.ends_with("broken.png"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn list_skips_directories_and_sorts() {
    let dir = scratch_dir("listing");
    fs::write(dir.join("b.png"), b"").unwrap();
    fs::write(dir.join("a.jpg"), b"").unwrap();
    fs::create_dir(dir.join("nested")).unwrap();

    let files = list_input_files(&dir).unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.jpg", "b.png"]);
    fs::remove_dir_all(&dir).unwrap();
}

#[cfg(unix)]
#[test]
fn list_follows_symlinked_files() {
    use std::os::unix::fs::symlink;

    let dir = scratch_dir("symlinks");
    let target = dir.join("target");
    fs::create_dir(&target).unwrap();
    let real = target.join("real.png");
    save_png(OwnedImage::filled(12, 12, Rgba::BLACK).view(), &real).unwrap();

    let inputs = dir.join("inputs");
    fs::create_dir(&inputs).unwrap();
    symlink(&real, inputs.join("linked.png")).unwrap();
    symlink(&target, inputs.join("linked-dir")).unwrap();
    symlink(dir.join("nowhere.png"), inputs.join("dangling.png")).unwrap();

    let files = list_input_files(&inputs).unwrap();
    assert_eq!(files, vec![inputs.join("linked.png")]);

    let out_dir = dir.join("out");
    fs::create_dir(&out_dir).unwrap();
    let outcomes = convert_files(&files, &out_dir, &DotConfig::default());
    assert!(outcomes.iter().all(|o| o.is_ok()));
    assert!(out_dir.join("linked.png").exists());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_directory_is_an_io_error() {
    let dir = scratch_dir("missing").join("does-not-exist");
    assert!(matches!(
        list_input_files(&dir),
        Err(DotMosaicError::Io { .. })
    ));
}

#[test]
fn convert_file_writes_scaled_png() {
    let dir = scratch_dir("convert");
    let out_dir = dir.join("out");
    fs::create_dir(&out_dir).unwrap();
    let input = dir.join("red.png");
    save_png(OwnedImage::filled(24, 36, Rgba::opaque(255, 0, 0)).view(), &input).unwrap();

    let written = convert_file(&input, &out_dir, &DotConfig::default()).unwrap();
    assert_eq!(written, output_path_for(&input, &out_dir));

    let out = load_image(&written).unwrap();
    assert_eq!(out.dimensions(), (48, 72));
    assert_eq!(out.get(12, 12), Some(Rgba::opaque(255, 0, 0)));
    assert_eq!(out.get(0, 0), Some(Rgba::WHITE));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn batch_continues_past_failures() {
    let dir = scratch_dir("batch");
    let out_dir = dir.join("out");
    fs::create_dir(&out_dir).unwrap();

    let good = dir.join("good.png");
    save_png(OwnedImage::filled(12, 12, Rgba::BLACK).view(), &good).unwrap();
    let bad = dir.join("bad.jpg");
    fs::write(&bad, b"garbage").unwrap();
    let also_good = dir.join("z.png");
    save_png(OwnedImage::filled(24, 12, Rgba::WHITE).view(), &also_good).unwrap();

    let inputs = list_input_files(&dir).unwrap();
    let outcomes = convert_files(&inputs, &out_dir, &DotConfig::default());
    assert_eq!(outcomes.len(), 3);
    for (outcome, input) in outcomes.iter().zip(&inputs) {
        assert_eq!(&outcome.input, input);
    }

    let summary = BatchSummary::from_outcomes(&outcomes);
    assert_eq!(summary, BatchSummary { converted: 2, failed: 1 });
    assert!(out_dir.join("good.png").exists());
    assert!(out_dir.join("z.png").exists());
    assert!(!out_dir.join("bad.png").exists());
    fs::remove_dir_all(&dir).unwrap();
}
