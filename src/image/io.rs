//! Convenience helpers for loading and saving images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use crate::color::Rgba;
use crate::image::{ImageView, OwnedImage};
use crate::util::{DotMosaicError, DotMosaicResult};
use std::path::Path;

/// Creates an owned image from an RGBA8 buffer.
pub fn owned_from_rgba_image(img: &image::RgbaImage) -> DotMosaicResult<OwnedImage> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.pixels().map(|px| Rgba::from_array(px.0)).collect();
    OwnedImage::new(data, width, height)
}

/// Creates an owned image from a dynamic image, converting to RGBA8.
pub fn owned_from_dynamic_image(img: &image::DynamicImage) -> DotMosaicResult<OwnedImage> {
    owned_from_rgba_image(&img.to_rgba8())
}

/// Copies a view into an `image::RgbaImage`.
pub fn to_rgba_image(view: ImageView<'_>) -> DotMosaicResult<image::RgbaImage> {
    let (width, height) = view.dimensions();
    let too_large = DotMosaicError::InvalidDimensions { width, height };
    let w = u32::try_from(width).map_err(|_| too_large.clone())?;
    let h = u32::try_from(height).map_err(|_| too_large.clone())?;
    let mut raw = Vec::with_capacity(width * height * 4);
    for (_, _, px) in view.enumerate_pixels() {
        raw.extend_from_slice(&px.to_array());
    }
    image::RgbaImage::from_raw(w, h, raw).ok_or(too_large)
}

/// Loads an image from disk (PNG or JPEG) as RGBA.
pub fn load_image<P: AsRef<Path>>(path: P) -> DotMosaicResult<OwnedImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|err| DotMosaicError::ImageIo {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;
    owned_from_dynamic_image(&img)
}

/// Encodes a view as PNG at `path`.
pub fn save_png<P: AsRef<Path>>(view: ImageView<'_>, path: P) -> DotMosaicResult<()> {
    let path = path.as_ref();
    let rgba = to_rgba_image(view)?;
    rgba.save_with_format(path, image::ImageFormat::Png)
        .map_err(|err| DotMosaicError::ImageIo {
            path: path.display().to_string(),
            reason: err.to_string(),
        })
}
