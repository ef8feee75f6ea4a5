//! Dot-style rendering of a reduced image.
//!
//! Every source pixel becomes one `block_size x block_size` cell on the
//! output canvas, holding a filled circle of the pixel's color. The circle's
//! bounding square is inset by `gap` on the top and left of its cell:
//!
//! ```text
//! radius   = block_size / 2 - gap
//! top_left = (i * block_size + gap, j * block_size + gap)
//! center   = top_left + (radius, radius)
//! ```

mod raster;

use crate::color::Rgba;
use crate::image::{ImageView, OwnedImage};
use crate::trace::trace_span;

/// Rendering parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    /// Cell side length in output pixels; also the nominal dot diameter.
    pub block_size: usize,
    /// Margin subtracted from the dot radius and used to inset it.
    pub gap: usize,
    /// Canvas fill painted before any dot.
    pub background: Rgba,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            block_size: 24,
            gap: 2,
            background: Rgba::WHITE,
        }
    }
}

impl RenderConfig {
    /// Default config with a different cell size.
    pub fn with_block_size(block_size: usize) -> Self {
        Self {
            block_size,
            ..Self::default()
        }
    }

    /// Dot radius in output pixels; may be zero or negative.
    pub fn radius(&self) -> f64 {
        self.block_size as f64 / 2.0 - self.gap as f64
    }

    /// Center of the dot for source pixel `(i, j)`.
    pub fn dot_center(&self, i: usize, j: usize) -> (f64, f64) {
        let radius = self.radius();
        let left = (i * self.block_size + self.gap) as f64;
        let top = (j * self.block_size + self.gap) as f64;
        (left + radius, top + radius)
    }
}

/// Renders `src` as dots on a canvas `block_size` times larger per axis.
///
/// The canvas is filled with `config.background`, then one circle per source
/// pixel is composited over it. When the radius is not positive only the
/// background remains.
pub fn render_dots(src: ImageView<'_>, config: &RenderConfig) -> OwnedImage {
    let width = src.width().saturating_mul(config.block_size);
    let height = src.height().saturating_mul(config.block_size);
    let _span = trace_span!(
        "render_dots",
        width = width,
        height = height,
        block_size = config.block_size
    )
    .entered();

    let mut canvas = OwnedImage::filled(width, height, config.background);
    let radius = config.radius();
    if radius <= 0.0 {
        return canvas;
    }

    for i in 0..src.width() {
        for j in 0..src.height() {
            let Some(color) = src.get(i, j) else {
                continue;
            };
            let (cx, cy) = config.dot_center(i, j);
            raster::fill_circle(&mut canvas, cx, cy, radius, color);
        }
    }
    canvas
}
