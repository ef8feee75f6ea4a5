//! Scalar circle rasterization with supersampled coverage.

use crate::color::Rgba;
use crate::image::OwnedImage;

/// Subsamples per axis used to estimate pixel coverage.
pub(crate) const SUBSAMPLES: usize = 4;

/// Fills the disc centered at `(cx, cy)` with `color`, blending over `canvas`.
///
/// Pixel `(x, y)` covers the square `[x, x + 1) x [y, y + 1)`. Its coverage
/// is the fraction of a `SUBSAMPLES x SUBSAMPLES` grid of sample points that
/// fall inside the disc. Non-positive or non-finite radii draw nothing.
pub(crate) fn fill_circle(canvas: &mut OwnedImage, cx: f64, cy: f64, radius: f64, color: Rgba) {
    if !radius.is_finite() || radius <= 0.0 || !cx.is_finite() || !cy.is_finite() {
        return;
    }
    let (width, height) = canvas.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    let x0 = (cx - radius).floor().max(0.0) as usize;
    let y0 = (cy - radius).floor().max(0.0) as usize;
    let x1 = ((cx + radius).ceil().max(0.0) as usize).min(width);
    let y1 = ((cy + radius).ceil().max(0.0) as usize).min(height);

    let r2 = radius * radius;
    let step = 1.0 / SUBSAMPLES as f64;
    let total = (SUBSAMPLES * SUBSAMPLES) as f32;

    for y in y0..y1 {
        for x in x0..x1 {
            let mut inside = 0usize;
            for sy in 0..SUBSAMPLES {
                let dy = y as f64 + (sy as f64 + 0.5) * step - cy;
                for sx in 0..SUBSAMPLES {
                    let dx = x as f64 + (sx as f64 + 0.5) * step - cx;
                    if dx * dx + dy * dy <= r2 {
                        inside += 1;
                    }
                }
            }
            if inside == 0 {
                continue;
            }
            let coverage = inside as f32 / total;
            if let Some(dst) = canvas.get(x, y) {
                canvas.set(x, y, color.over(dst, coverage));
            }
        }
    }
}
