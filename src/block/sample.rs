use super::BlockRect;
use crate::color::Rgba;
use crate::image::ImageView;

/// Collects the pixels of `rect` from `src` in row-major order.
///
/// The rectangle is clamped to the view first, so pixels past the image edge
/// are never read; use [`BlockRect::clamp_to`] to learn the extent that was
/// actually sampled.
pub fn sample_block(src: ImageView<'_>, rect: BlockRect) -> Vec<Rgba> {
    let clamped = rect.clamp_to(src.width(), src.height());
    let mut pixels = Vec::with_capacity(clamped.area());
    for y in clamped.y..clamped.y + clamped.height {
        if let Some(row) = src.row(y) {
            pixels.extend_from_slice(&row[clamped.x..clamped.x + clamped.width]);
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::sample_block;
    use crate::block::BlockRect;
    use crate::color::Rgba;
    use crate::image::ImageView;

    fn ramp(width: usize, height: usize) -> Vec<Rgba> {
        (0..width * height)
            .map(|i| Rgba::gray(i as u8))
            .collect()
    }

    #[test]
    fn samples_rows_in_order() {
        let data = ramp(4, 4);
        let view = ImageView::from_slice(&data, 4, 4).unwrap();
        let pixels = sample_block(view, BlockRect::new(1, 2, 2, 2));
        let levels: Vec<u8> = pixels.iter().map(|px| px.r).collect();
        assert_eq!(levels, vec![9, 10, 13, 14]);
    }

    #[test]
    fn clamps_at_image_edge() {
        let data = ramp(4, 4);
        let view = ImageView::from_slice(&data, 4, 4).unwrap();
        let pixels = sample_block(view, BlockRect::new(3, 3, 4, 4));
        assert_eq!(pixels, vec![Rgba::gray(15)]);
    }

    #[test]
    fn outside_rect_is_empty() {
        let data = ramp(2, 2);
        let view = ImageView::from_slice(&data, 2, 2).unwrap();
        assert!(sample_block(view, BlockRect::new(5, 0, 2, 2)).is_empty());
    }
}
