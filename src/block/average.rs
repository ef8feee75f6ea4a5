use crate::color::Rgba;

/// Averages `pixels` over a nominal `width x height` block.
///
/// Each channel is taken from its alpha-premultiplied 16-bit representation
/// ([`Rgba::to_rgba16`]), shifted back down to 8 bits, summed, and divided
/// (truncating) by `width * height`. The premultiplied mean is converted back
/// to a straight color, so transparent samples add nothing to the color
/// channels. Alpha is averaged like the color channels, not used as a weight.
///
/// The divisor is the nominal block area, not `pixels.len()`; callers must
/// pass matching counts. When more samples than the area are supplied each
/// channel saturates at 255 instead of wrapping. A zero-area block yields
/// [`Rgba::TRANSPARENT`] no matter what samples were supplied.
pub fn average_color(pixels: &[Rgba], width: usize, height: usize) -> Rgba {
    let total = (width as u64).saturating_mul(height as u64);
    if total == 0 {
        return Rgba::TRANSPARENT;
    }

    let mut sums = [0u64; 4];
    for px in pixels {
        for (sum, channel) in sums.iter_mut().zip(px.to_rgba16()) {
            *sum += u64::from(channel >> 8);
        }
    }

    let [r, g, b, a] = sums.map(|sum| (sum / total).min(255) as u8);
    Rgba::from_premultiplied(r, g, b, a)
}
