//! RGBA color type shared by every pipeline stage.

/// Straight (non-premultiplied) 8-bit RGBA color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// All channels zero.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from red, green and blue.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Opaque gray with all color channels set to `level`.
    pub const fn gray(level: u8) -> Self {
        Self::opaque(level, level, level)
    }

    /// Alpha-premultiplied 16-bit channels.
    ///
    /// Each 8-bit value is widened with `v * 257`, then color channels are
    /// scaled by `a16 / 0xffff`. A fully transparent pixel yields all zeros
    /// regardless of its stored color.
    pub const fn to_rgba16(self) -> [u16; 4] {
        let a16 = self.a as u32 * 257;
        [
            premultiply(self.r, a16),
            premultiply(self.g, a16),
            premultiply(self.b, a16),
            a16 as u16,
        ]
    }

    /// Recovers a straight color from 8-bit premultiplied channels.
    ///
    /// Zero alpha yields [`Rgba::TRANSPARENT`]; color channels are scaled by
    /// `0xffff / a` and truncated back to 8 bits.
    pub const fn from_premultiplied(r: u8, g: u8, b: u8, a: u8) -> Self {
        if a == 0 {
            return Rgba::TRANSPARENT;
        }
        Rgba::new(
            unpremultiply(r, a),
            unpremultiply(g, a),
            unpremultiply(b, a),
            a,
        )
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn from_array([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }

    /// Composites `self` over `dst` with `coverage` in `[0, 1]` scaling the
    /// source alpha (Porter-Duff source-over on straight alpha).
    pub fn over(self, dst: Rgba, coverage: f32) -> Rgba {
        let sa = f32::from(self.a) / 255.0 * coverage.clamp(0.0, 1.0);
        if sa <= 0.0 {
            return dst;
        }
        let da = f32::from(dst.a) / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return Rgba::TRANSPARENT;
        }
        let mix = |s: u8, d: u8| -> u8 {
            let value = (f32::from(s) * sa + f32::from(d) * da * (1.0 - sa)) / out_a;
            value.round().clamp(0.0, 255.0) as u8
        };
        Rgba::new(
            mix(self.r, dst.r),
            mix(self.g, dst.g),
            mix(self.b, dst.b),
            (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
        )
    }
}

const fn premultiply(c: u8, a16: u32) -> u16 {
    (c as u32 * 257 * a16 / 0xffff) as u16
}

// Channels above alpha are not valid premultiplied input; they saturate.
const fn unpremultiply(c: u8, a: u8) -> u8 {
    let v = (c as u32 * 0xffff / a as u32) >> 8;
    if v > 255 {
        255
    } else {
        v as u8
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(value: [u8; 4]) -> Self {
        Self::from_array(value)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(value: Rgba) -> Self {
        value.to_array()
    }
}
