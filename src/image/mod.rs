//! RGBA image storage and borrowed views.
//!
//! `OwnedImage` is the single image type passed between pipeline stages.
//! `ImageView` is a borrowed 2D view into a 1D pixel buffer with an explicit
//! stride; the stride counts pixels between the starts of consecutive rows,
//! so a stride larger than the width represents padded rows. ROI slices are
//! zero-copy views into the same backing slice and retain the original
//! stride. Zero-sized images are valid and simply contain no pixels.

use crate::color::Rgba;
use crate::util::{DotMosaicError, DotMosaicResult};

#[cfg(feature = "image-io")]
pub mod io;

/// Borrowed 2D RGBA view with an explicit stride.
#[derive(Copy, Clone, Debug)]
pub struct ImageView<'a> {
    data: &'a [Rgba],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> ImageView<'a> {
    /// Creates a contiguous view with `stride == width`.
    pub fn from_slice(data: &'a [Rgba], width: usize, height: usize) -> DotMosaicResult<Self> {
        Self::new(data, width, height, width)
    }

    /// Creates a view with an explicit stride.
    pub fn new(
        data: &'a [Rgba],
        width: usize,
        height: usize,
        stride: usize,
    ) -> DotMosaicResult<Self> {
        let needed = required_len(width, height, stride)?;
        if data.len() < needed {
            return Err(DotMosaicError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the stride in pixels between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// True when the view holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the backing slice including any row padding.
    pub fn as_slice(&self) -> &'a [Rgba] {
        self.data
    }

    /// Returns the pixel at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y.checked_mul(self.stride)?.checked_add(x)?;
        self.data.get(idx).copied()
    }

    /// Returns a contiguous slice for row `y` with length `width`.
    pub fn row(&self, y: usize) -> Option<&'a [Rgba]> {
        if y >= self.height {
            return None;
        }
        let start = y.checked_mul(self.stride)?;
        let end = start.checked_add(self.width)?;
        self.data.get(start..end)
    }

    /// Returns a zero-copy ROI view into the same backing buffer.
    ///
    /// The ROI must lie entirely inside the view; empty ROIs are allowed.
    pub fn roi(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> DotMosaicResult<ImageView<'a>> {
        let out_of_bounds = DotMosaicError::RoiOutOfBounds {
            x,
            y,
            width,
            height,
            img_width: self.width,
            img_height: self.height,
        };
        let end_x = x.checked_add(width).ok_or_else(|| out_of_bounds.clone())?;
        let end_y = y.checked_add(height).ok_or_else(|| out_of_bounds.clone())?;
        if end_x > self.width || end_y > self.height {
            return Err(out_of_bounds);
        }
        if width == 0 || height == 0 {
            return ImageView::new(&[], width, height, width);
        }

        let start = y
            .checked_mul(self.stride)
            .and_then(|v| v.checked_add(x))
            .ok_or(DotMosaicError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })?;
        let data = self
            .data
            .get(start..)
            .ok_or(DotMosaicError::BufferTooSmall {
                needed: start.saturating_add(1),
                got: self.data.len(),
            })?;

        ImageView::new(data, width, height, self.stride)
    }

    /// Iterates over `(x, y, pixel)` in row-major order.
    pub fn enumerate_pixels(&self) -> impl Iterator<Item = (usize, usize, Rgba)> + 'a {
        let view = *self;
        (0..view.height).flat_map(move |y| {
            let row = view.row(y).unwrap_or(&[]);
            row.iter().enumerate().map(move |(x, &px)| (x, y, px))
        })
    }
}

fn required_len(width: usize, height: usize, stride: usize) -> DotMosaicResult<usize> {
    if stride < width {
        return Err(DotMosaicError::InvalidStride { width, stride });
    }
    if width == 0 || height == 0 {
        return Ok(0);
    }
    (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(width))
        .ok_or(DotMosaicError::InvalidDimensions { width, height })
}

/// Owned contiguous RGBA image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnedImage {
    data: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl OwnedImage {
    /// Wraps a row-major pixel buffer of exactly `width * height` pixels.
    pub fn new(data: Vec<Rgba>, width: usize, height: usize) -> DotMosaicResult<Self> {
        let needed = width
            .checked_mul(height)
            .ok_or(DotMosaicError::InvalidDimensions { width, height })?;
        if data.len() < needed {
            return Err(DotMosaicError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        if data.len() > needed {
            return Err(DotMosaicError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates an image with every pixel set to `fill`.
    pub fn filled(width: usize, height: usize, fill: Rgba) -> Self {
        Self {
            data: vec![fill; width.saturating_mul(height)],
            width,
            height,
        }
    }

    /// Creates a zero-initialized (fully transparent) image.
    pub fn blank(width: usize, height: usize) -> Self {
        Self::filled(width, height, Rgba::default())
    }

    /// Copies a view into a contiguous buffer, dropping row padding.
    pub fn from_view(view: ImageView<'_>) -> Self {
        let mut data = Vec::with_capacity(view.width() * view.height());
        for y in 0..view.height() {
            if let Some(row) = view.row(y) {
                data.extend_from_slice(row);
            }
        }
        Self {
            data,
            width: view.width(),
            height: view.height(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn data(&self) -> &[Rgba] {
        &self.data
    }

    pub fn into_data(self) -> Vec<Rgba> {
        self.data
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }

    /// Sets the pixel at `(x, y)`; out-of-bounds writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, color: Rgba) {
        if x < self.width && y < self.height {
            self.data[y * self.width + x] = color;
        }
    }

    pub(crate) fn data_mut(&mut self) -> &mut [Rgba] {
        &mut self.data
    }

    /// Returns a borrowed view of the image.
    pub fn view(&self) -> ImageView<'_> {
        ImageView {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }
}
