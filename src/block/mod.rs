//! Block partitioning: grid sizing, sampling and color averaging.
//!
//! A block is a square group of source pixels that is collapsed into a single
//! color. The grid only counts whole blocks, so trailing rows and columns
//! that do not fill a block are ignored by the downsampler.

mod average;
mod sample;

pub use average::average_color;
pub use sample::sample_block;

/// Number of whole blocks along each axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BlockCount {
    pub x: usize,
    pub y: usize,
}

impl BlockCount {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Total number of blocks.
    pub fn area(&self) -> usize {
        self.x * self.y
    }

    pub fn is_empty(&self) -> bool {
        self.x == 0 || self.y == 0
    }
}

/// Effective block size; zero is treated as one.
#[inline]
pub fn effective_block_size(block_size: usize) -> usize {
    block_size.max(1)
}

/// Computes how many whole `block_size` blocks fit in a `width x height` image.
///
/// Uses floor division on each axis. A `block_size` of zero behaves as one.
pub fn block_count(width: usize, height: usize, block_size: usize) -> BlockCount {
    let block_size = effective_block_size(block_size);
    BlockCount::new(width / block_size, height / block_size)
}

/// Rectangle of source pixels identified by its top-left corner.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl BlockRect {
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The square block at grid cell `(gx, gy)`.
    pub fn grid_cell(gx: usize, gy: usize, block_size: usize) -> Self {
        Self::new(gx * block_size, gy * block_size, block_size, block_size)
    }

    /// Nominal pixel count.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Shrinks the rectangle so it lies inside a `width x height` image.
    ///
    /// A rectangle starting outside the image collapses to zero size.
    pub fn clamp_to(&self, width: usize, height: usize) -> Self {
        let x = self.x.min(width);
        let y = self.y.min(height);
        let end_x = self.x.saturating_add(self.width).min(width);
        let end_y = self.y.saturating_add(self.height).min(height);
        Self::new(x, y, end_x - x, end_y - y)
    }
}
