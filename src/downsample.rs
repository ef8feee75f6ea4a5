//! Block-average downsampling.
//!
//! The output holds one pixel per whole block of the source. Each pixel is
//! the truncated per-channel mean of its block, computed by
//! [`average_color`](crate::block::average_color).

use crate::block::{average_color, block_count, effective_block_size, sample_block, BlockRect};
use crate::color::Rgba;
use crate::image::{ImageView, OwnedImage};
use crate::trace::trace_span;

/// Reduces `src` to one averaged pixel per `block_size x block_size` block.
///
/// The output dimensions are exactly [`block_count`] of the source; partial
/// blocks at the right and bottom edges are dropped. A `block_size` of zero
/// behaves as one, which copies the source.
pub fn downsample(src: ImageView<'_>, block_size: usize) -> OwnedImage {
    let block_size = effective_block_size(block_size);
    let grid = block_count(src.width(), src.height(), block_size);
    let _span = trace_span!(
        "downsample",
        src_width = src.width(),
        src_height = src.height(),
        block_size = block_size
    )
    .entered();

    let mut out = OwnedImage::blank(grid.x, grid.y);
    for y in 0..grid.y {
        for x in 0..grid.x {
            out.set(x, y, block_average(src, x, y, block_size));
        }
    }
    out
}

/// Row-parallel [`downsample`]; produces an identical image.
#[cfg(feature = "rayon")]
pub fn downsample_par(src: ImageView<'_>, block_size: usize) -> OwnedImage {
    use rayon::prelude::*;

    let block_size = effective_block_size(block_size);
    let grid = block_count(src.width(), src.height(), block_size);
    let _span = trace_span!(
        "downsample_par",
        src_width = src.width(),
        src_height = src.height(),
        block_size = block_size
    )
    .entered();

    let mut out = OwnedImage::blank(grid.x, grid.y);
    if grid.is_empty() {
        return out;
    }
    out.data_mut()
        .par_chunks_mut(grid.x)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.iter_mut().enumerate() {
                *px = block_average(src, x, y, block_size);
            }
        });
    out
}

fn block_average(src: ImageView<'_>, gx: usize, gy: usize, block_size: usize) -> Rgba {
    let rect = BlockRect::grid_cell(gx, gy, block_size).clamp_to(src.width(), src.height());
    let pixels = sample_block(src, rect);
    average_color(&pixels, rect.width, rect.height)
}
