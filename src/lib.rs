//! dotmosaic turns raster images into dot-style mosaics.
//!
//! Conversion runs in two stages. [`downsample()`] collapses each square block
//! of the source into its average color, and [`render_dots`] draws each of
//! those averages as a filled circle on a larger canvas. [`DotStyle`] chains
//! both with a single [`DotConfig`].
//!
//! File loading, PNG output and batch conversion live behind the `image-io`
//! feature; `rayon` adds parallel variants and `tracing` enables spans.

pub mod block;
pub mod color;
pub mod downsample;
pub mod image;
pub mod pipeline;
pub mod render;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub mod batch;

#[cfg(feature = "image-io")]
pub use crate::image::io;

pub use block::{average_color, block_count, sample_block, BlockCount, BlockRect};
pub use color::Rgba;
pub use downsample::downsample;
#[cfg(feature = "rayon")]
pub use downsample::downsample_par;
pub use crate::image::{ImageView, OwnedImage};
pub use pipeline::{DotConfig, DotStyle};
pub use render::{render_dots, RenderConfig};
pub use util::{DotMosaicError, DotMosaicResult};
