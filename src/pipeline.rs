//! Two-stage conversion: block averaging followed by dot rendering.

use crate::color::Rgba;
use crate::downsample::downsample;
use crate::image::{ImageView, OwnedImage};
use crate::render::{render_dots, RenderConfig};
use crate::trace::trace_span;

/// Parameters for a full conversion.
///
/// The defaults downsample with 12 pixel blocks and render 24 pixel dots,
/// so the output is twice the size of the whole-block area of the input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotConfig {
    /// Source block side used for averaging.
    pub block_size: usize,
    /// Output cell side per averaged block.
    pub dot_size: usize,
    /// Dot inset and radius reduction in output pixels.
    pub gap: usize,
    /// Canvas color behind the dots.
    pub background: Rgba,
    /// Use the row-parallel downsampler when the `rayon` feature is enabled.
    pub parallel: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            block_size: 12,
            dot_size: 24,
            gap: 2,
            background: Rgba::WHITE,
            parallel: false,
        }
    }
}

impl DotConfig {
    /// Render parameters derived from this config.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            block_size: self.dot_size,
            gap: self.gap,
            background: self.background,
        }
    }
}

/// Converter applying a [`DotConfig`] to images.
#[derive(Clone, Debug, Default)]
pub struct DotStyle {
    config: DotConfig,
}

impl DotStyle {
    pub fn new(config: DotConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DotConfig {
        &self.config
    }

    /// Averages `src` into blocks.
    #[cfg(feature = "rayon")]
    pub fn reduce(&self, src: ImageView<'_>) -> OwnedImage {
        if self.config.parallel {
            crate::downsample::downsample_par(src, self.config.block_size)
        } else {
            downsample(src, self.config.block_size)
        }
    }

    /// Averages `src` into blocks.
    #[cfg(not(feature = "rayon"))]
    pub fn reduce(&self, src: ImageView<'_>) -> OwnedImage {
        downsample(src, self.config.block_size)
    }

    /// Runs both stages and returns the dot-style image.
    pub fn apply(&self, src: ImageView<'_>) -> OwnedImage {
        let _span = trace_span!("dot_style", width = src.width(), height = src.height()).entered();
        let reduced = self.reduce(src);
        render_dots(reduced.view(), &self.config.render_config())
    }
}
