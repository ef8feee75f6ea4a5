//! Error types for dotmosaic.

use thiserror::Error;

/// Result alias for dotmosaic operations.
pub type Result<T> = std::result::Result<T, DotMosaicError>;

/// Errors that can occur when building images or converting files.
///
/// The pixel pipeline itself never fails; these variants come from view
/// construction and from the file layer.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DotMosaicError {
    /// Width times height does not fit in memory addressing.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Row stride is shorter than the row width.
    #[error("invalid stride {stride} for width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// Backing buffer cannot hold the requested image.
    #[error("buffer too small: needed {needed} pixels, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// Requested ROI extends past the image bounds.
    #[error(
        "roi ({x}, {y}, {width}x{height}) out of bounds for {img_width}x{img_height} image"
    )]
    RoiOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        img_width: usize,
        img_height: usize,
    },
    /// Decoding or encoding an image file failed.
    #[error("image i/o failed for {path}: {reason}")]
    ImageIo { path: String, reason: String },
    /// A filesystem operation failed.
    #[error("i/o failed for {path}: {reason}")]
    Io { path: String, reason: String },
}
