//! Shared utility helpers.

pub mod error;

pub use error::{DotMosaicError, Result as DotMosaicResult};
