//! File-level conversion driven by a list of input paths.
//!
//! Available when the `image-io` feature is enabled. Each file is decoded,
//! converted with [`DotStyle`] and written as PNG into an output directory.
//! A failing file is reported and skipped; it never stops the batch.

use crate::image::io::{load_image, save_png};
use crate::pipeline::{DotConfig, DotStyle};
use crate::trace::{trace_event, trace_span};
use crate::util::{DotMosaicError, DotMosaicResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Result of converting one input file.
#[derive(Debug)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub result: DotMosaicResult<PathBuf>,
}

impl FileOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Converted and failed file counts for a batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[FileOutcome]) -> Self {
        let converted = outcomes.iter().filter(|o| o.is_ok()).count();
        Self {
            converted,
            failed: outcomes.len() - converted,
        }
    }
}

/// Lists the regular files in `dir`, sorted by path.
///
/// Symlinks are followed, so a link to an image is listed like the image
/// itself; links to directories and dangling links are skipped.
pub fn list_input_files<P: AsRef<Path>>(dir: P) -> DotMosaicResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let io_err = |err: std::io::Error| DotMosaicError::Io {
        path: dir.display().to_string(),
        reason: err.to_string(),
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if fs::metadata(&path).is_ok_and(|meta| meta.is_file()) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Output location for `input`: its file stem with a `.png` extension.
pub fn output_path_for(input: &Path, out_dir: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or(input.as_os_str());
    let mut name = stem.to_os_string();
    name.push(".png");
    out_dir.join(name)
}

/// Converts a single file and returns the written path.
pub fn convert_file(input: &Path, out_dir: &Path, config: &DotConfig) -> DotMosaicResult<PathBuf> {
    let _span = trace_span!("convert_file").entered();
    let src = load_image(input)?;
    let out = DotStyle::new(*config).apply(src.view());
    let out_path = output_path_for(input, out_dir);
    save_png(out.view(), &out_path)?;
    Ok(out_path)
}

/// Converts every file in `inputs`, returning one outcome per input in order.
///
/// With the `rayon` feature files are converted concurrently.
#[cfg(feature = "rayon")]
pub fn convert_files(inputs: &[PathBuf], out_dir: &Path, config: &DotConfig) -> Vec<FileOutcome> {
    use rayon::prelude::*;

    let _span = trace_span!("convert_files", files = inputs.len()).entered();
    inputs
        .par_iter()
        .map(|input| convert_and_report(input, out_dir, config))
        .collect()
}

/// Converts every file in `inputs`, returning one outcome per input in order.
#[cfg(not(feature = "rayon"))]
pub fn convert_files(inputs: &[PathBuf], out_dir: &Path, config: &DotConfig) -> Vec<FileOutcome> {
    let _span = trace_span!("convert_files", files = inputs.len()).entered();
    inputs
        .iter()
        .map(|input| convert_and_report(input, out_dir, config))
        .collect()
}

fn convert_and_report(input: &Path, out_dir: &Path, config: &DotConfig) -> FileOutcome {
    let result = convert_file(input, out_dir, config);
    let file = input.display().to_string();
    match &result {
        Ok(_) => {
            trace_event!(info, file = file.as_str(); "converted file");
        }
        Err(err) => {
            let error = err.to_string();
            trace_event!(warn, file = file.as_str(), error = error.as_str(); "failed to convert file");
        }
    }
    FileOutcome {
        input: input.to_path_buf(),
        result,
    }
}
