//! Directory batch processing
//!
//! Walks an input directory, runs every supported image through the CRT
//! pipeline and writes the result under the same filename in the output
//! directory. Images are independent, so files are processed on a rayon
//! pool; the first failure aborts the whole batch.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::{
    config::Config,
    error::{BatchError, Result},
    frame::Frame,
    pipeline::CrtFilter,
};

const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Batch processor: one filter, many files
pub struct BatchProcessor {
    filter: CrtFilter,
    threads: usize,
}

impl BatchProcessor {
    /// Create a batch processor from a validated configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let filter = CrtFilter::new(config.filter)?;
        Ok(Self {
            filter,
            threads: config.batch.processing_threads,
        })
    }

    /// Process every supported image in `input_dir`, writing results under
    /// the same filenames in `output_dir` (created if absent).
    ///
    /// Returns the number of processed files. Fail-fast: the first file
    /// error aborts the remaining work.
    pub fn process_directory<P: AsRef<Path>>(&self, input_dir: P, output_dir: P) -> Result<usize> {
        let input_dir = input_dir.as_ref();
        let output_dir = output_dir.as_ref();

        let files = discover_images(input_dir)?;
        if files.is_empty() {
            return Err(BatchError::NoImagesFound {
                path: input_dir.display().to_string(),
            }
            .into());
        }

        std::fs::create_dir_all(output_dir).map_err(|_| BatchError::OutputDirFailed {
            path: output_dir.display().to_string(),
        })?;

        info!(
            "Processing {} images from {:?} on {} threads",
            files.len(),
            input_dir,
            self.threads
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .map_err(|e| crate::error::CrtError::generic(e.to_string()))?;

        pool.install(|| {
            files.par_iter().try_for_each(|path| {
                let file_name = path.file_name().unwrap_or_default();
                self.process_file(path, &output_dir.join(file_name))
            })
        })?;

        Ok(files.len())
    }

    /// Run one image through the pipeline: decode, filter, encode
    pub fn process_file(&self, input: &Path, output: &Path) -> Result<()> {
        debug!("Loading {:?}", input);
        let rgb = image::open(input)
            .map_err(|e| BatchError::FileFailed {
                path: input.display().to_string(),
                reason: e.to_string(),
            })?
            .to_rgb8();

        let mut frame = Frame::new(rgb)?;
        self.filter.apply(&mut frame)?;
        frame.save(output)?;

        info!("Processed: {}", output.display());
        Ok(())
    }
}

/// List the supported image files in a directory, sorted by filename so the
/// batch order is stable.
fn discover_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|_| BatchError::InputDirUnreadable {
        path: dir.display().to_string(),
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_supported_extension(path))
        .collect();
    files.sort();

    Ok(files)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
