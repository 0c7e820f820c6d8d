//! # crt-filter
//!
//! Transform raster images into a stylized CRT display rendition.
//!
//! The pipeline runs a deterministic sequence of pixel-level stages:
//! pixelation, scanline banding, radial vignette darkening, saturation
//! boosting and stochastic noise injection.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use crt_filter::{config::FilterConfig, frame::Frame, pipeline::CrtFilter};
//!
//! # fn main() -> anyhow::Result<()> {
//! let rgb = image::open("photo.png")?.to_rgb8();
//! let mut frame = Frame::new(rgb)?;
//!
//! let filter = CrtFilter::new(FilterConfig::default())?;
//! filter.apply(&mut frame)?;
//!
//! frame.save("photo_crt.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`pipeline`] - The per-image filter stages and their orchestrator
//! - [`frame`] - Dimension-checked RGB pixel buffer
//! - [`batch`] - Directory traversal and parallel batch processing
//! - [`config`] - Configuration management
//!
//! ## Deterministic noise
//!
//! The noise stage takes any [`rand::Rng`]; hand it a seeded generator to
//! replay an exact noise pattern:
//!
//! ```rust,no_run
//! use crt_filter::{frame::Frame, pipeline::CrtFilter};
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut frame = Frame::new_filled(640, 480, [40, 40, 40])?;
//! let mut rng = SmallRng::seed_from_u64(1983);
//! CrtFilter::with_defaults().apply_with_rng(&mut frame, &mut rng)?;
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod frame;
pub mod pipeline;

// Re-export commonly used types for convenience
pub use crate::{
    batch::BatchProcessor,
    config::{Config, FilterConfig},
    error::{CrtError, Result},
    frame::Frame,
    pipeline::CrtFilter,
};
