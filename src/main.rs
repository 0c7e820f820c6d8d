use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber;

use crt_filter::{batch::BatchProcessor, config::Config};

#[derive(Parser)]
#[command(
    name = "crt-filter",
    version,
    about = "Apply CRT-like filters to images",
    long_about = "crt-filter gives every image in a directory a retro CRT display look: pixelation, scanlines, vignetting, boosted saturation and subtle noise."
)]
struct Cli {
    /// Path to the input folder containing images
    #[arg(short, long)]
    input: PathBuf,

    /// Path to the output folder where processed images will be saved
    #[arg(short, long)]
    output: PathBuf,

    /// Opacity of the scanlines (0-255)
    #[arg(short, long, default_value_t = 64)]
    scanline_opacity: u32,

    /// Width of the scanlines in rows
    #[arg(short, long, default_value_t = 4)]
    line_width: u32,

    /// Configuration file (optional; command-line flags take precedence)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    info!("Starting crt-filter v{}", env!("CARGO_PKG_VERSION"));
    info!("Input: {:?}", cli.input);
    info!("Output: {:?}", cli.output);

    // Load configuration, then let the CLI flags win
    let mut config = match cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(&config_path)?
        }
        None => Config::default(),
    };
    config.filter.scanline_opacity = cli.scanline_opacity;
    config.filter.line_width = cli.line_width;
    config.validate().map_err(|e| anyhow::anyhow!(e.user_message()))?;

    info!(
        "Scanlines: opacity {}, width {}",
        config.filter.scanline_opacity, config.filter.line_width
    );

    let processor =
        BatchProcessor::new(config).map_err(|e| anyhow::anyhow!(e.user_message()))?;
    let processed = processor
        .process_directory(&cli.input, &cli.output)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    info!("Done: {} images written to {:?}", processed, cli.output);
    Ok(())
}
