use thiserror::Error;

/// Main error type for the crt-filter library
#[derive(Error, Debug)]
pub enum CrtError {
    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    #[error("Batch processing error: {0}")]
    Batch(#[from] BatchError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

/// Errors raised by the core filter pipeline
///
/// The pipeline is a total function of valid inputs: these errors are
/// reported before any stage runs and no partial output is produced.
/// Channel arithmetic overflow cannot occur because every stage clamps at
/// each step, so there is deliberately no overflow variant here.
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Mask dimensions {mask_width}x{mask_height} do not match image dimensions {width}x{height}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        mask_width: u32,
        mask_height: u32,
    },

    #[error("Invalid parameter: {name} = {value}")]
    InvalidParameter { name: String, value: String },
}

/// Errors raised by the directory batch layer
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("No images found in directory: {path}")]
    NoImagesFound { path: String },

    #[error("Input directory not readable: {path}")]
    InputDirUnreadable { path: String },

    #[error("Failed to create output directory: {path}")]
    OutputDirFailed { path: String },

    #[error("Failed to process {path}: {reason}")]
    FileFailed { path: String, reason: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using CrtError
pub type Result<T> = std::result::Result<T, CrtError>;

impl CrtError {
    /// Create a generic error with a custom message
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into())
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Batch(BatchError::NoImagesFound { path }) => {
                format!(
                    "No .png, .jpg or .jpeg files found in '{}'. Check the input directory.",
                    path
                )
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            Self::Filter(FilterError::InvalidParameter { name, value }) => {
                format!("Parameter '{}' has an out-of-range value: {}", name, value)
            }
            _ => self.to_string(),
        }
    }
}
