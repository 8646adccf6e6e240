//! CLI error types

use gbm_mc_rs::PricingError;
use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Pricing engine error
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Path export error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Config parse error
    #[error("Failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
