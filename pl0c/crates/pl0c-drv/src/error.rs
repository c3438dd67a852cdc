//! Error handling module for the pl0c driver.

use pl0c_util::TokenizeError;
use thiserror::Error;

/// Main error type for the driver.
#[derive(Error, Debug)]
pub enum DrvError {
    /// The configuration file could not be read.
    #[error("configuration error: {0}")]
    Config(String),

    /// The configuration file is not valid TOML or has unknown fields.
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// The source failed to tokenize. `rendered` is the full report with
    /// source context.
    #[error("{rendered}")]
    Tokenize {
        /// The underlying tokenizer error.
        error: TokenizeError,
        /// The diagnostic rendered against the source file.
        rendered: String,
    },
}

/// Result type alias using DrvError.
pub type Result<T> = std::result::Result<T, DrvError>;
