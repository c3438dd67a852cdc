//! Configuration module for the pl0c driver.
//!
//! Settings come from an optional TOML file; command line flags override
//! them. Every field has a default, so an empty file is a valid
//! configuration.
//!
//! ```toml
//! [lexer]
//! charset = "ascii"
//!
//! [output]
//! spans = true
//! ```

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use pl0c_lex::IdentCharset;
use serde::{Deserialize, Serialize};

use crate::error::{DrvError, Result};

/// Characters identifiers are built from, as named in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    /// Unicode letters and ASCII digits
    #[default]
    Unicode,
    /// ASCII letters, digits and underscore
    Ascii,
}

impl From<Charset> for IdentCharset {
    fn from(charset: Charset) -> Self {
        match charset {
            Charset::Unicode => IdentCharset::Unicode,
            Charset::Ascii => IdentCharset::Ascii,
        }
    }
}

/// Driver configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Lexer settings.
    #[serde(default)]
    pub lexer: LexerConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Lexer settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LexerConfig {
    /// Identifier charset.
    #[serde(default)]
    pub charset: Charset,
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Prefix each token with its `start-end` source range.
    #[serde(default)]
    pub spans: bool,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            DrvError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&text)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
