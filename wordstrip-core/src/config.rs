//! Configuration management for `wordstrip-core`.
//!
//! Settings are read from an optional YAML file. Every section and field has a
//! default, so a partial file (or none at all) is valid.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::WordstripError;

/// Default upper bound on the compiled matcher's size, in bytes.
pub const DEFAULT_SIZE_LIMIT: usize = 64 * (1 << 20);

/// Default number of rows shown in before/after previews.
pub const DEFAULT_PREVIEW_ROWS: usize = 20;

/// Options controlling how the term matcher is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Byte limit handed to the regex builder. Very large word lists may need more.
    pub size_limit: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            size_limit: DEFAULT_SIZE_LIMIT,
        }
    }
}

/// Options for reading and writing delimited text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CodecOptions {
    /// Field delimiter. Must be a single ASCII character.
    pub delimiter: char,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl CodecOptions {
    /// The delimiter as the single byte the csv reader expects.
    ///
    /// Fails for anything but an ASCII character other than a quote or line break.
    pub fn delimiter_byte(&self) -> Result<u8, WordstripError> {
        match self.delimiter {
            c if c.is_ascii() && !matches!(c, '"' | '\n' | '\r') => Ok(c as u8),
            c => Err(WordstripError::Config(format!(
                "codec.delimiter must be a single ASCII character other than a quote or line break, got {:?}.",
                c
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PreviewOptions {
    pub rows: usize,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WordstripConfig {
    pub codec: CodecOptions,
    pub engine: EngineOptions,
    pub preview: PreviewOptions,
}

impl WordstripConfig {
    /// Loads configuration from a YAML file and validates it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Parses and validates configuration from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: WordstripConfig = serde_yml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        if let Err(e) = self.codec.delimiter_byte() {
            errors.push(e.to_string());
        }
        if self.engine.size_limit == 0 {
            errors.push("engine.size_limit must be greater than 0.".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("Configuration validation failed:\n{}", errors.join("\n")))
        }
    }
}
