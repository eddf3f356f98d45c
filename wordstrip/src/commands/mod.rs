// wordstrip/src/commands/mod.rs
//! Subcommand implementations.

pub mod process;
pub mod terms;

use anyhow::Result;
use std::path::Path;

use wordstrip_core::WordstripConfig;

/// Loads the configuration file if one was given, else the defaults.
pub fn load_config(path: Option<&Path>) -> Result<WordstripConfig> {
    match path {
        Some(p) => WordstripConfig::load_from_file(p),
        None => Ok(WordstripConfig::default()),
    }
}
