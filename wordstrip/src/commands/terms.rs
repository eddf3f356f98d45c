// wordstrip/src/commands/terms.rs
//! `terms` command: show the term set a word list produces.

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

use wordstrip_core::{Session, WordstripConfig};

use crate::commands::process::info_msg;

pub fn run_terms(config: WordstripConfig, forbidden: &Path, quiet: bool) -> Result<()> {
    let mut session = Session::with_config(config);
    session
        .load_forbidden_file(forbidden)
        .with_context(|| format!("Failed to load forbidden words from {}", forbidden.display()))?;

    let terms = session.terms();
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    for term in terms.iter() {
        writeln!(writer, "{}", term)?;
    }
    writer.flush()?;

    if !quiet {
        info_msg(format!("{} unique forbidden terms.", terms.len()));
    }
    Ok(())
}
