// wordstrip/src/commands/process.rs
//! `process` command: load both inputs, strip forbidden words, write the result.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use wordstrip_core::{Session, WordstripConfig};

use crate::ui::{output_format, preview_table};

/// Options for [`run_process`].
pub struct ProcessOptions {
    pub forbidden: PathBuf,
    pub products: PathBuf,
    pub output: Option<PathBuf>,
    pub preview_rows: Option<usize>,
    pub quiet: bool,
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

/// Helper for printing success messages to stderr.
pub fn success_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_success_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

pub fn run_process(config: WordstripConfig, opts: ProcessOptions) -> Result<()> {
    info!("Starting process operation.");
    let preview_rows = opts.preview_rows.unwrap_or(config.preview.rows);
    let mut session = Session::with_config(config);

    let term_count = session
        .load_forbidden_file(&opts.forbidden)
        .with_context(|| format!("Failed to load forbidden words from {}", opts.forbidden.display()))?;
    let row_count = session
        .load_product_file(&opts.products)
        .with_context(|| format!("Failed to load product data from {}", opts.products.display()))?;
    if !opts.quiet {
        info_msg(format!("Loaded {} forbidden terms and {} product rows.", term_count, row_count));
    }

    let summary = session.process().context("Processing failed")?;
    let artifact = session.export().context("Export failed")?;
    debug!("Export artifact '{}' is {} bytes.", artifact.file_name, artifact.bytes.len());

    let to_stdout = opts.output.as_deref().is_some_and(|p| p.as_os_str() == "-");
    if to_stdout {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        writer.write_all(&artifact.bytes)?;
        writer.flush()?;
    } else {
        let path = opts.output.unwrap_or_else(|| PathBuf::from(&artifact.file_name));
        fs::write(&path, &artifact.bytes)
            .with_context(|| format!("Failed to write output file: {}", path.display()))?;
        if !opts.quiet {
            success_msg(format!("Wrote processed data to {}", path.display()));
        }
    }

    if !opts.quiet {
        if !to_stdout && preview_rows > 0 {
            let rows = session.preview(preview_rows);
            let stdout = io::stdout();
            preview_table::print_preview(&mut stdout.lock(), &rows, summary.rows)?;
        }
        info_msg(format!(
            "{} of {} rows changed, {} occurrences removed.",
            summary.rows_changed, summary.rows, summary.removals
        ));
        if summary.removals == 0 {
            warn_msg("No forbidden words were found in the product names.");
        }
    }

    info!("Process operation completed.");
    Ok(())
}
