// wordstrip/src/cli.rs
//! Command-line interface definition for wordstrip.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "wordstrip",
    version = env!("CARGO_PKG_VERSION"),
    about = "Strip forbidden words from product names in CSV files",
    long_about = "wordstrip reads a forbidden-word list (first column of a CSV) and a product CSV, removes every occurrence of every word from the '*상품명' column, case-insensitively, and writes the result to a new '금지어가 제거된 상품명' column.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Suppress informational messages and the preview table.
    #[arg(long, short = 'q', global = true, help = "Suppress informational messages and the preview table.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a YAML configuration file.
    #[arg(long = "config", value_name = "FILE", global = true, env = "WORDSTRIP_CONFIG", help = "Path to a YAML configuration file.")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Removes forbidden words from a product CSV and writes the processed file.
    #[command(about = "Remove forbidden words from a product CSV and write the processed file.")]
    Process(ProcessCommand),

    /// Prints the deduplicated forbidden-word list.
    #[command(about = "Print the deduplicated forbidden-word list, one term per line.")]
    Terms(TermsCommand),
}

/// Arguments for the `process` command.
#[derive(Parser, Debug)]
pub struct ProcessCommand {
    /// CSV whose first column lists the forbidden words.
    #[arg(long, short = 'f', value_name = "FILE", help = "CSV whose first column lists the forbidden words.")]
    pub forbidden: PathBuf,

    /// Product CSV containing the '*상품명' column.
    #[arg(long, short = 'p', value_name = "FILE", help = "Product CSV containing the '*상품명' column.")]
    pub products: PathBuf,

    /// Output path. Defaults to processed_<products file name>.csv; '-' writes to stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Output path ('-' for stdout). Defaults to processed_<products>.csv in the current directory.")]
    pub output: Option<PathBuf>,

    /// Number of before/after rows to show.
    #[arg(long = "preview", value_name = "N", help = "Number of before/after rows to show (overrides the config file).")]
    pub preview: Option<usize>,
}

/// Arguments for the `terms` command.
#[derive(Parser, Debug)]
pub struct TermsCommand {
    /// CSV whose first column lists the forbidden words.
    #[arg(long, short = 'f', value_name = "FILE", help = "CSV whose first column lists the forbidden words.")]
    pub forbidden: PathBuf,
}
