// wordstrip/src/main.rs
//! wordstrip entry point.

use clap::Parser;
use log::LevelFilter;
use std::process::ExitCode;

use wordstrip::cli::{Cli, Commands};
use wordstrip::commands::process::{ProcessOptions, error_msg, run_process};
use wordstrip::commands::{load_config, terms::run_terms};
use wordstrip::logger;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let level = if cli.debug {
        Some(LevelFilter::Debug)
    } else if cli.quiet {
        Some(LevelFilter::Error)
    } else {
        None
    };
    logger::init_logger(level);
    log::info!("wordstrip started. Version: {}", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error_msg(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Commands::Process(cmd) => run_process(
            config,
            ProcessOptions {
                forbidden: cmd.forbidden,
                products: cmd.products,
                output: cmd.output,
                preview_rows: cmd.preview,
                quiet: cli.quiet,
            },
        ),
        Commands::Terms(cmd) => run_terms(config, &cmd.forbidden, cli.quiet),
    }
}
