// wordstrip/src/logger.rs
//! Logger setup for the wordstrip binary.
//!
//! Log lines go to stderr as `[LEVEL target] message`, so stdout stays free
//! for command output.

use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

/// Initialises `env_logger`.
///
/// `RUST_LOG` decides the level unless `level_override` is given. Safe to call
/// more than once; later calls are ignored.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.format(|buf, record| {
        writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
    });
    let _ = builder.try_init();
}
