//! errors.rs - Custom error types for the wordstrip-core library.
//!
//! Every failure the library can surface maps onto one of these variants, so
//! callers can tell a bad input file apart from an operation invoked too early
//! or an internal matcher-construction fault.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error kinds produced by `wordstrip-core`.
///
/// `#[non_exhaustive]` so new variants can be added without breaking matches
/// in downstream crates.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WordstripError {
    /// A file could not be parsed as tabular text.
    #[error("Failed to decode tabular data: {0}")]
    Decode(String),

    /// An operation was invoked before its inputs were ready.
    /// Each entry names one unmet precondition.
    #[error("{}", .0.join(" "))]
    Validation(Vec<String>),

    /// An option value the codec or engine cannot work with.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The combined term matcher could not be built. Terms are escaped before
    /// assembly, so reaching this is a programming error rather than bad user data.
    #[error("Failed to compile forbidden-term matcher ({0} terms): {1}")]
    Compile(usize, regex::Error),

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}

impl WordstripError {
    /// True for errors the user can fix by supplying different input.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            WordstripError::Decode(_) | WordstripError::Validation(_) | WordstripError::Config(_)
        )
    }
}
