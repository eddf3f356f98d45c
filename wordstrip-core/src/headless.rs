// File: wordstrip-core/src/headless.rs

//! `headless.rs`
//! One-shot helpers for using the engine without a session: hand in a dataset
//! and a term set, get the sanitized dataset back.

use log::info;

use crate::config::EngineOptions;
use crate::engine::{SanitizationEngine, SanitizeSummary};
use crate::engines::regex_engine::RegexEngine;
use crate::errors::WordstripError;
use crate::record::Dataset;
use crate::terms::TermSet;

/// Strips every term of `terms` from `source` and writes the result to `derived`.
///
/// Pure: the input dataset is left as is and nothing is retained between calls.
/// An empty term set is allowed and simply copies the trimmed source value.
pub fn sanitize(
    dataset: &Dataset,
    terms: &TermSet,
    source: &str,
    derived: &str,
) -> Result<Dataset, WordstripError> {
    sanitize_with_options(dataset, terms, source, derived, &EngineOptions::default())
        .map(|(dataset, _)| dataset)
}

/// Same as [`sanitize`] with explicit engine options, also returning the pass summary.
pub fn sanitize_with_options(
    dataset: &Dataset,
    terms: &TermSet,
    source: &str,
    derived: &str,
    options: &EngineOptions,
) -> Result<(Dataset, SanitizeSummary), WordstripError> {
    let engine = RegexEngine::new(terms, options)?;
    let (out, summary) = engine.sanitize_dataset(dataset, source, derived);
    info!(
        "Sanitization pass finished: {} rows, {} changed, {} terms removed.",
        summary.rows, summary.rows_changed, summary.removals
    );
    Ok((out, summary))
}
