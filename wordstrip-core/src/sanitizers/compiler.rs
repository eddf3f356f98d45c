//! compiler.rs - Turns a `TermSet` into a single case-insensitive matcher.
//!
//! All terms are escaped and joined into one alternation so each value is
//! scanned once and every term is removed in the same pass. Alternatives are
//! ordered longest first, so when two terms start at the same position the
//! longer one wins regardless of how the set happens to be iterated.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::config::EngineOptions;
use crate::errors::WordstripError;
use crate::terms::TermSet;

/// A compiled term set. `None` means the set was empty and nothing matches.
#[derive(Debug, Clone)]
pub struct CompiledTerms {
    pub matcher: Option<Regex>,
    /// Number of terms that went into the matcher.
    pub term_count: usize,
}

impl CompiledTerms {
    /// A matcher that never matches.
    pub fn empty() -> Self {
        Self {
            matcher: None,
            term_count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matcher.is_none()
    }
}

/// Escapes each term and assembles the alternation, longest term first.
pub fn build_pattern(terms: &TermSet) -> String {
    let mut ordered: Vec<&str> = terms.iter().collect();
    ordered.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    ordered
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<String>>()
        .join("|")
}

/// Compiles `terms` into a [`CompiledTerms`].
///
/// Fails only if the assembled pattern is rejected by the regex builder,
/// typically because it exceeds `options.size_limit`.
pub fn compile_terms(terms: &TermSet, options: &EngineOptions) -> Result<CompiledTerms, WordstripError> {
    if terms.is_empty() {
        debug!("Term set is empty; compiled matcher will match nothing.");
        return Ok(CompiledTerms::empty());
    }

    debug!("Starting compilation of {} terms.", terms.len());
    let pattern = build_pattern(terms);

    let regex = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .unicode(true)
        .size_limit(options.size_limit)
        .build()
        .map_err(|e| WordstripError::Compile(terms.len(), e))?;

    log::debug!(
        target: "wordstrip_core::sanitizer",
        "Term matcher compiled successfully ({} terms, {} pattern bytes).",
        terms.len(),
        pattern.len()
    );

    Ok(CompiledTerms {
        matcher: Some(regex),
        term_count: terms.len(),
    })
}
