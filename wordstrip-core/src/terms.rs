// wordstrip-core/src/terms.rs
//! Forbidden-term set and the builder that derives it from a word-list dataset.
//!
//! The word list's header is arbitrary, so terms are read from whichever field
//! comes first in the schema rather than from a named column.

use std::collections::BTreeSet;

use log::debug;

use crate::record::Dataset;

/// A deduplicated set of trimmed, non-empty terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TermSet {
    terms: BTreeSet<String>,
}

impl TermSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `term` after trimming. Returns false for blank or duplicate input.
    pub fn insert(&mut self, term: &str) -> bool {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.terms.insert(trimmed.to_string())
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term.trim())
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for TermSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TermSet::new();
        for term in iter {
            set.insert(term.as_ref());
        }
        set
    }
}

/// Builds the term set from the first schema field of `dataset`.
///
/// Rows missing that field or holding only whitespace contribute nothing.
/// An empty dataset yields an empty set.
pub fn build_term_set(dataset: &Dataset) -> TermSet {
    let Some(column) = dataset.first_field() else {
        debug!("Forbidden-word dataset has no fields; term set is empty.");
        return TermSet::new();
    };

    let set: TermSet = dataset
        .records
        .iter()
        .filter_map(|record| record.get(column))
        .collect();

    debug!(
        "Built term set from column '{}': {} rows, {} unique terms.",
        column,
        dataset.len(),
        set.len()
    );
    set
}
