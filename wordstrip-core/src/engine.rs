// wordstrip-core/src/engine.rs
//! Defines the core `SanitizationEngine` trait and the summary it reports.
//!
//! An engine knows how to clean a single value; the dataset pass is provided
//! on top of that and is the same for every engine: rows keep their order,
//! every field except the derived one is copied untouched, and input records
//! are never modified.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::record::Dataset;

/// Counts collected during one sanitization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SanitizeSummary {
    /// Rows processed.
    pub rows: usize,
    /// Rows whose derived value differs from the trimmed source value.
    pub rows_changed: usize,
    /// Total number of term occurrences removed.
    pub removals: usize,
}

/// The result of cleaning one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedValue {
    pub text: String,
    pub removals: usize,
}

pub trait SanitizationEngine: Send + Sync {
    /// Removes every term occurrence from `value` and trims the result.
    fn clean_value(&self, value: &str) -> CleanedValue;

    /// Number of distinct terms the engine removes.
    fn term_count(&self) -> usize;

    /// Convenience wrapper returning only the cleaned text.
    fn sanitize_value(&self, value: &str) -> String {
        self.clean_value(value).text
    }

    /// Runs the engine over every record of `dataset`.
    ///
    /// The value under `source` (empty when absent) is cleaned and written to
    /// `derived` on a copy of the record, overwriting any previous value there.
    fn sanitize_dataset(&self, dataset: &Dataset, source: &str, derived: &str) -> (Dataset, SanitizeSummary) {
        let mut summary = SanitizeSummary::default();
        let mut records = Vec::with_capacity(dataset.len());

        for record in &dataset.records {
            let original = record.get(source).unwrap_or("");
            let cleaned = self.clean_value(original);
            summary.rows += 1;
            summary.removals += cleaned.removals;
            if cleaned.text != original.trim() {
                summary.rows_changed += 1;
            }
            records.push(record.with(derived, cleaned.text));
        }

        debug!(
            "Sanitized {} rows: {} changed, {} removals.",
            summary.rows, summary.rows_changed, summary.removals
        );

        (Dataset::new(dataset.fields.clone(), records), summary)
    }
}
