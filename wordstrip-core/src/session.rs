// wordstrip-core/src/session.rs
//! Caller-facing session tying the inputs, the engine and export together.
//!
//! The session owns immutable snapshots of its inputs and results. Each
//! successful step swaps a snapshot in whole; a failed step leaves every
//! visible snapshot as it was and records its message in the error slot.

use std::path::Path;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::codec::{decode_csv, encode_csv};
use crate::config::WordstripConfig;
use crate::engine::{SanitizationEngine, SanitizeSummary};
use crate::engines::regex_engine::RegexEngine;
use crate::errors::WordstripError;
use crate::record::{DERIVED_FIELD, Dataset, SOURCE_FIELD};
use crate::terms::{TermSet, build_term_set};

/// Export file name used when the product data has no known file name.
pub const DEFAULT_EXPORT_NAME: &str = "processed_product_data.csv";

/// Bytes ready to be written out, with a suggested file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// One before/after pair for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRow {
    pub original: String,
    pub cleaned: String,
}

#[derive(Debug, Default)]
pub struct Session {
    config: WordstripConfig,
    terms: Arc<TermSet>,
    products: Option<Arc<Dataset>>,
    product_name: Option<String>,
    processed: Option<Arc<Dataset>>,
    last_error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: WordstripConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &WordstripConfig {
        &self.config
    }

    pub fn terms(&self) -> Arc<TermSet> {
        Arc::clone(&self.terms)
    }

    pub fn products(&self) -> Option<Arc<Dataset>> {
        self.products.clone()
    }

    pub fn processed(&self) -> Option<Arc<Dataset>> {
        self.processed.clone()
    }

    /// Message of the most recent failed operation, cleared when a new one starts.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replaces the forbidden-word source and rebuilds the term set in full.
    ///
    /// The processed result stays visible until the next `process` call
    /// replaces it.
    pub fn set_forbidden_source(&mut self, dataset: Dataset) {
        self.last_error = None;
        let terms = build_term_set(&dataset);
        info!("Loaded {} forbidden terms.", terms.len());
        self.terms = Arc::new(terms);
    }

    /// Replaces the product data. Any processed result is discarded.
    pub fn set_product_source(&mut self, dataset: Dataset, name: Option<String>) {
        self.last_error = None;
        info!("Loaded {} product rows.", dataset.len());
        self.products = Some(Arc::new(dataset));
        self.product_name = name;
        self.invalidate_processed();
    }

    /// Reads and decodes the forbidden-word file at `path`.
    ///
    /// On failure the current term set stays in place.
    pub fn load_forbidden_file(&mut self, path: &Path) -> Result<usize, WordstripError> {
        self.last_error = None;
        let result = self.read_dataset(path).map(|dataset| {
            self.set_forbidden_source(dataset);
            self.terms.len()
        });
        self.record(result)
    }

    /// Reads and decodes the product file at `path`.
    ///
    /// On failure the current product data stays in place.
    pub fn load_product_file(&mut self, path: &Path) -> Result<usize, WordstripError> {
        self.last_error = None;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        let result = self.read_dataset(path).map(|dataset| {
            let rows = dataset.len();
            self.set_product_source(dataset, name);
            rows
        });
        self.record(result)
    }

    /// Runs the engine over the current inputs.
    ///
    /// Fails with a validation error, listing each unmet precondition, when the
    /// term set or the product data is empty. The previous result is kept on failure.
    pub fn process(&mut self) -> Result<SanitizeSummary, WordstripError> {
        self.last_error = None;
        let result = self.run_process();
        self.record(result)
    }

    /// Encodes the processed dataset for download.
    pub fn export(&mut self) -> Result<ExportArtifact, WordstripError> {
        self.last_error = None;
        let result = self.run_export();
        self.record(result)
    }

    /// Before/after pairs for up to `limit` rows.
    ///
    /// Shows the processed result when there is one; otherwise the product
    /// rows with the source value standing in for the cleaned value.
    pub fn preview(&self, limit: usize) -> Vec<PreviewRow> {
        if let Some(processed) = &self.processed {
            return processed
                .records
                .iter()
                .take(limit)
                .map(|r| PreviewRow {
                    original: r.source_value().unwrap_or("").to_string(),
                    cleaned: r.derived_value().unwrap_or("").to_string(),
                })
                .collect();
        }
        self.products
            .iter()
            .flat_map(|p| p.records.iter())
            .take(limit)
            .map(|r| {
                let original = r.source_value().unwrap_or("").to_string();
                PreviewRow {
                    cleaned: original.clone(),
                    original,
                }
            })
            .collect()
    }

    /// Suggested file name for the export, derived from the product file name.
    pub fn export_file_name(&self) -> String {
        match self.product_name.as_deref().map(|n| Path::new(n)).and_then(Path::file_stem) {
            Some(stem) => format!("processed_{}.csv", stem.to_string_lossy()),
            None => DEFAULT_EXPORT_NAME.to_string(),
        }
    }

    fn run_process(&mut self) -> Result<SanitizeSummary, WordstripError> {
        let mut failures = Vec::new();
        if self.terms.is_empty() {
            failures.push("The forbidden-word list is empty; load a file with at least one term.".to_string());
        }
        let products = match &self.products {
            Some(p) if !p.is_empty() => Some(Arc::clone(p)),
            _ => {
                failures.push("The product data is empty; load a file with at least one row.".to_string());
                None
            }
        };
        let Some(products) = products.filter(|_| failures.is_empty()) else {
            return Err(WordstripError::Validation(failures));
        };

        let terms = Arc::clone(&self.terms);
        let engine = RegexEngine::new(&terms, &self.config.engine)?;
        let (processed, summary) = engine.sanitize_dataset(&products, SOURCE_FIELD, DERIVED_FIELD);

        info!(
            "Processed {} rows with {} terms: {} rows changed, {} removals.",
            summary.rows,
            engine.term_count(),
            summary.rows_changed,
            summary.removals
        );
        self.processed = Some(Arc::new(processed));
        Ok(summary)
    }

    fn run_export(&self) -> Result<ExportArtifact, WordstripError> {
        let processed = self
            .processed
            .as_ref()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| WordstripError::Validation(vec!["No processed data to export; run processing first.".to_string()]))?;

        let bytes = encode_csv(processed, &self.config.codec)?;
        let file_name = self.export_file_name();
        debug!("Exported {} rows ({} bytes) as '{}'.", processed.len(), bytes.len(), file_name);
        Ok(ExportArtifact { file_name, bytes })
    }

    fn read_dataset(&self, path: &Path) -> Result<Dataset, WordstripError> {
        let bytes = std::fs::read(path)?;
        decode_csv(&bytes, &self.config.codec).map_err(|e| match e {
            WordstripError::Decode(msg) => WordstripError::Decode(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    fn invalidate_processed(&mut self) {
        if self.processed.take().is_some() {
            debug!("Inputs changed; discarded previous processed result.");
        }
    }

    fn record<T>(&mut self, result: Result<T, WordstripError>) -> Result<T, WordstripError> {
        if let Err(e) = &result {
            warn!("Operation failed: {}", e);
            self.last_error = Some(e.to_string());
        }
        result
    }
}
