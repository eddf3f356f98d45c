// wordstrip-core/src/lib.rs
//! # wordstrip Core Library
//!
//! `wordstrip-core` removes a configurable set of forbidden words from the
//! product-name column of a tabular dataset. It builds a deduplicated term set
//! from a word list, compiles it into one case-insensitive matcher and applies
//! it to every row, writing the cleaned name into a separate column.
//!
//! ## Modules
//!
//! * `record`: `Record` and `Dataset`, plus the reserved field names.
//! * `terms`: `TermSet` and the builder that reads it from a word list.
//! * `sanitizers`: escaping and compilation of a term set into a matcher.
//! * `engine`: the `SanitizationEngine` trait and the dataset pass.
//! * `engines`: concrete engines (`RegexEngine`).
//! * `headless`: one-shot `sanitize` without a session.
//! * `codec`: CSV decoding and encoding.
//! * `session`: the caller-facing workflow (load, process, export).
//! * `config`: YAML configuration.
//! * `errors`: the library error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use wordstrip_core::{sanitize, Dataset, Record, TermSet, DERIVED_FIELD, SOURCE_FIELD};
//!
//! let terms: TermSet = ["테스트", "샘플"].into_iter().collect();
//! let row: Record = [(SOURCE_FIELD, "테스트 상품 샘플입니다")].into_iter().collect();
//! let dataset = Dataset::from_records(vec![row]);
//!
//! let cleaned = sanitize(&dataset, &terms, SOURCE_FIELD, DERIVED_FIELD).unwrap();
//! assert_eq!(cleaned.records[0].get(DERIVED_FIELD), Some("상품 입니다"));
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`WordstripError`]; loaders for configuration use
//! `anyhow::Result` with context.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod codec;
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod record;
pub mod sanitizers;
pub mod session;
pub mod terms;

/// Re-exports the data model and reserved field names.
pub use record::{DERIVED_FIELD, Dataset, Record, SOURCE_FIELD};

/// Re-exports the term set and its builder.
pub use terms::{TermSet, build_term_set};

pub use errors::WordstripError;

pub use config::{CodecOptions, EngineOptions, PreviewOptions, WordstripConfig};

/// Re-exports the engine trait and its regex implementation.
pub use engine::{CleanedValue, SanitizationEngine, SanitizeSummary};
pub use engines::regex_engine::RegexEngine;

pub use sanitizers::compiler::{CompiledTerms, compile_terms};

pub use headless::{sanitize, sanitize_with_options};

pub use codec::{UTF8_BOM, decode_csv, encode_csv};

pub use session::{ExportArtifact, PreviewRow, Session};
