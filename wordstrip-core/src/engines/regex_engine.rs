// wordstrip-core/src/engines/regex_engine.rs
//! A `SanitizationEngine` that removes forbidden terms with a single compiled
//! regular expression.
//! License: MIT OR APACHE 2.0

use crate::config::EngineOptions;
use crate::engine::{CleanedValue, SanitizationEngine};
use crate::errors::WordstripError;
use crate::sanitizers::compiler::{CompiledTerms, compile_terms};
use crate::terms::TermSet;

#[derive(Debug, Clone)]
pub struct RegexEngine {
    compiled: CompiledTerms,
}

impl RegexEngine {
    /// Compiles `terms` under the size limit in `options`.
    pub fn new(terms: &TermSet, options: &EngineOptions) -> Result<Self, WordstripError> {
        let compiled = compile_terms(terms, options)?;
        Ok(Self { compiled })
    }
}

impl SanitizationEngine for RegexEngine {
    fn clean_value(&self, value: &str) -> CleanedValue {
        let Some(matcher) = &self.compiled.matcher else {
            return CleanedValue {
                text: value.trim().to_string(),
                removals: 0,
            };
        };

        // Leftmost, non-overlapping matches, all removed in one left-to-right scan.
        let mut out = String::with_capacity(value.len());
        let mut last_end = 0usize;
        let mut removals = 0usize;
        for m in matcher.find_iter(value) {
            out.push_str(&value[last_end..m.start()]);
            last_end = m.end();
            removals += 1;
        }
        out.push_str(&value[last_end..]);

        CleanedValue {
            text: out.trim().to_string(),
            removals,
        }
    }

    fn term_count(&self) -> usize {
        self.compiled.term_count
    }
}
