//! Memoized regular expressions for the SQL `regexp()` hook.
//!
//! SQLite calls `regexp(pattern, value)` once per candidate row, so every
//! pattern is compiled once and reused for the rest of the session. Entries are
//! keyed by pattern text and case mode together: the same text compiled
//! sensitively and insensitively yields two distinct expressions.

use super::options::CaseMode;
use crate::{MyougidenError, Result};
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Session-scoped cache of compiled patterns. Never evicts.
#[derive(Debug, Default)]
pub struct RegexCache {
    patterns: Mutex<HashMap<(String, CaseMode), Arc<Regex>>>,
}

impl RegexCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the compiled form of `pattern`, compiling it on first use.
    pub fn compile(&self, pattern: &str, case: CaseMode) -> Result<Arc<Regex>> {
        let mut patterns = self.patterns();

        let key = (pattern.to_string(), case);
        if let Some(regex) = patterns.get(&key) {
            return Ok(Arc::clone(regex));
        }

        let regex = RegexBuilder::new(pattern)
            .case_insensitive(!case.is_sensitive())
            .build()
            .map_err(|source| MyougidenError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        let regex = Arc::new(regex);
        patterns.insert(key, Arc::clone(&regex));

        debug!("Compiled regex {:?} ({:?})", pattern, case);
        Ok(regex)
    }

    /// Number of compiled patterns held.
    pub fn len(&self) -> usize {
        self.patterns().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lock the pattern map. A poisoned lock is recovered: entries are only
    /// ever inserted fully compiled, so the map stays consistent.
    fn patterns(&self) -> MutexGuard<'_, HashMap<(String, CaseMode), Arc<Regex>>> {
        self.patterns.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
