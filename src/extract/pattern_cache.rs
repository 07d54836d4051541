use super::Pattern;
use crate::{Error, Result};
use regex::Regex;
use rustc_hash::FxHashMap;

const LOG_TARGET: &str = "  patterns";

/// Compiles patterns once per distinct source text.
///
/// The cache never evicts; the set of patterns in a run is small and fixed.
#[derive(Debug, Default)]
pub struct PatternCache {
    patterns: FxHashMap<String, Pattern>,
}

impl PatternCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `source`, or return the handle compiled earlier for the same text.
    pub fn compile(&mut self, source: &str) -> Result<Pattern> {
        if let Some(pattern) = self.patterns.get(source) {
            log::trace!(target: LOG_TARGET, "Reusing compiled pattern '{source}'");
            return Ok(pattern.clone());
        }

        if source.trim().is_empty() {
            return Err(Error::configuration("pattern must not be empty"));
        }

        let regex = Regex::new(source).map_err(|e| Error::configuration(format!("invalid pattern '{source}': {e}")))?;
        let pattern = Pattern::new(regex);
        log::debug!(target: LOG_TARGET, "Compiled pattern '{source}'");

        let _ = self.patterns.insert(source.to_string(), pattern.clone());
        Ok(pattern)
    }

    /// Compile `source`, optionally matching without regard to case.
    pub fn compile_with(&mut self, source: &str, ignore_case: bool) -> Result<Pattern> {
        if ignore_case && !source.trim().is_empty() {
            self.compile(&format!("(?i){source}"))
        } else {
            self.compile(source)
        }
    }

    #[must_use]
    pub fn contains(&self, source: &str) -> bool {
        self.patterns.contains_key(source)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
