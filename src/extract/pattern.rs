use super::RawMatch;
use regex::Regex;
use std::sync::Arc;

/// A compiled extraction pattern.
///
/// Cloning is cheap; clones share the compiled program.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Arc<Regex>,
}

impl Pattern {
    pub(super) fn new(regex: Regex) -> Self {
        Self { regex: Arc::new(regex) }
    }

    /// The source text this pattern was compiled from.
    #[must_use]
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether the pattern declares a capture group to pull the value from.
    #[must_use]
    pub fn has_capture(&self) -> bool {
        self.regex.captures_len() > 1
    }

    #[must_use]
    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line.trim())
    }

    /// Match a single line. When the pattern occurs several times, the leftmost
    /// occurrence wins.
    #[must_use]
    pub fn extract(&self, line: &str) -> Option<RawMatch> {
        let line = line.trim();
        let caps = self.regex.captures(line)?;
        let matched = caps.get(0)?.as_str();
        let capture = caps.name("value").or_else(|| caps.get(1)).map(|m| m.as_str().to_string());

        Some(RawMatch::new(line, matched, capture))
    }

    /// Lazily match every line, skipping the ones that don't match.
    pub fn extract_all<'a, I>(&'a self, lines: I) -> impl Iterator<Item = RawMatch> + 'a
    where
        I: IntoIterator + 'a,
        I::IntoIter: 'a,
        I::Item: AsRef<str>,
    {
        lines.into_iter().filter_map(move |line| self.extract(line.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(source: &str) -> Pattern {
        Pattern::new(Regex::new(source).unwrap())
    }

    #[test]
    fn test_extract_without_capture() {
        let p = pattern("ERROR:");
        let m = p.extract("ERROR: disk full").unwrap();
        assert_eq!(m.matched, "ERROR:");
        assert_eq!(m.capture, None);
        assert_eq!(m.line, "ERROR: disk full");
        assert!(!p.has_capture());
    }

    #[test]
    fn test_extract_numbered_capture() {
        let p = pattern(r"RAM=(\d+)%");
        let m = p.extract("host-1 RAM=87% swap=2%").unwrap();
        assert_eq!(m.capture.as_deref(), Some("87"));
        assert!(p.has_capture());
    }

    #[test]
    fn test_named_capture_wins_over_first_group() {
        let p = pattern(r"(PNL|pnl)\s*=\s*(?P<value>-?[0-9.]+)");
        let m = p.extract("PNL = -12.5").unwrap();
        assert_eq!(m.capture.as_deref(), Some("-12.5"));
    }

    #[test]
    fn test_first_match_wins() {
        let p = pattern(r"latency=(\d+)");
        let m = p.extract("latency=10 latency=99").unwrap();
        assert_eq!(m.capture.as_deref(), Some("10"));
    }

    #[test]
    fn test_unmatched_line_is_none() {
        let p = pattern("ERROR:");
        assert!(p.extract("WARNING: latency high").is_none());
        assert!(!p.is_match("all good"));
    }

    #[test]
    fn test_extract_all_skips_unmatched() {
        let p = pattern("ERROR:");
        let lines = ["ERROR: disk full", "WARNING: latency high", "ERROR: disk full"];
        let matches: Vec<_> = p.extract_all(lines).collect();
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_extract_all_is_restartable_by_reinvocation() {
        let p = pattern(r"v=(\d+)");
        let lines = vec!["v=1".to_string(), "x".to_string(), "v=2".to_string()];
        let first: Vec<_> = p.extract_all(&lines).map(|m| m.capture).collect();
        let second: Vec<_> = p.extract_all(&lines).map(|m| m.capture).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![Some("1".to_string()), Some("2".to_string())]);
    }
}
