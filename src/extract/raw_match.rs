/// The text a pattern pulled out of a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
    /// The trimmed line the match was found in
    pub line: String,

    /// The full text matched by the pattern
    pub matched: String,

    /// The `value` named group, or the first group when there is no named one
    pub capture: Option<String>,
}

impl RawMatch {
    #[must_use]
    pub fn new(line: impl Into<String>, matched: impl Into<String>, capture: Option<String>) -> Self {
        Self {
            line: line.into(),
            matched: matched.into(),
            capture,
        }
    }

    /// A match for hosts that already isolated the value text.
    #[must_use]
    pub fn from_value(text: &str) -> Self {
        Self::new(text, text, Some(text.to_string()))
    }

    /// The text that carries the value.
    ///
    /// This is the captured group when the pattern has one, otherwise whatever
    /// follows the last `:` in the line.
    #[must_use]
    pub fn value_text(&self) -> &str {
        self.capture.as_deref().map_or_else(
            || self.line.rsplit(':').next().map_or(self.line.as_str(), str::trim),
            str::trim,
        )
    }
}
