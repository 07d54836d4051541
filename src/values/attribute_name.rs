use compact_str::CompactString;
use core::borrow::Borrow;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Unique name of an attribute, used as both registry key and persistence key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeName(CompactString);

impl AttributeName {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(CompactString::from(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Storage-friendly form of the name: lowercase with spaces replaced by underscores.
    #[must_use]
    pub fn column_name(&self) -> String {
        self.0.to_lowercase().replace(' ', "_")
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl Borrow<str> for AttributeName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for AttributeName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for AttributeName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for AttributeName {
    fn from(name: String) -> Self {
        Self(CompactString::from(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_column_name() {
        assert_eq!(AttributeName::from("Process Time").column_name(), "process_time");
        assert_eq!(AttributeName::from("LATENCY").column_name(), "latency");
    }

    #[test]
    fn test_lookup_by_str() {
        let mut map = HashMap::new();
        let _ = map.insert(AttributeName::from("ram"), 1);
        assert_eq!(map.get("ram"), Some(&1));
    }

    #[test]
    fn test_display_honors_width() {
        assert_eq!(format!("{:<5}|", AttributeName::from("ram")), "ram  |");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let name = AttributeName::from("pnl");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"pnl\"");
    }
}
