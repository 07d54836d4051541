use crate::values::AttributeName;

/// Errors raised by the attribute core.
///
/// `Configuration` only ever happens while attributes are being set up. `Parse` is
/// raised per record and leaves the attribute untouched, so callers may skip the
/// offending line and keep going.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A pattern, criticality, kind tag, or threshold could not be accepted
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Extracted text could not be converted into the attribute's value type
    #[error("attribute '{attribute}' could not use '{text}': {reason}")]
    Parse {
        attribute: AttributeName,
        text: String,
        reason: String,
    },

    /// An attribute with this name is already registered
    #[error("an attribute named '{0}' is already registered")]
    DuplicateName(AttributeName),

    /// No attribute with this name is registered
    #[error("no attribute named '{0}' is registered")]
    NotFound(String),
}

impl Error {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Returns `true` for errors that only affect a single record.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message_names_attribute_and_text() {
        let err = Error::Parse {
            attribute: AttributeName::from("LATENCY"),
            text: "fast".to_string(),
            reason: "not a number".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("LATENCY"));
        assert!(msg.contains("fast"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_registry_errors_are_not_recoverable() {
        assert!(!Error::DuplicateName(AttributeName::from("a")).is_recoverable());
        assert!(!Error::NotFound("a".to_string()).is_recoverable());
        assert!(!Error::configuration("bad").is_recoverable());
    }
}
