use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How strictly an attribute's evaluator judges its values.
///
/// `Critical` attributes use their thresholds as written and escalate failed
/// checks to `Error`. `Relaxed` attributes widen their thresholds and cap failed
/// checks at `Warning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum CriticalityLevel {
    Critical,
    Relaxed,
}

impl CriticalityLevel {
    /// Parse a criticality from configuration text, ignoring case.
    pub fn parse(text: &str) -> Result<Self> {
        text.trim()
            .parse()
            .map_err(|e| Error::configuration(format!("unknown criticality '{text}' ({e}), expected CRITICAL or RELAXED")))
    }
}
