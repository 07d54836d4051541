use crate::attributes::AttributeRecord;
use crate::eval::{Policy, Thresholds};
use crate::values::{AttributeName, Statistic, TypeTag};
use serde::{Deserialize, Serialize};

const fn default_ignore_case() -> bool {
    true
}

fn default_criticality() -> String {
    "CRITICAL".to_string()
}

/// One `[[attributes]]` table of the configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeSpec {
    pub name: AttributeName,
    pub kind: TypeTag,
    pub pattern: String,

    /// Match the pattern without regard to case
    #[serde(default = "default_ignore_case")]
    pub ignore_case: bool,

    /// `critical` or `relaxed`
    #[serde(default = "default_criticality")]
    pub criticality: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<f64>,

    /// Overrides the top-level `relaxed_factor` for this attribute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relaxed_factor: Option<f64>,

    /// Warn when the value grows by more than this percentage between records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_percent: Option<f64>,

    /// Statistic the thresholds of a complex attribute apply to, the median by default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistic: Option<Statistic>,
}

impl AttributeSpec {
    /// The record the factory builds this attribute from.
    #[must_use]
    pub fn to_record(&self, relaxed_factor: f64) -> AttributeRecord {
        let thresholds = (self.warning.is_some() || self.error.is_some()).then(|| Thresholds {
            warning: self.warning,
            error: self.error,
            relaxed_factor: self.relaxed_factor.unwrap_or(relaxed_factor),
        });

        AttributeRecord {
            name: self.name.clone(),
            kind: self.kind,
            pattern: self.pattern.clone(),
            ignore_case: self.ignore_case,
            criticality: self.criticality.clone(),
            policy: Policy {
                thresholds,
                trend_percent: self.trend_percent,
                statistic: self.statistic,
            },
        }
    }
}
