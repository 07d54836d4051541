use super::{Evaluator, Measure, Thresholds};
use crate::values::Statistic;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A declarative description of an evaluator, as stored in records and configuration.
///
/// Thresholds and trend checks are combined with worst-status-wins. A policy with
/// neither classifies every value as `Ok`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Policy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Thresholds>,

    /// Warn when a value grows by more than this percentage over the previous one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_percent: Option<f64>,

    /// Which summary statistic thresholds apply to (complex attributes only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistic: Option<Statistic>,
}

impl Policy {
    #[must_use]
    pub const fn with_thresholds(thresholds: Thresholds) -> Self {
        Self {
            thresholds: Some(thresholds),
            trend_percent: None,
            statistic: None,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.thresholds.is_none() && self.trend_percent.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(thresholds) = &self.thresholds {
            thresholds.validate()?;
        }

        if let Some(percent) = self.trend_percent
            && (!percent.is_finite() || percent < 0.0)
        {
            return Err(Error::configuration(format!(
                "trend percentage must be a non-negative number, got {percent}"
            )));
        }

        Ok(())
    }

    /// Build the evaluator this policy describes, applying thresholds to `selector(value)`.
    pub fn evaluator<T, F>(&self, selector: F) -> Evaluator<T>
    where
        T: Measure + 'static,
        F: Fn(&T) -> f64 + Send + Sync + 'static,
    {
        let mut parts = Vec::new();
        if let Some(thresholds) = self.thresholds {
            parts.push(Evaluator::thresholds_on(thresholds, selector));
        }
        if let Some(percent) = self.trend_percent {
            parts.push(Evaluator::trend(percent));
        }

        match parts.len() {
            0 => Evaluator::always_ok(),
            1 => parts.remove(0),
            _ => Evaluator::worst_of(parts),
        }
    }
}
