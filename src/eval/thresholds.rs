use crate::values::{CriticalityLevel, Status};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Factor applied to thresholds of relaxed attributes unless configured otherwise.
pub const DEFAULT_RELAXED_FACTOR: f64 = 1.5;

const fn default_relaxed_factor() -> f64 {
    DEFAULT_RELAXED_FACTOR
}

/// Warning and error levels for a measured value.
///
/// A value that reaches a level is classified at that level. For relaxed attributes
/// both levels are multiplied by `relaxed_factor` before comparing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Thresholds {
    #[serde(default)]
    pub warning: Option<f64>,

    #[serde(default)]
    pub error: Option<f64>,

    #[serde(default = "default_relaxed_factor")]
    pub relaxed_factor: f64,
}

impl Thresholds {
    #[must_use]
    pub const fn new(warning: f64, error: f64) -> Self {
        Self {
            warning: Some(warning),
            error: Some(error),
            relaxed_factor: DEFAULT_RELAXED_FACTOR,
        }
    }

    /// Thresholds with only an error level.
    #[must_use]
    pub const fn error_at(error: f64) -> Self {
        Self {
            warning: None,
            error: Some(error),
            relaxed_factor: DEFAULT_RELAXED_FACTOR,
        }
    }

    /// Thresholds with only a warning level.
    #[must_use]
    pub const fn warning_at(warning: f64) -> Self {
        Self {
            warning: Some(warning),
            error: None,
            relaxed_factor: DEFAULT_RELAXED_FACTOR,
        }
    }

    #[must_use]
    pub const fn with_relaxed_factor(mut self, factor: f64) -> Self {
        self.relaxed_factor = factor;
        self
    }

    /// Check that the levels are usable.
    pub fn validate(&self) -> Result<()> {
        if self.warning.is_none() && self.error.is_none() {
            return Err(Error::configuration("thresholds need a warning level, an error level, or both"));
        }

        for level in [self.warning, self.error].into_iter().flatten() {
            if !level.is_finite() {
                return Err(Error::configuration(format!("threshold {level} is not a finite number")));
            }
        }

        if let (Some(warning), Some(error)) = (self.warning, self.error)
            && warning > error
        {
            return Err(Error::configuration(format!(
                "warning threshold ({warning}) must not exceed error threshold ({error})"
            )));
        }

        if !self.relaxed_factor.is_finite() || self.relaxed_factor <= 0.0 {
            return Err(Error::configuration(format!(
                "relaxed factor must be a positive number, got {}",
                self.relaxed_factor
            )));
        }

        Ok(())
    }

    /// Classify `value`. Never fails; values that compare false against every level
    /// (including NaN) are `Ok`.
    #[must_use]
    pub fn classify(&self, value: f64, criticality: CriticalityLevel) -> Status {
        let scale = match criticality {
            CriticalityLevel::Critical => 1.0,
            CriticalityLevel::Relaxed => self.relaxed_factor,
        };

        if self.error.is_some_and(|level| value >= level * scale) {
            Status::Error
        } else if self.warning.is_some_and(|level| value >= level * scale) {
            Status::Warning
        } else {
            Status::Ok
        }
    }
}
