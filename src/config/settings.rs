use super::AttributeSpec;
use crate::attributes::{AttributeRecord, DEFAULT_HISTORY_LIMIT, attribute_from_record};
use crate::eval::DEFAULT_RELAXED_FACTOR;
use crate::registry::{ParsePolicy, Registry};
use crate::store::HistoryStore;
use crate::values::{AttributeName, CriticalityLevel};
use crate::{AppResult, Error, Result};
use camino::Utf8Path;
use ohno::IntoAppError;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fs;

const LOG_TARGET: &str = "    config";

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

const fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

const fn default_relaxed_factor() -> f64 {
    DEFAULT_RELAXED_FACTOR
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Prior values kept per attribute; 0 keeps all of them
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Factor applied to the thresholds of relaxed attributes
    #[serde(default = "default_relaxed_factor")]
    pub relaxed_factor: f64,

    /// What a batch does with matched lines it can't parse
    #[serde(default)]
    pub parse_policy: ParsePolicy,

    #[serde(default)]
    pub attributes: Vec<AttributeSpec>,
}

impl Config {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Utf8Path) -> AppResult<Self> {
        let text = fs::read_to_string(path).into_app_err_with(|| format!("reading configuration file '{path}'"))?;
        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{path}'"))?;
        config.validate().into_app_err_with(|| format!("validating configuration file '{path}'"))?;
        log::info!(target: LOG_TARGET, "Loaded {} attribute(s) from '{path}'", config.attributes.len());
        Ok(config)
    }

    /// Parse and validate configuration text.
    pub fn from_toml(text: &str) -> AppResult<Self> {
        let config: Self = toml::from_str(text).into_app_err("invalid configuration TOML")?;
        config.validate().into_app_err("invalid configuration")?;
        Ok(config)
    }

    /// Save the default configuration to a TOML file
    pub fn save_default(output_path: &Utf8Path) -> AppResult<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Check names, criticalities, and thresholds.
    ///
    /// Patterns are only compiled by [`Self::build_registry`].
    pub fn validate(&self) -> Result<()> {
        if !self.relaxed_factor.is_finite() || self.relaxed_factor <= 0.0 {
            return Err(Error::configuration(format!(
                "relaxed_factor must be a positive number, got {}",
                self.relaxed_factor
            )));
        }

        let mut seen: FxHashSet<&AttributeName> = FxHashSet::default();
        for spec in &self.attributes {
            if !seen.insert(&spec.name) {
                return Err(Error::configuration(format!("attribute '{}' is declared more than once", spec.name)));
            }

            let _ = CriticalityLevel::parse(&spec.criticality)?;
            spec.to_record(self.relaxed_factor)
                .policy
                .validate()
                .map_err(|e| Error::configuration(format!("attribute '{}': {e}", spec.name)))?;
        }

        Ok(())
    }

    /// The per-attribute history bound, `None` when unbounded.
    #[must_use]
    pub const fn history_limit(&self) -> Option<usize> {
        match self.history_limit {
            0 => None,
            limit => Some(limit),
        }
    }

    /// The records of every configured attribute, in declaration order.
    #[must_use]
    pub fn records(&self) -> Vec<AttributeRecord> {
        self.attributes.iter().map(|spec| spec.to_record(self.relaxed_factor)).collect()
    }

    /// Compile every attribute into a fresh registry.
    pub fn build_registry(&self) -> Result<Registry> {
        self.validate()?;

        let mut registry = Registry::new();
        for record in self.records() {
            let attribute = attribute_from_record(&record, Vec::new(), registry.patterns_mut(), self.history_limit())?;
            registry.register(attribute)?;
        }

        log::info!(target: LOG_TARGET, "Built registry with {} attribute(s)", registry.len());
        Ok(registry)
    }

    /// Build a registry whose attributes continue from the history held in `store`.
    pub fn restore_registry(&self, store: &dyn HistoryStore) -> AppResult<Registry> {
        self.validate().into_app_err("invalid configuration")?;
        Registry::restore(self.records(), store, self.history_limit())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
