//! Typed metric attributes extracted from log text
//!
//! This crate turns raw log lines into typed metric observations and classifies
//! each observation as healthy, suspicious, or failing.
//!
//! # Module Organization
//!
//! - [`values`]: Status, criticality, and the typed value containers
//! - [`extract`]: Pattern compilation, caching, and line matching
//! - [`eval`]: Evaluator strategies turning values into a [`Status`]
//! - [`attributes`]: The four attribute kinds and the record factory
//! - [`registry`]: The catalog that owns attributes and processes lines
//! - [`store`]: The persistence interface and its stock implementations
//! - [`config`]: TOML-declared attributes
//! - [`reports`]: Console and JSON rendering of a registry
//! - [`logging`]: Logger initialization for hosts

/// Result type for core operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Result type for operations touching files and other I/O.
pub type AppResult<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod attributes;
pub mod config;
mod error;
pub mod eval;
pub mod extract;
pub mod logging;
pub mod registry;
pub mod reports;
pub mod store;
pub mod values;

pub use crate::attributes::{
    AccumulatorAttribute, AnyAttribute, Attribute, AttributeRecord, ComplexAttribute, CountAttribute, NumericAttribute, attribute_from_record,
};
pub use crate::config::Config;
pub use crate::error::Error;
pub use crate::eval::{Evaluator, Thresholds};
pub use crate::extract::{Pattern, PatternCache, RawMatch};
pub use crate::registry::{BatchReport, LineReport, ParsePolicy, PersistReport, Registry};
pub use crate::store::{HistoryStore, JsonLinesStore, MemoryStore};
pub use crate::values::{AttributeName, CriticalityLevel, Quartiles, Status, Value};
