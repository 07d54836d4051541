//! TOML-declared attributes
//!
//! A [`Config`] lists the attributes of a run as `[[attributes]]` tables together
//! with run-wide settings. [`Config::build_registry`] turns it into a ready
//! [`Registry`](crate::Registry), compiling every pattern up front so that a bad
//! pattern is reported before the first line is read.

mod attribute_spec;
mod settings;

pub use attribute_spec::AttributeSpec;
pub use settings::{Config, DEFAULT_CONFIG_TOML};
