//! Evaluator strategies
//!
//! Every attribute carries an [`Evaluator`]: a pure, total function that maps a
//! freshly recorded value, the attribute's [`CriticalityLevel`](crate::CriticalityLevel),
//! and its history to a [`Status`](crate::Status). Evaluators are built from a few
//! stock policies:
//!
//! - **Thresholds**: fixed warning/error levels, widened by a tolerance factor for
//!   relaxed attributes
//! - **Trend**: flag growth beyond a percentage over the previous observation
//! - **Graded checks**: a boolean health check whose failure is an error for critical
//!   attributes and a warning for relaxed ones
//!
//! Policies compose with [`Evaluator::worst_of`], and arbitrary closures can be
//! wrapped with [`Evaluator::new`]. A [`Policy`] is the serializable description of
//! a thresholds/trend evaluator, used by records and configuration.

mod evaluator;
mod measure;
mod policy;
mod thresholds;

pub use evaluator::Evaluator;
pub use measure::Measure;
pub use policy::Policy;
pub use thresholds::{DEFAULT_RELAXED_FACTOR, Thresholds};
