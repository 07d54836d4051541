//! The attribute registry
//!
//! A [`Registry`] owns every attribute of a run, keyed by name. Hosts feed it log
//! lines one at a time with [`Registry::process_line`] or in bulk with
//! [`Registry::process_lines`], read back per-attribute and aggregate statuses, and
//! move history in and out of a [`HistoryStore`](crate::store::HistoryStore).

mod line_report;
mod parse_policy;
mod persist_report;
#[expect(clippy::module_inception, reason = "the registry type lives in its own file like every other type")]
mod registry;

pub use line_report::{BatchReport, LineReport};
pub use parse_policy::ParsePolicy;
pub use persist_report::PersistReport;
pub use registry::Registry;
