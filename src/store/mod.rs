//! Persistence of attribute history
//!
//! The core never performs I/O itself. It hands values to a [`HistoryStore`] when
//! the host calls [`Registry::persist`](crate::Registry::persist) and reads them
//! back through [`Registry::restore`](crate::Registry::restore).
//!
//! Two stores ship with the crate: [`MemoryStore`] keeps everything in process,
//! and [`JsonLinesStore`] appends one JSON line per value to a file per attribute.

mod history_store;
mod json_lines_store;
mod memory_store;

pub use history_store::HistoryStore;
pub use json_lines_store::JsonLinesStore;
pub use memory_store::MemoryStore;
