//! Rendering of a registry's current state
//!
//! Two generators are provided, each accessed through a `generate` function:
//! - **Console**: one aligned line per attribute with a status symbol, optionally
//!   colored, followed by the overall status
//! - **JSON**: a machine-readable snapshot of every attribute
//!
//! Both write to any [`core::fmt::Write`] so hosts decide where the output goes.

mod common;
mod console;
mod json;

pub use console::generate as generate_console;
pub use json::generate as generate_json;
