//! Pattern-based extraction of raw values from log lines
//!
//! Patterns are regular expressions compiled once through a [`PatternCache`] and
//! shared as cheap [`Pattern`] handles. Matching is line oriented: each line yields
//! at most one [`RawMatch`] per pattern, the leftmost match in the line. Lines that
//! don't match are skipped without error.
//!
//! Malformed patterns are rejected when they are compiled, so extraction itself
//! cannot fail.

mod pattern;
mod pattern_cache;
mod raw_match;

pub use pattern::Pattern;
pub use pattern_cache::PatternCache;
pub use raw_match::RawMatch;
