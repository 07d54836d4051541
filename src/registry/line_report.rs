use crate::Error;
use crate::values::{AttributeName, Status};

/// The outcome of feeding one line to a registry.
///
/// Only attributes whose pattern matched appear in `statuses`, in registration
/// order. Matches the owning attribute refused to parse are kept in `rejections`.
#[derive(Debug, Default)]
pub struct LineReport {
    pub statuses: Vec<(AttributeName, Status)>,
    pub rejections: Vec<Error>,
}

impl LineReport {
    /// Status recorded for `name` by this line, if it matched.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Status> {
        self.statuses.iter().find(|(n, _)| n.as_str() == name).map(|(_, s)| *s)
    }

    /// The most severe status of the line, `Ok` when nothing matched.
    #[must_use]
    pub fn worst(&self) -> Status {
        Status::worst(self.statuses.iter().map(|(_, s)| *s))
    }

    /// Whether no attribute matched the line.
    ///
    /// A line whose matches were all rejected is not empty: it has rejections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty() && self.rejections.is_empty()
    }
}

/// The outcome of feeding many lines to a registry.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub lines_seen: u64,

    /// Lines that at least one attribute matched, including lines whose matches
    /// were all rejected
    pub lines_matched: u64,

    /// Records accepted across all attributes
    pub records: u64,

    pub rejections: Vec<Error>,
    pub worst: Status,
}

impl BatchReport {
    pub(super) fn absorb(&mut self, line: LineReport) {
        self.lines_seen += 1;
        if !line.is_empty() {
            self.lines_matched += 1;
        }
        self.records += line.statuses.len() as u64;
        self.worst = self.worst.max(line.worst());
        self.rejections.extend(line.rejections);
    }
}
