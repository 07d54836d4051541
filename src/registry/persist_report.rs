use crate::values::AttributeName;

/// The outcome of saving pending values to a store.
#[derive(Debug, Default)]
pub struct PersistReport {
    /// Number of values the store accepted
    pub saved: usize,

    /// Attributes whose save failed, with the store's message; their values are
    /// retried by the next persist
    pub failures: Vec<(AttributeName, String)>,
}

impl PersistReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
