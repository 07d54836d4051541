use crate::AppResult;
use crate::attributes::AttributeRecord;
use crate::values::{AttributeName, StoredValue};

/// Where attribute values go to outlive the process.
///
/// Stores are invoked synchronously by [`Registry::persist`](crate::Registry::persist)
/// and [`Registry::restore`](crate::Registry::restore). The record passed with each
/// value is everything needed to rebuild the attribute later.
pub trait HistoryStore {
    /// Append one value to the attribute's history.
    fn save(&mut self, name: &AttributeName, value: &StoredValue, record: &AttributeRecord) -> AppResult<()>;

    /// Every value saved for the attribute, in the order it was saved.
    ///
    /// An attribute the store has never seen has an empty history.
    fn load_history(&self, name: &AttributeName) -> AppResult<Vec<StoredValue>>;

    /// The most recently saved record of the attribute, if any.
    fn load_record(&self, name: &AttributeName) -> AppResult<Option<AttributeRecord>>;

    /// The records of every attribute the store holds, ordered by name.
    fn records(&self) -> AppResult<Vec<AttributeRecord>>;
}
