use super::HistoryStore;
use crate::AppResult;
use crate::attributes::AttributeRecord;
use crate::values::{AttributeName, StoredValue};
use rustc_hash::FxHashMap;

#[derive(Debug)]
struct Entry {
    record: AttributeRecord,
    values: Vec<StoredValue>,
}

/// A store that keeps everything in memory, for tests and short-lived hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<AttributeName, Entry>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of values held for `name`.
    #[must_use]
    pub fn value_count(&self, name: &str) -> usize {
        self.entries.get(name).map_or(0, |e| e.values.len())
    }
}

impl HistoryStore for MemoryStore {
    fn save(&mut self, name: &AttributeName, value: &StoredValue, record: &AttributeRecord) -> AppResult<()> {
        let entry = self.entries.entry(name.clone()).or_insert_with(|| Entry {
            record: record.clone(),
            values: Vec::new(),
        });

        entry.record.clone_from(record);
        entry.values.push(value.clone());
        Ok(())
    }

    fn load_history(&self, name: &AttributeName) -> AppResult<Vec<StoredValue>> {
        Ok(self.entries.get(name).map(|e| e.values.clone()).unwrap_or_default())
    }

    fn load_record(&self, name: &AttributeName) -> AppResult<Option<AttributeRecord>> {
        Ok(self.entries.get(name).map(|e| e.record.clone()))
    }

    fn records(&self) -> AppResult<Vec<AttributeRecord>> {
        let mut records: Vec<_> = self.entries.values().map(|e| e.record.clone()).collect();
        records.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::Policy;
    use crate::values::{Observation, Status, TypeTag, Value};
    use chrono::Utc;

    fn record(name: &str) -> AttributeRecord {
        AttributeRecord {
            name: AttributeName::from(name),
            kind: TypeTag::Numeric,
            pattern: name.to_string(),
            ignore_case: false,
            criticality: "CRITICAL".to_string(),
            policy: Policy::default(),
        }
    }

    #[test]
    fn test_save_and_load() {
        let mut store = MemoryStore::new();
        let name = AttributeName::from("RAM");
        for seq in 1_u32..=3 {
            let value = Value::new(Observation::Numeric(f64::from(seq)), Status::Ok, u64::from(seq), Utc::now());
            store.save(&name, &value, &record("RAM")).unwrap();
        }

        let history = store.load_history(&name).unwrap();
        assert_eq!(history.iter().map(|v| v.sequence).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(store.value_count("RAM"), 3);
        assert_eq!(store.load_record(&name).unwrap(), Some(record("RAM")));
    }

    #[test]
    fn test_unknown_attribute_is_empty() {
        let store = MemoryStore::new();
        let name = AttributeName::from("RAM");
        assert!(store.load_history(&name).unwrap().is_empty());
        assert_eq!(store.load_record(&name).unwrap(), None);
        assert!(store.records().unwrap().is_empty());
    }

    #[test]
    fn test_records_sorted_by_name() {
        let mut store = MemoryStore::new();
        let value = Value::new(Observation::Numeric(1.0), Status::Ok, 1, Utc::now());
        for name in ["ZETA", "ALPHA"] {
            store.save(&AttributeName::from(name), &value, &record(name)).unwrap();
        }

        let names: Vec<_> = store.records().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec![AttributeName::from("ALPHA"), AttributeName::from("ZETA")]);
    }
}
