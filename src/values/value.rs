use super::{Observation, Status};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One observation of an attribute together with its classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Value<T> {
    pub data: T,
    pub status: Status,

    /// Position of this observation in the attribute's lifetime, starting at 1.
    pub sequence: u64,
    pub recorded_at: DateTime<Utc>,
}

/// A value whose payload type has been erased, as handed to stores.
pub type StoredValue = Value<Observation>;

impl<T> Value<T> {
    #[must_use]
    pub const fn new(data: T, status: Status, sequence: u64, recorded_at: DateTime<Utc>) -> Self {
        Self {
            data,
            status,
            sequence,
            recorded_at,
        }
    }

    /// Convert the payload while keeping status, sequence, and timestamp.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Value<U> {
        Value {
            data: f(self.data),
            status: self.status,
            sequence: self.sequence,
            recorded_at: self.recorded_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_map_keeps_metadata() {
        let at = Utc.with_ymd_and_hms(2025, 4, 27, 12, 0, 0).unwrap();
        let value = Value::new(3_u64, Status::Warning, 9, at);
        let mapped = value.map(Observation::Count);

        assert_eq!(mapped.data, Observation::Count(3));
        assert_eq!(mapped.status, Status::Warning);
        assert_eq!(mapped.sequence, 9);
        assert_eq!(mapped.recorded_at, at);
    }

    #[test]
    fn test_json_round_trip() {
        let at = Utc.with_ymd_and_hms(2025, 4, 27, 12, 0, 0).unwrap();
        let value: StoredValue = Value::new(Observation::Numeric(12.75), Status::Ok, 1, at);
        let json = serde_json::to_string(&value).unwrap();
        let back: StoredValue = serde_json::from_str(&json).unwrap();
        assert_eq!(value, back);
    }
}
