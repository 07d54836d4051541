use super::kind::AttributeKind;
use crate::extract::RawMatch;
use crate::values::{Observation, TypeTag};

/// A counter increased by every matching line.
///
/// When the match captured a value, that value is the increment; otherwise each
/// match counts as one.
#[derive(Debug, Default)]
pub struct Count {
    total: u64,
}

impl AttributeKind for Count {
    type Input = u64;
    type Output = u64;

    const TYPE_TAG: TypeTag = TypeTag::Count;

    fn parse(raw: &RawMatch) -> Result<u64, String> {
        match raw.capture.as_deref() {
            None => Ok(1),
            Some(text) => text
                .trim()
                .parse()
                .map_err(|e| format!("not a non-negative integer ({e})")),
        }
    }

    fn check(_input: u64) -> Result<(), String> {
        Ok(())
    }

    fn apply(&mut self, input: u64) -> Result<u64, String> {
        self.total = self
            .total
            .checked_add(input)
            .ok_or_else(|| format!("adding {input} to {} overflows the counter", self.total))?;
        Ok(self.total)
    }

    fn reset(&mut self) {
        self.total = 0;
    }

    fn resume(&mut self, last: &u64) {
        self.total = *last;
    }

    fn to_observation(output: &u64) -> Observation {
        Observation::Count(*output)
    }

    fn from_observation(observation: Observation) -> Option<u64> {
        match observation {
            Observation::Count(c) => Some(c),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_without_capture_counts_one() {
        assert_eq!(Count::parse(&RawMatch::new("ERROR: disk full", "ERROR:", None)).unwrap(), 1);
    }

    #[test]
    fn test_captured_delta() {
        assert_eq!(Count::parse(&RawMatch::from_value("7")).unwrap(), 7);
        assert!(Count::parse(&RawMatch::from_value("-1")).is_err());
        assert!(Count::parse(&RawMatch::from_value("2.5")).is_err());
    }

    #[test]
    fn test_apply_accumulates_and_resets() {
        let mut state = Count::default();
        assert_eq!(state.apply(1).unwrap(), 1);
        assert_eq!(state.apply(4).unwrap(), 5);
        state.reset();
        assert_eq!(state.apply(1).unwrap(), 1);
    }

    #[test]
    fn test_overflowing_counter_is_refused() {
        let mut state = Count::default();
        state.resume(&(u64::MAX - 1));
        assert_eq!(state.apply(1).unwrap(), u64::MAX);
        assert!(state.apply(1).unwrap_err().contains("overflows"));
        state.reset();
        assert_eq!(state.apply(2).unwrap(), 2);
    }

    #[test]
    fn test_resume_continues_from_last() {
        let mut state = Count::default();
        state.resume(&10);
        assert_eq!(state.apply(2).unwrap(), 12);
    }
}
