use super::kind::AttributeKind;
use super::{Accumulator, AttributeRecord, Complex, Count, Numeric};
use crate::eval::{Evaluator, Policy};
use crate::extract::{Pattern, RawMatch};
use crate::values::{AttributeName, CriticalityLevel, Status, StoredValue, TypeTag, Value};
use crate::{Error, Result};
use chrono::Utc;
use std::collections::{VecDeque, vec_deque};

const LOG_TARGET: &str = "attributes";

/// Number of prior values an attribute keeps unless told otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

const CASE_INSENSITIVE_FLAG: &str = "(?i)";

pub type NumericAttribute = Attribute<Numeric>;
pub type CountAttribute = Attribute<Count>;
pub type AccumulatorAttribute = Attribute<Accumulator>;
pub type ComplexAttribute = Attribute<Complex>;

/// A named metric extracted from log lines.
///
/// An attribute owns one compiled pattern, its latest [`Value`], a bounded
/// history of earlier values (oldest first), and the running state of its kind.
/// Every record is classified by the attribute's [`Evaluator`] using its
/// [`CriticalityLevel`] and history.
#[derive(Debug)]
pub struct Attribute<K: AttributeKind> {
    name: AttributeName,
    pattern: Pattern,
    criticality: CriticalityLevel,
    evaluator: Evaluator<K::Output>,
    policy: Policy,
    state: K,
    current: Option<Value<K::Output>>,
    history: VecDeque<Value<K::Output>>,
    history_limit: Option<usize>,
    next_sequence: u64,
    saved_through: u64,
}

impl<K: AttributeKind> Attribute<K> {
    #[must_use]
    pub fn new(name: impl Into<AttributeName>, pattern: Pattern, criticality: CriticalityLevel, evaluator: Evaluator<K::Output>) -> Self {
        Self {
            name: name.into(),
            pattern,
            criticality,
            evaluator,
            policy: Policy::default(),
            state: K::default(),
            current: None,
            history: VecDeque::new(),
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
            next_sequence: 1,
            saved_through: 0,
        }
    }

    /// Build an attribute whose evaluator is described by `policy`.
    #[must_use]
    pub fn with_policy(name: impl Into<AttributeName>, pattern: Pattern, criticality: CriticalityLevel, policy: Policy) -> Self {
        let mut attribute = Self::new(name, pattern, criticality, K::evaluator_for(&policy));
        attribute.policy = policy;
        attribute
    }

    /// Keep at most `limit` prior values, or all of them with `None`.
    #[must_use]
    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self.trim_history();
        self
    }

    /// Parse a match and record it.
    ///
    /// On a parse failure the attribute is left untouched and `Error::Parse` is
    /// returned.
    pub fn record(&mut self, raw: &RawMatch) -> Result<Status> {
        let input = K::parse(raw).map_err(|reason| self.parse_error(raw.value_text(), reason))?;
        self.record_input(input)
    }

    /// Record an already typed input.
    pub fn record_input(&mut self, input: K::Input) -> Result<Status> {
        K::check(input).map_err(|reason| self.parse_error(&format!("{input:?}"), reason))?;

        let data = self.state.apply(input).map_err(|reason| self.parse_error(&format!("{input:?}"), reason))?;
        if let Some(previous) = self.current.take() {
            self.history.push_back(previous);
            self.trim_history();
        }

        let status = self.evaluator.evaluate(&data, self.criticality, self.history.make_contiguous());
        log::debug!(target: LOG_TARGET, "{} #{} recorded {data:?} as {status}", self.name, self.next_sequence);

        self.current = Some(Value::new(data, status, self.next_sequence, Utc::now()));
        self.next_sequence += 1;
        Ok(status)
    }

    fn parse_error(&self, text: &str, reason: String) -> Error {
        log::warn!(target: LOG_TARGET, "{} rejected '{text}': {reason}", self.name);
        Error::Parse {
            attribute: self.name.clone(),
            text: text.to_string(),
            reason,
        }
    }

    fn trim_history(&mut self) {
        if let Some(limit) = self.history_limit {
            while self.history.len() > limit {
                let _ = self.history.pop_front();
            }
        }
    }

    /// Start a new evaluation window.
    ///
    /// The running state (counter, total, or sample set) goes back to empty; the
    /// current value and history stay as they are.
    pub fn reset_window(&mut self) {
        log::debug!(target: LOG_TARGET, "{} window reset", self.name);
        self.state.reset();
    }

    #[must_use]
    pub const fn name(&self) -> &AttributeName {
        &self.name
    }

    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[must_use]
    pub const fn criticality(&self) -> CriticalityLevel {
        self.criticality
    }

    #[must_use]
    pub const fn evaluator(&self) -> &Evaluator<K::Output> {
        &self.evaluator
    }

    #[must_use]
    pub const fn type_tag(&self) -> TypeTag {
        K::TYPE_TAG
    }

    /// The latest value, or `None` before the first record.
    #[must_use]
    pub const fn current(&self) -> Option<&Value<K::Output>> {
        self.current.as_ref()
    }

    /// Earlier values, oldest first.
    pub fn history(&self) -> vec_deque::Iter<'_, Value<K::Output>> {
        self.history.iter()
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn history_limit(&self) -> Option<usize> {
        self.history_limit
    }

    /// Status of the latest value.
    #[must_use]
    pub fn status(&self) -> Option<Status> {
        self.current.as_ref().map(|v| v.status)
    }

    /// The running state of the attribute's kind.
    #[must_use]
    pub const fn state(&self) -> &K {
        &self.state
    }

    fn erase(value: &Value<K::Output>) -> StoredValue {
        Value::new(K::to_observation(&value.data), value.status, value.sequence, value.recorded_at)
    }

    /// The current value with its payload erased.
    #[must_use]
    pub fn current_stored(&self) -> Option<StoredValue> {
        self.current.as_ref().map(Self::erase)
    }

    /// Earlier values with their payload erased, oldest first.
    #[must_use]
    pub fn history_stored(&self) -> Vec<StoredValue> {
        self.history.iter().map(Self::erase).collect()
    }

    /// Values recorded since the last call to [`Self::mark_saved`], in sequence order.
    ///
    /// Values that fell out of the bounded history before being saved are gone.
    #[must_use]
    pub fn pending(&self) -> Vec<StoredValue> {
        self.history
            .iter()
            .chain(self.current.as_ref())
            .filter(|v| v.sequence > self.saved_through)
            .map(Self::erase)
            .collect()
    }

    /// Note that every value up to and including `sequence` reached a store.
    pub fn mark_saved(&mut self, sequence: u64) {
        self.saved_through = self.saved_through.max(sequence);
    }

    /// Load persisted values.
    ///
    /// The last value becomes [`Self::current`], the ones before it (bounded)
    /// become the history, and the running state continues from the last value.
    /// Values already held by the attribute are replaced.
    pub fn restore(&mut self, values: Vec<StoredValue>) -> Result<()> {
        let mut typed = Vec::with_capacity(values.len());
        for value in values {
            let tag = value.data.type_tag();
            let Some(data) = K::from_observation(value.data) else {
                return Err(Error::configuration(format!(
                    "attribute '{}' is {} but its history holds {tag} values",
                    self.name,
                    K::TYPE_TAG
                )));
            };
            typed.push(Value::new(data, value.status, value.sequence, value.recorded_at));
        }
        typed.sort_by_key(|v| v.sequence);

        self.state = K::default();
        self.history.clear();
        self.current = typed.pop();
        self.history.extend(typed);
        self.trim_history();

        match &self.current {
            Some(last) => {
                self.state.resume(&last.data);
                self.next_sequence = last.sequence + 1;
                self.saved_through = last.sequence;
            }
            None => {
                self.next_sequence = 1;
                self.saved_through = 0;
            }
        }

        log::debug!(target: LOG_TARGET, "{} restored {} value(s)", self.name, self.history.len() + usize::from(self.current.is_some()));
        Ok(())
    }

    /// Describe this attribute so it can be rebuilt by
    /// [`attribute_from_record`](super::attribute_from_record).
    ///
    /// Only the declarative policy is captured; an evaluator built from a custom
    /// closure comes back as its policy (by default, always `Ok`).
    #[must_use]
    pub fn to_record(&self) -> AttributeRecord {
        let source = self.pattern.source();
        let (pattern, ignore_case) = source
            .strip_prefix(CASE_INSENSITIVE_FLAG)
            .map_or((source, false), |rest| (rest, true));

        AttributeRecord {
            name: self.name.clone(),
            kind: K::TYPE_TAG,
            pattern: pattern.to_string(),
            ignore_case,
            criticality: self.criticality.to_string(),
            policy: self.policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::Thresholds;
    use crate::extract::PatternCache;
    use crate::values::Observation;

    fn pattern(source: &str) -> Pattern {
        PatternCache::new().compile(source).unwrap()
    }

    fn errors() -> CountAttribute {
        Attribute::with_policy(
            "ERROR",
            pattern("ERROR:"),
            CriticalityLevel::Critical,
            Policy::with_thresholds(Thresholds::error_at(2.0)),
        )
    }

    #[test]
    fn test_record_counts_matches() {
        let mut attr = errors();
        assert!(attr.current().is_none());
        assert_eq!(attr.status(), None);

        let raw = attr.pattern().extract("ERROR: disk full").unwrap();
        assert_eq!(attr.record(&raw).unwrap(), Status::Ok);
        assert_eq!(attr.record(&raw).unwrap(), Status::Error);

        let current = attr.current().unwrap();
        assert_eq!(current.data, 2);
        assert_eq!(current.sequence, 2);
        assert_eq!(attr.history_len(), 1);
        assert_eq!(attr.history().next().unwrap().data, 1);
    }

    #[test]
    fn test_parse_failure_leaves_attribute_untouched() {
        let mut attr = NumericAttribute::new("LATENCY", pattern(r"LATENCY:\s*(\S+)"), CriticalityLevel::Critical, Evaluator::always_ok());
        let _ = attr.record_input(120.0).unwrap();

        let raw = attr.pattern().extract("LATENCY: fast").unwrap();
        let err = attr.record(&raw).unwrap_err();
        assert!(matches!(err, Error::Parse { ref text, .. } if text == "fast"));
        assert!((attr.current().unwrap().data - 120.0).abs() < f64::EPSILON);
        assert_eq!(attr.history_len(), 0);
    }

    #[test]
    fn test_record_input_rejects_non_finite() {
        let mut attr = AccumulatorAttribute::new("TIME", pattern("TIME"), CriticalityLevel::Relaxed, Evaluator::always_ok());
        assert!(matches!(attr.record_input(f64::NAN).unwrap_err(), Error::Parse { .. }));
        assert!(attr.current().is_none());
    }

    #[test]
    fn test_overflow_is_a_parse_error_and_leaves_attribute_untouched() {
        let mut time = AccumulatorAttribute::new("TIME", pattern("TIME"), CriticalityLevel::Relaxed, Evaluator::always_ok());
        let _ = time.record_input(1e308).unwrap();
        let err = time.record_input(1e308).unwrap_err();
        assert!(matches!(err, Error::Parse { ref reason, .. } if reason.contains("overflows")));
        assert!((time.current().unwrap().data - 1e308).abs() < 1e292);
        assert_eq!(time.current().unwrap().sequence, 1);
        assert_eq!(time.history_len(), 0);

        let mut count = errors();
        count.restore(vec![Value::new(Observation::Count(u64::MAX), Status::Error, 4, Utc::now())]).unwrap();
        assert!(matches!(count.record_input(1).unwrap_err(), Error::Parse { .. }));
        assert_eq!(count.current().unwrap().data, u64::MAX);
        assert!(count.pending().is_empty());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut attr =
            NumericAttribute::new("RAM", pattern("RAM"), CriticalityLevel::Critical, Evaluator::always_ok()).with_history_limit(Some(2));
        for v in 1..=5 {
            let _ = attr.record_input(f64::from(v)).unwrap();
        }

        let history: Vec<f64> = attr.history().map(|v| v.data).collect();
        assert_eq!(history, vec![3.0, 4.0]);
        assert_eq!(attr.current().unwrap().sequence, 5);
    }

    #[test]
    fn test_evaluator_sees_history() {
        let mut attr = NumericAttribute::new("PNL", pattern("PNL"), CriticalityLevel::Critical, Evaluator::trend(50.0));
        assert_eq!(attr.record_input(100.0).unwrap(), Status::Ok);
        assert_eq!(attr.record_input(200.0).unwrap(), Status::Warning);
        assert_eq!(attr.record_input(210.0).unwrap(), Status::Ok);
    }

    #[test]
    fn test_reset_window_restarts_running_state() {
        let mut attr = errors();
        let _ = attr.record_input(1).unwrap();
        let _ = attr.record_input(1).unwrap();
        attr.reset_window();

        assert_eq!(attr.current().unwrap().data, 2);
        assert_eq!(attr.record_input(1).unwrap(), Status::Ok);
        assert_eq!(attr.current().unwrap().data, 1);
        assert_eq!(attr.current().unwrap().sequence, 3);
    }

    #[test]
    fn test_pending_and_mark_saved() {
        let mut attr = errors();
        let _ = attr.record_input(1).unwrap();
        let _ = attr.record_input(1).unwrap();

        let pending = attr.pending();
        assert_eq!(pending.iter().map(|v| v.sequence).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(pending[1].data, Observation::Count(2));

        attr.mark_saved(2);
        assert!(attr.pending().is_empty());

        let _ = attr.record_input(1).unwrap();
        assert_eq!(attr.pending().len(), 1);
    }

    #[test]
    fn test_restore_continues_running_state() {
        let mut attr = errors();
        let _ = attr.record_input(1).unwrap();
        let _ = attr.record_input(1).unwrap();
        let saved = attr.pending();

        let mut restored = errors();
        restored.restore(saved).unwrap();
        assert_eq!(restored.current(), attr.current());
        assert!(restored.history().eq(attr.history()));
        assert!(restored.pending().is_empty());

        let _ = restored.record_input(1).unwrap();
        let current = restored.current().unwrap();
        assert_eq!(current.data, 3);
        assert_eq!(current.sequence, 3);
    }

    #[test]
    fn test_restore_rejects_foreign_values() {
        let mut numeric = NumericAttribute::new("RAM", pattern("RAM"), CriticalityLevel::Critical, Evaluator::always_ok());
        let _ = numeric.record_input(1.0).unwrap();

        let mut count = errors();
        assert!(matches!(count.restore(numeric.pending()).unwrap_err(), Error::Configuration(_)));
    }

    #[test]
    fn test_to_record_splits_case_flag() {
        let attr = CountAttribute::with_policy(
            "ERROR",
            PatternCache::new().compile_with("error:", true).unwrap(),
            CriticalityLevel::Relaxed,
            Policy::with_thresholds(Thresholds::error_at(2.0)),
        );
        let record = attr.to_record();
        assert_eq!(record.pattern, "error:");
        assert!(record.ignore_case);
        assert_eq!(record.kind, TypeTag::Count);
        assert_eq!(record.criticality, "RELAXED");
        assert_eq!(record.policy.thresholds, Some(Thresholds::error_at(2.0)));
    }
}
