use super::{BatchReport, LineReport, ParsePolicy, PersistReport};
use crate::attributes::{AnyAttribute, AttributeRecord, attribute_from_record};
use crate::extract::{Pattern, PatternCache};
use crate::store::HistoryStore;
use crate::values::{AttributeName, Status};
use crate::{AppResult, Error, Result};
use ohno::IntoAppError;
use rustc_hash::FxHashMap;

const LOG_TARGET: &str = "  registry";

/// The catalog of attributes a host evaluates log lines against.
///
/// Names are unique. Attributes are kept, iterated, and fed lines in the order
/// they were registered.
#[derive(Debug, Default)]
pub struct Registry {
    attributes: Vec<AnyAttribute>,
    index: FxHashMap<AttributeName, usize>,
    patterns: PatternCache,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute, failing with `Error::DuplicateName` if its name is taken.
    pub fn register(&mut self, attribute: impl Into<AnyAttribute>) -> Result<()> {
        let attribute = attribute.into();
        if self.index.contains_key(attribute.name()) {
            return Err(Error::DuplicateName(attribute.name().clone()));
        }

        log::debug!(target: LOG_TARGET, "Registered {} attribute '{}'", attribute.type_tag(), attribute.name());
        let _ = self.index.insert(attribute.name().clone(), self.attributes.len());
        self.attributes.push(attribute);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&AnyAttribute> {
        self.index
            .get(name)
            .map(|&i| &self.attributes[i])
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut AnyAttribute> {
        match self.index.get(name) {
            Some(&i) => Ok(&mut self.attributes[i]),
            None => Err(Error::NotFound(name.to_string())),
        }
    }

    /// Every attribute in registration order.
    pub fn all(&self) -> impl ExactSizeIterator<Item = (&AttributeName, &AnyAttribute)> {
        self.attributes.iter().map(|a| (a.name(), a))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Compile a pattern through the registry's cache.
    pub fn compile(&mut self, source: &str) -> Result<Pattern> {
        self.patterns.compile(source)
    }

    pub fn compile_with(&mut self, source: &str, ignore_case: bool) -> Result<Pattern> {
        self.patterns.compile_with(source, ignore_case)
    }

    #[must_use]
    pub const fn patterns(&self) -> &PatternCache {
        &self.patterns
    }

    pub const fn patterns_mut(&mut self) -> &mut PatternCache {
        &mut self.patterns
    }

    /// Feed one line to every attribute.
    ///
    /// Each attribute whose pattern matches records the match. A line that matches
    /// nothing changes nothing and yields an empty report.
    pub fn process_line(&mut self, line: &str) -> LineReport {
        let mut report = LineReport::default();
        for attribute in &mut self.attributes {
            let Some(raw) = attribute.pattern().extract(line) else {
                continue;
            };

            match attribute.record(&raw) {
                Ok(status) => report.statuses.push((attribute.name().clone(), status)),
                Err(e) => report.rejections.push(e),
            }
        }

        report
    }

    /// Feed a sequence of lines.
    ///
    /// With [`ParsePolicy::Abort`], the first rejected record ends the batch and is
    /// returned; attributes that matched the same line before it keep their records.
    pub fn process_lines<I>(&mut self, lines: I, policy: ParsePolicy) -> Result<BatchReport>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut batch = BatchReport::default();
        for line in lines {
            let mut report = self.process_line(line.as_ref());
            if policy == ParsePolicy::Abort && !report.rejections.is_empty() {
                return Err(report.rejections.swap_remove(0));
            }
            batch.absorb(report);
        }

        log::info!(target: LOG_TARGET,
            "Processed {} line(s): {} matched, {} record(s), {} rejected, worst status {}",
            batch.lines_seen,
            batch.lines_matched,
            batch.records,
            batch.rejections.len(),
            batch.worst
        );

        Ok(batch)
    }

    /// Latest status of every attribute that has recorded a value.
    pub fn statuses(&self) -> impl Iterator<Item = (&AttributeName, Status)> {
        self.attributes.iter().filter_map(|a| a.status().map(|s| (a.name(), s)))
    }

    /// The most severe latest status across all attributes, `Ok` when none has recorded.
    #[must_use]
    pub fn worst_status(&self) -> Status {
        Status::worst(self.statuses().map(|(_, s)| s))
    }

    /// Start a new evaluation window for every attribute.
    pub fn reset_windows(&mut self) {
        for attribute in &mut self.attributes {
            attribute.reset_window();
        }
    }

    /// Save every value recorded since the last successful persist.
    ///
    /// A failed save is logged and reported; it never changes a computed status,
    /// and the attribute's remaining values are retried by the next call.
    pub fn persist(&mut self, store: &mut dyn HistoryStore) -> PersistReport {
        let mut report = PersistReport::default();
        for attribute in &mut self.attributes {
            let pending = attribute.pending();
            if pending.is_empty() {
                continue;
            }

            let record = attribute.to_record();
            for value in pending {
                if let Err(e) = store.save(attribute.name(), &value, &record) {
                    log::warn!(target: LOG_TARGET, "Could not save value #{} of '{}': {e:#}", value.sequence, attribute.name());
                    report.failures.push((attribute.name().clone(), format!("{e:#}")));
                    break;
                }

                attribute.mark_saved(value.sequence);
                report.saved += 1;
            }
        }

        log::debug!(target: LOG_TARGET, "Persisted {} value(s), {} failure(s)", report.saved, report.failures.len());
        report
    }

    /// Rebuild a registry from attribute records and the history a store holds for them.
    pub fn restore<I>(records: I, store: &dyn HistoryStore, history_limit: Option<usize>) -> AppResult<Self>
    where
        I: IntoIterator<Item = AttributeRecord>,
    {
        let mut registry = Self::new();
        for record in records {
            let history = store.load_history(&record.name)?;
            let attribute = attribute_from_record(&record, history, &mut registry.patterns, history_limit)
                .into_app_err_with(|| format!("unable to restore attribute '{}'", record.name))?;
            registry
                .register(attribute)
                .into_app_err_with(|| format!("unable to restore attribute '{}'", record.name))?;
        }

        log::info!(target: LOG_TARGET, "Restored {} attribute(s)", registry.len());
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{CountAttribute, NumericAttribute};
    use crate::eval::{Evaluator, Policy, Thresholds};
    use crate::store::MemoryStore;
    use crate::values::{CriticalityLevel, Observation};

    fn registry() -> Registry {
        let mut registry = Registry::new();
        let errors = registry.compile("ERROR:").unwrap();
        registry
            .register(CountAttribute::with_policy(
                "ERROR",
                errors,
                CriticalityLevel::Critical,
                Policy::with_thresholds(Thresholds::error_at(2.0)),
            ))
            .unwrap();

        let latency = registry.compile(r"LATENCY:\s*(\S+)").unwrap();
        registry
            .register(NumericAttribute::with_policy(
                "LATENCY",
                latency,
                CriticalityLevel::Critical,
                Policy::with_thresholds(Thresholds::new(300.0, 1000.0)),
            ))
            .unwrap();
        registry
    }

    #[test]
    fn test_duplicate_name_keeps_original() {
        let mut registry = registry();
        let _ = registry.process_line("LATENCY: 100");

        let pattern = registry.compile("other").unwrap();
        let err = registry
            .register(NumericAttribute::new("LATENCY", pattern, CriticalityLevel::Relaxed, Evaluator::always_ok()))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateName(ref n) if n.as_str() == "LATENCY"));

        let original = registry.get("LATENCY").unwrap();
        assert_eq!(original.criticality(), CriticalityLevel::Critical);
        assert_eq!(original.current().unwrap().data, Observation::Numeric(100.0));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_get_unknown_name() {
        let mut registry = registry();
        assert!(matches!(registry.get("MEMORY").unwrap_err(), Error::NotFound(_)));
        assert!(matches!(registry.get_mut("MEMORY").unwrap_err(), Error::NotFound(_)));
    }

    #[test]
    fn test_all_in_registration_order() {
        let registry = registry();
        let names: Vec<_> = registry.all().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["ERROR", "LATENCY"]);
    }

    #[test]
    fn test_process_line_reports_matches() {
        let mut registry = registry();
        let report = registry.process_line("LATENCY: 450");
        assert_eq!(report.statuses.len(), 1);
        assert_eq!(report.get("LATENCY"), Some(Status::Warning));
        assert_eq!(report.worst(), Status::Warning);

        let unmatched = registry.process_line("all quiet");
        assert!(unmatched.is_empty());
    }

    #[test]
    fn test_rejections_are_reported() {
        let mut registry = registry();
        let report = registry.process_line("LATENCY: fast");
        assert!(report.statuses.is_empty());
        assert_eq!(report.rejections.len(), 1);
        assert!(registry.get("LATENCY").unwrap().current().is_none());
    }

    #[test]
    fn test_process_lines_policies() {
        let lines = ["ERROR: a", "LATENCY: fast", "ERROR: b", "noise"];

        let mut skipping = registry();
        let batch = skipping.process_lines(lines, ParsePolicy::Skip).unwrap();
        assert_eq!(batch.lines_seen, 4);
        assert_eq!(batch.lines_matched, 3);
        assert_eq!(batch.records, 2);
        assert_eq!(batch.rejections.len(), 1);
        assert_eq!(batch.worst, Status::Error);

        let mut aborting = registry();
        let err = aborting.process_lines(lines, ParsePolicy::Abort).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert_eq!(aborting.get("ERROR").unwrap().current().unwrap().data, Observation::Count(1));
    }

    #[test]
    fn test_worst_status() {
        let mut registry = registry();
        assert_eq!(registry.worst_status(), Status::Ok);
        assert_eq!(registry.statuses().count(), 0);

        let _ = registry.process_line("LATENCY: 400");
        assert_eq!(registry.worst_status(), Status::Warning);

        let _ = registry.process_line("ERROR: x");
        let _ = registry.process_line("ERROR: y");
        assert_eq!(registry.worst_status(), Status::Error);
        assert_eq!(registry.statuses().count(), 2);
    }

    #[test]
    fn test_reset_windows() {
        let mut registry = registry();
        let _ = registry.process_line("ERROR: x");
        let _ = registry.process_line("ERROR: y");
        registry.reset_windows();

        let report = registry.process_line("ERROR: z");
        assert_eq!(report.get("ERROR"), Some(Status::Ok));
    }

    #[test]
    fn test_persist_and_restore() {
        let mut registry = registry();
        let _ = registry.process_lines(["ERROR: x", "LATENCY: 120", "LATENCY: 900"], ParsePolicy::Skip).unwrap();

        let mut store = MemoryStore::new();
        let report = registry.persist(&mut store);
        assert_eq!(report.saved, 3);
        assert!(report.is_complete());
        assert_eq!(registry.persist(&mut store).saved, 0);

        let records: Vec<_> = registry.all().map(|(_, a)| a.to_record()).collect();
        let restored = Registry::restore(records, &store, None).unwrap();
        for (name, attribute) in registry.all() {
            let twin = restored.get(name.as_str()).unwrap();
            assert_eq!(twin.current(), attribute.current());
            assert_eq!(twin.history(), attribute.history());
        }
    }
}
