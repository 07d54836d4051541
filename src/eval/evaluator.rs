use super::{Measure, Thresholds};
use crate::values::{CriticalityLevel, Status, Value};
use core::fmt;
use std::sync::Arc;

type EvalFn<T> = dyn Fn(&T, CriticalityLevel, &[Value<T>]) -> Status + Send + Sync;

/// A pure function classifying a new value of type `T`.
///
/// The history slice is ordered oldest first; its last entry is the observation
/// that was current before the value being evaluated.
pub struct Evaluator<T> {
    func: Arc<EvalFn<T>>,
    label: &'static str,
}

impl<T: 'static> Evaluator<T> {
    /// Wrap an arbitrary evaluation function.
    ///
    /// The function must be total: it has to return a status for every value the
    /// attribute can hold.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&T, CriticalityLevel, &[Value<T>]) -> Status + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
            label: "custom",
        }
    }

    fn labeled(self, label: &'static str) -> Self {
        Self { func: self.func, label }
    }

    /// Classify every value as `Ok`.
    #[must_use]
    pub fn always_ok() -> Self {
        Self::new(|_, _, _| Status::Ok).labeled("always-ok")
    }

    /// Compare the value's [`Measure`] against fixed levels.
    #[must_use]
    pub fn thresholds(thresholds: Thresholds) -> Self
    where
        T: Measure,
    {
        Self::thresholds_on(thresholds, T::measure)
    }

    /// Compare a projection of the value against fixed levels, e.g. the upper
    /// quartile of a summary.
    pub fn thresholds_on<F>(thresholds: Thresholds, selector: F) -> Self
    where
        F: Fn(&T) -> f64 + Send + Sync + 'static,
    {
        Self::new(move |value, criticality, _| thresholds.classify(selector(value), criticality)).labeled("thresholds")
    }

    /// Warn when the value grew by more than `max_increase_percent` over the most
    /// recent history entry.
    ///
    /// There is nothing to compare against without history, or when the previous
    /// value is zero or negative; those cases are `Ok`.
    #[must_use]
    pub fn trend(max_increase_percent: f64) -> Self
    where
        T: Measure,
    {
        Self::new(move |value, _, history| {
            let Some(previous) = history.last() else {
                return Status::Ok;
            };

            let before = previous.data.measure();
            if before.is_nan() || before <= 0.0 {
                return Status::Ok;
            }

            let growth = (value.measure() - before) * 100.0 / before;
            if growth > max_increase_percent { Status::Warning } else { Status::Ok }
        })
        .labeled("trend")
    }

    /// Turn a boolean health check into a status graded by criticality.
    ///
    /// A passing check is `Ok`. A failing check is `Error` for critical attributes
    /// and `Warning` for relaxed ones.
    pub fn graded<F>(check: F) -> Self
    where
        F: Fn(&T, &[Value<T>]) -> bool + Send + Sync + 'static,
    {
        Self::new(move |value, criticality, history| {
            if check(value, history) {
                Status::Ok
            } else {
                match criticality {
                    CriticalityLevel::Critical => Status::Error,
                    CriticalityLevel::Relaxed => Status::Warning,
                }
            }
        })
        .labeled("graded")
    }

    /// Run several evaluators and keep the most severe status.
    #[must_use]
    pub fn worst_of(evaluators: Vec<Self>) -> Self {
        Self::new(move |value, criticality, history| {
            Status::worst(evaluators.iter().map(|e| e.evaluate(value, criticality, history)))
        })
        .labeled("worst-of")
    }
}

impl<T> Evaluator<T> {
    #[must_use]
    pub fn evaluate(&self, value: &T, criticality: CriticalityLevel, history: &[Value<T>]) -> Status {
        (self.func)(value, criticality, history)
    }

    /// Short name of the policy this evaluator was built from.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }
}

impl<T> Clone for Evaluator<T> {
    fn clone(&self) -> Self {
        Self {
            func: Arc::clone(&self.func),
            label: self.label,
        }
    }
}

impl<T> fmt::Debug for Evaluator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluator").field("label", &self.label).finish_non_exhaustive()
    }
}
