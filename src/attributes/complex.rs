use super::kind::{self, AttributeKind};
use crate::eval::{Evaluator, Policy};
use crate::extract::RawMatch;
use crate::values::{Observation, Quartiles, TypeTag};

/// A growing sample set exposed through its [`Quartiles`] summary.
///
/// Summaries are lossy, so resuming from a persisted summary starts a fresh sample
/// set; the restored summary stays current until the next record, which yields a
/// summary of that one sample.
#[derive(Debug, Default)]
pub struct Complex {
    samples: Vec<f64>,
}

impl Complex {
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

impl AttributeKind for Complex {
    type Input = f64;
    type Output = Quartiles;

    const TYPE_TAG: TypeTag = TypeTag::Complex;

    fn parse(raw: &RawMatch) -> Result<f64, String> {
        kind::parse_finite(raw)
    }

    fn check(input: f64) -> Result<(), String> {
        kind::check_finite(input)
    }

    fn apply(&mut self, input: f64) -> Result<Quartiles, String> {
        self.samples.push(input);
        Ok(Quartiles::from_samples(&self.samples).unwrap_or_else(|| Quartiles::degenerate(input)))
    }

    fn reset(&mut self) {
        self.samples.clear();
    }

    fn resume(&mut self, _last: &Quartiles) {
        self.samples.clear();
    }

    fn to_observation(output: &Quartiles) -> Observation {
        Observation::Summary(*output)
    }

    fn from_observation(observation: Observation) -> Option<Quartiles> {
        match observation {
            Observation::Summary(q) => Some(q),
            _ => None,
        }
    }

    fn evaluator_for(policy: &Policy) -> Evaluator<Quartiles> {
        let statistic = policy.statistic.unwrap_or_default();
        policy.evaluator(move |q: &Quartiles| q.get(statistic))
    }
}
