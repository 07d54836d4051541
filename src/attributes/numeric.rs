use super::kind::{self, AttributeKind};
use crate::extract::RawMatch;
use crate::values::{Observation, TypeTag};

/// A number that is replaced by every new observation (PnL, RAM usage, latency).
#[derive(Debug, Default)]
pub struct Numeric;

impl AttributeKind for Numeric {
    type Input = f64;
    type Output = f64;

    const TYPE_TAG: TypeTag = TypeTag::Numeric;

    fn parse(raw: &RawMatch) -> Result<f64, String> {
        kind::parse_finite(raw)
    }

    fn check(input: f64) -> Result<(), String> {
        kind::check_finite(input)
    }

    fn apply(&mut self, input: f64) -> Result<f64, String> {
        Ok(input)
    }

    fn reset(&mut self) {}

    fn resume(&mut self, _last: &f64) {}

    fn to_observation(output: &f64) -> Observation {
        Observation::Numeric(*output)
    }

    fn from_observation(observation: Observation) -> Option<f64> {
        match observation {
            Observation::Numeric(v) => Some(v),
            _ => None,
        }
    }
}
