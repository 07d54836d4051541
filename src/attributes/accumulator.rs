use super::kind::{self, AttributeKind};
use crate::extract::RawMatch;
use crate::values::{Observation, TypeTag};

/// A running total of a quantity, such as cumulative sleep or processing time.
#[derive(Debug, Default)]
pub struct Accumulator {
    total: f64,
}

impl AttributeKind for Accumulator {
    type Input = f64;
    type Output = f64;

    const TYPE_TAG: TypeTag = TypeTag::Accumulator;

    fn parse(raw: &RawMatch) -> Result<f64, String> {
        kind::parse_finite(raw)
    }

    fn check(input: f64) -> Result<(), String> {
        kind::check_finite(input)
    }

    fn apply(&mut self, input: f64) -> Result<f64, String> {
        let total = self.total + input;
        if !total.is_finite() {
            return Err(format!("adding {input} to {} overflows the running total", self.total));
        }
        self.total = total;
        Ok(total)
    }

    fn reset(&mut self) {
        self.total = 0.0;
    }

    fn resume(&mut self, last: &f64) {
        self.total = *last;
    }

    fn to_observation(output: &f64) -> Observation {
        Observation::Accumulated(*output)
    }

    fn from_observation(observation: Observation) -> Option<f64> {
        match observation {
            Observation::Accumulated(v) => Some(v),
            _ => None,
        }
    }
}
