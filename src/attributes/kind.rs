use crate::eval::{Evaluator, Measure, Policy};
use crate::extract::RawMatch;
use crate::values::{Observation, TypeTag};
use core::fmt;

/// The behavior that distinguishes one attribute variant from another.
///
/// A kind owns the running state of an attribute (a counter, a total, a sample
/// set) and knows how to parse extracted text into an input, fold that input into
/// its state, and convert its output to and from an [`Observation`].
pub trait AttributeKind: Default + fmt::Debug + Send + 'static {
    /// What a single record contributes
    type Input: Copy + fmt::Debug;

    /// The value type `T` exposed through `Value<T>`
    type Output: Clone + fmt::Debug + PartialEq + Measure + Send + Sync + 'static;

    const TYPE_TAG: TypeTag;

    /// Convert extracted text into an input, describing the problem on failure.
    fn parse(raw: &RawMatch) -> Result<Self::Input, String>;

    /// Reject inputs outside the valid domain.
    fn check(input: Self::Input) -> Result<(), String>;

    /// Fold an input into the running state and return the new output.
    ///
    /// When the new output can't be represented the state is left untouched and
    /// the problem is described instead.
    fn apply(&mut self, input: Self::Input) -> Result<Self::Output, String>;

    /// Forget the running state at the end of an evaluation window.
    fn reset(&mut self);

    /// Continue the running state from a previously recorded output.
    fn resume(&mut self, last: &Self::Output);

    fn to_observation(output: &Self::Output) -> Observation;

    fn from_observation(observation: Observation) -> Option<Self::Output>;

    /// The evaluator a declarative policy describes for this kind.
    fn evaluator_for(policy: &Policy) -> Evaluator<Self::Output> {
        policy.evaluator(<Self::Output as Measure>::measure)
    }
}

/// Parse the value text of a match as a finite number.
pub(super) fn parse_finite(raw: &RawMatch) -> Result<f64, String> {
    let text = raw.value_text();
    let value: f64 = text.parse().map_err(|e| format!("not a number ({e})"))?;
    check_finite(value)?;
    Ok(value)
}

pub(super) fn check_finite(value: f64) -> Result<(), String> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(format!("{value} is not a finite number"))
    }
}
