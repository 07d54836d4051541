use crate::values::Quartiles;

/// Projects a value onto the single number that thresholds and trends compare.
pub trait Measure {
    fn measure(&self) -> f64;
}

impl Measure for f64 {
    fn measure(&self) -> f64 {
        *self
    }
}

impl Measure for u64 {
    #[expect(clippy::cast_precision_loss, reason = "counts compared against thresholds don't need exact precision")]
    fn measure(&self) -> f64 {
        *self as f64
    }
}

/// Summaries are measured by their median.
impl Measure for Quartiles {
    fn measure(&self) -> f64 {
        self.median
    }
}
