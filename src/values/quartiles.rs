use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Names one statistic of a [`Quartiles`] summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Statistic {
    Min,
    Q1,
    #[default]
    Median,
    Q3,
    Max,
    Mean,
}

/// Summary statistics over a set of samples.
///
/// Quartiles are computed by linear interpolation between order statistics, with
/// the `p`-th quantile of `n` sorted samples located at 0-based rank `p * n - 0.5`
/// (clamped to the valid index range). Every statistic is computed over the sorted
/// samples, so the summary does not depend on the order samples arrived in.
/// Every statistic of finite samples is finite, even when their sum is not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    pub count: u64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
}

impl Quartiles {
    /// Summarize `samples`, returning `None` when there are none.
    ///
    /// A single sample yields a degenerate summary where every statistic equals it.
    #[must_use]
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        match samples {
            [] => return None,
            [only] => return Some(Self::degenerate(*only)),
            _ => {}
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        #[expect(clippy::cast_precision_loss, reason = "sample counts are far below 2^52")]
        let n = sorted.len() as f64;
        let sum = sorted.iter().sum::<f64>();
        let mean = if sum.is_finite() { sum / n } else { sorted.iter().map(|v| v / n).sum() };

        Some(Self {
            count: sorted.len() as u64,
            min: sorted[0],
            q1: interpolate(&sorted, 0.25),
            median: interpolate(&sorted, 0.5),
            q3: interpolate(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
            mean,
        })
    }

    /// Summary of a single sample: every statistic equals `value`.
    #[must_use]
    pub const fn degenerate(value: f64) -> Self {
        Self {
            count: 1,
            min: value,
            q1: value,
            median: value,
            q3: value,
            max: value,
            mean: value,
        }
    }

    #[must_use]
    pub const fn get(&self, statistic: Statistic) -> f64 {
        match statistic {
            Statistic::Min => self.min,
            Statistic::Q1 => self.q1,
            Statistic::Median => self.median,
            Statistic::Q3 => self.q3,
            Statistic::Max => self.max,
            Statistic::Mean => self.mean,
        }
    }

    /// Interquartile range.
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

#[expect(clippy::cast_precision_loss, reason = "sample counts are far below 2^52")]
#[expect(clippy::cast_possible_truncation, reason = "rank is clamped to the index range")]
#[expect(clippy::cast_sign_loss, reason = "rank is clamped to be non-negative")]
fn interpolate(sorted: &[f64], p: f64) -> f64 {
    let last = sorted.len() - 1;
    let rank = p.mul_add(sorted.len() as f64, -0.5).clamp(0.0, last as f64);

    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - rank.floor();

    let span = sorted[upper] - sorted[lower];
    if span.is_finite() {
        span.mul_add(weight, sorted[lower])
    } else {
        sorted[lower].mul_add(1.0 - weight, sorted[upper] * weight)
    }
}
