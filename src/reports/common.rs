use crate::values::{Observation, Status};

/// Format an observation for display.
pub fn format_observation(observation: &Observation) -> String {
    match observation {
        Observation::Numeric(v) | Observation::Accumulated(v) => format!("{v:.2}"),
        Observation::Count(c) => c.to_string(),
        Observation::Summary(q) => format!("q1 {:.2} / median {:.2} / q3 {:.2} (n={})", q.q1, q.median, q.q3, q.count),
    }
}

pub const fn status_symbol(status: Status) -> &'static str {
    match status {
        Status::Ok => "✔️",
        Status::Warning => "⚠️",
        Status::Error => "🗙",
    }
}
