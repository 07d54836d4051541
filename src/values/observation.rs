use super::{Quartiles, TypeTag};
use core::fmt;
use serde::{Deserialize, Serialize};

/// A payload of any attribute kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Observation {
    Numeric(f64),
    Count(u64),
    Accumulated(f64),
    Summary(Quartiles),
}

impl Observation {
    /// The kind of attribute that produces this payload.
    #[must_use]
    pub const fn type_tag(&self) -> TypeTag {
        match self {
            Self::Numeric(_) => TypeTag::Numeric,
            Self::Count(_) => TypeTag::Count,
            Self::Accumulated(_) => TypeTag::Accumulator,
            Self::Summary(_) => TypeTag::Complex,
        }
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(v) | Self::Accumulated(v) => write!(f, "{v}"),
            Self::Count(c) => write!(f, "{c}"),
            Self::Summary(q) => write!(f, "q1={} median={} q3={} (n={})", q.q1, q.median, q.q3, q.count),
        }
    }
}
