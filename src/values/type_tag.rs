use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Identifies one of the four attribute kinds in records and configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Numeric,
    Count,
    Accumulator,
    Complex,
}
