use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// What a batch does when a matched line can't be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Report the rejection and keep going
    #[default]
    Skip,

    /// Stop at the first rejection and return it
    Abort,
}
