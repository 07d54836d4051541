use crate::eval::Policy;
use crate::values::{AttributeName, TypeTag};
use serde::{Deserialize, Serialize};

/// Everything needed to rebuild an attribute, as kept next to its history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeRecord {
    pub name: AttributeName,
    pub kind: TypeTag,
    pub pattern: String,

    #[serde(default)]
    pub ignore_case: bool,

    /// `CRITICAL` or `RELAXED`, in any case
    pub criticality: String,

    #[serde(default)]
    pub policy: Policy,
}
