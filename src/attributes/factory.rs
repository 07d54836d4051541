use super::kind::AttributeKind;
use super::{Accumulator, AnyAttribute, Attribute, AttributeRecord, Complex, Count, Numeric};
use crate::extract::{Pattern, PatternCache};
use crate::values::{CriticalityLevel, StoredValue, TypeTag};
use crate::{Error, Result};

const LOG_TARGET: &str = "attributes";

/// Rebuild an attribute from its record and persisted history.
///
/// The record's pattern is compiled through `patterns`, so a malformed pattern,
/// an unknown criticality, or invalid thresholds fail here with
/// `Error::Configuration`. The last persisted value becomes the attribute's
/// current value, the earlier ones (up to `history_limit`) its history, and the
/// running state continues from the last value.
pub fn attribute_from_record(
    record: &AttributeRecord,
    persisted_history: Vec<StoredValue>,
    patterns: &mut PatternCache,
    history_limit: Option<usize>,
) -> Result<AnyAttribute> {
    let criticality = CriticalityLevel::parse(&record.criticality)?;
    record.policy.validate()?;

    if record.policy.statistic.is_some() && record.kind != TypeTag::Complex {
        return Err(Error::configuration(format!(
            "attribute '{}' selects a summary statistic but is {}, not complex",
            record.name, record.kind
        )));
    }

    let pattern = patterns.compile_with(&record.pattern, record.ignore_case)?;
    log::debug!(target: LOG_TARGET, "Building {} attribute '{}' with {} persisted value(s)", record.kind, record.name, persisted_history.len());

    let attribute = match record.kind {
        TypeTag::Numeric => build::<Numeric>(record, pattern, criticality, history_limit, persisted_history)?.into(),
        TypeTag::Count => build::<Count>(record, pattern, criticality, history_limit, persisted_history)?.into(),
        TypeTag::Accumulator => build::<Accumulator>(record, pattern, criticality, history_limit, persisted_history)?.into(),
        TypeTag::Complex => build::<Complex>(record, pattern, criticality, history_limit, persisted_history)?.into(),
    };

    Ok(attribute)
}

fn build<K: AttributeKind>(
    record: &AttributeRecord,
    pattern: Pattern,
    criticality: CriticalityLevel,
    history_limit: Option<usize>,
    persisted_history: Vec<StoredValue>,
) -> Result<Attribute<K>> {
    let mut attribute = Attribute::<K>::with_policy(record.name.clone(), pattern, criticality, record.policy).with_history_limit(history_limit);
    if !persisted_history.is_empty() {
        attribute.restore(persisted_history)?;
    }
    Ok(attribute)
}
