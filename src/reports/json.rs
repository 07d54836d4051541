use crate::AppResult;
use crate::registry::Registry;
use core::fmt::Write;
use serde_json::json;

pub fn generate<W: Write>(registry: &Registry, writer: &mut W) -> AppResult<()> {
    let attributes: Vec<_> = registry
        .all()
        .map(|(name, attribute)| {
            let current = attribute.current();
            json!({
                "name": name,
                "kind": attribute.type_tag(),
                "criticality": attribute.criticality(),
                "status": current.as_ref().map(|v| v.status),
                "sequence": current.as_ref().map(|v| v.sequence),
                "recorded_at": current.as_ref().map(|v| v.recorded_at),
                "value": current.as_ref().map(|v| v.data),
                "history_len": attribute.history_len(),
            })
        })
        .collect();

    let output = json!({
        "worst_status": registry.worst_status(),
        "attributes": attributes,
    });

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}
