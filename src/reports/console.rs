use super::common;
use crate::AppResult;
use crate::registry::Registry;
use crate::values::Status;
use core::fmt::Write;
use owo_colors::OwoColorize;

fn paint(text: &str, status: Status, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }

    match status {
        Status::Ok => text.green().to_string(),
        Status::Warning => text.yellow().bold().to_string(),
        Status::Error => text.red().bold().to_string(),
    }
}

pub fn generate<W: Write>(registry: &Registry, use_colors: bool, writer: &mut W) -> AppResult<()> {
    let max_name_len = registry.all().map(|(name, _)| name.as_str().len()).max().unwrap_or(0);

    for (name, attribute) in registry.all() {
        let label = format!("{} {}", attribute.type_tag(), attribute.criticality());
        let Some(current) = attribute.current() else {
            writeln!(writer, "     {name:<max_name_len$} : n/a ({label})")?;
            continue;
        };

        let status = paint(&current.status.to_string(), current.status, use_colors);
        writeln!(
            writer,
            "  {} {name:<max_name_len$} : {} ({label}) {status}",
            common::status_symbol(current.status),
            common::format_observation(&current.data),
        )?;
    }

    let worst = registry.worst_status();
    writeln!(writer)?;
    if use_colors {
        writeln!(writer, "{} {}", "Overall:".bold(), paint(&worst.to_string(), worst, true))?;
    } else {
        writeln!(writer, "Overall: {worst}")?;
    }

    Ok(())
}
