//! @ai:module:intent Format generation reports and extracted tables for different formats
//! @ai:module:layer infrastructure
//! @ai:module:public_api OutputFormat, format_report, format_table
//! @ai:module:depends_on annotation, generator
//! @ai:module:stateless true

use crate::annotation::PropertyTable;
use crate::generator::{GenerationReport, TargetStatus};
use colored::Colorize;

/// @ai:intent Output format options
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    JsonPretty,
}

/// @ai:intent Format a generation report as a string
/// @ai:effects pure
pub fn format_report(report: &GenerationReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(report).unwrap_or_default(),
        OutputFormat::JsonPretty => serde_json::to_string_pretty(report).unwrap_or_default(),
        OutputFormat::Text => format_report_text(report),
    }
}

/// @ai:intent Format a generation report as human-readable text
/// @ai:effects pure
fn format_report_text(report: &GenerationReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("Source: {}\n\n", report.source.display()));

    for target in &report.targets {
        let status_str = match target.status {
            TargetStatus::Written => "WROTE".green().bold(),
            TargetStatus::UpToDate => "OK".green().bold(),
            TargetStatus::Stale => "STALE".red().bold(),
            TargetStatus::Missing => "MISSING".red().bold(),
        };

        output.push_str(&format!(
            "{} {} ({} entries)\n",
            status_str,
            target.path.display().to_string().dimmed(),
            target.entries
        ));
    }

    output.push('\n');

    let outdated = report.outdated();
    if outdated > 0 {
        output.push_str(&format!(
            "{} of {} targets out of date, rerun generate\n",
            outdated.to_string().red().bold(),
            report.targets.len()
        ));
    } else {
        output.push_str(&format!(
            "{} {} targets current\n",
            "OK".green().bold(),
            report.targets.len()
        ));
    }

    output
}

/// @ai:intent Format an extracted table as a string
/// @ai:effects pure
pub fn format_table(table: &PropertyTable, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(table).unwrap_or_default(),
        OutputFormat::JsonPretty => serde_json::to_string_pretty(table).unwrap_or_default(),
        OutputFormat::Text => format_table_text(table),
    }
}

/// @ai:intent Format an extracted table as human-readable text
/// @ai:effects pure
fn format_table_text(table: &PropertyTable) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "@{} ({} entries)\n",
        table.kind.to_string().bold(),
        table.len()
    ));

    for entry in &table.entries {
        output.push_str(&format!(
            "  {} -> {} {}\n",
            entry.property.cyan(),
            entry.value,
            format!("(line {})", entry.line).dimmed()
        ));
    }

    output
}
