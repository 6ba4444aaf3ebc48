//! Shared output formatting for extraction results.

use anyhow::Result;
use class_explorer_core::SourceUnit;
use serde_json::json;
use std::path::Path;

use super::scan::ScanReport;
use crate::OutputFormat;

/// Print a single unit in the specified format.
pub fn print_unit(path: &Path, unit: &SourceUnit, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", unit.to_text()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&unit.to_record())?;
            println!("{json}");
        }
        OutputFormat::Compact => println!("{}", compact_line(path, unit)),
    }
    Ok(())
}

/// Print a scan report in the specified format.
pub fn print_report(report: &ScanReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(report),
        OutputFormat::Json => return print_json(report),
        OutputFormat::Compact => print_compact(report),
    }
    Ok(())
}

/// `path: <head> <qualified name>`, or `path: atypical (...)` with the declaration tally.
pub fn compact_line(path: &Path, unit: &SourceUnit) -> String {
    if unit.is_atypical_class() {
        let tally = unit
            .declaration_signature_counts()
            .iter()
            .map(|(keyword, count)| format!("{keyword}={count}"))
            .collect::<Vec<_>>()
            .join(", ");
        return format!("{}: atypical ({tally})", path.display());
    }

    format!(
        "{}: {} {}",
        path.display(),
        unit.full_class_name(),
        unit.qualified_name()
    )
}

fn print_text(report: &ScanReport) {
    for entry in &report.entries {
        println!("== {}", entry.path.display());
        print!("{}", entry.unit.to_text());
        println!();
    }
    print_summary(report);
}

fn print_json(report: &ScanReport) -> Result<()> {
    let files: Vec<_> = report
        .entries
        .iter()
        .map(|entry| {
            json!({
                "path": entry.path,
                "record": entry.unit.to_record(),
            })
        })
        .collect();
    let json = serde_json::to_string_pretty(&json!({
        "files": files,
        "files_checked": report.files_checked,
        "atypical": report.atypical_count(),
    }))?;
    println!("{json}");
    Ok(())
}

fn print_compact(report: &ScanReport) {
    for entry in &report.entries {
        println!("{}", compact_line(&entry.path, &entry.unit));
    }
    print_summary(report);
}

fn print_summary(report: &ScanReport) {
    let atypical = report.atypical_count();
    let color = if atypical > 0 { "\x1b[33m" } else { "\x1b[32m" };

    println!(
        "{}Inspected {} file(s), {} atypical\x1b[0m",
        color, report.files_checked, atypical
    );
}
