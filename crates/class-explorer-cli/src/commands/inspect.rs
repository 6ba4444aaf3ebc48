//! Inspect command implementation.

use anyhow::Result;
use class_explorer_core::SourceUnit;
use std::path::Path;

use crate::OutputFormat;

/// Runs the inspect command.
pub fn run(path: &Path, format: OutputFormat) -> Result<()> {
    let unit = match SourceUnit::extract(path) {
        Ok(unit) => unit,
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            std::process::exit(1);
        }
    };

    if unit.is_atypical_class() {
        tracing::info!(
            "{} does not hold exactly one declaration, structure is not extracted",
            path.display()
        );
    }

    super::output::print_unit(path, &unit, format)
}
