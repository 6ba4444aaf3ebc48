//! Scan command implementation.
//!
//! Walks a directory, inspects every file with a configured extension and
//! reports each result plus a summary.

use anyhow::{Context, Result};
use class_explorer_core::{ExplorerConfig, ScannerConfig, SourceUnit};
use std::path::{Path, PathBuf};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// One inspected file.
pub struct ScanEntry {
    /// Path relative to the scan root.
    pub path: PathBuf,
    /// Extraction result.
    pub unit: SourceUnit,
}

/// Results of a scan.
#[derive(Default)]
pub struct ScanReport {
    /// Reported files, sorted by path.
    pub entries: Vec<ScanEntry>,
    /// Number of files inspected, reported or not.
    pub files_checked: usize,
    atypical: usize,
}

impl ScanReport {
    /// Number of inspected files that were atypical.
    pub fn atypical_count(&self) -> usize {
        self.atypical
    }
}

/// Runs the scan command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    exclude: Vec<String>,
    atypical_only: bool,
    source: &ConfigSource,
) -> Result<()> {
    let mut config = load_config(source)?.scanner;
    config.exclude.extend(exclude);

    let root = if config.root.is_absolute() {
        config.root.clone()
    } else {
        path.join(&config.root)
    };

    let report = scan(&root, &config, atypical_only)?;
    super::output::print_report(&report, format)
}

fn load_config(source: &ConfigSource) -> Result<ExplorerConfig> {
    match source {
        ConfigSource::Default => Ok(ExplorerConfig::default()),
        other => {
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            ExplorerConfig::from_file(p).with_context(|| format!("Failed to load {}", p.display()))
        }
    }
}

/// Inspects every matching file below `root`.
pub fn scan(root: &Path, config: &ScannerConfig, atypical_only: bool) -> Result<ScanReport> {
    let files = discover_files(root, config)?;

    tracing::info!("Inspecting {} files", files.len());

    Ok(inspect_files(root, &files, atypical_only))
}

/// Extracts each file. Files that cannot be read are logged and skipped.
fn inspect_files(root: &Path, files: &[PathBuf], atypical_only: bool) -> ScanReport {
    let mut report = ScanReport::default();
    for file_path in files {
        let unit = match SourceUnit::extract(file_path) {
            Ok(unit) => unit,
            Err(e) => {
                tracing::warn!("Skipping {}: {e}", file_path.display());
                continue;
            }
        };

        report.files_checked += 1;
        if unit.is_atypical_class() {
            report.atypical += 1;
        } else if atypical_only {
            continue;
        }

        let rel = file_path
            .strip_prefix(root)
            .unwrap_or(file_path)
            .to_path_buf();
        report.entries.push(ScanEntry { path: rel, unit });
    }

    report
}

fn discover_files(root: &Path, config: &ScannerConfig) -> Result<Vec<PathBuf>> {
    let mut builder = ignore::WalkBuilder::new(root);
    builder.hidden(false).git_ignore(config.respect_gitignore);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() || !config.matches_extension(path) {
            continue;
        }

        let rel_str = path.strip_prefix(root).unwrap_or(path).to_string_lossy();
        if config.is_excluded(&rel_str) {
            tracing::debug!("Excluded {}", path.display());
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src/Model")).unwrap();
        fs::create_dir_all(tmp.path().join("vendor/lib")).unwrap();
        fs::write(
            tmp.path().join("src/Model/User.php"),
            "<?php\n\nnamespace App\\Model;\n\nfinal class User\n{\n    private int $id;\n}\n",
        )
        .unwrap();
        fs::write(
            tmp.path().join("src/Mixed.php"),
            "<?php\n\nclass A\n{\n}\n\ninterface B\n{\n}\n",
        )
        .unwrap();
        fs::write(tmp.path().join("src/notes.txt"), "class NotPhp\n").unwrap();
        fs::write(
            tmp.path().join("vendor/lib/Dep.php"),
            "<?php\n\nclass Dep\n{\n}\n",
        )
        .unwrap();
        tmp
    }

    #[test]
    fn discovers_only_configured_extensions_sorted() {
        let tmp = project();
        let files = discover_files(tmp.path(), &ScannerConfig::default()).unwrap();
        let rel: Vec<PathBuf> = files
            .iter()
            .map(|f| f.strip_prefix(tmp.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            rel,
            [
                PathBuf::from("src/Mixed.php"),
                PathBuf::from("src/Model/User.php"),
                PathBuf::from("vendor/lib/Dep.php"),
            ]
        );
    }

    #[test]
    fn exclude_patterns_are_honored() {
        let tmp = project();
        let config = ScannerConfig {
            exclude: vec!["**/vendor/**".into()],
            ..ScannerConfig::default()
        };
        let files = discover_files(tmp.path(), &config).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| !f.to_string_lossy().contains("vendor")));
    }

    #[test]
    fn scan_counts_atypical_files() {
        let tmp = project();
        let report = scan(tmp.path(), &ScannerConfig::default(), false).unwrap();
        assert_eq!(report.files_checked, 3);
        assert_eq!(report.atypical_count(), 1);
        assert_eq!(report.entries.len(), 3);

        let user = report
            .entries
            .iter()
            .find(|e| e.path == Path::new("src/Model/User.php"))
            .unwrap();
        assert_eq!(user.unit.qualified_name(), "\\App\\Model\\User");
        assert_eq!(user.unit.properties(), ["private int $id"]);
    }

    #[test]
    fn unreadable_file_is_skipped() {
        let tmp = project();
        let files = vec![
            tmp.path().join("src/Gone.php"),
            tmp.path().join("src/Model/User.php"),
        ];
        let report = inspect_files(tmp.path(), &files, false);
        assert_eq!(report.files_checked, 1);
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].path, Path::new("src/Model/User.php"));
    }

    #[test]
    fn atypical_only_keeps_atypical_entries() {
        let tmp = project();
        let report = scan(tmp.path(), &ScannerConfig::default(), true).unwrap();
        assert_eq!(report.files_checked, 3);
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].path, PathBuf::from("src/Mixed.php"));
    }

    #[test]
    fn default_source_uses_default_config() {
        let config = load_config(&ConfigSource::Default).unwrap();
        assert_eq!(config, ExplorerConfig::default());
    }

    #[test]
    fn explicit_source_is_loaded() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        fs::write(&path, "[scanner]\nexclude = [\"legacy\"]\n").unwrap();

        let config = load_config(&ConfigSource::Explicit(path)).unwrap();
        assert_eq!(config.scanner.exclude, ["legacy"]);
    }

    #[test]
    fn missing_explicit_source_fails() {
        let result = load_config(&ConfigSource::Explicit(PathBuf::from(
            "/nonexistent/class-explorer.toml",
        )));
        assert!(result.is_err());
    }
}
