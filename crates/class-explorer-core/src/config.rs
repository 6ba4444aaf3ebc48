//! TOML configuration for directory scans.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_EXTENSIONS;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Which files a scan picks up.
    #[serde(default)]
    pub scanner: ScannerConfig,
}

/// `[scanner]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Directory to scan, relative to the invocation path unless absolute.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// File extensions to inspect, without the leading dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Path patterns to skip.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            extensions: default_extensions(),
            exclude: Vec::new(),
            respect_gitignore: true,
        }
    }
}

impl ScannerConfig {
    /// Whether the path has one of the configured extensions.
    #[must_use]
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|wanted| wanted.trim_start_matches('.') == ext)
            })
    }

    /// Whether a root-relative path hits an exclude pattern.
    ///
    /// Patterns are tried as globs first. Failing that, `**/` and `/**` are
    /// dropped and the rest is matched as a substring.
    #[must_use]
    pub fn is_excluded(&self, relative: &str) -> bool {
        self.exclude.iter().any(|pattern| {
            if glob::Pattern::new(pattern).is_ok_and(|glob| glob.matches(relative)) {
                return true;
            }

            // Also check as substring for patterns like "**/vendor/**"
            let clean = pattern.replace("**/", "").replace("/**", "");
            !clean.is_empty() && relative.contains(&clean)
        })
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect()
}

fn default_true() -> bool {
    true
}

/// Errors when loading configuration.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    /// Failed to read config file.
    #[error("failed to read {path}: {source}")]
    #[diagnostic(code(class_explorer::config::io))]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// IO error.
        source: std::io::Error,
    },
    /// Failed to parse TOML.
    #[error("invalid config: {message}")]
    #[diagnostic(code(class_explorer::config::parse))]
    Parse {
        /// Parse error detail.
        message: String,
    },
}

impl ExplorerConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = ExplorerConfig::parse("").expect("parse failed");
        assert_eq!(config, ExplorerConfig::default());
        assert_eq!(config.scanner.root, PathBuf::from("."));
        assert_eq!(config.scanner.extensions, ["php"]);
        assert!(config.scanner.respect_gitignore);
    }

    #[test]
    fn parse_scanner_section() {
        let toml = r#"
[scanner]
root = "src"
extensions = ["php", ".inc"]
exclude = ["**/vendor/**"]
respect_gitignore = false
"#;
        let config = ExplorerConfig::parse(toml).expect("parse failed");
        assert_eq!(config.scanner.root, PathBuf::from("src"));
        assert_eq!(config.scanner.exclude, ["**/vendor/**"]);
        assert!(!config.scanner.respect_gitignore);
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = ExplorerConfig::parse("[scanner\nroot = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ExplorerConfig::from_file(Path::new("/nonexistent/class-explorer.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn extension_matching_ignores_leading_dot() {
        let scanner = ScannerConfig {
            extensions: vec!["php".into(), ".inc".into()],
            ..ScannerConfig::default()
        };
        assert!(scanner.matches_extension(Path::new("src/Foo.php")));
        assert!(scanner.matches_extension(Path::new("src/legacy.inc")));
        assert!(!scanner.matches_extension(Path::new("README.md")));
        assert!(!scanner.matches_extension(Path::new("Makefile")));
    }

    #[test]
    fn exclude_patterns() {
        let scanner = ScannerConfig {
            exclude: vec!["**/vendor/**".into(), String::new()],
            ..ScannerConfig::default()
        };
        assert!(scanner.is_excluded("vendor/lib/Foo.php"));
        assert!(!scanner.is_excluded("src/Foo.php"));
    }

    #[test]
    fn exclude_wildcards_inside_a_segment() {
        let scanner = ScannerConfig {
            exclude: vec!["**/*Test.php".into(), "tests/*.php".into()],
            ..ScannerConfig::default()
        };
        assert!(scanner.is_excluded("src/FooTest.php"));
        assert!(scanner.is_excluded("FooTest.php"));
        assert!(scanner.is_excluded("tests/Bar.php"));
        assert!(!scanner.is_excluded("src/Foo.php"));
        assert!(!scanner.is_excluded("src/TestCase.php"));
    }

    #[test]
    fn invalid_glob_falls_back_to_substring() {
        let scanner = ScannerConfig {
            exclude: vec!["legacy[".into()],
            ..ScannerConfig::default()
        };
        assert!(scanner.is_excluded("src/legacy[old]/Foo.php"));
        assert!(!scanner.is_excluded("src/Foo.php"));
    }
}
