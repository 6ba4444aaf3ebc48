//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

use crate::config_resolver::PROJECT_CONFIG_NAMES;

const DEFAULT_CONFIG: &str = r#"# class-explorer configuration

[scanner]
# Directory to scan, relative to the scanned path (default: ".")
# root = "./src"

# File extensions to inspect
extensions = ["php"]

# Path patterns to skip
exclude = [
    "**/vendor/**",
    "**/var/cache/**",
]

# Respect .gitignore files
respect_gitignore = true
"#;

/// Runs the init command, writing the config into `dir`.
pub fn run(dir: &Path, force: bool) -> Result<()> {
    let name = PROJECT_CONFIG_NAMES[0];
    let config_path = dir.join(name);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)?;

    println!("Created {name}");
    println!("\nNext steps:");
    println!("  1. Edit {name} to adjust the scanned files");
    println!("  2. Run: class-explorer scan");

    Ok(())
}
