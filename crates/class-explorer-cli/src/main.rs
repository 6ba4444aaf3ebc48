//! class-explorer CLI tool.
//!
//! Usage:
//! ```bash
//! class-explorer inspect [OPTIONS] <FILE>
//! class-explorer scan [OPTIONS] [PATH]
//! class-explorer init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Inspect PHP files declaring a single class, interface, trait or enum
#[derive(Parser)]
#[command(name = "class-explorer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the structure of a single file
    Inspect {
        /// File to inspect
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Inspect every matching file below a directory
    Scan {
        /// Directory to scan (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "compact")]
        format: OutputFormat,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Only report atypical files
        #[arg(long)]
        atypical_only: bool,
    },

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for extraction results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `key: value` lines.
    #[default]
    Text,
    /// JSON record.
    Json,
    /// One line per file.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Inspect { path, format } => commands::inspect::run(&path, format),
        Commands::Scan {
            path,
            format,
            exclude,
            atypical_only,
        } => {
            let source = config_resolver::resolve(&path, cli.config.as_deref());
            commands::scan::run(&path, format, exclude, atypical_only, &source)
        }
        Commands::Init { force } => commands::init::run(std::path::Path::new("."), force),
    }
}
