//! # class-explorer-core
//!
//! Line-oriented inspection of source files holding a single type
//! declaration (class, interface, trait or enum).
//!
//! The engine does not build a syntax tree. It classifies every physical line
//! once, then derives the namespace, imports, declaration head, body-level
//! members and method signatures from those classifications. Files that do
//! not contain exactly one unambiguous declaration are reported as
//! *atypical* and yield no structural detail.
//!
//! - [`SourceUnit`] holds the extracted facts and the derived queries
//! - [`LineKind`] is the per-line classification every phase works on
//! - [`RecordValue`] and [`FIELDS`] form the flat record view
//! - [`ExplorerConfig`] configures directory scanning
//!
//! ## Example
//!
//! ```ignore
//! use class_explorer_core::SourceUnit;
//!
//! let unit = SourceUnit::extract("src/Explorer.php")?;
//! assert!(unit.is_class());
//! print!("{}", unit.to_text());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod header;
mod members;
mod record;
mod unit;

/// Fixed literals shared by the extraction phases.
pub mod constants;
/// Per-line classification pre-pass.
pub mod line;

pub use config::{ConfigError, ExplorerConfig, ScannerConfig};
pub use error::ExplorerError;
pub use header::ClassHeader;
pub use line::{DeclarationSignature, LineKind, SourceLine};
pub use members::BodyMembers;
pub use record::{Accessor, RecordValue, FIELDS};
pub use unit::{DeclarationKind, SourceUnit};
