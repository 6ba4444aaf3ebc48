//! Errors raised by extraction.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

use crate::constants::SOURCE_NOT_FOUND_MESSAGE;

/// Failure to obtain source text for extraction.
///
/// Content problems never surface here: irregular files are classified as
/// atypical instead.
#[derive(Debug, Error, Diagnostic)]
pub enum ExplorerError {
    /// The path does not resolve to a readable file.
    #[error("{}", SOURCE_NOT_FOUND_MESSAGE)]
    #[diagnostic(
        code(class_explorer::source_not_found),
        help("check that the path exists and points to a readable file")
    )]
    SourceNotFound {
        /// Path that was requested.
        path: PathBuf,
    },
}

impl ExplorerError {
    /// Path the failed request referred to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::SourceNotFound { path } => path,
        }
    }
}
