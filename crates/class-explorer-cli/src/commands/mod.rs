//! Subcommand implementations.

pub mod init;
pub mod inspect;
pub mod output;
pub mod scan;
