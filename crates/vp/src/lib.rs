//! Password generator and validator command line tool.

pub mod cli;
pub mod commands;
mod error;
pub(crate) mod helpers;

pub use error::Error;

/// Result type for the executable.
pub type Result<T> = std::result::Result<T, error::Error>;

pub use vp_cli_helpers::CommandTree;
