//! Error types for the lsedit CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::launch::{LaunchError, ResolveError};
use thiserror::Error;

/// Main error type for lsedit operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum LsEditError {
    /// User provided invalid arguments or the system is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// Settings could not be read, parsed, or written.
    #[error("Settings error: {0}")]
    ConfigError(String),

    /// The command template could not be resolved.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The editor process could not be started.
    #[error(transparent)]
    Launch(#[from] LaunchError),
}

impl LsEditError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LsEditError::UserError(_) => exit_codes::USER_ERROR,
            LsEditError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            LsEditError::Resolve(_) => exit_codes::RESOLVE_FAILURE,
            LsEditError::Launch(_) => exit_codes::LAUNCH_FAILURE,
        }
    }
}

/// Result type alias for lsedit operations.
pub type Result<T> = std::result::Result<T, LsEditError>;
