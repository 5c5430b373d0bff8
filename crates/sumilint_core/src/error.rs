//! Suppression engine error types.

use thiserror::Error;

/// Errors that can occur while handling suppression directives.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SuppressError {
    /// A directive kind the engine does not recognize. This is a
    /// contract violation by the upstream comment scanner, not a user
    /// error, and is never recoverable.
    #[error("Unrecognized directive kind '{0}'")]
    UnrecognizedKind(String),
}
