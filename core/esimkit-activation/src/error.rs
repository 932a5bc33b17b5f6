//! Error types for activation-code encoding.

use thiserror::Error;

/// Activation-code errors.
///
/// Unparsed input is not an error; check [`crate::ActivationCode::is_valid`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivationError {
    /// The composed Universal Link could not be parsed as a URL.
    #[error("malformed universal link: {0}")]
    MalformedLink(String),
}

/// Result type for activation-code operations.
pub type ActivationResult<T> = Result<T, ActivationError>;
