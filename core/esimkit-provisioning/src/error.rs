//! Error types for the provisioning layer.

use crate::outcome::InstallIssue;
use esimkit_activation::FieldKind;
use thiserror::Error;

/// Result type for provisioning operations.
pub type ProvisioningResult<T> = Result<T, ProvisioningError>;

/// Errors that can occur before or while handing a profile to the platform.
#[derive(Debug, Error)]
pub enum ProvisioningError {
    /// The platform or device cannot install cellular plans.
    #[error("provisioning unsupported: {reason}")]
    Unsupported { reason: String },

    /// The activation code or its SM-DP+ address is unusable.
    #[error("invalid activation code: {0}")]
    InvalidActivationCode(String),

    /// An out-of-band field failed validation.
    #[error("invalid {field}: {value}")]
    InvalidField { field: FieldKind, value: String },

    /// The installer dropped its reply without completing it.
    #[error("installer dropped the reply without a result")]
    ReplyDropped,

    /// Sample catalog content is unusable.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ProvisioningError {
    /// Maps a pre-flight error onto the user-facing issue shown for it.
    #[must_use]
    pub fn issue(&self) -> InstallIssue {
        match self {
            Self::Unsupported { .. } => InstallIssue::DeviceUnsupported,
            Self::InvalidActivationCode(_) | Self::InvalidField { .. } => {
                InstallIssue::InvalidActivationCode
            }
            Self::ReplyDropped | Self::Catalog(_) | Self::Io(_) | Self::Serialization(_) => {
                InstallIssue::Unknown
            }
        }
    }
}
