//! Installation outcomes and their user-facing descriptions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed result enumeration reported by the native installation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum PlatformInstallResult {
    /// The profile was installed.
    Success,
    /// Installation failed, optionally with an OS error code.
    Fail {
        #[serde(default)]
        error_code: Option<i64>,
    },
    /// The user dismissed the installation prompt.
    UserCancelled,
    /// The platform returned a result code outside the known set.
    Unknown { code: i64 },
}

/// Result of a profile installation, as handed back to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum InstallOutcome {
    Success,
    Failure(InstallIssue),
    UserCancelled,
    Unknown(i64),
}

impl InstallOutcome {
    /// Returns true if the profile was installed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns a message suitable for showing to the user.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "eSIM installed successfully.",
            Self::Failure(issue) => issue.message(),
            Self::UserCancelled => "Installation was cancelled.",
            Self::Unknown(_) => "The installation finished with an unknown result.",
        }
    }
}

impl From<PlatformInstallResult> for InstallOutcome {
    fn from(result: PlatformInstallResult) -> Self {
        match result {
            PlatformInstallResult::Success => Self::Success,
            PlatformInstallResult::Fail { error_code } => Self::Failure(
                error_code.map_or(InstallIssue::Unknown, InstallIssue::from_error_code),
            ),
            PlatformInstallResult::UserCancelled => Self::UserCancelled,
            PlatformInstallResult::Unknown { code } => Self::Unknown(code),
        }
    }
}

impl fmt::Display for InstallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// User-facing reasons an installation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallIssue {
    NetworkUnavailable,
    Timeout,
    ServerUnreachable,
    StorageFull,
    EntitlementRequired,
    InvalidActivationCode,
    DeviceUnsupported,
    Unknown,
}

/// OS error codes with a known user-facing meaning.
const ERROR_CODE_TABLE: &[(i64, InstallIssue)] = &[
    (-1009, InstallIssue::NetworkUnavailable), // not connected to internet
    (-1005, InstallIssue::NetworkUnavailable), // network connection lost
    (-1020, InstallIssue::NetworkUnavailable), // data not allowed
    (-1001, InstallIssue::Timeout),
    (-1003, InstallIssue::ServerUnreachable), // cannot find host
    (-1004, InstallIssue::ServerUnreachable), // cannot connect to host
    (28, InstallIssue::StorageFull),          // ENOSPC
    (1, InstallIssue::EntitlementRequired),   // EPERM
];

impl InstallIssue {
    /// Looks up the issue for an OS error code. Unlisted codes map to `Unknown`.
    #[must_use]
    pub fn from_error_code(code: i64) -> Self {
        ERROR_CODE_TABLE
            .iter()
            .find(|(c, _)| *c == code)
            .map_or(Self::Unknown, |(_, issue)| *issue)
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::NetworkUnavailable => "No network connection. Connect to Wi-Fi or cellular data and try again.",
            Self::Timeout => "The request timed out. Try again.",
            Self::ServerUnreachable => "The eSIM server could not be reached.",
            Self::StorageFull => "There is no room for another eSIM profile on this device.",
            Self::EntitlementRequired => "This app is not entitled to install eSIM profiles.",
            Self::InvalidActivationCode => "The activation code is not valid.",
            Self::DeviceUnsupported => "This device does not support eSIM.",
            Self::Unknown => "The eSIM could not be installed.",
        }
    }
}

impl fmt::Display for InstallIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
