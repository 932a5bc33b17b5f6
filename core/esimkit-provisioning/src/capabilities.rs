//! Platform capability negotiation.

use crate::error::ProvisioningResult;
use serde::{Deserialize, Serialize};

/// Feature flags resolved once by the host platform at startup.
///
/// Everything defaults to unavailable, so a host that reports nothing gets
/// no provisioning features.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformCapabilities {
    /// The platform exposes the cellular-plan installation API.
    pub cellular_plan_provisioning: bool,
    /// The platform handles provisioning Universal Links.
    pub universal_links: bool,
    /// A QR renderer is available.
    pub qr_rendering: bool,
}

impl PlatformCapabilities {
    /// Capabilities with every feature available.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            cellular_plan_provisioning: true,
            universal_links: true,
            qr_rendering: true,
        }
    }

    /// Parses capabilities reported by the host as JSON.
    pub fn from_json(json: &str) -> ProvisioningResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Answer from a device compatibility check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSupport {
    /// Whether the device can install eSIM profiles.
    pub supported: bool,
    /// Human-readable reason when unsupported.
    pub reason: Option<String>,
}

impl DeviceSupport {
    /// The device is supported.
    #[must_use]
    pub fn supported() -> Self {
        Self {
            supported: true,
            reason: None,
        }
    }

    /// The device is unsupported for the given reason.
    #[must_use]
    pub fn unsupported(reason: impl Into<String>) -> Self {
        Self {
            supported: false,
            reason: Some(reason.into()),
        }
    }
}
