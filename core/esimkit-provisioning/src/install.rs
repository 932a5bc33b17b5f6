//! Installation requests and the platform collaborator traits.

use crate::capabilities::DeviceSupport;
use crate::error::{ProvisioningError, ProvisioningResult};
use crate::outcome::PlatformInstallResult;
use esimkit_activation::{is_valid_hostname_or_ip, ActivationCode, FieldKind};
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tracing::debug;

/// Everything the platform needs to install one profile.
///
/// EID and ICCID travel out of band; they are never part of the LPA string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallRequest {
    /// SM-DP+ address.
    pub address: String,
    /// Matching ID, if the code carried one.
    pub matching_id: Option<String>,
    /// Confirmation code, if any.
    pub confirmation_code: Option<String>,
    /// Target EID.
    pub eid: Option<String>,
    /// Expected ICCID of the profile.
    pub iccid: Option<String>,
}

impl InstallRequest {
    /// Builds a request from a parsed activation code.
    ///
    /// # Errors
    ///
    /// Returns `InvalidActivationCode` if the code did not parse.
    pub fn from_code(code: &ActivationCode) -> ProvisioningResult<Self> {
        let address = code
            .smdp_address()
            .filter(|_| code.is_valid())
            .ok_or_else(|| ProvisioningError::InvalidActivationCode(code.raw().to_string()))?;

        Ok(Self {
            address: address.to_string(),
            matching_id: code.matching_id().map(String::from),
            confirmation_code: code.confirmation_code().map(String::from),
            eid: None,
            iccid: None,
        })
    }

    /// Overrides the confirmation code.
    #[must_use]
    pub fn with_confirmation_code(mut self, code: impl Into<String>) -> Self {
        self.confirmation_code = Some(code.into());
        self
    }

    /// Sets the target EID.
    #[must_use]
    pub fn with_eid(mut self, eid: impl Into<String>) -> Self {
        self.eid = Some(eid.into());
        self
    }

    /// Sets the expected ICCID.
    #[must_use]
    pub fn with_iccid(mut self, iccid: impl Into<String>) -> Self {
        self.iccid = Some(iccid.into());
        self
    }

    /// Checks the address and any out-of-band identifiers.
    pub fn validate(&self) -> ProvisioningResult<()> {
        if !is_valid_hostname_or_ip(&self.address) {
            return Err(ProvisioningError::InvalidActivationCode(format!(
                "bad SM-DP+ address {:?}",
                self.address
            )));
        }
        let optional = [
            (FieldKind::Eid, self.eid.as_deref()),
            (FieldKind::Iccid, self.iccid.as_deref()),
        ];
        for (field, value) in optional {
            if let Some(value) = value.filter(|v| !field.validate(v)) {
                return Err(ProvisioningError::InvalidField {
                    field,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// One-shot handle the installer completes when the platform calls back.
#[derive(Debug)]
pub struct InstallReply {
    tx: oneshot::Sender<PlatformInstallResult>,
}

impl InstallReply {
    pub(crate) fn new(tx: oneshot::Sender<PlatformInstallResult>) -> Self {
        Self { tx }
    }

    /// Delivers the platform result. Consumes the reply.
    pub fn complete(self, result: PlatformInstallResult) {
        if let Err(result) = self.tx.send(result) {
            debug!(?result, "install result arrived after the caller went away");
        }
    }
}

/// Answers whether this device can install eSIM profiles.
pub trait DeviceProbe: Send + Sync {
    fn check(&self) -> DeviceSupport;
}

/// Starts the native profile installation.
///
/// Implementations must eventually call [`InstallReply::complete`], possibly
/// from another thread. Dropping the reply is reported as
/// [`ProvisioningError::ReplyDropped`].
pub trait ProfileInstaller: Send + Sync {
    fn begin_install(&self, request: InstallRequest, reply: InstallReply);
}

/// Opens the system cellular settings screen.
pub trait SettingsOpener: Send + Sync {
    /// Returns true if the settings screen was opened.
    fn open_cellular_settings(&self) -> bool;
}

/// Renders a string into QR image bytes at an integer scale factor.
pub trait QrRenderer: Send + Sync {
    fn render(&self, payload: &str, scale: u32) -> Option<Vec<u8>>;
}
