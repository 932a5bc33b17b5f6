//! Sample eSIM profiles loaded from JSON.
//!
//! ```json
//! { "profiles": [
//!     { "name": "Travel", "carrier": "Truphone",
//!       "activation_code": "LPA:1$rsp.truphone.com$JQ-209U6H-6I82J5" }
//! ] }
//! ```

use crate::error::{ProvisioningError, ProvisioningResult};
use crate::install::InstallRequest;
use esimkit_activation::{ActivationCode, FieldKind};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// One sample profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleProfile {
    /// Display name.
    pub name: String,
    /// Carrier offering the profile.
    pub carrier: String,
    /// Raw LPA activation string.
    pub activation_code: String,
    /// Out-of-band confirmation code.
    #[serde(default)]
    pub confirmation_code: Option<String>,
    #[serde(default)]
    pub eid: Option<String>,
    #[serde(default)]
    pub iccid: Option<String>,
}

impl SampleProfile {
    /// Parses this profile's activation code.
    #[must_use]
    pub fn activation(&self) -> ActivationCode {
        ActivationCode::parse(&self.activation_code)
    }

    /// Builds an install request, preferring the out-of-band confirmation code.
    pub fn install_request(&self) -> ProvisioningResult<InstallRequest> {
        let mut request = InstallRequest::from_code(&self.activation())?;
        if let Some(cc) = &self.confirmation_code {
            request = request.with_confirmation_code(cc.clone());
        }
        if let Some(eid) = &self.eid {
            request = request.with_eid(eid.clone());
        }
        if let Some(iccid) = &self.iccid {
            request = request.with_iccid(iccid.clone());
        }
        Ok(request)
    }
}

/// A problem found while auditing a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogIssue {
    /// Name of the offending profile.
    pub profile: String,
    /// Field that failed validation; `None` when the activation code did not parse.
    pub field: Option<FieldKind>,
    /// The rejected value.
    pub value: String,
}

/// A list of sample profiles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleCatalog {
    pub profiles: Vec<SampleProfile>,
}

impl SampleCatalog {
    /// Parses a catalog from JSON.
    pub fn from_json(json: &str) -> ProvisioningResult<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        if catalog.profiles.iter().any(|p| p.name.trim().is_empty()) {
            return Err(ProvisioningError::Catalog("profile name is required".into()));
        }
        debug!(count = catalog.profiles.len(), "loaded sample catalog");
        Ok(catalog)
    }

    /// Reads and parses a catalog file.
    pub fn load(path: impl AsRef<Path>) -> ProvisioningResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Finds a profile by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SampleProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Validates every profile and returns the problems found.
    #[must_use]
    pub fn audit(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        for profile in &self.profiles {
            let code = profile.activation();
            if !code.is_valid() {
                issues.push(CatalogIssue {
                    profile: profile.name.clone(),
                    field: None,
                    value: profile.activation_code.clone(),
                });
                continue;
            }

            let fields = [
                (FieldKind::SmdpAddress, code.smdp_address()),
                (FieldKind::MatchingId, code.matching_id()),
                (FieldKind::Eid, profile.eid.as_deref()),
                (FieldKind::Iccid, profile.iccid.as_deref()),
            ];
            for (kind, value) in fields {
                if let Some(value) = value.filter(|v| !kind.validate(v)) {
                    issues.push(CatalogIssue {
                        profile: profile.name.clone(),
                        field: Some(kind),
                        value: value.to_string(),
                    });
                }
            }
        }
        issues
    }
}
