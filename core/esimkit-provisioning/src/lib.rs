//! Provisioning context and platform seams for eSIM installation.
//!
//! The platform owns device capability checks, the native profile
//! installation call, settings navigation and QR rendering. This crate
//! defines those collaborators as traits and wires them together in a
//! [`ProvisioningContext`] that is constructed once at startup and passed
//! to whatever needs activation-code services.
//!
//! # Installation flow
//!
//! 1. [`PlatformCapabilities`] are resolved once, up front
//! 2. [`ProvisioningContext::install`] checks capabilities and the [`DeviceProbe`]
//! 3. The [`ProfileInstaller`] receives an [`InstallReply`] and completes it once
//! 4. The platform result is mapped to an [`InstallOutcome`]
//!
//! No step is retried.

mod capabilities;
mod catalog;
mod context;
mod error;
mod install;
mod outcome;

pub use capabilities::{DeviceSupport, PlatformCapabilities};
pub use catalog::{CatalogIssue, SampleCatalog, SampleProfile};
pub use context::{ProvisioningContext, QR_CACHE_CAPACITY};
pub use error::{ProvisioningError, ProvisioningResult};
pub use install::{
    DeviceProbe, InstallReply, InstallRequest, ProfileInstaller, QrRenderer, SettingsOpener,
};
pub use outcome::{InstallIssue, InstallOutcome, PlatformInstallResult};
