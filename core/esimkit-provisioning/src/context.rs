//! The provisioning context shared by everything that installs profiles.

use crate::capabilities::{DeviceSupport, PlatformCapabilities};
use crate::error::{ProvisioningError, ProvisioningResult};
use crate::install::{
    DeviceProbe, InstallReply, InstallRequest, ProfileInstaller, QrRenderer, SettingsOpener,
};
use crate::outcome::InstallOutcome;
use esimkit_activation::ActivationCode;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::oneshot;
use tracing::{debug, info, warn};
use url::Url;

const PROVISIONING_UNAVAILABLE: &str = "cellular plan provisioning is not available on this platform";

/// Most QR images kept before the cache is flushed.
pub const QR_CACHE_CAPACITY: usize = 64;

/// Holds the platform collaborators and resolved capabilities.
///
/// Build one at startup and pass it by reference or `Arc`.
pub struct ProvisioningContext {
    capabilities: PlatformCapabilities,
    probe: Arc<dyn DeviceProbe>,
    installer: Arc<dyn ProfileInstaller>,
    settings: Option<Arc<dyn SettingsOpener>>,
    renderer: Option<Arc<dyn QrRenderer>>,
    /// Rendered QR images keyed by (payload, scale), at most [`QR_CACHE_CAPACITY`].
    qr_cache: Mutex<HashMap<(String, u32), Arc<[u8]>>>,
}

impl ProvisioningContext {
    /// Creates a context with the required collaborators.
    pub fn new(
        capabilities: PlatformCapabilities,
        probe: Arc<dyn DeviceProbe>,
        installer: Arc<dyn ProfileInstaller>,
    ) -> Self {
        Self {
            capabilities,
            probe,
            installer,
            settings: None,
            renderer: None,
            qr_cache: Mutex::new(HashMap::new()),
        }
    }

    /// Adds a settings opener.
    #[must_use]
    pub fn with_settings_opener(mut self, opener: Arc<dyn SettingsOpener>) -> Self {
        self.settings = Some(opener);
        self
    }

    /// Adds a QR renderer.
    #[must_use]
    pub fn with_qr_renderer(mut self, renderer: Arc<dyn QrRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Returns the capabilities this context was built with.
    pub fn capabilities(&self) -> PlatformCapabilities {
        self.capabilities
    }

    /// Checks the platform capability first, then asks the device probe.
    pub fn check_support(&self) -> DeviceSupport {
        if !self.capabilities.cellular_plan_provisioning {
            return DeviceSupport::unsupported(PROVISIONING_UNAVAILABLE);
        }
        self.probe.check()
    }

    /// Hands `request` to the platform installer and waits for its single reply.
    ///
    /// # Errors
    ///
    /// - `Unsupported` if the platform or device cannot provision
    /// - `InvalidActivationCode` / `InvalidField` if the request fails validation
    /// - `ReplyDropped` if the installer never completes the reply
    pub async fn install(&self, request: InstallRequest) -> ProvisioningResult<InstallOutcome> {
        let support = self.check_support();
        if !support.supported {
            let reason = support
                .reason
                .unwrap_or_else(|| "device does not support eSIM".to_string());
            warn!(%reason, "install refused");
            return Err(ProvisioningError::Unsupported { reason });
        }
        request.validate()?;

        let (tx, rx) = oneshot::channel();
        info!(address = %request.address, "starting profile installation");
        self.installer.begin_install(request, InstallReply::new(tx));

        let result = rx.await.map_err(|_| {
            warn!("installer dropped its reply");
            ProvisioningError::ReplyDropped
        })?;
        let outcome = InstallOutcome::from(result);
        info!(?outcome, "profile installation finished");
        Ok(outcome)
    }

    /// Parses `raw` and installs it.
    pub async fn install_code(&self, raw: &str) -> ProvisioningResult<InstallOutcome> {
        let request = InstallRequest::from_code(&ActivationCode::parse(raw))?;
        self.install(request).await
    }

    /// Returns the Universal Link for `code`, or `None` when links are unavailable.
    pub fn universal_link(&self, code: &ActivationCode) -> Option<Url> {
        if !self.capabilities.universal_links {
            return None;
        }
        code.universal_link()
    }

    /// Renders `payload` as a QR image, reusing earlier renders.
    pub fn qr_image(&self, payload: &str, scale: u32) -> Option<Arc<[u8]>> {
        if !self.capabilities.qr_rendering {
            return None;
        }
        let renderer = self.renderer.as_ref()?;
        let key = (payload.to_string(), scale);

        if let Some(image) = self.cache().get(&key) {
            debug!(scale, "qr cache hit");
            return Some(Arc::clone(image));
        }

        let image: Arc<[u8]> = renderer.render(payload, scale)?.into();
        let mut cache = self.cache();
        if cache.len() >= QR_CACHE_CAPACITY {
            debug!(entries = cache.len(), "qr cache full, flushing");
            cache.clear();
        }
        cache.insert(key, Arc::clone(&image));
        Some(image)
    }

    /// Drops every cached QR image.
    pub fn clear_qr_cache(&self) {
        self.cache().clear();
    }

    /// Number of cached QR images.
    pub fn qr_cache_len(&self) -> usize {
        self.cache().len()
    }

    /// Opens the cellular settings screen. Returns false without an opener.
    pub fn open_settings(&self) -> bool {
        self.settings
            .as_ref()
            .is_some_and(|opener| opener.open_cellular_settings())
    }

    fn cache(&self) -> std::sync::MutexGuard<'_, HashMap<(String, u32), Arc<[u8]>>> {
        self.qr_cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
