//! Shared test doubles for provisioning tests.

#![allow(dead_code)]

use esimkit_provisioning::{
    DeviceProbe, DeviceSupport, InstallReply, InstallRequest, PlatformCapabilities,
    PlatformInstallResult, ProfileInstaller, ProvisioningContext, QrRenderer, SettingsOpener,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Probe that always returns the same answer.
pub struct FixedProbe(pub DeviceSupport);

impl DeviceProbe for FixedProbe {
    fn check(&self) -> DeviceSupport {
        self.0.clone()
    }
}

/// What the scripted installer does with each reply.
#[derive(Clone, Copy)]
pub enum Script {
    /// Complete immediately on the calling thread.
    Immediate(PlatformInstallResult),
    /// Complete from a spawned thread, like a native callback.
    Threaded(PlatformInstallResult),
    /// Drop the reply without completing it.
    Drop,
}

/// Installer that records requests and follows a script.
pub struct ScriptedInstaller {
    script: Script,
    pub requests: Mutex<Vec<InstallRequest>>,
}

impl ScriptedInstaller {
    pub fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl ProfileInstaller for ScriptedInstaller {
    fn begin_install(&self, request: InstallRequest, reply: InstallReply) {
        self.requests.lock().unwrap().push(request);
        match self.script {
            Script::Immediate(result) => reply.complete(result),
            Script::Threaded(result) => {
                std::thread::spawn(move || reply.complete(result));
            }
            Script::Drop => drop(reply),
        }
    }
}

/// Renderer that returns the payload bytes and counts calls.
#[derive(Default)]
pub struct CountingRenderer {
    pub calls: AtomicUsize,
}

impl QrRenderer for CountingRenderer {
    fn render(&self, payload: &str, scale: u32) -> Option<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if payload.is_empty() {
            return None;
        }
        let mut bytes = payload.as_bytes().to_vec();
        bytes.push(scale as u8);
        Some(bytes)
    }
}

/// Settings opener that counts calls.
#[derive(Default)]
pub struct CountingSettings {
    pub opened: AtomicUsize,
}

impl SettingsOpener for CountingSettings {
    fn open_cellular_settings(&self) -> bool {
        self.opened.fetch_add(1, Ordering::SeqCst);
        true
    }
}

/// Context with every capability and a supported device.
pub fn supported_context(installer: Arc<ScriptedInstaller>) -> ProvisioningContext {
    ProvisioningContext::new(
        PlatformCapabilities::all(),
        Arc::new(FixedProbe(DeviceSupport::supported())),
        installer,
    )
}

pub const TRUPHONE_CODE: &str = "LPA:1$rsp.truphone.com$JQ-209U6H-6I82J5";
