//! C ABI exports for esimkit.
//!
//! Every export takes null-terminated UTF-8 strings and returns a heap
//! allocated JSON envelope:
//!
//! ```json
//! {"success": true, "error_code": null, "error_message": null, "data": {...}}
//! ```
//!
//! Returned pointers must be freed with `esimkit_free_string`.

mod codec;
mod install;

pub use codec::{
    esimkit_build_qr_payload, esimkit_build_universal_link, esimkit_parse_activation_code,
    esimkit_validate_field,
};
pub use install::esimkit_describe_install_result;

use serde::{Deserialize, Serialize};
use std::ffi::{c_char, CStr, CString};
use tracing_subscriber::EnvFilter;

/// JSON envelope returned by every export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FfiResponse {
    pub success: bool,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
    pub data: Option<serde_json::Value>,
}

impl FfiResponse {
    pub(crate) fn ok<T: Serialize>(data: &T) -> Self {
        match serde_json::to_value(data) {
            Ok(value) => Self {
                success: true,
                error_code: None,
                error_message: None,
                data: Some(value),
            },
            Err(e) => Self::err("json_error", &format!("Failed to serialize data: {e}")),
        }
    }

    pub(crate) fn err(code: &str, message: &str) -> Self {
        Self {
            success: false,
            error_code: Some(code.to_string()),
            error_message: Some(message.to_string()),
            data: None,
        }
    }

    pub(crate) fn into_raw(self) -> *mut c_char {
        let json_out = serde_json::to_string(&self).unwrap_or_else(|_| {
            r#"{"success":false,"error_code":"json_error","error_message":"Failed to serialize response"}"#.to_string()
        });
        CString::new(json_out).unwrap_or_default().into_raw()
    }
}

/// Reads a C string argument, mapping null and invalid UTF-8 to error responses.
///
/// # Safety
/// `ptr` must be null or a valid null-terminated string that outlives `'a`.
pub(crate) unsafe fn read_str<'a>(ptr: *const c_char, what: &str) -> Result<&'a str, FfiResponse> {
    if ptr.is_null() {
        return Err(FfiResponse::err("null_pointer", &format!("{what} is null")));
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map_err(|_| FfiResponse::err("invalid_utf8", &format!("{what} is not valid UTF-8")))
}

/// Reads and deserializes a JSON request argument.
///
/// # Safety
/// Same requirements as [`read_str`].
pub(crate) unsafe fn read_json<T: serde::de::DeserializeOwned>(
    ptr: *const c_char,
) -> Result<T, FfiResponse> {
    let json_str = unsafe { read_str(ptr, "JSON") }?;
    serde_json::from_str(json_str)
        .map_err(|e| FfiResponse::err("json_parse_error", &format!("Invalid JSON: {e}")))
}

/// Installs a `RUST_LOG`-driven log subscriber. Returns false if one was already set.
#[unsafe(no_mangle)]
pub extern "C" fn esimkit_init_logging() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}

/// Frees a string returned by any esimkit export.
///
/// # Safety
/// `ptr` must be null or a pointer previously returned by this library, freed once.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn esimkit_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(unsafe { CString::from_raw(ptr) });
    }
}
