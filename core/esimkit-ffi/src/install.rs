//! FFI bindings for describing native installation results.

use crate::{read_json, FfiResponse};
use esimkit_provisioning::{InstallOutcome, PlatformInstallResult};
use std::ffi::c_char;
use tracing::debug;

/// Map a native installation result to an outcome and a user-facing message.
///
/// Input is `{"result": "success" | "fail" | "user_cancelled" | "unknown", ...}`,
/// with `error_code` for `fail` and `code` for `unknown`.
///
/// # Safety
/// `json` must be a valid null-terminated UTF-8 JSON string.
/// The returned pointer must be freed with `esimkit_free_string`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn esimkit_describe_install_result(json: *const c_char) -> *mut c_char {
    unsafe { describe_inner(json) }.into_raw()
}

unsafe fn describe_inner(json: *const c_char) -> FfiResponse {
    let result: PlatformInstallResult = match unsafe { read_json(json) } {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    let outcome = InstallOutcome::from(result);
    debug!(?result, ?outcome, "described install result");
    FfiResponse::ok(&serde_json::json!({
        "outcome": outcome,
        "message": outcome.message(),
    }))
}
