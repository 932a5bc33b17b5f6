//! FFI bindings for activation-code parsing, encoding and field validation.

use crate::{read_json, read_str, FfiResponse};
use esimkit_activation::{build_qr_payload, build_universal_link, ActivationCode, FieldKind};
use serde::{Deserialize, Serialize};
use std::ffi::c_char;

#[derive(Serialize)]
struct ActivationCodeView<'a> {
    raw: &'a str,
    smdp_address: Option<&'a str>,
    matching_id: Option<&'a str>,
    confirmation_code: Option<&'a str>,
    is_valid: bool,
    qr_payload: Option<String>,
    universal_link: Option<String>,
}

#[derive(Deserialize)]
struct QrPayloadRequest {
    smdp_address: String,
    matching_id: String,
    confirmation_code: Option<String>,
}

#[derive(Deserialize)]
struct ValidateFieldRequest {
    field: FieldKind,
    value: String,
}

/// Parse a raw LPA activation string.
///
/// Unparsed input is a successful response with `is_valid: false`.
///
/// # Safety
/// `raw` must be a valid null-terminated UTF-8 string.
/// The returned pointer must be freed with `esimkit_free_string`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn esimkit_parse_activation_code(raw: *const c_char) -> *mut c_char {
    unsafe { parse_inner(raw) }.into_raw()
}

unsafe fn parse_inner(raw: *const c_char) -> FfiResponse {
    let raw = match unsafe { read_str(raw, "activation code") } {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let code = ActivationCode::parse(raw);
    FfiResponse::ok(&ActivationCodeView {
        raw: code.raw(),
        smdp_address: code.smdp_address(),
        matching_id: code.matching_id(),
        confirmation_code: code.confirmation_code(),
        is_valid: code.is_valid(),
        qr_payload: code.qr_payload(),
        universal_link: code.universal_link().map(String::from),
    })
}

/// Build a QR payload from `{"smdp_address", "matching_id", "confirmation_code"?}`.
///
/// # Safety
/// `json` must be a valid null-terminated UTF-8 JSON string.
/// The returned pointer must be freed with `esimkit_free_string`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn esimkit_build_qr_payload(json: *const c_char) -> *mut c_char {
    unsafe { qr_payload_inner(json) }.into_raw()
}

unsafe fn qr_payload_inner(json: *const c_char) -> FfiResponse {
    let req: QrPayloadRequest = match unsafe { read_json(json) } {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    let payload = build_qr_payload(
        &req.smdp_address,
        &req.matching_id,
        req.confirmation_code.as_deref(),
    );
    FfiResponse::ok(&serde_json::json!({ "payload": payload }))
}

/// Build the provisioning Universal Link for a QR payload string.
///
/// # Safety
/// `payload` must be a valid null-terminated UTF-8 string.
/// The returned pointer must be freed with `esimkit_free_string`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn esimkit_build_universal_link(payload: *const c_char) -> *mut c_char {
    unsafe { universal_link_inner(payload) }.into_raw()
}

unsafe fn universal_link_inner(payload: *const c_char) -> FfiResponse {
    let payload = match unsafe { read_str(payload, "payload") } {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    match build_universal_link(payload) {
        Ok(url) => FfiResponse::ok(&serde_json::json!({ "url": url.as_str() })),
        Err(e) => FfiResponse::err("malformed_link", &e.to_string()),
    }
}

/// Validate one field from `{"field": "eid" | "iccid" | "smdp_address" | "matching_id", "value"}`.
///
/// # Safety
/// `json` must be a valid null-terminated UTF-8 JSON string.
/// The returned pointer must be freed with `esimkit_free_string`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn esimkit_validate_field(json: *const c_char) -> *mut c_char {
    unsafe { validate_inner(json) }.into_raw()
}

unsafe fn validate_inner(json: *const c_char) -> FfiResponse {
    let req: ValidateFieldRequest = match unsafe { read_json(json) } {
        Ok(r) => r,
        Err(resp) => return resp,
    };
    FfiResponse::ok(&serde_json::json!({
        "field": req.field,
        "valid": req.field.validate(&req.value),
    }))
}
