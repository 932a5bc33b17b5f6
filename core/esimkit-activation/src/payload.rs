//! QR payload and Universal Link construction.

use crate::code::LPA_PREFIX;
use crate::error::{ActivationError, ActivationResult};
use url::Url;

/// Fixed scheme, host, path and query key of the provisioning Universal Link.
pub const UNIVERSAL_LINK_BASE: &str =
    "https://esimsetup.apple.com/esim_qrcode_provisioning?carddata=";

/// Builds the LPA string encoded into a provisioning QR code.
///
/// Fields are joined verbatim; a confirmation code is appended whenever one is
/// passed, even an empty one.
#[must_use]
pub fn build_qr_payload(
    smdp_address: &str,
    matching_id: &str,
    confirmation_code: Option<&str>,
) -> String {
    let mut payload = format!("{LPA_PREFIX}${smdp_address}${matching_id}");
    if let Some(code) = confirmation_code {
        payload.push('$');
        payload.push_str(code);
    }
    payload
}

/// Builds the HTTPS Universal Link that hands `payload` to the platform installer.
///
/// The payload is percent-encoded as a query value: everything outside the
/// unreserved set, `$` and `:` included, is escaped.
///
/// # Errors
///
/// Returns [`ActivationError::MalformedLink`] if the composed string is not a URL.
pub fn build_universal_link(payload: &str) -> ActivationResult<Url> {
    let encoded = urlencoding::encode(payload);
    let link = format!("{UNIVERSAL_LINK_BASE}{encoded}");
    Url::parse(&link).map_err(|e| ActivationError::MalformedLink(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_without_confirmation() {
        assert_eq!(
            build_qr_payload("smdp.example.com", "ABCDEFGH", None),
            "LPA:1$smdp.example.com$ABCDEFGH"
        );
    }

    #[test]
    fn empty_confirmation_is_still_appended() {
        assert_eq!(
            build_qr_payload("smdp.example.com", "ABCDEFGH", Some("")),
            "LPA:1$smdp.example.com$ABCDEFGH$"
        );
    }

    #[test]
    fn link_escapes_separators() {
        let url = build_universal_link("LPA:1$a.b$c").unwrap();
        assert!(url.as_str().ends_with("carddata=LPA%3A1%24a.b%24c"));
    }
}
