use esimkit_activation::{build_qr_payload, build_universal_link, UNIVERSAL_LINK_BASE};

// ── QR payload ───────────────────────────────────────────────────

#[test]
fn payload_field_order() {
    let payload = build_qr_payload("rsp.truphone.com", "JQ-209U6H-6I82J5", None);
    assert_eq!(payload, "LPA:1$rsp.truphone.com$JQ-209U6H-6I82J5");
}

#[test]
fn payload_appends_confirmation() {
    let payload = build_qr_payload("rsp.truphone.com", "JQ-209U6H-6I82J5", Some("1234"));
    assert_eq!(payload, "LPA:1$rsp.truphone.com$JQ-209U6H-6I82J5$1234");
}

#[test]
fn payload_does_not_escape_fields() {
    let payload = build_qr_payload("a$b", "c d", None);
    assert_eq!(payload, "LPA:1$a$b$c d");
}

// ── Universal Link ───────────────────────────────────────────────

#[test]
fn link_has_fixed_prefix() {
    let payload = build_qr_payload("rsp.truphone.com", "JQ-209U6H-6I82J5", None);
    let url = build_universal_link(&payload).unwrap();
    assert!(url.as_str().starts_with(UNIVERSAL_LINK_BASE));
    assert_eq!(url.scheme(), "https");
    assert_eq!(url.host_str(), Some("esimsetup.apple.com"));
    assert_eq!(url.path(), "/esim_qrcode_provisioning");
}

#[test]
fn link_carddata_decodes_to_payload() {
    let payload = build_qr_payload("rsp.truphone.com", "JQ-209U6H-6I82J5", None);
    let url = build_universal_link(&payload).unwrap();
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].0, "carddata");
    assert_eq!(pairs[0].1, payload);
}

#[test]
fn link_exact_encoding() {
    let url = build_universal_link("LPA:1$rsp.truphone.com$JQ-209U6H-6I82J5").unwrap();
    assert_eq!(
        url.as_str(),
        "https://esimsetup.apple.com/esim_qrcode_provisioning?carddata=LPA%3A1%24rsp.truphone.com%24JQ-209U6H-6I82J5"
    );
}

#[test]
fn link_escapes_query_delimiters() {
    let payload = "LPA:1$host$a&b=c+d#e f";
    let url = build_universal_link(payload).unwrap();
    assert_eq!(url.fragment(), None);
    let carddata = url
        .query_pairs()
        .find(|(k, _)| k == "carddata")
        .map(|(_, v)| v.into_owned());
    assert_eq!(carddata.as_deref(), Some(payload));
}

#[test]
fn link_for_empty_payload() {
    let url = build_universal_link("").unwrap();
    assert_eq!(url.as_str(), UNIVERSAL_LINK_BASE);
}
