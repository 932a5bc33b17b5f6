use esimkit_provisioning::{InstallIssue, InstallOutcome, PlatformInstallResult, ProvisioningError};

// ── Platform result mapping ──────────────────────────────────────

#[test]
fn success_maps_to_success() {
    let outcome = InstallOutcome::from(PlatformInstallResult::Success);
    assert_eq!(outcome, InstallOutcome::Success);
    assert!(outcome.is_success());
}

#[test]
fn cancelled_maps_to_cancelled() {
    let outcome = InstallOutcome::from(PlatformInstallResult::UserCancelled);
    assert_eq!(outcome, InstallOutcome::UserCancelled);
    assert!(!outcome.is_success());
}

#[test]
fn unknown_keeps_code() {
    let outcome = InstallOutcome::from(PlatformInstallResult::Unknown { code: 42 });
    assert_eq!(outcome, InstallOutcome::Unknown(42));
}

#[test]
fn failure_without_code_is_unknown_issue() {
    let outcome = InstallOutcome::from(PlatformInstallResult::Fail { error_code: None });
    assert_eq!(outcome, InstallOutcome::Failure(InstallIssue::Unknown));
}

#[test]
fn failure_codes() {
    let cases = [
        (-1009, InstallIssue::NetworkUnavailable),
        (-1005, InstallIssue::NetworkUnavailable),
        (-1020, InstallIssue::NetworkUnavailable),
        (-1001, InstallIssue::Timeout),
        (-1003, InstallIssue::ServerUnreachable),
        (-1004, InstallIssue::ServerUnreachable),
        (28, InstallIssue::StorageFull),
        (1, InstallIssue::EntitlementRequired),
        (0, InstallIssue::Unknown),
        (-9999, InstallIssue::Unknown),
    ];
    for (code, issue) in cases {
        let outcome = InstallOutcome::from(PlatformInstallResult::Fail {
            error_code: Some(code),
        });
        assert_eq!(outcome, InstallOutcome::Failure(issue), "code {code}");
    }
}

// ── Messages ─────────────────────────────────────────────────────

#[test]
fn failure_message_comes_from_issue() {
    let outcome = InstallOutcome::Failure(InstallIssue::StorageFull);
    assert_eq!(outcome.message(), InstallIssue::StorageFull.message());
    assert!(outcome.to_string().contains("no room"));
}

#[test]
fn every_issue_has_a_message() {
    let issues = [
        InstallIssue::NetworkUnavailable,
        InstallIssue::Timeout,
        InstallIssue::ServerUnreachable,
        InstallIssue::StorageFull,
        InstallIssue::EntitlementRequired,
        InstallIssue::InvalidActivationCode,
        InstallIssue::DeviceUnsupported,
        InstallIssue::Unknown,
    ];
    for issue in issues {
        assert!(!issue.message().is_empty());
        assert_eq!(issue.to_string(), issue.message());
    }
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn platform_result_json() {
    let parsed: PlatformInstallResult =
        serde_json::from_str(r#"{"result":"fail","error_code":-1009}"#).unwrap();
    assert_eq!(parsed, PlatformInstallResult::Fail { error_code: Some(-1009) });

    let parsed: PlatformInstallResult = serde_json::from_str(r#"{"result":"fail"}"#).unwrap();
    assert_eq!(parsed, PlatformInstallResult::Fail { error_code: None });

    let parsed: PlatformInstallResult =
        serde_json::from_str(r#"{"result":"user_cancelled"}"#).unwrap();
    assert_eq!(parsed, PlatformInstallResult::UserCancelled);
}

#[test]
fn outcome_json() {
    let json = serde_json::to_string(&InstallOutcome::Failure(InstallIssue::Timeout)).unwrap();
    assert_eq!(json, r#"{"outcome":"failure","detail":"timeout"}"#);

    let json = serde_json::to_string(&InstallOutcome::Success).unwrap();
    assert_eq!(json, r#"{"outcome":"success"}"#);
}

// ── Error display ────────────────────────────────────────────────

#[test]
fn error_display_unsupported() {
    let err = ProvisioningError::Unsupported {
        reason: "no eUICC".into(),
    };
    let msg = format!("{err}");
    assert!(msg.contains("unsupported"));
    assert!(msg.contains("no eUICC"));
}

#[test]
fn error_display_reply_dropped() {
    let err = ProvisioningError::ReplyDropped;
    assert!(format!("{err}").contains("dropped"));
    assert_eq!(err.issue(), InstallIssue::Unknown);
}

#[test]
fn error_from_io() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: ProvisioningError = io.into();
    assert!(format!("{err}").contains("io error"));
}
