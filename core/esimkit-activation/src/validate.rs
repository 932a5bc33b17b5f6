//! Validators for fields that accompany activation codes.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Minimum accepted matching ID length, in characters.
pub const MIN_MATCHING_ID_LEN: usize = 8;

const MAX_HOSTNAME_LEN: usize = 253;

static HOSTNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .expect("hostname pattern compiles")
});

static IPV4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^((25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\.){3}(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])$",
    )
    .expect("ipv4 pattern compiles")
});

static EID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Fa-f]{32}$").expect("eid pattern compiles"));

static ICCID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{19,20}$").expect("iccid pattern compiles"));

/// Returns true if `s` is a DNS hostname or a dotted-quad IPv4 address.
///
/// The last hostname label may not be all digits, so out-of-range quads
/// such as `999.999.999.999` are rejected instead of passing as hostnames.
#[must_use]
pub fn is_valid_hostname_or_ip(s: &str) -> bool {
    IPV4.is_match(s) || is_valid_hostname(s)
}

fn is_valid_hostname(s: &str) -> bool {
    if s.len() > MAX_HOSTNAME_LEN || !HOSTNAME.is_match(s) {
        return false;
    }
    s.rsplit('.')
        .next()
        .is_some_and(|tld| !tld.bytes().all(|b| b.is_ascii_digit()))
}

/// Returns true if `s` is at least [`MIN_MATCHING_ID_LEN`] characters long.
///
/// No character class is enforced.
#[must_use]
pub fn is_valid_matching_id(s: &str) -> bool {
    !s.is_empty() && s.chars().count() >= MIN_MATCHING_ID_LEN
}

/// Returns true if `s` is a 32-digit hexadecimal EID.
#[must_use]
pub fn is_valid_eid(s: &str) -> bool {
    EID.is_match(s)
}

/// Returns true if `s` is a 19 or 20 digit ICCID.
#[must_use]
pub fn is_valid_iccid(s: &str) -> bool {
    ICCID.is_match(s)
}

/// A field that can be validated by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// SM-DP+ hostname or IPv4 address.
    SmdpAddress,
    /// Matching ID / activation token.
    MatchingId,
    /// Embedded SIM chip identifier.
    Eid,
    /// SIM profile serial number.
    Iccid,
}

impl FieldKind {
    /// All field kinds, in display order.
    pub const ALL: [FieldKind; 4] = [
        FieldKind::SmdpAddress,
        FieldKind::MatchingId,
        FieldKind::Eid,
        FieldKind::Iccid,
    ];

    /// Validates `value` as this kind of field.
    #[must_use]
    pub fn validate(&self, value: &str) -> bool {
        match self {
            Self::SmdpAddress => is_valid_hostname_or_ip(value),
            Self::MatchingId => is_valid_matching_id(value),
            Self::Eid => is_valid_eid(value),
            Self::Iccid => is_valid_iccid(value),
        }
    }

    /// Returns the snake_case name of this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SmdpAddress => "smdp_address",
            Self::MatchingId => "matching_id",
            Self::Eid => "eid",
            Self::Iccid => "iccid",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| format!("unknown field kind: {s}"))
    }
}
