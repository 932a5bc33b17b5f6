//! Activation-code parsing.
//!
//! A raw string is split on `$` with empty segments preserved, so
//! `LPA:1$$ABC` keeps an empty SM-DP+ address rather than shifting the
//! matching ID into its place.

use crate::payload::{build_qr_payload, build_universal_link};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use url::Url;

/// Literal prefix every parseable activation code starts with (case-insensitive).
pub const LPA_PREFIX: &str = "LPA:1";

const SEPARATOR: char = '$';

/// A parsed LPA activation code.
///
/// Serializes as its raw string and re-parses on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ActivationCode {
    /// The raw input string, kept verbatim.
    raw: String,
    /// SM-DP+ host or IP address.
    smdp_address: Option<String>,
    /// Matching ID (activation token).
    matching_id: Option<String>,
    /// Confirmation code.
    confirmation_code: Option<String>,
}

impl ActivationCode {
    /// Parses a raw activation string.
    ///
    /// Never fails. Input without the `LPA:1` prefix or without a `$`
    /// separator yields an unparsed code with only [`raw`](Self::raw) set.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let segments: Vec<&str> = raw.split(SEPARATOR).collect();

        if segments.len() < 2 || !has_lpa_prefix(segments[0]) {
            debug!(len = raw.len(), "activation code left unparsed");
            return Self::unparsed(raw);
        }

        Self {
            raw: raw.to_string(),
            smdp_address: Some(segments[1].to_string()),
            matching_id: segments.get(2).map(|s| (*s).to_string()),
            confirmation_code: segments.get(3).map(|s| (*s).to_string()),
        }
    }

    fn unparsed(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            smdp_address: None,
            matching_id: None,
            confirmation_code: None,
        }
    }

    /// Returns the raw input string.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the SM-DP+ address, if the code was parsed.
    #[must_use]
    pub fn smdp_address(&self) -> Option<&str> {
        self.smdp_address.as_deref()
    }

    /// Returns the matching ID, if present.
    #[must_use]
    pub fn matching_id(&self) -> Option<&str> {
        self.matching_id.as_deref()
    }

    /// Returns the confirmation code, if present.
    #[must_use]
    pub fn confirmation_code(&self) -> Option<&str> {
        self.confirmation_code.as_deref()
    }

    /// Returns true if an SM-DP+ address was parsed from a non-empty input.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.smdp_address.is_some() && !self.raw.is_empty()
    }

    /// Rebuilds the QR payload from the parsed fields.
    ///
    /// Returns `None` unless both the SM-DP+ address and the matching ID are set.
    #[must_use]
    pub fn qr_payload(&self) -> Option<String> {
        let smdp = self.smdp_address.as_deref()?;
        let matching_id = self.matching_id.as_deref()?;
        Some(build_qr_payload(
            smdp,
            matching_id,
            self.confirmation_code.as_deref(),
        ))
    }

    /// Builds the Universal Link for this code, or `None` when unavailable.
    #[must_use]
    pub fn universal_link(&self) -> Option<Url> {
        let payload = self.qr_payload()?;
        build_universal_link(&payload).ok()
    }
}

impl FromStr for ActivationCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for ActivationCode {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<ActivationCode> for String {
    fn from(code: ActivationCode) -> Self {
        code.raw
    }
}

impl fmt::Display for ActivationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn has_lpa_prefix(segment: &str) -> bool {
    segment
        .get(..LPA_PREFIX.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(LPA_PREFIX))
}
