//! LPA activation codes for eSIM provisioning.
//!
//! This crate handles:
//! - Parsing raw LPA activation strings into their structural parts
//! - Building the QR payload string from structured fields
//! - Building the HTTPS Universal Link that carries a QR payload
//! - Validating the fields that travel alongside activation codes
//!
//! # Activation Code Format
//!
//! Codes are formatted as: `LPA:1$<smdp-address>$<matching-id>[$<confirmation-code>]`
//!
//! Fields are separated by a literal `$`, there is no escaping mechanism and
//! the `LPA:1` prefix is matched case-insensitively. Parsing never fails: input
//! that does not follow the format yields an unparsed [`ActivationCode`] that
//! still carries the raw string.

mod code;
mod error;
mod payload;
mod validate;

pub use code::{ActivationCode, LPA_PREFIX};
pub use error::{ActivationError, ActivationResult};
pub use payload::{build_qr_payload, build_universal_link, UNIVERSAL_LINK_BASE};
pub use validate::{
    is_valid_eid, is_valid_hostname_or_ip, is_valid_iccid, is_valid_matching_id, FieldKind,
    MIN_MATCHING_ID_LEN,
};
