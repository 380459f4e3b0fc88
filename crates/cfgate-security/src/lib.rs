//! Secret handling for configuration documents
//!
//! Reads mask secret-looking values ([`redact`]). Writes put the stored
//! secret back wherever the client resubmitted a masked placeholder
//! ([`reconcile`], [`merge_section`]).

pub mod reconciler;
pub mod redactor;

use lazy_static::lazy_static;
use regex::Regex;

pub use reconciler::{is_masked, merge_section, overlay, reconcile};
pub use redactor::{mask_secret, redact};

/// Character used to hide the tail of a secret
pub const MASK_CHAR: char = '*';

/// Marker that identifies a masked placeholder on write
pub const MASK_MARKER: &str = "****";

/// Number of leading characters left visible by masking
pub const VISIBLE_PREFIX: usize = 4;

lazy_static! {
    static ref SECRET_KEY: Regex = Regex::new(r"(?i)(api_key|token|secret|password)")
        .expect("secret key pattern is valid");
}

/// True when a key name looks like it holds a secret.
///
/// Only the key is inspected, never the value.
pub fn is_secret_key(key: &str) -> bool {
    SECRET_KEY.is_match(key)
}
