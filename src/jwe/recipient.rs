//! # Recipient

use std::fmt;

use serde_json::Value;

use super::{parameter, Header};
use crate::error::Result;

/// Contains information specific to a single recipient.
///
/// In JWE JSON Serialization there is exactly one `Recipient` per recipient,
/// even if some or all of them have an empty header.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Recipient {
    header: Header,
    encrypted_key: Vec<u8>,
}

impl Recipient {
    /// Create a recipient from its per-recipient unprotected header and
    /// encrypted Content Encryption Key.
    ///
    /// `encrypted_key` is empty when no key is wrapped for the recipient, as
    /// with direct encryption or direct key agreement (`dir`, `ECDH-ES`).
    #[must_use]
    pub fn new(header: Header, encrypted_key: impl Into<Vec<u8>>) -> Self {
        Self {
            header,
            encrypted_key: encrypted_key.into(),
        }
    }

    /// JWE Per-Recipient Unprotected Header.
    #[must_use]
    pub const fn header(&self) -> &Header {
        &self.header
    }

    /// Get a per-recipient header parameter.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingParameter`] if the header does not
    /// contain `key`.
    pub fn header_parameter(&self, key: &str) -> Result<&Value> {
        parameter(&self.header, key, "per-recipient")
    }

    /// Whether the per-recipient header contains `key`.
    #[must_use]
    pub fn has_header_parameter(&self, key: &str) -> bool {
        self.header.contains_key(key)
    }

    /// The recipient's JWE Encrypted Key.
    #[must_use]
    pub fn encrypted_key(&self) -> &[u8] {
        &self.encrypted_key
    }

    /// Whether a Content Encryption Key was wrapped for this recipient.
    #[must_use]
    pub fn has_encrypted_key(&self) -> bool {
        !self.encrypted_key.is_empty()
    }
}

impl fmt::Debug for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recipient")
            .field("header", &self.header)
            .field("encrypted_key", &format_args!("[{} bytes]", self.encrypted_key.len()))
            .finish()
    }
}
