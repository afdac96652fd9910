//! # Encrypted Message
//!
//! An [`EncryptedMessage`] is immutable. Content encryption creates one with
//! a ciphertext, and decryption records the recovered plaintext by creating
//! a new message with [`EncryptedMessage::with_payload`]:
//!
//! ```text
//! builder ──create/build──▶ encrypted ──with_payload──▶ encrypted + payload
//! ```
//!
//! Earlier values are never altered by later stages, so a message may be
//! logged or shared at any point in its lifecycle.

use std::fmt;

use serde_json::Value;

use super::{parameter, EncryptedMessageBuilder, Header, Recipient};
use crate::error::{Error, Result};

/// A JWE message: content-encrypted data and the headers and key material
/// needed to decrypt it for one or more recipients.
///
/// In JWE JSON serialization, one or more of the JWE Protected Header, JWE
/// Shared Unprotected Header, and JWE Per-Recipient Unprotected Header MUST
/// be present. The JOSE Header for a recipient is the union of the three.
#[derive(Clone, PartialEq, Eq)]
pub struct EncryptedMessage {
    pub(super) ciphertext: Option<Vec<u8>>,
    pub(super) iv: Vec<u8>,
    pub(super) tag: Vec<u8>,
    pub(super) aad: Option<Vec<u8>>,
    pub(super) shared_unprotected_header: Header,
    pub(super) shared_protected_header: Header,
    pub(super) encoded_shared_protected_header: Option<String>,
    pub(super) recipients: Vec<Recipient>,
    pub(super) payload: Option<Vec<u8>>,
}

impl EncryptedMessage {
    /// Start building a message from the outputs of content encryption.
    ///
    /// `ciphertext`, `iv`, and `tag` may be empty but are always present.
    /// No check is made that they are valid for any algorithm.
    #[must_use]
    pub fn create(
        ciphertext: impl Into<Vec<u8>>, iv: impl Into<Vec<u8>>, tag: impl Into<Vec<u8>>,
    ) -> EncryptedMessageBuilder {
        EncryptedMessageBuilder::new().ciphertext(ciphertext, iv, tag)
    }

    /// Start building a message that has not yet been encrypted.
    #[must_use]
    pub fn builder() -> EncryptedMessageBuilder {
        EncryptedMessageBuilder::new()
    }

    /// Returns a copy of this message with `payload` set to the decrypted
    /// plaintext.
    ///
    /// Callers must have verified the authentication tag and decrypted the
    /// ciphertext before calling. Any existing payload is replaced in the
    /// copy; `self` is not modified.
    #[must_use]
    pub fn with_payload(&self, payload: impl Into<Vec<u8>>) -> Self {
        let payload = payload.into();

        if !self.is_encrypted() {
            tracing::warn!("attaching payload to a message without ciphertext");
        }
        tracing::debug!(len = payload.len(), "attaching decrypted payload");

        Self {
            payload: Some(payload),
            ..self.clone()
        }
    }

    /// Whether the message holds a ciphertext.
    #[must_use]
    pub const fn is_encrypted(&self) -> bool {
        self.ciphertext.is_some()
    }

    /// JWE Ciphertext.
    #[must_use]
    pub fn ciphertext(&self) -> Option<&[u8]> {
        self.ciphertext.as_deref()
    }

    /// JWE Initialization Vector.
    #[must_use]
    pub fn iv(&self) -> &[u8] {
        &self.iv
    }

    /// JWE Authentication Tag.
    #[must_use]
    pub fn tag(&self) -> &[u8] {
        &self.tag
    }

    /// JWE AAD.
    #[must_use]
    pub fn aad(&self) -> Option<&[u8]> {
        self.aad.as_deref()
    }

    /// The decrypted plaintext, if decryption has taken place.
    #[must_use]
    pub fn payload(&self) -> Option<&[u8]> {
        self.payload.as_deref()
    }

    /// The number of recipients.
    #[must_use]
    pub fn count_recipients(&self) -> usize {
        self.recipients.len()
    }

    /// Recipients, in the order they were added.
    #[must_use]
    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    /// Get the recipient at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if there is no recipient at `index`.
    pub fn recipient(&self, index: usize) -> Result<&Recipient> {
        self.recipients.get(index).ok_or_else(|| {
            Error::OutOfRange(format!(
                "recipient index {index} out of range ({} recipients)",
                self.recipients.len()
            ))
        })
    }

    /// JWE Protected Header.
    #[must_use]
    pub const fn shared_protected_header(&self) -> &Header {
        &self.shared_protected_header
    }

    /// Get a JWE Protected Header parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingParameter`] if the header does not contain
    /// `key`.
    pub fn shared_protected_header_parameter(&self, key: &str) -> Result<&Value> {
        parameter(&self.shared_protected_header, key, "shared protected")
    }

    /// Whether the JWE Protected Header contains `key`.
    #[must_use]
    pub fn has_shared_protected_header_parameter(&self, key: &str) -> bool {
        self.shared_protected_header.contains_key(key)
    }

    /// JWE Shared Unprotected Header.
    #[must_use]
    pub const fn shared_unprotected_header(&self) -> &Header {
        &self.shared_unprotected_header
    }

    /// Get a JWE Shared Unprotected Header parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingParameter`] if the header does not contain
    /// `key`.
    pub fn shared_unprotected_header_parameter(&self, key: &str) -> Result<&Value> {
        parameter(&self.shared_unprotected_header, key, "shared unprotected")
    }

    /// Whether the JWE Shared Unprotected Header contains `key`.
    #[must_use]
    pub fn has_shared_unprotected_header_parameter(&self, key: &str) -> bool {
        self.shared_unprotected_header.contains_key(key)
    }

    /// The JWE Protected Header exactly as encoded on the wire.
    ///
    /// Returns an empty string when no encoded form was set: an empty
    /// protected header encodes to `""` rather than being omitted.
    #[must_use]
    pub fn encoded_shared_protected_header(&self) -> &str {
        self.encoded_shared_protected_header.as_deref().unwrap_or_default()
    }
}

impl fmt::Debug for EncryptedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = |bytes: &Option<Vec<u8>>| bytes.as_ref().map(Vec::len);

        f.debug_struct("EncryptedMessage")
            .field("ciphertext_len", &len(&self.ciphertext))
            .field("iv_len", &self.iv.len())
            .field("tag_len", &self.tag.len())
            .field("aad_len", &len(&self.aad))
            .field("shared_unprotected_header", &self.shared_unprotected_header)
            .field("shared_protected_header", &self.shared_protected_header)
            .field("encoded_shared_protected_header", &self.encoded_shared_protected_header)
            .field("recipients", &self.recipients)
            .field("payload", &self.payload.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use assert_let_bind::assert_let;
    use serde_json::json;

    use super::*;
    use crate::jwe::param;

    fn header(value: Value) -> Header {
        let Value::Object(map) = value else { panic!("header should be a JSON object") };
        map
    }

    fn message() -> EncryptedMessage {
        EncryptedMessage::create(b"a2b3".to_vec(), vec![0; 12], b"tagbytes".to_vec())
            .shared_protected_header(header(json!({"alg": "RSA-OAEP", "enc": "A256GCM"})))
            .shared_unprotected_header(header(json!({"jku": "https://example.com/keys"})))
            .build()
    }

    #[test]
    fn created_is_encrypted() {
        let message = message();
        assert!(message.is_encrypted());
        assert_eq!(message.ciphertext(), Some(b"a2b3".as_slice()));
        assert_eq!(message.tag(), b"tagbytes");
        assert_eq!(message.payload(), None);
    }

    #[test]
    fn builder_without_ciphertext() {
        let message = EncryptedMessage::builder()
            .shared_protected_header(header(json!({"enc": "A128GCM"})))
            .build();
        assert!(!message.is_encrypted());
        assert_eq!(message.ciphertext(), None);
    }

    #[test]
    fn header_tiers_are_separate() {
        let message = message();

        assert!(message.has_shared_protected_header_parameter(param::ENC));
        assert!(!message.has_shared_unprotected_header_parameter(param::ENC));
        assert!(message.has_shared_unprotected_header_parameter(param::JKU));
        assert!(!message.has_shared_protected_header_parameter(param::JKU));

        assert_let!(
            Err(Error::MissingParameter(msg)),
            message.shared_unprotected_header_parameter(param::ENC)
        );
        assert_eq!(msg, "`enc` not in shared unprotected header");
    }

    #[test]
    fn recipient_out_of_range() {
        let message = message();
        assert_let!(Err(Error::OutOfRange(msg)), message.recipient(0));
        assert_eq!(msg, "recipient index 0 out of range (0 recipients)");
    }

    #[test]
    fn payload_on_unencrypted() {
        let message = EncryptedMessage::builder().build();
        let with_payload = message.with_payload(b"plaintext".to_vec());

        assert!(!with_payload.is_encrypted());
        assert_eq!(with_payload.payload(), Some(b"plaintext".as_slice()));
    }

    #[test]
    fn debug_redacts_payload() {
        let message = EncryptedMessage::create(vec![1; 4], vec![0; 12], vec![2; 16])
            .build()
            .with_payload(b"secret".to_vec());

        insta::assert_snapshot!(
            format!("{message:?}"),
            @"EncryptedMessage { ciphertext_len: Some(4), iv_len: 12, tag_len: 16, aad_len: None, shared_unprotected_header: {}, shared_protected_header: {}, encoded_shared_protected_header: None, recipients: [], payload: Some(\"[REDACTED]\") }"
        );
    }
}
