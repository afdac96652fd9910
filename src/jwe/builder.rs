//! # Encrypted Message Builder

use super::{EncryptedMessage, Header, Recipient};

/// Build an [`EncryptedMessage`].
///
/// Use [`EncryptedMessage::create`] once the ciphertext, initialization
/// vector and authentication tag have been computed, or
/// [`EncryptedMessage::builder`] to assemble headers before content
/// encryption has taken place.
#[derive(Debug, Default)]
pub struct EncryptedMessageBuilder {
    ciphertext: Option<Vec<u8>>,
    iv: Vec<u8>,
    tag: Vec<u8>,
    aad: Option<Vec<u8>>,
    shared_unprotected_header: Header,
    shared_protected_header: Header,
    encoded_shared_protected_header: Option<String>,
    recipients: Vec<Recipient>,
}

impl EncryptedMessageBuilder {
    /// Create a new `EncryptedMessageBuilder` with no ciphertext set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the JWE Ciphertext together with the initialization vector and
    /// authentication tag produced alongside it.
    ///
    /// `iv` may be empty for content encryption algorithms that do not use
    /// one.
    #[must_use]
    pub fn ciphertext(
        mut self, ciphertext: impl Into<Vec<u8>>, iv: impl Into<Vec<u8>>, tag: impl Into<Vec<u8>>,
    ) -> Self {
        self.ciphertext = Some(ciphertext.into());
        self.iv = iv.into();
        self.tag = tag.into();
        self
    }

    /// Set Additional Authenticated Data. Not used for JWE Compact
    /// Serialization.
    #[must_use]
    pub fn aad(mut self, aad: impl Into<Vec<u8>>) -> Self {
        self.aad = Some(aad.into());
        self
    }

    /// Set the JWE Shared Unprotected Header.
    #[must_use]
    pub fn shared_unprotected_header(mut self, header: Header) -> Self {
        self.shared_unprotected_header = header;
        self
    }

    /// Set the JWE Protected Header.
    #[must_use]
    pub fn shared_protected_header(mut self, header: Header) -> Self {
        self.shared_protected_header = header;
        self
    }

    /// Set the encoded form of the JWE Protected Header exactly as it was (or
    /// will be) transmitted.
    ///
    /// This string, not a re-encoding of the protected header, is what
    /// integrity checks are computed over.
    #[must_use]
    pub fn encoded_shared_protected_header(mut self, encoded: impl Into<String>) -> Self {
        self.encoded_shared_protected_header = Some(encoded.into());
        self
    }

    /// Replace the recipient list.
    #[must_use]
    pub fn recipients(mut self, recipients: impl IntoIterator<Item = Recipient>) -> Self {
        self.recipients = recipients.into_iter().collect();
        self
    }

    /// Append a recipient. Recipients keep the order they were added in.
    #[must_use]
    pub fn add_recipient(mut self, recipient: Recipient) -> Self {
        self.recipients.push(recipient);
        self
    }

    /// Build the message. The message has no payload.
    #[must_use]
    pub fn build(self) -> EncryptedMessage {
        tracing::debug!(
            encrypted = self.ciphertext.is_some(),
            aad = self.aad.is_some(),
            recipients = self.recipients.len(),
            "building encrypted message"
        );

        EncryptedMessage {
            ciphertext: self.ciphertext,
            iv: self.iv,
            tag: self.tag,
            aad: self.aad,
            shared_unprotected_header: self.shared_unprotected_header,
            shared_protected_header: self.shared_protected_header,
            encoded_shared_protected_header: self.encoded_shared_protected_header,
            recipients: self.recipients,
            payload: None,
        }
    }
}
