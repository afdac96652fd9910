//! # JSON Web Encryption Message Model
//!
//! A data model for JSON Web Encryption ([RFC7516]) messages: the ciphertext,
//! initialization vector, authentication tag and additional authenticated
//! data produced by content encryption, together with the JOSE headers and
//! per-recipient key material needed to decrypt it.
//!
//! The crate does not encrypt, decrypt, or serialize. Encryption produces an
//! [`EncryptedMessage`] using [`EncryptedMessage::create`], a codec fills one
//! in when parsing wire bytes, and decryption records its outcome with
//! [`EncryptedMessage::with_payload`].
//!
//! # Example
//!
//! ```rust
//! use credibil_jwe::{EncryptedMessage, Header, Recipient};
//! use serde_json::json;
//!
//! let mut protected = Header::new();
//! protected.insert("enc".into(), json!("A256GCM"));
//!
//! let mut per_recipient = Header::new();
//! per_recipient.insert("alg".into(), json!("RSA-OAEP"));
//!
//! let message = EncryptedMessage::create(b"ciphertext".to_vec(), vec![0; 12], vec![1; 16])
//!     .shared_protected_header(protected)
//!     .encoded_shared_protected_header("eyJlbmMiOiJBMjU2R0NNIn0")
//!     .add_recipient(Recipient::new(per_recipient, vec![2; 256]))
//!     .build();
//!
//! assert!(message.is_encrypted());
//! assert_eq!(message.count_recipients(), 1);
//!
//! let decrypted = message.with_payload(b"hello world".to_vec());
//! assert_eq!(decrypted.payload(), Some(b"hello world".as_slice()));
//! assert_eq!(message.payload(), None);
//! ```
//!
//! [RFC7516]: https://www.rfc-editor.org/rfc/rfc7516

mod error;
pub mod jwe;

pub use crate::error::{Error, Result};
pub use crate::jwe::{EncryptedMessage, EncryptedMessageBuilder, Header, Recipient};
