//! # JSON Web Encryption (JWE)
//!
//! JWE ([RFC7516]) specifies how encrypted content can be represented using
//! JSON. See JWA ([RFC7518]) for more on the cryptographic algorithms and
//! identifiers used.
//!
//! ## Headers
//!
//! A JWE carries up to three tiers of header parameters:
//!
//! - the JWE Protected Header, integrity-protected by the authentication tag;
//! - the JWE Shared Unprotected Header, shared by all recipients;
//! - the JWE Per-Recipient Unprotected Header, one per [`Recipient`].
//!
//! The members of the JOSE Header for a given recipient are the union of
//! the members of all three. Each tier is held in its own field so that code
//! computing the AAD can only ever see the protected tier. Merging the tiers
//! is left to header processing.
//!
//! [RFC7516]: https://www.rfc-editor.org/rfc/rfc7516
//! [RFC7518]: https://www.rfc-editor.org/rfc/rfc7518

mod builder;
mod message;
pub mod param;
mod recipient;

use serde_json::{Map, Value};

pub use self::builder::EncryptedMessageBuilder;
pub use self::message::EncryptedMessage;
pub use self::recipient::Recipient;
use crate::error::{Error, Result};

/// An ordered set of JOSE header parameters.
///
/// Parameter values are arbitrary JSON as header parameter sets are
/// extensible by algorithm. Insertion order is preserved.
pub type Header = Map<String, Value>;

/// Look up `key` in `header`, naming `tier` in the error when absent.
fn parameter<'a>(header: &'a Header, key: &str, tier: &str) -> Result<&'a Value> {
    header
        .get(key)
        .ok_or_else(|| Error::MissingParameter(format!("`{key}` not in {tier} header")))
}
