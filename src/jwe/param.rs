//! Registered JWE header parameter names.
//!
//! See [RFC7516 Section 4.1] and [RFC7518 Section 4].
//!
//! Header accessors accept any `&str`; these constants only cover the
//! registered names.
//!
//! [RFC7516 Section 4.1]: https://www.rfc-editor.org/rfc/rfc7516#section-4.1
//! [RFC7518 Section 4]: https://www.rfc-editor.org/rfc/rfc7518#section-4

/// Algorithm used to encrypt or determine the Content Encryption Key (CEK).
pub const ALG: &str = "alg";

/// Content encryption algorithm. MUST be an AEAD algorithm.
pub const ENC: &str = "enc";

/// Compression algorithm applied to the plaintext before encryption.
pub const ZIP: &str = "zip";

/// URI of a JWK Set containing the encryption key.
pub const JKU: &str = "jku";

/// Public key the JWE was encrypted to.
pub const JWK: &str = "jwk";

/// Hint indicating which key was used to encrypt the JWE.
pub const KID: &str = "kid";

/// X.509 URL.
pub const X5U: &str = "x5u";

/// X.509 certificate chain.
pub const X5C: &str = "x5c";

/// X.509 certificate SHA-1 thumbprint.
pub const X5T: &str = "x5t";

/// X.509 certificate SHA-256 thumbprint.
pub const X5T_S256: &str = "x5t#S256";

/// Media type of the complete JWE.
pub const TYP: &str = "typ";

/// Media type of the secured content (the payload).
pub const CTY: &str = "cty";

/// Extensions that MUST be understood and processed.
pub const CRIT: &str = "crit";

/// Ephemeral public key created by the originator for key agreement.
pub const EPK: &str = "epk";

/// Key agreement `PartyUInfo`.
pub const APU: &str = "apu";

/// Key agreement `PartyVInfo`.
pub const APV: &str = "apv";

/// Initialization vector used when wrapping the CEK with AES GCM.
pub const IV: &str = "iv";

/// Authentication tag produced when wrapping the CEK with AES GCM.
pub const TAG: &str = "tag";

/// PBES2 salt input.
pub const P2S: &str = "p2s";

/// PBES2 iteration count.
pub const P2C: &str = "p2c";
