//! # jwks-convert - JWKS lookup and JWK to RSA key conversion
//!
//! Identity providers such as Apple and Google publish their token signing
//! keys as a JSON Web Key Set ([RFC 7517](https://datatracker.ietf.org/doc/html/rfc7517)).
//! **jwks-convert** parses such a document, finds the key matching a token's
//! key ID (`kid`) and turns it into RSA public key material ready for
//! signature verification.
//!
//! ```ignore
//! use jwks_convert::JwkSet;
//!
//! let set = JwkSet::parse(&bytes)?;
//! let key = set.key("YuyXoY")?;
//! let rsa = key.as_rsa().expect("RSA key");
//! let spki_der = rsa.to_der()?;
//! ```
//!
//! ## Conversion rules
//!
//! - `kty` must be exactly `"RSA"`
//! - `n` is unpadded Base64URL holding the big-endian unsigned modulus
//! - `e` must be `"AQAB"` or `"AAEAAQ"`; the exponent is always 65537
//!
//! Lookup returns the first key in document order whose `kid` matches.
//! Parsing, lookup and conversion are synchronous and side-effect free.
//!
//! ## Features
//!
//! - **`remote`**: implements [`HttpClient`] for `reqwest::Client` so
//!   [`fetch_jwk_set`] and [`resolve_key`] can retrieve documents directly

mod error;
mod jwks;
mod keys;
pub mod remote;

// Internal modules
pub(crate) mod limits;
pub(crate) mod uri;
pub(crate) mod utils;

// Public Interface
pub use error::{ConversionError, Error, FetchError, LookupError, ParseError, Result};
pub use jwks::{Jwk, JwkSet};
pub use keys::{KeyMaterial, KeyType, RSA_PUBLIC_EXPONENT, RsaPublicKeyMaterial, convert};
pub use remote::{HttpClient, fetch_jwk_set, resolve_key};

pub use rsa::BigUint;
