//! Remote JWKS retrieval
//!
//! Fetches a JWKS document through an [`HttpClient`] and hands the bytes to
//! [`JwkSet::parse`]. Nothing is cached: every call fetches.

mod http;

pub use http::{FetchFuture, HttpClient};

use crate::error::{Error, LookupError, Result};
use crate::jwks::JwkSet;
use crate::keys::KeyMaterial;
use crate::limits::MAX_JWKS_DOCUMENT_SIZE;
use crate::uri::validate_jwks_uri;

/// Fetch and parse the JWKS document published at `target`
///
/// # Errors
///
/// - [`Error::InvalidInput`] for an empty, oversized or non-HTTP(S) target
/// - [`Error::Fetch`] when the client fails
/// - [`Error::ResponseTooLarge`] when the body exceeds 512KB
/// - [`Error::Parse`] when the body is not a JWKS document
///
/// # Example
///
/// ```ignore
/// let client = reqwest::Client::new();
/// let set = jwks_convert::fetch_jwk_set(&client, "https://appleid.apple.com/auth/keys").await?;
/// ```
pub async fn fetch_jwk_set(client: &impl HttpClient, target: &str) -> Result<JwkSet> {
    validate_jwks_uri(target)?;

    tracing::debug!(url = target, "fetching JWK set");
    let bytes = client.fetch(target).await?;

    // Validate response size before parsing to prevent resource exhaustion
    if bytes.len() > MAX_JWKS_DOCUMENT_SIZE {
        tracing::warn!(url = target, size = bytes.len(), "JWKS response too large");
        return Err(Error::ResponseTooLarge {
            size: bytes.len(),
            max: MAX_JWKS_DOCUMENT_SIZE,
        });
    }

    Ok(JwkSet::parse(&bytes)?)
}

/// Fetch the JWKS document at `target` and convert the key identified by `kid`
///
/// An empty `kid` fails before anything is fetched.
pub async fn resolve_key(
    client: &impl HttpClient,
    target: &str,
    kid: &str,
) -> Result<KeyMaterial> {
    if kid.is_empty() {
        return Err(LookupError::InvalidInput("empty key id".into()).into());
    }

    fetch_jwk_set(client, target).await?.key(kid)
}
