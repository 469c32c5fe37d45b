//! JWKS URI validation
//!
//! Rejects empty, oversized or non-HTTP(S) targets before anything is
//! fetched.

use crate::error::{Error, Result};
use crate::limits::MAX_JWKS_URI_LENGTH;

/// Validate JWKS URI format and size
pub(crate) fn validate_jwks_uri(uri: &str) -> Result<()> {
    if uri.trim().is_empty() {
        return Err(Error::InvalidInput("JWKS URI cannot be empty".into()));
    }

    if uri.len() > MAX_JWKS_URI_LENGTH {
        return Err(Error::InvalidInput(format!(
            "JWKS URI too long: {} characters (maximum: {MAX_JWKS_URI_LENGTH})",
            uri.len()
        )));
    }

    let parsed = uri
        .parse::<url::Url>()
        .map_err(|e| Error::InvalidInput(format!("invalid JWKS URI: {e}")))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(Error::InvalidInput(
            "JWKS URI must use http or https scheme".into(),
        ));
    }

    if parsed.host_str().is_none() {
        return Err(Error::InvalidInput("JWKS URI must have a valid host".into()));
    }

    Ok(())
}
