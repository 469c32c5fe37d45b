//! JSON Web Key Set (JWKS) module
//!
//! Parses JWKS documents as defined in
//! [RFC 7517 §5](https://datatracker.ietf.org/doc/html/rfc7517#section-5)
//! and looks keys up by key ID (`kid`).

mod jwk;

pub use jwk::Jwk;

use crate::error::{LookupError, ParseError, Result};
use crate::keys::KeyMaterial;
use crate::limits::{MAX_JWK_SET_SIZE, MAX_JWKS_DOCUMENT_SIZE};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// JSON Web Key Set (JWKS)
///
/// Build one with [`JwkSet::parse`], which guarantees a `"keys"` array.
/// A set obtained through plain `serde` deserialization may lack it; lookups
/// then fail with [`LookupError::InvalidSet`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JwkSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    keys: Option<Vec<Jwk>>,
}

impl JwkSet {
    /// Parse a JWKS document from raw bytes
    ///
    /// Members other than `"keys"` are ignored, as are unknown members of
    /// each key. Error messages only carry the position of a syntax error,
    /// never document content.
    pub fn parse(bytes: &[u8]) -> std::result::Result<Self, ParseError> {
        if bytes.len() > MAX_JWKS_DOCUMENT_SIZE {
            return Err(ParseError::TooLarge {
                size: bytes.len(),
                max: MAX_JWKS_DOCUMENT_SIZE,
                unit: "bytes",
            });
        }

        let document: Value = serde_json::from_slice(bytes).map_err(|e| {
            ParseError::Malformed(format!(
                "invalid JSON ({:?}) at line {}, column {}",
                e.classify(),
                e.line(),
                e.column()
            ))
        })?;

        let Value::Object(mut document) = document else {
            return Err(ParseError::Malformed("document is not a JSON object".into()));
        };

        let Some(Value::Array(entries)) = document.remove("keys") else {
            return Err(ParseError::Malformed("missing \"keys\" array".into()));
        };

        if entries.len() > MAX_JWK_SET_SIZE {
            return Err(ParseError::TooLarge {
                size: entries.len(),
                max: MAX_JWK_SET_SIZE,
                unit: "keys",
            });
        }

        // `null` entries carry no key and are skipped
        let keys = entries
            .into_iter()
            .enumerate()
            .filter(|(_, entry)| !entry.is_null())
            .map(|(index, entry)| {
                Jwk::deserialize(entry).map_err(|_| {
                    ParseError::Malformed(format!("keys[{index}] is not a JSON object"))
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        tracing::debug!(keys = keys.len(), "parsed JWK set");

        Ok(Self { keys: Some(keys) })
    }

    /// Find the first key whose `kid` equals `kid`, in document order
    ///
    /// Key IDs are not guaranteed to be unique across rotation windows; the
    /// earliest listed key wins. Entries without a string `kid` never match.
    pub fn find_by_kid(&self, kid: &str) -> std::result::Result<&Jwk, LookupError> {
        if kid.is_empty() {
            return Err(LookupError::InvalidInput("empty key id".into()));
        }

        let keys = self.keys.as_deref().ok_or(LookupError::InvalidSet)?;

        keys.iter()
            .find(|key| key.kid() == Some(kid))
            .ok_or_else(|| {
                tracing::debug!(kid, keys = keys.len(), "no key matches kid");
                LookupError::NotFound { kid: kid.into() }
            })
    }

    /// Find the key with the given `kid` and convert it into key material
    pub fn key(&self, kid: &str) -> Result<KeyMaterial> {
        Ok(self.find_by_kid(kid)?.to_key()?)
    }

    /// The keys in document order; empty when the set lacks `"keys"`
    pub fn keys(&self) -> &[Jwk] {
        self.keys.as_deref().unwrap_or_default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Jwk> {
        self.keys().iter()
    }

    pub fn len(&self) -> usize {
        self.keys().len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys().is_empty()
    }
}

impl FromStr for JwkSet {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s.as_bytes())
    }
}

impl<'a> IntoIterator for &'a JwkSet {
    type Item = &'a Jwk;
    type IntoIter = std::slice::Iter<'a, Jwk>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
