//! JWK (JSON Web Key) record

use crate::error::ConversionError;
use crate::keys::{KeyMaterial, KeyType, convert};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON Web Key (JWK) as published in a key set
///
/// The fields the converter reads are typed; every other member of the
/// JSON object is kept verbatim in [`Jwk::extra`]. A known member holding a
/// non-string value has no typed value and stays in `extra` instead, so
/// serializing a `Jwk` reproduces the published members. No schema is
/// enforced here: validation happens during conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Jwk {
    /// Key type (e.g., "RSA")
    #[serde(skip_serializing_if = "Option::is_none")]
    kty: Option<String>,
    /// Key ID
    #[serde(skip_serializing_if = "Option::is_none")]
    kid: Option<String>,
    /// Algorithm (advisory per RFC 7517 §4.4)
    #[serde(skip_serializing_if = "Option::is_none")]
    alg: Option<String>,
    /// Key use (RFC 7517 §4.2), "sig" or "enc"
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    key_use: Option<String>,
    /// RSA modulus (Base64URL-encoded)
    #[serde(skip_serializing_if = "Option::is_none")]
    n: Option<String>,
    /// RSA exponent (Base64URL-encoded)
    #[serde(skip_serializing_if = "Option::is_none")]
    e: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Move a string member out of `members`; other values are left in place
fn take_string(members: &mut Map<String, Value>, name: &str) -> Option<String> {
    match members.remove(name)? {
        Value::String(value) => Some(value),
        other => {
            members.insert(name.into(), other);
            None
        }
    }
}

impl From<Map<String, Value>> for Jwk {
    fn from(mut members: Map<String, Value>) -> Self {
        Self {
            kty: take_string(&mut members, "kty"),
            kid: take_string(&mut members, "kid"),
            alg: take_string(&mut members, "alg"),
            key_use: take_string(&mut members, "use"),
            n: take_string(&mut members, "n"),
            e: take_string(&mut members, "e"),
            extra: members,
        }
    }
}

impl Jwk {
    pub fn kty(&self) -> Option<&str> {
        self.kty.as_deref()
    }

    pub fn kid(&self) -> Option<&str> {
        self.kid.as_deref()
    }

    pub fn alg(&self) -> Option<&str> {
        self.alg.as_deref()
    }

    /// The `use` member
    pub fn key_use(&self) -> Option<&str> {
        self.key_use.as_deref()
    }

    pub fn n(&self) -> Option<&str> {
        self.n.as_deref()
    }

    pub fn e(&self) -> Option<&str> {
        self.e.as_deref()
    }

    /// Look up a member without a typed value (e.g. `x5c`, `x5t`, or a
    /// numeric `kid`)
    pub fn extra(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    /// All members without a typed value
    pub fn extra_fields(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Parsed `kty`, or `UnsupportedKeyType` for anything but a known type
    pub fn key_type(&self) -> Result<KeyType, ConversionError> {
        self.kty
            .as_deref()
            .ok_or(ConversionError::UnsupportedKeyType(None))?
            .parse()
    }

    /// Validate this JWK and convert it into key material
    ///
    /// See [`convert`](crate::convert).
    pub fn to_key(&self) -> Result<KeyMaterial, ConversionError> {
        convert(self)
    }
}
