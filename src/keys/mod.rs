//! Key material converted from JWK entries
//!
//! Conversion dispatches on the JWK key type (`kty`). RSA is the only
//! supported family; adding another means a [`KeyType`] variant, a
//! [`KeyMaterial`] variant and a branch in [`convert`].

mod rsa;

pub use rsa::{RSA_PUBLIC_EXPONENT, RsaPublicKeyMaterial};

use crate::error::ConversionError;
use crate::jwks::Jwk;
use std::fmt;
use std::str::FromStr;

/// Supported JWK key types (`kty`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum KeyType {
    /// `"RSA"`
    Rsa,
}

impl KeyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyType::Rsa => "RSA",
        }
    }
}

impl FromStr for KeyType {
    type Err = ConversionError;

    /// Exact, case-sensitive match against the registered `kty` values
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RSA" => Ok(KeyType::Rsa),
            other => Err(ConversionError::UnsupportedKeyType(Some(other.into()))),
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Public key material produced from a JWK
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum KeyMaterial {
    Rsa(RsaPublicKeyMaterial),
}

impl KeyMaterial {
    pub fn key_type(&self) -> KeyType {
        match self {
            KeyMaterial::Rsa(_) => KeyType::Rsa,
        }
    }

    pub fn as_rsa(&self) -> Option<&RsaPublicKeyMaterial> {
        match self {
            KeyMaterial::Rsa(key) => Some(key),
        }
    }

    pub fn into_rsa(self) -> Option<RsaPublicKeyMaterial> {
        match self {
            KeyMaterial::Rsa(key) => Some(key),
        }
    }

    /// DER-encoded SubjectPublicKeyInfo
    pub fn to_der(&self) -> Result<Vec<u8>, ConversionError> {
        match self {
            KeyMaterial::Rsa(key) => key.to_der(),
        }
    }
}

impl From<RsaPublicKeyMaterial> for KeyMaterial {
    fn from(key: RsaPublicKeyMaterial) -> Self {
        KeyMaterial::Rsa(key)
    }
}

/// Validate a JWK and convert it into key material
///
/// # Errors
///
/// - [`ConversionError::UnsupportedKeyType`] when `kty` is absent or not
///   exactly `"RSA"`
/// - [`ConversionError::MissingField`] when `n` is absent or not a string
/// - [`ConversionError::InvalidEncoding`] when `n` is not unpadded Base64URL
///   or decodes to nothing
/// - [`ConversionError::FieldTooLarge`] when `n` exceeds the size limit
/// - [`ConversionError::UnsupportedExponent`] when `e` is not `"AQAB"` or
///   `"AAEAAQ"`
pub fn convert(jwk: &Jwk) -> Result<KeyMaterial, ConversionError> {
    match jwk.key_type()? {
        KeyType::Rsa => RsaPublicKeyMaterial::from_jwk(jwk).map(KeyMaterial::Rsa),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn jwk(value: Value) -> Jwk {
        serde_json::from_value(value).expect("object deserializes")
    }

    #[test]
    fn test_convert_rsa() {
        let key = convert(&jwk(json!({"kty": "RSA", "n": "AQID", "e": "AQAB"}))).unwrap();

        assert_eq!(key.key_type(), KeyType::Rsa);
        let rsa = key.as_rsa().unwrap();
        assert_eq!(rsa.modulus(), &crate::BigUint::from(0x010203u32));
        assert_eq!(rsa.exponent(), RSA_PUBLIC_EXPONENT);
    }

    #[test]
    fn test_convert_rejects_other_key_types() {
        for kty in ["EC", "OKP", "oct", "rsa", "Rsa", "RSA ", ""] {
            let result = convert(&jwk(json!({"kty": kty, "n": "AQID", "e": "AQAB"})));
            assert_eq!(
                result,
                Err(ConversionError::UnsupportedKeyType(Some(kty.into()))),
                "kty {kty:?} must be rejected"
            );
        }
    }

    #[test]
    fn test_convert_rejects_missing_key_type() {
        let result = convert(&jwk(json!({"n": "AQID", "e": "AQAB"})));
        assert_eq!(result, Err(ConversionError::UnsupportedKeyType(None)));

        let result = convert(&jwk(json!({"kty": null, "n": "AQID", "e": "AQAB"})));
        assert_eq!(result, Err(ConversionError::UnsupportedKeyType(None)));
    }

    #[test]
    fn test_convert_is_idempotent() {
        let jwk = jwk(json!({"kty": "RSA", "n": "AQID", "e": "AAEAAQ"}));
        assert_eq!(convert(&jwk).unwrap(), convert(&jwk).unwrap());
    }

    #[test]
    fn test_key_type_display() {
        assert_eq!(KeyType::Rsa.to_string(), "RSA");
        assert_eq!("RSA".parse::<KeyType>(), Ok(KeyType::Rsa));
    }
}
