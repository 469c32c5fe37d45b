//! RSA public key material (`kty` = `"RSA"`)

use crate::error::ConversionError;
use crate::jwks::Jwk;
use crate::limits::{MAX_DECODED_JWK_N, MAX_JWK_N_SIZE};
use crate::utils::{base64url, der::rsa_spki_from_n_e};
use ::rsa::BigUint;

/// The only public exponent accepted: F4 = 2^16 + 1
pub const RSA_PUBLIC_EXPONENT: u32 = 65_537;

/// Encodings of 65537 published by providers, with and without a leading
/// zero byte. Compared literally; no other exponent is decoded.
const ACCEPTED_EXPONENTS: [&str; 2] = ["AQAB", "AAEAAQ"];

/// RSA public key: modulus `n` and exponent `e`
///
/// The exponent is always [`RSA_PUBLIC_EXPONENT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKeyMaterial {
    modulus: BigUint,
    exponent: u32,
}

impl RsaPublicKeyMaterial {
    pub(crate) fn from_jwk(jwk: &Jwk) -> Result<Self, ConversionError> {
        let n = jwk.n().ok_or(ConversionError::MissingField("n"))?;

        // Validate Base64URL-encoded size before decoding
        if n.len() > MAX_JWK_N_SIZE {
            return Err(ConversionError::FieldTooLarge {
                field: "n",
                size: n.len(),
                max: MAX_JWK_N_SIZE,
            });
        }

        let n_bytes = base64url::decode_bytes("n", n, MAX_DECODED_JWK_N)?;
        // Also covers an empty `n` and all-zero encodings such as "AA"
        let modulus = BigUint::from_bytes_be(&n_bytes);
        if modulus.bits() == 0 {
            return Err(ConversionError::InvalidEncoding {
                field: "n",
                reason: "zero modulus".into(),
            });
        }

        match jwk.e() {
            Some(e) if ACCEPTED_EXPONENTS.contains(&e) => {}
            _ => return Err(ConversionError::UnsupportedExponent),
        }

        Ok(Self {
            modulus,
            exponent: RSA_PUBLIC_EXPONENT,
        })
    }

    /// Modulus `n` as an unsigned integer
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Big-endian magnitude of `n` without leading zero bytes
    pub fn modulus_bytes(&self) -> Vec<u8> {
        self.modulus.to_bytes_be()
    }

    /// DER-encoded SubjectPublicKeyInfo (rsaEncryption)
    pub fn to_der(&self) -> Result<Vec<u8>, ConversionError> {
        rsa_spki_from_n_e(&self.modulus_bytes(), &self.exponent.to_be_bytes())
    }

    /// Build an [`rsa::RsaPublicKey`](::rsa::RsaPublicKey)
    ///
    /// # Errors
    ///
    /// [`ConversionError::InvalidKey`] when the `rsa` crate rejects the
    /// modulus (for instance one over 4096 bits).
    pub fn to_rsa_public_key(&self) -> Result<::rsa::RsaPublicKey, ConversionError> {
        ::rsa::RsaPublicKey::new(self.modulus.clone(), BigUint::from(self.exponent))
            .map_err(|e| ConversionError::InvalidKey(e.to_string()))
    }
}

impl TryFrom<&RsaPublicKeyMaterial> for ::rsa::RsaPublicKey {
    type Error = ConversionError;

    fn try_from(key: &RsaPublicKeyMaterial) -> Result<Self, Self::Error> {
        key.to_rsa_public_key()
    }
}
