//! DER encoding of RSA public keys as SubjectPublicKeyInfo
//!
//! Uses the RustCrypto `spki` and `der` crates for standards-compliant
//! DER encoding.

use crate::error::ConversionError;
use der::{Encode, Sequence, asn1::UintRef};
use spki::{AlgorithmIdentifierOwned, ObjectIdentifier, SubjectPublicKeyInfoOwned};

const RSA_ENCRYPTION_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

fn der_error(operation: &str, details: impl std::fmt::Display) -> ConversionError {
    ConversionError::InvalidKey(format!("{operation}: {details}"))
}

/// RSAPublicKey as defined in RFC 8017 §A.1.1:
///
/// ```text
/// RSAPublicKey ::= SEQUENCE {
///     modulus           INTEGER,  -- n
///     publicExponent    INTEGER   -- e
/// }
/// ```
#[derive(Sequence)]
struct RsaPublicKey<'a> {
    modulus: UintRef<'a>,
    public_exponent: UintRef<'a>,
}

/// Build a DER-encoded SubjectPublicKeyInfo from big-endian `n` and `e`
pub(crate) fn rsa_spki_from_n_e(n: &[u8], e: &[u8]) -> Result<Vec<u8>, ConversionError> {
    use der::asn1::BitString;

    if n.is_empty() || e.is_empty() {
        return Err(der_error("rsa key missing n or e", "empty integer"));
    }

    // UintRef adds the leading zero byte INTEGER needs for a set high bit
    let rsa_pubkey = RsaPublicKey {
        modulus: UintRef::new(n).map_err(|e| der_error("failed to encode RSA modulus", e))?,
        public_exponent: UintRef::new(e)
            .map_err(|e| der_error("failed to encode RSA exponent", e))?,
    };

    let rsa_pubkey_der = rsa_pubkey
        .to_der()
        .map_err(|e| der_error("failed to encode RSA public key", e))?;

    let algorithm = AlgorithmIdentifierOwned {
        oid: RSA_ENCRYPTION_OID,
        parameters: Some(der::asn1::AnyRef::NULL.into()),
    };

    let subject_public_key = BitString::new(0, rsa_pubkey_der)
        .map_err(|e| der_error("failed to create bit string", e))?;

    SubjectPublicKeyInfoOwned {
        algorithm,
        subject_public_key,
    }
    .to_der()
    .map_err(|e| der_error("failed to encode SPKI", e))
}
