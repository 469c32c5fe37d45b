//! Base64URL decoding per RFC 4648 §5, without padding
//!
//! This module provides a thin wrapper around the `base64` crate with
//! size limit validation for security.

use crate::error::ConversionError;
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

/// Decode a Base64URL JWK field to bytes with maximum decoded size limit
///
/// Padding characters are rejected, as are non-zero trailing bits.
pub(crate) fn decode_bytes(
    field: &'static str,
    input: &str,
    max_size: usize,
) -> Result<Vec<u8>, ConversionError> {
    let result = URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|e| ConversionError::InvalidEncoding {
            field,
            reason: e.to_string(),
        })?;

    // Validate decoded size to prevent DoS attacks
    if result.len() > max_size {
        return Err(ConversionError::FieldTooLarge {
            field,
            size: result.len(),
            max: max_size,
        });
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_invalid() {
        assert!(decode_bytes("n", "!!!", 1000).is_err());
        // Standard base64 with padding must fail for URL_SAFE_NO_PAD
        assert!(matches!(
            decode_bytes("n", "SGVsbG8=", 1000),
            Err(ConversionError::InvalidEncoding { field: "n", .. })
        ));
        // Standard alphabet characters are not part of the URL-safe alphabet
        assert!(decode_bytes("n", "ab+/", 1000).is_err());
    }

    #[test]
    fn test_decode_valid() {
        let result = decode_bytes("n", "SGVsbG8", 1000).unwrap();
        assert_eq!(result, b"Hello");

        let result = decode_bytes("n", "_-8", 1000).unwrap();
        assert_eq!(result, [0xff, 0xef]);
    }

    #[test]
    fn test_decode_with_limit() {
        let result = decode_bytes("n", "SGVsbG8", 10).unwrap();
        assert_eq!(result, b"Hello");

        assert!(matches!(
            decode_bytes("n", "SGVsbG8", 3),
            Err(ConversionError::FieldTooLarge {
                field: "n",
                size: 5,
                max: 3
            })
        ));
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode_bytes("n", "", 1000).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_error_does_not_echo_input() {
        let err = decode_bytes("n", "not-valid-base64!!", 1000).unwrap_err();
        assert!(!err.to_string().contains("not-valid-base64"));
    }
}
