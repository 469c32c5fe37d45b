//! Size limit constants for input validation

/// Maximum length for JWKS URIs (2048 characters)
pub(crate) const MAX_JWKS_URI_LENGTH: usize = 2048;

/// Maximum size for a JWKS document (512KB)
pub(crate) const MAX_JWKS_DOCUMENT_SIZE: usize = 512 * 1024;

/// Maximum number of keys in a JWK set (100 keys)
pub(crate) const MAX_JWK_SET_SIZE: usize = 100;

// ============================================================================
// JWK field size limits
// ============================================================================

/// Maximum size for Base64URL-encoded RSA modulus (n) field (12KB)
/// 8192-byte modulus (65536 bits) encodes to ~10.9KB Base64URL
pub(crate) const MAX_JWK_N_SIZE: usize = 12 * 1024;

/// Decoded counterpart of [`MAX_JWK_N_SIZE`]: 4 chars → 3 bytes
pub(crate) const MAX_DECODED_JWK_N: usize = (MAX_JWK_N_SIZE * 3) / 4;
