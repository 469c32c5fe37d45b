//! Errors for jwks-convert
//!
//! Every failure kind is its own enum so callers can tell a structural
//! problem with the document apart from a missing key or a rejected key
//! record. None of the messages carry decoded key bytes.

use thiserror::Error;

/// The JWKS document could not be turned into a [`JwkSet`](crate::JwkSet)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed JWKS document: {0}")]
    Malformed(String),

    #[error("JWKS document too large: {size} {unit} (maximum: {max})")]
    TooLarge {
        size: usize,
        max: usize,
        unit: &'static str,
    },
}

/// Looking up a key by `kid` failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid JWK set: missing \"keys\" array")]
    InvalidSet,

    #[error("Key with id '{kid}' not found")]
    NotFound { kid: String },
}

/// A JWK entry failed validation while being converted into key material
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Unsupported key type: {}", .0.as_deref().unwrap_or("<missing>"))]
    UnsupportedKeyType(Option<String>),

    #[error("Missing or non-string JWK field '{0}'")]
    MissingField(&'static str),

    #[error("Invalid Base64URL encoding in JWK field '{field}': {reason}")]
    InvalidEncoding { field: &'static str, reason: String },

    #[error("JWK field '{field}' too large: {size} bytes (maximum: {max} bytes)")]
    FieldTooLarge {
        field: &'static str,
        size: usize,
        max: usize,
    },

    #[error("Unsupported RSA exponent: only 65537 (AQAB) is accepted")]
    UnsupportedExponent,

    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

/// Failures reported by an [`HttpClient`](crate::remote::HttpClient)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("network: {0}")]
    Network(String),

    #[error("http: status {0}")]
    Status(u16),
}

/// jwks-convert Errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============================================================================
    // Caller Errors
    // ============================================================================
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ============================================================================
    // Document Errors
    // ============================================================================
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    // ============================================================================
    // Remote Errors
    // ============================================================================
    #[error("Fetching JWKS failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Remote response too large: {size} bytes (maximum: {max} bytes)")]
    ResponseTooLarge { size: usize, max: usize },
}

/// Result type alias for jwks-convert operations
pub type Result<T> = std::result::Result<T, Error>;
