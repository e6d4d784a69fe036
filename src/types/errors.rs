use std::fmt;

// === LinkError ===

/// Errors related to link store operations.
#[derive(Debug)]
pub enum LinkError {
    /// Link with the given ID was not found.
    NotFound(String),
    /// Database operation failed.
    DatabaseError(String),
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::NotFound(id) => write!(f, "Link not found: {}", id),
            LinkError::DatabaseError(msg) => write!(f, "Link database error: {}", msg),
        }
    }
}

impl std::error::Error for LinkError {}

// === ApiConfigError ===

/// Errors related to API provider configuration operations.
#[derive(Debug)]
pub enum ApiConfigError {
    /// Configuration with the given ID was not found.
    NotFound(String),
    /// The provided configuration is invalid.
    Validation(String),
    /// Database operation failed.
    DatabaseError(String),
    /// Encrypting or decrypting the stored API key failed.
    Crypto(String),
}

impl fmt::Display for ApiConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiConfigError::NotFound(id) => {
                write!(f, "API configuration not found: {}", id)
            }
            ApiConfigError::Validation(msg) => {
                write!(f, "Invalid API configuration: {}", msg)
            }
            ApiConfigError::DatabaseError(msg) => {
                write!(f, "API configuration database error: {}", msg)
            }
            ApiConfigError::Crypto(msg) => {
                write!(f, "API key crypto error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ApiConfigError {}

// === PreviewError ===

/// Errors raised while deriving preview metadata for a URL.
///
/// Never crosses the preview generator boundary: the public surface converts
/// any failure into the "Unknown Content" fallback record.
#[derive(Debug)]
pub enum PreviewError {
    /// The URL could not be parsed.
    InvalidUrl(String),
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewError::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
        }
    }
}

impl std::error::Error for PreviewError {}

// === CryptoError ===

/// Errors related to cryptographic operations.
#[derive(Debug)]
pub enum CryptoError {
    /// Failed to derive encryption key from passphrase.
    KeyDerivation(String),
    /// Encryption operation failed.
    Encryption(String),
    /// Decryption operation failed.
    Decryption(String),
    /// Failed to generate random bytes.
    RandomGeneration(String),
    /// The provided key is invalid.
    InvalidKey(String),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::KeyDerivation(msg) => write!(f, "Key derivation failed: {}", msg),
            CryptoError::Encryption(msg) => write!(f, "Encryption failed: {}", msg),
            CryptoError::Decryption(msg) => write!(f, "Decryption failed: {}", msg),
            CryptoError::RandomGeneration(msg) => {
                write!(f, "Random generation failed: {}", msg)
            }
            CryptoError::InvalidKey(msg) => write!(f, "Invalid key: {}", msg),
        }
    }
}

impl std::error::Error for CryptoError {}
