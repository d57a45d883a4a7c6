//! Error types for keychain-bridge
//!
//! All error types use thiserror for clean error handling.
//! SECURITY: Error messages MUST NOT contain passwords or sensitive data.

/// Errors from credential storage operations
///
/// Platform status codes are NOT errors at this layer; they travel through
/// [`crate::models::StoreStatus`]. This type covers failures outside the
/// status channel: an unusable store handle, undecodable stored data, or a
/// malformed account identifier.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("Invalid account identifier: {0}")]
    InvalidAccount(String),

    #[error("Stored credential is not valid UTF-8")]
    InvalidFormat,

    #[error("Secure store error: {0}")]
    Platform(String),
}
