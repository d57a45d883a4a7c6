//! Domain model types for keychain-bridge
//!
//! SECURITY: Credential types implement Drop to clear sensitive data.

use crate::constants::MAX_ACCOUNT_ID_BYTES;
use crate::utils::CredentialError;
use std::fmt;

/// Opaque identifier naming a stored credential record
///
/// Analogous to a username or account key. Uniqueness is enforced by the
/// underlying platform store, not by this code.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AccountId(String);

impl AccountId {
    /// Create a new account identifier after validation
    pub fn new(account: impl Into<String>) -> Result<Self, CredentialError> {
        let account = account.into();

        if account.is_empty() {
            return Err(CredentialError::InvalidAccount(
                "Account identifier cannot be empty".to_string(),
            ));
        }

        if account.len() > MAX_ACCOUNT_ID_BYTES {
            return Err(CredentialError::InvalidAccount(format!(
                "Account identifier exceeds maximum length ({})",
                MAX_ACCOUNT_ID_BYTES
            )));
        }

        Ok(AccountId(account))
    }

    /// Get the account identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for AccountId {
    type Error = CredentialError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        AccountId::new(value)
    }
}

impl TryFrom<&str> for AccountId {
    type Error = CredentialError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        AccountId::new(value)
    }
}

/// Password that zeros memory on drop
///
/// SECURITY: This type never implements Display or Debug in a way that reveals the password.
pub struct SecureString(String);

impl Clone for SecureString {
    fn clone(&self) -> Self {
        SecureString(self.0.clone())
    }
}

impl SecureString {
    /// Create a new secure string
    pub fn new(password: impl Into<String>) -> Self {
        SecureString(password.into())
    }

    /// Get the password as a string slice
    ///
    /// Use this sparingly and only when necessary for API calls.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the length of the password
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the password is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Drop for SecureString {
    fn drop(&mut self) {
        // Zero the memory
        // SAFETY: We own this String and are zeroing it before drop
        unsafe {
            let bytes = self.0.as_bytes_mut();
            for byte in bytes {
                std::ptr::write_volatile(byte, 0);
            }
        }
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // SECURITY: Never reveal the password content
        write!(f, "SecureString(*** {} bytes ***)", self.0.len())
    }
}

impl PartialEq for SecureString {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for SecureString {}

/// Result code reported by the platform secure store for a single operation
///
/// The status is an opaque integer owned by an external system. Named
/// constants exist only for the values this layer actually interprets;
/// every other value falls through to the catch-all error classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoreStatus(i32);

impl StoreStatus {
    /// Operation completed (errSecSuccess)
    pub const OK: StoreStatus = StoreStatus(0);

    /// No record exists for the account (errSecItemNotFound)
    pub const ITEM_NOT_FOUND: StoreStatus = StoreStatus(-25300);

    /// Interactive authorization was declined by the user (errSecUserCanceled)
    pub const USER_CANCELED: StoreStatus = StoreStatus(-128);

    /// A record already exists for the account (errSecDuplicateItem)
    pub const DUPLICATE_ITEM: StoreStatus = StoreStatus(-25299);

    /// Wrap a raw platform status code
    pub fn from_code(code: i32) -> Self {
        StoreStatus(code)
    }

    /// Get the raw platform status code
    pub fn code(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for StoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_validation() {
        assert!(AccountId::new("alice").is_ok());
        assert!(AccountId::new("alice@example.com").is_ok());
        assert!(AccountId::new("").is_err());
        assert!(AccountId::new("a".repeat(MAX_ACCOUNT_ID_BYTES + 1)).is_err());
    }

    #[test]
    fn test_secure_string_drops() {
        let password = SecureString::new("secret");
        assert_eq!(password.len(), 6);
        // Drop happens automatically here
    }

    #[test]
    fn test_secure_string_debug_no_leak() {
        let password = SecureString::new("secret123");
        let debug_output = format!("{:?}", password);
        assert!(!debug_output.contains("secret"));
        assert!(debug_output.contains("9 bytes"));
    }

    #[test]
    fn test_store_status_constants() {
        assert_eq!(StoreStatus::OK.code(), 0);
        assert_eq!(StoreStatus::ITEM_NOT_FOUND.code(), -25300);
        assert_eq!(StoreStatus::USER_CANCELED.code(), -128);
        assert_eq!(StoreStatus::DUPLICATE_ITEM.code(), -25299);
        assert_eq!(StoreStatus::from_code(0), StoreStatus::OK);
        assert_ne!(StoreStatus::from_code(-61), StoreStatus::OK);
    }

    #[test]
    fn test_store_status_display_is_raw_code() {
        assert_eq!(StoreStatus::ITEM_NOT_FOUND.to_string(), "-25300");
        assert_eq!(StoreStatus::from_code(-61).to_string(), "-61");
    }
}
