//! macOS Keychain implementation
//!
//! All records are generic passwords under a fixed service name in the
//! default keychain. Every status the Security framework reports (including
//! not-found, duplicate, and user-canceled) is passed through as a
//! [`StoreStatus`]; only an unusable keychain handle or undecodable stored
//! data become Rust errors.

use crate::constants::SERVICE_NAME;
use crate::core::CredentialStore;
use crate::models::{AccountId, SecureString, StoreStatus};
use crate::utils::CredentialError;
use async_trait::async_trait;
use security_framework::base::Error as SecError;
use security_framework::os::macos::keychain::SecKeychain;

/// macOS Keychain implementation
///
/// Uses the Security framework's generic-password APIs on the default
/// keychain, encrypted at rest by the OS.
///
/// # Security
/// - Credentials encrypted at rest by the Keychain
/// - Access tied to the user session / keychain unlock state
/// - Credentials never logged or exposed
pub struct MacosKeychainStore;

impl MacosKeychainStore {
    /// Create a new keychain store instance
    pub fn new() -> Self {
        MacosKeychainStore
    }

    fn open() -> Result<SecKeychain, CredentialError> {
        SecKeychain::default()
            .map_err(|e| CredentialError::Platform(format!("Failed to open default keychain: {}", e)))
    }

    fn status_of(e: &SecError) -> StoreStatus {
        StoreStatus::from_code(e.code())
    }
}

impl Default for MacosKeychainStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for MacosKeychainStore {
    async fn upsert(
        &self,
        account: &AccountId,
        password: &SecureString,
    ) -> Result<StoreStatus, CredentialError> {
        // Delegate to synchronous implementation (Security framework APIs are synchronous)
        self.upsert_sync(account, password)
    }

    async fn create(
        &self,
        account: &AccountId,
        password: &SecureString,
    ) -> Result<StoreStatus, CredentialError> {
        self.create_sync(account, password)
    }

    async fn read(
        &self,
        account: &AccountId,
    ) -> Result<(StoreStatus, Option<SecureString>), CredentialError> {
        self.read_sync(account)
    }

    async fn update(
        &self,
        account: &AccountId,
        password: &SecureString,
    ) -> Result<StoreStatus, CredentialError> {
        self.update_sync(account, password)
    }

    async fn delete(&self, account: &AccountId) -> Result<StoreStatus, CredentialError> {
        self.delete_sync(account)
    }
}

impl MacosKeychainStore {
    /// Synchronous upsert implementation
    ///
    /// `set_generic_password` is the Keychain's native replace-or-create.
    fn upsert_sync(
        &self,
        account: &AccountId,
        password: &SecureString,
    ) -> Result<StoreStatus, CredentialError> {
        let keychain = Self::open()?;
        match keychain.set_generic_password(
            SERVICE_NAME,
            account.as_str(),
            password.as_str().as_bytes(),
        ) {
            Ok(()) => Ok(StoreStatus::OK),
            Err(e) => Ok(Self::status_of(&e)),
        }
    }

    /// Synchronous create implementation
    ///
    /// Add-only: an existing record reports the duplicate status and is left
    /// untouched.
    fn create_sync(
        &self,
        account: &AccountId,
        password: &SecureString,
    ) -> Result<StoreStatus, CredentialError> {
        let keychain = Self::open()?;
        match keychain.find_generic_password(SERVICE_NAME, account.as_str()) {
            Ok(_) => Ok(StoreStatus::DUPLICATE_ITEM),
            Err(e) if Self::status_of(&e) == StoreStatus::ITEM_NOT_FOUND => {
                match keychain.set_generic_password(
                    SERVICE_NAME,
                    account.as_str(),
                    password.as_str().as_bytes(),
                ) {
                    Ok(()) => Ok(StoreStatus::OK),
                    Err(e) => Ok(Self::status_of(&e)),
                }
            }
            Err(e) => Ok(Self::status_of(&e)),
        }
    }

    /// Synchronous read implementation
    fn read_sync(
        &self,
        account: &AccountId,
    ) -> Result<(StoreStatus, Option<SecureString>), CredentialError> {
        let keychain = Self::open()?;
        match keychain.find_generic_password(SERVICE_NAME, account.as_str()) {
            Ok((password, _item)) => {
                let value = String::from_utf8(password.to_vec())
                    .map_err(|_| CredentialError::InvalidFormat)?;
                Ok((StoreStatus::OK, Some(SecureString::new(value))))
            }
            Err(e) => Ok((Self::status_of(&e), None)),
        }
    }

    /// Synchronous update implementation
    ///
    /// Update-only: a missing record reports not-found without writing.
    fn update_sync(
        &self,
        account: &AccountId,
        password: &SecureString,
    ) -> Result<StoreStatus, CredentialError> {
        let keychain = Self::open()?;
        match keychain.find_generic_password(SERVICE_NAME, account.as_str()) {
            Ok(_) => match keychain.set_generic_password(
                SERVICE_NAME,
                account.as_str(),
                password.as_str().as_bytes(),
            ) {
                Ok(()) => Ok(StoreStatus::OK),
                Err(e) => Ok(Self::status_of(&e)),
            },
            Err(e) => Ok(Self::status_of(&e)),
        }
    }

    /// Synchronous delete implementation
    fn delete_sync(&self, account: &AccountId) -> Result<StoreStatus, CredentialError> {
        let keychain = Self::open()?;
        match keychain.find_generic_password(SERVICE_NAME, account.as_str()) {
            Ok((_password, item)) => {
                item.delete();
                Ok(StoreStatus::OK)
            }
            Err(e) => Ok(Self::status_of(&e)),
        }
    }
}
