//! Platform-agnostic credential storage trait

use crate::models::{AccountId, SecureString, StoreStatus};
use crate::utils::CredentialError;
use async_trait::async_trait;

/// Platform-agnostic access to the secure credential store
///
/// Implementations wrap platform-specific secure storage (macOS Keychain,
/// Windows Credential Manager, Linux Secret Service, etc.). Each method
/// performs exactly one storage operation, synchronously from the caller's
/// point of view, and reports the platform's raw status rather than
/// interpreting it — classification is the router's job.
///
/// # Errors
///
/// `Err(CredentialError)` is reserved for failures outside the status
/// channel (store handle unavailable, undecodable stored data). A status the
/// store reports — including not-found, duplicate, and user-canceled — comes
/// back as `Ok(status)`.
///
/// # Security
/// - Credentials MUST be stored via OS-provided secure storage
/// - Implementations MUST NOT log password values
/// - No caching: no copy of a password outlives the call that touched it
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Replace the password for `account`, creating the record if absent
    async fn upsert(
        &self,
        account: &AccountId,
        password: &SecureString,
    ) -> Result<StoreStatus, CredentialError>;

    /// Create a new record for `account`
    ///
    /// An existing record yields the platform's duplicate status, passed
    /// through unmodified — never swallowed into a success.
    async fn create(
        &self,
        account: &AccountId,
        password: &SecureString,
    ) -> Result<StoreStatus, CredentialError>;

    /// Look up the record for `account`
    ///
    /// Returns the status plus the password when present. An ok status with
    /// no value is representable and must be tolerated by callers.
    async fn read(
        &self,
        account: &AccountId,
    ) -> Result<(StoreStatus, Option<SecureString>), CredentialError>;

    /// Update the password for an existing record
    ///
    /// A missing record yields the platform's not-found status; nothing is
    /// written in that case.
    async fn update(
        &self,
        account: &AccountId,
        password: &SecureString,
    ) -> Result<StoreStatus, CredentialError>;

    /// Remove the record for `account` if present
    ///
    /// A missing record yields the not-found status; the router decides
    /// whether that is a benign outcome.
    async fn delete(&self, account: &AccountId) -> Result<StoreStatus, CredentialError>;
}
