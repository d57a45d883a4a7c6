//! Mock credential store for testing without platform secure storage
//!
//! Provides deterministic in-memory semantics matching the real keychain
//! backend, plus hooks for scripting the next reported status and counting
//! store accesses.

use super::credential::CredentialStore;
use crate::models::{AccountId, SecureString, StoreStatus};
use crate::utils::CredentialError;
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory credential store for tests
///
/// Default behavior mirrors the platform store: upsert always succeeds,
/// create reports duplicate for an existing record, read/update/delete
/// report not-found for a missing one. A scripted status, when queued,
/// replaces the next operation's natural status without touching records
/// (so user-cancel and exotic failures can be simulated).
pub struct MockCredentialStore {
    records: Mutex<HashMap<String, String>>,
    scripted: Mutex<VecDeque<StoreStatus>>,
    fail_next: Mutex<Option<String>>,
    calls: AtomicUsize,
}

impl MockCredentialStore {
    /// Create an empty mock store
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            scripted: Mutex::new(VecDeque::new()),
            fail_next: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock store pre-seeded with one record
    pub fn with_record(account: &str, password: &str) -> Self {
        let store = Self::new();
        store
            .records
            .lock()
            .unwrap()
            .insert(account.to_string(), password.to_string());
        store
    }

    /// Force the next operation to report `status` instead of its natural one
    pub fn script_status(&self, status: StoreStatus) {
        self.scripted.lock().unwrap().push_back(status);
    }

    /// Force the next operation to fail outside the status channel
    pub fn fail_next(&self, message: &str) {
        *self.fail_next.lock().unwrap() = Some(message.to_string());
    }

    /// Number of store operations performed so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Record the access and pop any pending scripted outcome
    fn begin_call(&self) -> Result<Option<StoreStatus>, CredentialError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self.fail_next.lock().unwrap().take() {
            return Err(CredentialError::Platform(message));
        }
        Ok(self.scripted.lock().unwrap().pop_front())
    }
}

impl Default for MockCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for MockCredentialStore {
    async fn upsert(
        &self,
        account: &AccountId,
        password: &SecureString,
    ) -> Result<StoreStatus, CredentialError> {
        if let Some(status) = self.begin_call()? {
            return Ok(status);
        }
        self.records
            .lock()
            .unwrap()
            .insert(account.as_str().to_string(), password.as_str().to_string());
        Ok(StoreStatus::OK)
    }

    async fn create(
        &self,
        account: &AccountId,
        password: &SecureString,
    ) -> Result<StoreStatus, CredentialError> {
        if let Some(status) = self.begin_call()? {
            return Ok(status);
        }
        let mut records = self.records.lock().unwrap();
        if records.contains_key(account.as_str()) {
            return Ok(StoreStatus::DUPLICATE_ITEM);
        }
        records.insert(account.as_str().to_string(), password.as_str().to_string());
        Ok(StoreStatus::OK)
    }

    async fn read(
        &self,
        account: &AccountId,
    ) -> Result<(StoreStatus, Option<SecureString>), CredentialError> {
        if let Some(status) = self.begin_call()? {
            // Scripted reads never carry a value, covering the
            // ok-with-no-payload case the router must tolerate.
            return Ok((status, None));
        }
        match self.records.lock().unwrap().get(account.as_str()) {
            Some(password) => Ok((StoreStatus::OK, Some(SecureString::new(password.clone())))),
            None => Ok((StoreStatus::ITEM_NOT_FOUND, None)),
        }
    }

    async fn update(
        &self,
        account: &AccountId,
        password: &SecureString,
    ) -> Result<StoreStatus, CredentialError> {
        if let Some(status) = self.begin_call()? {
            return Ok(status);
        }
        let mut records = self.records.lock().unwrap();
        match records.get_mut(account.as_str()) {
            Some(existing) => {
                *existing = password.as_str().to_string();
                Ok(StoreStatus::OK)
            }
            None => Ok(StoreStatus::ITEM_NOT_FOUND),
        }
    }

    async fn delete(&self, account: &AccountId) -> Result<StoreStatus, CredentialError> {
        if let Some(status) = self.begin_call()? {
            return Ok(status);
        }
        match self.records.lock().unwrap().remove(account.as_str()) {
            Some(_) => Ok(StoreStatus::OK),
            None => Ok(StoreStatus::ITEM_NOT_FOUND),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(name: &str) -> AccountId {
        AccountId::new(name).unwrap()
    }

    #[tokio::test]
    async fn test_mock_create_reports_duplicate() {
        let store = MockCredentialStore::new();
        let status = store
            .create(&account("alice"), &SecureString::new("pw"))
            .await
            .unwrap();
        assert_eq!(status, StoreStatus::OK);

        let status = store
            .create(&account("alice"), &SecureString::new("other"))
            .await
            .unwrap();
        assert_eq!(status, StoreStatus::DUPLICATE_ITEM);
    }

    #[tokio::test]
    async fn test_mock_counts_calls() {
        let store = MockCredentialStore::new();
        assert_eq!(store.call_count(), 0);
        let _ = store.read(&account("alice")).await.unwrap();
        let _ = store.delete(&account("alice")).await.unwrap();
        assert_eq!(store.call_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_scripted_status_preserves_records() {
        let store = MockCredentialStore::with_record("alice", "pw");
        store.script_status(StoreStatus::USER_CANCELED);
        let status = store
            .update(&account("alice"), &SecureString::new("new"))
            .await
            .unwrap();
        assert_eq!(status, StoreStatus::USER_CANCELED);

        let (status, value) = store.read(&account("alice")).await.unwrap();
        assert_eq!(status, StoreStatus::OK);
        assert_eq!(value.unwrap().as_str(), "pw");
    }
}
