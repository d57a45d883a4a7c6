//! Core business logic (platform-agnostic)
//!
//! CRITICAL: This module MUST NOT import platform-specific code or UI frameworks.

pub mod credential;
pub mod router;

// Test utilities for a deterministic in-memory store (tests only)
#[cfg(test)]
pub mod mock_store;

pub use credential::CredentialStore;
pub use router::{route, MethodCall, Response};
