//! keychain-bridge - message-channel access to the platform credential store
//!
//! Core library exposing platform-agnostic types and the request router.

// Public modules
pub mod constants;
pub mod core;
pub mod logger;
pub mod models;
pub mod utils;

// Platform-specific modules
#[cfg(target_os = "macos")]
pub mod platform;

// Re-export commonly used types
pub use self::core::{route, CredentialStore, MethodCall, Response};
pub use models::{AccountId, SecureString, StoreStatus};
pub use utils::CredentialError;
