//! Platform-specific implementations (macOS Keychain)
//!
//! All platform-specific code is isolated here. The router and models never
//! import from this module; they see only the `CredentialStore` trait.

pub mod keychain;

pub use keychain::MacosKeychainStore;
