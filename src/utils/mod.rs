//! # Utilities Module
//!
//! Cross-cutting concerns shared across the crate.
//!
//! ## Modules
//!
//! - [`errors`]: Typed error hierarchy using `thiserror` for domain-specific errors
//!
//! ## Design Notes
//!
//! Error types are defined in this module to avoid circular dependencies
//! between the `core` and `platform` modules. Platform status codes are not
//! part of this hierarchy: a status the store reports is data that the router
//! classifies, while a [`CredentialError`] is a failure to talk to the store
//! at all.

pub mod errors;

pub use errors::CredentialError;
