//! # Domain Models
//!
//! Core data structures representing account identifiers, secure strings, and
//! platform status codes.
//!
//! ## Security Design
//!
//! The [`SecureString`] type provides memory-safe credential handling:
//! - Password data is zeroed on drop to prevent leakage via swap/core dumps
//! - Never exposed in `Debug` or `Display` implementations
//! - Uses unsafe code (carefully audited) for memory zeroing
//!
//! Credential records are owned entirely by the platform secure store; this
//! code holds no copy of a password beyond the lifetime of a single call.
//!
//! ## Status Codes
//!
//! [`StoreStatus`] wraps the opaque integer status the platform store reports
//! for each operation. Only the four statuses this bridge interprets (ok,
//! not-found, user-canceled, duplicate) have named constants; everything else
//! is surfaced raw inside a structured error.

pub mod credentials;

pub use credentials::{AccountId, SecureString, StoreStatus};
