//! # Application-Wide Constants
//!
//! Centralized configuration values used throughout keychain-bridge.
//!
//! ## Design Rationale
//!
//! Constants are defined here (rather than scattered across modules) to:
//! - Make configuration changes easier (single source of truth)
//! - Improve discoverability (grep for constant name finds definition + all uses)
//! - Enable environment-based overrides in the future

/// Service name under which all credential records are filed in the platform
/// secure store
///
/// Every record this bridge touches is a generic password scoped to this
/// service; the account identifier distinguishes records within it.
pub const SERVICE_NAME: &str = "keychain_bridge";

/// Maximum accepted length for an account identifier (bytes)
///
/// **Rationale**: the platform store imposes no documented limit, but an
/// unbounded key invites abuse from a misbehaving caller. 512 bytes is far
/// above any realistic username or UPN.
pub const MAX_ACCOUNT_ID_BYTES: usize = 512;

// ============================================================================
// Logging
// ============================================================================

/// Environment variable that enables file logging in release builds
pub const ENV_ENABLE_LOGGING: &str = "KB_ENABLE_LOGGING";

/// Environment variable that enables verbose debug logging
pub const ENV_LOG_VERBOSE: &str = "KB_LOG_VERBOSE";

/// Maximum log file size before rotation (bytes)
pub const MAX_LOG_BYTES: u64 = 10 * 1024 * 1024; // 10 MB
