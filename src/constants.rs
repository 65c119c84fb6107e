//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

/// How long a request waits for a pooled connection before the store gives up
pub const DATABASE_ACQUIRE_TIMEOUT_SECS: u64 = 5;

// =============================================================================
// AUTHENTICATION
// =============================================================================

/// Environment variable holding the shared API token
pub const TOKEN_ENV_VAR: &str = "REPROVA_TOKEN";

// =============================================================================
// API
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api";

/// Fixed response messages
pub mod messages {
    pub const OK: &str = "ok";
    pub const INVALID: &str = "invalid request";
    pub const UNAUTHORIZED: &str = "unauthorized";
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum question theme length
pub const MAX_THEME_LENGTH: u64 = 256;

/// Maximum question description length
pub const MAX_DESCRIPTION_LENGTH: u64 = 1024;

/// Maximum question statement length
pub const MAX_STATEMENT_LENGTH: u64 = 65535;
