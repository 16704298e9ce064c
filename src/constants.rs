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

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// USER DIRECTORY DEFAULTS
// =============================================================================

/// Default base URL of the user directory service
pub const DEFAULT_USERS_SERVICE_URL: &str = "http://localhost:5001";

/// Default timeout for user directory calls in seconds
pub const DEFAULT_USERS_SERVICE_TIMEOUT_SECONDS: u64 = 5;

/// Header carrying the caller token, forwarded verbatim to the user directory
pub const AUTHORIZATION_HEADER: &str = "X-Authorization";

// =============================================================================
// SCORING
// =============================================================================

/// Points awarded per difficulty level of a solved problem
pub const SCORE_PER_LEVEL: f64 = 10.0;

/// Submission statuses
pub mod status {
    pub const ACCEPTED: &str = "ACCEPTED";
}

// =============================================================================
// USER ROLES
// =============================================================================

/// User roles
pub mod roles {
    pub const USER: &str = "USER";
    pub const ADMIN: &str = "ADMIN";
}
