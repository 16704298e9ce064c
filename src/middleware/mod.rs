//! HTTP middleware

pub mod auth;
pub mod logging;

pub use auth::{AuthenticatedUser, admin_middleware};
pub use logging::logging_middleware;
