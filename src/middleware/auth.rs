//! Admin gate middleware
//!
//! Callers are resolved through the user directory. A missing token, a token
//! the directory does not know, and a non-admin caller are all rejected as
//! `Unauthorized` before the handler runs.

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::{constants::AUTHORIZATION_HEADER, error::AppError, models::User, state::AppState};

/// Caller resolved by the admin gate
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Let the request through only for admins
pub async fn admin_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    let Some(token) = request
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
    else {
        debug!(path = %path, "Auth failed: No {} header", AUTHORIZATION_HEADER);
        return Err(AppError::Unauthorized);
    };

    let Some(user) = state.users().find_user(&token).await? else {
        debug!(path = %path, "Auth failed: Token not recognised by user directory");
        return Err(AppError::Unauthorized);
    };

    if !user.is_admin() {
        debug!(path = %path, username = %user.username, role = %user.role, "Auth failed: Admin role required");
        return Err(AppError::Unauthorized);
    }

    debug!(path = %path, username = %user.username, "Admin authenticated successfully");

    request.extensions_mut().insert(AuthenticatedUser(user));
    Ok(next.run(request).await)
}
