//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod health;
pub mod ranking;
pub mod submissions;

use axum::{Router, middleware};

use crate::{error::AppError, middleware::auth::admin_middleware, state::AppState};

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/ranking", ranking::routes())
        .nest(
            "/submissions",
            submissions::routes()
                .route_layer(middleware::from_fn_with_state(state, admin_middleware)),
        )
        .fallback(not_found)
}

async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
