//! Submission listing handlers
//!
//! Mounted behind the admin gate; see [`crate::middleware::auth`].

use axum::{Json, Router, extract::State, routing::get};
use tracing::info;

use crate::{
    error::AppResult, middleware::auth::AuthenticatedUser, models::Submission, state::AppState,
};

/// Every stored submission, unfiltered
pub async fn list_submissions(
    State(state): State<AppState>,
    AuthenticatedUser(admin): AuthenticatedUser,
) -> AppResult<Json<Vec<Submission>>> {
    let submissions = state.submissions().find_all().await?;

    info!(admin = %admin.username, count = submissions.len(), "Listed all submissions");

    Ok(Json(submissions))
}

/// Submission routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(list_submissions))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use mockall::predicate::eq;
    use tower::ServiceExt;

    use super::*;
    use crate::{
        clients::MockUsersClient,
        constants::AUTHORIZATION_HEADER,
        db::repositories::MockSubmissionRepository,
        handlers::{
            self,
            test_support::{json_body, submission, user},
        },
        models::Role,
    };

    const DUMMY_TOKEN: &str = "Bearer 123j12n31lkmdp012j21d";

    fn app(store: MockSubmissionRepository, users: MockUsersClient) -> axum::Router {
        let state = AppState::new(Arc::new(store), Arc::new(users));
        handlers::routes(state.clone()).with_state(state)
    }

    fn untouched_store() -> MockSubmissionRepository {
        let mut store = MockSubmissionRepository::new();
        store.expect_find_all().never();
        store
    }

    fn directory_resolving(resolved: Option<crate::models::User>) -> MockUsersClient {
        let mut users = MockUsersClient::new();
        users
            .expect_find_user()
            .with(eq(DUMMY_TOKEN))
            .returning(move |_| Ok(resolved.clone()));
        users
    }

    fn request(token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/submissions");
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION_HEADER, token);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_returns_401_if_user_is_not_authorized() {
        let mut users = MockUsersClient::new();
        users.expect_find_user().never();

        let response = app(untouched_store(), users)
            .oneshot(request(None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_returns_401_if_user_is_not_admin() {
        let users = directory_resolving(Some(user("", Role::User, "")));

        let response = app(untouched_store(), users)
            .oneshot(request(Some(DUMMY_TOKEN)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_returns_401_when_user_is_unidentified() {
        let users = directory_resolving(None);

        let response = app(untouched_store(), users)
            .oneshot(request(Some(DUMMY_TOKEN)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_returns_200_and_all_submissions_to_admin() {
        let users = directory_resolving(Some(user("", Role::Admin, "")));
        let mut store = MockSubmissionRepository::new();
        store.expect_find_all().times(1).returning(|| {
            Ok(vec![
                submission("fib", 1, 0.5, "mikołaj"),
                submission("fib", 1, 0.5, "julia"),
                submission("fib", 1, 0.5, "madzia"),
            ])
        });

        let response = app(store, users)
            .oneshot(request(Some(DUMMY_TOKEN)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let submissions: Vec<serde_json::Value> = json_body(response).await;
        assert_eq!(submissions.len(), 3);
        assert_eq!(submissions[2]["userId"], "madzia");
        assert_eq!(submissions[0]["statusCode"], "ACCEPTED");
    }
}
