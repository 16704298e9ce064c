//! Leaderboard handlers
//!
//! Both endpoints rank the full roster of the user directory, in the order
//! the directory returns it.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    error::AppResult,
    models::{ProblemRankEntry, RankEntry},
    state::AppState,
};

/// Global leaderboard
pub async fn get_ranking(State(state): State<AppState>) -> AppResult<Json<Vec<RankEntry>>> {
    let users = state.users().find_all().await?;
    let ranking = state.ranking().ranking(&users).await?;

    Ok(Json(ranking))
}

/// Leaderboard for a single problem
pub async fn get_problem_ranking(
    State(state): State<AppState>,
    Path(problem_id): Path<String>,
) -> AppResult<Json<Vec<ProblemRankEntry>>> {
    let users = state.users().find_all().await?;
    let ranking = state.ranking().problem_ranking(&problem_id, &users).await?;

    Ok(Json(ranking))
}

/// Ranking routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_ranking))
        .route("/{problem_id}", get(get_problem_ranking))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::{
        clients::MockUsersClient,
        db::repositories::{InMemorySubmissionRepository, MockSubmissionRepository},
        error::AppError,
        handlers::{
            self,
            test_support::{json_body, submission, user},
        },
        models::Role,
        ranking::MockRankingCalculator,
    };

    fn directory() -> MockUsersClient {
        let mut users = MockUsersClient::new();
        users.expect_find_all().returning(|| {
            Ok(vec![
                user("mikołaj", Role::User, "0-0"),
                user("julia", Role::User, "0-1"),
            ])
        });
        users
    }

    fn app(state: AppState) -> axum::Router {
        handlers::routes(state.clone()).with_state(state)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_ranking_returns_roster_by_score() {
        let store = InMemorySubmissionRepository::new(vec![
            submission("fib", 1, 0.01, "0-0"),
            submission("word-ladder", 3, 0.2, "0-1"),
        ]);
        let state = AppState::new(Arc::new(store), Arc::new(directory()));

        let response = app(state).oneshot(get("/ranking")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let ranking: Vec<RankEntry> = json_body(response).await;
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].hacker, "julia");
        assert_eq!(ranking[0].score, 30.0);
        assert_eq!(ranking[0].solved_problems, vec!["word-ladder"]);
        assert_eq!(ranking[1].hacker, "mikołaj");
        assert_eq!(ranking[1].score, 10.0);
    }

    #[tokio::test]
    async fn test_problem_ranking_returns_fastest_first() {
        let store = InMemorySubmissionRepository::new(vec![
            submission("fib", 1, 0.01, "0-0"),
            submission("fib", 1, 0.0001, "0-1"),
            submission("2-sum", 2, 0.00001, "0-0"),
        ]);
        let state = AppState::new(Arc::new(store), Arc::new(directory()));

        let response = app(state).oneshot(get("/ranking/fib")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let ranking: Vec<ProblemRankEntry> = json_body(response).await;
        let hackers: Vec<&str> = ranking.iter().map(|e| e.hacker.as_str()).collect();
        assert_eq!(hackers, vec!["julia", "mikołaj"]);
        assert!(ranking.iter().all(|e| e.score == 10.0));
    }

    #[tokio::test]
    async fn test_ranking_serializes_camel_case() {
        let store = InMemorySubmissionRepository::new(vec![submission("fib", 1, 0.01, "0-0")]);
        let state = AppState::new(Arc::new(store), Arc::new(directory()));

        let response = app(state).oneshot(get("/ranking")).await.unwrap();

        let body: serde_json::Value = json_body(response).await;
        assert_eq!(body[0]["hacker"], "mikołaj");
        assert_eq!(body[0]["solvedProblems"][0], "fib");
        assert_eq!(body[0]["city"], "Kraków");
    }

    #[tokio::test]
    async fn test_store_failure_is_a_server_error() {
        let mut store = MockSubmissionRepository::new();
        store
            .expect_find_all()
            .returning(|| Err(AppError::Database("connection reset".to_string())));
        let state = AppState::new(Arc::new(store), Arc::new(directory()));

        let response = app(state).oneshot(get("/ranking")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_directory_failure_is_a_bad_gateway() {
        let mut users = MockUsersClient::new();
        users
            .expect_find_all()
            .returning(|| Err(AppError::UsersService("connection refused".to_string())));
        let state = AppState::new(
            Arc::new(InMemorySubmissionRepository::default()),
            Arc::new(users),
        );

        let response = app(state).oneshot(get("/ranking/fib")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_problem_ranking_passes_roster_in_directory_order() {
        let mut calculator = MockRankingCalculator::new();
        calculator
            .expect_problem_ranking()
            .withf(|problem_id: &str, users: &[crate::models::User]| {
                let ids: Vec<&str> = users.iter().map(|u| u.id.as_str()).collect();
                problem_id == "word-ladder" && ids == ["0-0", "0-1"]
            })
            .times(1)
            .returning(|_, _| Ok(vec![]));
        let state = AppState::with_calculator(
            Arc::new(MockSubmissionRepository::new()),
            Arc::new(directory()),
            Arc::new(calculator),
        );

        let response = app(state).oneshot(get("/ranking/word-ladder")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let ranking: Vec<ProblemRankEntry> = json_body(response).await;
        assert!(ranking.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let state = AppState::new(
            Arc::new(InMemorySubmissionRepository::default()),
            Arc::new(MockUsersClient::new()),
        );

        let response = app(state).oneshot(get("/leaderboard")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
