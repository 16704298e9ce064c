//! Submission repository

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{error::AppResult, models::Submission};

/// Read access to the submission log
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Every stored submission, in storage order
    async fn find_all(&self) -> AppResult<Vec<Submission>>;

    /// Submissions for exactly one problem, in storage order
    async fn find_by_problem_id(&self, problem_id: &str) -> AppResult<Vec<Submission>>;
}

/// PostgreSQL-backed submission store
#[derive(Clone)]
pub struct PgSubmissionRepository {
    pool: PgPool,
}

impl PgSubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionRepository for PgSubmissionRepository {
    async fn find_all(&self) -> AppResult<Vec<Submission>> {
        let submissions = sqlx::query_as::<_, Submission>(
            r#"
            SELECT problem_id, level, elapsed_time, source_code, status, user_id, language
            FROM submissions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(submissions)
    }

    async fn find_by_problem_id(&self, problem_id: &str) -> AppResult<Vec<Submission>> {
        let submissions = sqlx::query_as::<_, Submission>(
            r#"
            SELECT problem_id, level, elapsed_time, source_code, status, user_id, language
            FROM submissions
            WHERE problem_id = $1
            ORDER BY id
            "#,
        )
        .bind(problem_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(submissions)
    }
}
