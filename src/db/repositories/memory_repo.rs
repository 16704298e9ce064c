//! In-memory submission store
//!
//! Used when no database is configured, optionally seeded from a JSON file
//! holding an array of submissions.

use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;

use crate::{error::AppResult, models::Submission};

use super::SubmissionRepository;

/// Immutable submission log held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySubmissionRepository {
    submissions: Vec<Submission>,
}

impl InMemorySubmissionRepository {
    pub fn new(submissions: Vec<Submission>) -> Self {
        Self { submissions }
    }

    /// Load the submission log from a JSON array on disk
    pub async fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let raw = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read submissions from {}", path.display()))?;
        let submissions: Vec<Submission> = serde_json::from_slice(&raw)
            .with_context(|| format!("Invalid submissions file {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            count = submissions.len(),
            "Loaded submissions into memory"
        );

        Ok(Self::new(submissions))
    }

    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionRepository {
    async fn find_all(&self) -> AppResult<Vec<Submission>> {
        Ok(self.submissions.clone())
    }

    async fn find_by_problem_id(&self, problem_id: &str) -> AppResult<Vec<Submission>> {
        Ok(self
            .submissions
            .iter()
            .filter(|submission| submission.problem_id == problem_id)
            .cloned()
            .collect())
    }
}
