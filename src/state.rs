//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::{
    clients::UsersClient,
    db::repositories::SubmissionRepository,
    ranking::{BasicRankingCalculator, RankingCalculator},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Submission store
    submissions: Arc<dyn SubmissionRepository>,

    /// User directory
    users: Arc<dyn UsersClient>,

    /// Leaderboard computation over the submission store
    ranking: Arc<dyn RankingCalculator>,
}

impl AppState {
    /// Create a new application state ranking with the basic calculator
    pub fn new(submissions: Arc<dyn SubmissionRepository>, users: Arc<dyn UsersClient>) -> Self {
        let ranking = Arc::new(BasicRankingCalculator::new(submissions.clone()));
        Self::with_calculator(submissions, users, ranking)
    }

    /// Create a new application state with an explicit ranking calculator
    pub fn with_calculator(
        submissions: Arc<dyn SubmissionRepository>,
        users: Arc<dyn UsersClient>,
        ranking: Arc<dyn RankingCalculator>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                submissions,
                users,
                ranking,
            }),
        }
    }

    /// Get a reference to the submission store
    pub fn submissions(&self) -> &dyn SubmissionRepository {
        self.inner.submissions.as_ref()
    }

    /// Get a reference to the user directory client
    pub fn users(&self) -> &dyn UsersClient {
        self.inner.users.as_ref()
    }

    /// Get a reference to the ranking calculator
    pub fn ranking(&self) -> &dyn RankingCalculator {
        self.inner.ranking.as_ref()
    }
}
