//! Ranking calculation

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::{
    db::repositories::SubmissionRepository,
    error::AppResult,
    models::{ProblemRankEntry, RankEntry, User},
};

use super::score::{BasicScoreCalculator, ScoreCalculator};

/// Leaderboards computed over a roster of users
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RankingCalculator: Send + Sync {
    /// Global ranking by accumulated score, highest first.
    ///
    /// Every roster user gets exactly one row. Users with equal scores keep
    /// their roster order.
    async fn ranking(&self, users: &[User]) -> AppResult<Vec<RankEntry>>;

    /// Accepted attempts at one problem, fastest first.
    async fn problem_ranking(
        &self,
        problem_id: &str,
        users: &[User],
    ) -> AppResult<Vec<ProblemRankEntry>>;
}

/// Ranking calculator reading straight from the submission store
pub struct BasicRankingCalculator<S = BasicScoreCalculator> {
    repository: Arc<dyn SubmissionRepository>,
    scorer: S,
}

impl BasicRankingCalculator {
    pub fn new(repository: Arc<dyn SubmissionRepository>) -> Self {
        Self::with_scorer(repository, BasicScoreCalculator)
    }
}

impl<S: ScoreCalculator> BasicRankingCalculator<S> {
    pub fn with_scorer(repository: Arc<dyn SubmissionRepository>, scorer: S) -> Self {
        Self { repository, scorer }
    }
}

/// Accumulated achievements of one user
#[derive(Default)]
struct Tally<'a> {
    seen: HashSet<&'a str>,
    solved_problems: Vec<String>,
    score: f64,
}

#[async_trait]
impl<S: ScoreCalculator> RankingCalculator for BasicRankingCalculator<S> {
    async fn ranking(&self, users: &[User]) -> AppResult<Vec<RankEntry>> {
        if users.is_empty() {
            return Ok(Vec::new());
        }

        let submissions = self.repository.find_all().await?;

        // The first accepted attempt stands for the problem; later ones add nothing.
        let mut tallies: HashMap<&str, Tally> = HashMap::new();
        for submission in submissions.iter().filter(|s| s.is_accepted()) {
            let tally = tallies.entry(submission.user_id.as_str()).or_default();
            if tally.seen.insert(submission.problem_id.as_str()) {
                tally.solved_problems.push(submission.problem_id.clone());
                tally.score += self.scorer.score(submission);
            }
        }

        let roster: HashSet<&str> = users.iter().map(|user| user.id.as_str()).collect();
        let unranked = tallies.keys().filter(|id| !roster.contains(*id)).count();
        if unranked > 0 {
            debug!(unranked, "Ignoring accepted submissions of users outside the roster");
        }

        let mut ranking: Vec<RankEntry> = users
            .iter()
            .map(|user| {
                let (score, solved_problems) = tallies
                    .get(user.id.as_str())
                    .map(|tally| (tally.score, tally.solved_problems.clone()))
                    .unwrap_or_default();

                RankEntry {
                    hacker: user.username.clone(),
                    score,
                    solved_problems,
                    city: user.city.clone(),
                    team: user.team.clone(),
                }
            })
            .collect();

        // sort_by is stable: equal scores stay in roster order
        ranking.sort_by(|a, b| b.score.total_cmp(&a.score));

        debug!(
            users = users.len(),
            submissions = submissions.len(),
            "Computed global ranking"
        );

        Ok(ranking)
    }

    async fn problem_ranking(
        &self,
        problem_id: &str,
        users: &[User],
    ) -> AppResult<Vec<ProblemRankEntry>> {
        let submissions = self.repository.find_by_problem_id(problem_id).await?;

        let mut roster: HashMap<&str, &User> = HashMap::with_capacity(users.len());
        for user in users {
            roster.entry(user.id.as_str()).or_insert(user);
        }

        let mut ranking: Vec<ProblemRankEntry> = submissions
            .iter()
            .filter(|submission| submission.is_accepted())
            .filter_map(|submission| {
                let user = roster.get(submission.user_id.as_str())?;
                Some(ProblemRankEntry {
                    hacker: user.username.clone(),
                    score: self.scorer.score(submission),
                    elapsed_time: submission.elapsed_time,
                    language: submission.language.clone(),
                })
            })
            .collect();

        // Equal times keep fetch order
        ranking.sort_by(|a, b| a.elapsed_time.total_cmp(&b.elapsed_time));

        debug!(
            problem_id,
            entries = ranking.len(),
            submissions = submissions.len(),
            "Computed problem ranking"
        );

        Ok(ranking)
    }
}
