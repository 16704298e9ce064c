//! Ranking rows
//!
//! Both rows are derived data, recomputed on every query.

use serde::{Deserialize, Serialize};

/// Global leaderboard row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankEntry {
    pub hacker: String,
    pub score: f64,
    /// Distinct problem ids in the order they were first solved
    pub solved_problems: Vec<String>,
    pub city: String,
    pub team: String,
}

/// Per-problem leaderboard row, one per accepted attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemRankEntry {
    pub hacker: String,
    pub score: f64,
    pub elapsed_time: f64,
    pub language: String,
}
