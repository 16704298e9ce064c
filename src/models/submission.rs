//! Submission model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::constants::status;

/// One judged attempt at one problem
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub problem_id: String,
    /// Difficulty level of the problem, constant per problem
    pub level: i32,
    pub elapsed_time: f64,
    pub source_code: String,
    #[serde(rename = "statusCode", alias = "status")]
    pub status: String,
    pub user_id: String,
    pub language: String,
}

impl Submission {
    /// Check if this submission was judged as a correct solution
    pub fn is_accepted(&self) -> bool {
        self.status == status::ACCEPTED
    }
}
