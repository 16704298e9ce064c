//! Submission scoring

use crate::{constants::SCORE_PER_LEVEL, models::Submission};

/// Point value of a submission
pub trait ScoreCalculator: Send + Sync {
    fn score(&self, submission: &Submission) -> f64;
}

/// Scores a submission linearly by problem level.
///
/// Elapsed time, language and owner never affect the value; they only
/// matter for ordering within a problem ranking.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicScoreCalculator;

impl ScoreCalculator for BasicScoreCalculator {
    fn score(&self, submission: &Submission) -> f64 {
        f64::from(submission.level) * SCORE_PER_LEVEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(level: i32, elapsed_time: f64, language: &str) -> Submission {
        Submission {
            problem_id: "fib".to_string(),
            level,
            elapsed_time,
            source_code: "dummy source code".to_string(),
            status: "ACCEPTED".to_string(),
            user_id: "0-0".to_string(),
            language: language.to_string(),
        }
    }

    #[test]
    fn test_score_is_ten_points_per_level() {
        let calculator = BasicScoreCalculator;

        assert_eq!(calculator.score(&submission(1, 0.01, "java")), 10.0);
        assert_eq!(calculator.score(&submission(2, 0.01, "java")), 20.0);
        assert_eq!(calculator.score(&submission(3, 0.01, "java")), 30.0);
    }

    #[test]
    fn test_score_ignores_time_and_language() {
        let calculator = BasicScoreCalculator;

        let fast = calculator.score(&submission(2, 0.0001, "java"));
        let slow = calculator.score(&submission(2, 12.5, "kotlin"));

        assert_eq!(fast, slow);
    }
}
