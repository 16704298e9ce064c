//! Ranking and scoring engine
//!
//! Turns the submission log into leaderboards:
//!
//! 1. **Score** (`score.rs`): point value of a single accepted submission,
//!    determined by the problem level alone.
//!
//! 2. **Calculator** (`calculator.rs`): the global ranking (accumulated score
//!    over distinct solved problems) and the per-problem ranking (fastest
//!    accepted attempts first).
//!
//! Nothing here holds state between calls. Every ranking reads the store once
//! and is rebuilt from scratch.

pub mod calculator;
pub mod score;

pub use calculator::{BasicRankingCalculator, RankingCalculator};
pub use score::{BasicScoreCalculator, ScoreCalculator};

#[cfg(test)]
pub use calculator::MockRankingCalculator;
