//! AlgoRanking - Ranking & Scoring Service
//!
//! This library turns the submission log of a programming-exercise platform
//! into leaderboards.
//!
//! # Features
//!
//! - Global ranking by accumulated score over distinct solved problems
//! - Per-problem ranking by solve speed
//! - Level-based scoring (10 points per level)
//! - Admin-only listing of the raw submission log
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Ranking**: Scoring and leaderboard computation
//! - **Repositories**: Read-only submission store
//! - **Clients**: User directory access
//! - **Models**: Domain models and ranking rows

pub mod clients;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod ranking;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
