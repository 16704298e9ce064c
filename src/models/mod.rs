//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod ranking;
pub mod submission;
pub mod user;

pub use ranking::*;
pub use submission::*;
pub use user::*;
