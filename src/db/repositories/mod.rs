//! Submission store
//!
//! The ranking engine only ever reads submissions, through the narrow
//! [`SubmissionRepository`] trait. Implementations own their data source.

pub mod memory_repo;
pub mod submission_repo;

pub use memory_repo::InMemorySubmissionRepository;
pub use submission_repo::{PgSubmissionRepository, SubmissionRepository};

#[cfg(test)]
pub use submission_repo::MockSubmissionRepository;
