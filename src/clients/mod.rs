//! Clients for collaborating services

pub mod users_client;

pub use users_client::{HttpUsersClient, UsersClient};

#[cfg(test)]
pub use users_client::MockUsersClient;
