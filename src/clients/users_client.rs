//! User directory client
//!
//! The roster and the caller identity both come from the user directory
//! service. This service never stores users itself.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::{
    constants::AUTHORIZATION_HEADER,
    error::{AppError, AppResult},
    models::User,
};

/// Read access to the user directory
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersClient: Send + Sync {
    /// Every registered user, in directory order
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Resolve a caller token; `None` when the directory does not recognise it
    async fn find_user(&self, token: &str) -> AppResult<Option<User>>;
}

/// User directory reached over HTTP
#[derive(Clone)]
pub struct HttpUsersClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUsersClient {
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl UsersClient for HttpUsersClient {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let response = self.client.get(self.url("/users")).send().await?;

        if !response.status().is_success() {
            return Err(AppError::UsersService(format!(
                "Listing users failed with status {}",
                response.status()
            )));
        }

        let users: Vec<User> = response.json().await?;
        debug!(count = users.len(), "Fetched roster from user directory");

        Ok(users)
    }

    async fn find_user(&self, token: &str) -> AppResult<Option<User>> {
        let response = self
            .client
            .get(self.url("/api/user"))
            .header(AUTHORIZATION_HEADER, token)
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => {
                debug!(status = %response.status(), "User directory did not recognise token");
                Ok(None)
            }
            status if status.is_success() => Ok(Some(response.json().await?)),
            status => Err(AppError::UsersService(format!(
                "Resolving user failed with status {}",
                status
            ))),
        }
    }
}
