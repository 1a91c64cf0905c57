//! Retrieval boundary: where the table's records come from.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::domain::User;
use tokio::sync::Mutex;
use tracing::{debug, info};
use url::Url;

use crate::{error::FetchError, settings::ClientSettings};

/// A read-only fetch of the whole user collection. The response is taken
/// atomically: either every record or an error.
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError>;
}

pub struct MissingUserSource;

#[async_trait]
impl UserSource for MissingUserSource {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        Err(FetchError::Unavailable)
    }
}

/// `GET <users_url>` returning a JSON array of users.
pub struct HttpUserSource {
    http: Client,
    users_url: Url,
}

impl HttpUserSource {
    pub fn new(users_url: Url) -> Self {
        Self {
            http: Client::new(),
            users_url,
        }
    }

    pub fn with_timeout(users_url: Url, timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, users_url })
    }

    pub fn from_settings(settings: &ClientSettings) -> anyhow::Result<Self> {
        let users_url = settings.users_url()?;
        match settings.request_timeout() {
            Some(timeout) => Ok(Self::with_timeout(users_url, timeout)?),
            None => Ok(Self::new(users_url)),
        }
    }

    pub fn users_url(&self) -> &Url {
        &self.users_url
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        debug!(url = %self.users_url, "requesting user directory");
        let users: Vec<User> = self
            .http
            .get(self.users_url.clone())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        info!(url = %self.users_url, count = users.len(), "fetched user directory");
        Ok(users)
    }
}

/// In-memory source that answers once with a fixed outcome.
///
/// Later calls fail, which makes an accidental second fetch visible.
pub struct StaticUserSource {
    outcome: Mutex<Option<Result<Vec<User>, FetchError>>>,
}

impl StaticUserSource {
    pub fn ok(users: Vec<User>) -> Self {
        Self {
            outcome: Mutex::new(Some(Ok(users))),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Mutex::new(Some(Err(FetchError::message(message)))),
        }
    }
}

#[async_trait]
impl UserSource for StaticUserSource {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        self.outcome
            .lock()
            .await
            .take()
            .unwrap_or_else(|| Err(FetchError::message("user source already consumed")))
    }
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;
