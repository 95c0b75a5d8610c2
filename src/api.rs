//! Client for the remote clue service.
//!
//! The service exposes two JSON endpoints:
//!
//! - `GET {base}categories?count=N` returns a list of `{ id, title, ... }`
//! - `GET {base}category?id=ID` returns `{ title, clues: [{ question, answer, ... }] }`
//!
//! Every call is a single attempt. Transport failures, non-success statuses
//! and malformed bodies all surface as [`FetchError`].

use crate::config::ConfigError;
use crate::games::jeopardy::CategoryId;
use derive_more::{Display, Error};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

/// A category as listed by `GET /categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Category identifier.
    pub id: CategoryId,
    /// Category title.
    #[serde(default)]
    pub title: String,
}

/// A clue as returned inside `GET /category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRecord {
    /// Question text.
    pub question: String,
    /// Answer text.
    pub answer: String,
}

/// A category with its full clue pool, as returned by `GET /category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    /// Category title.
    pub title: String,
    /// Every clue the service holds for this category.
    #[serde(default)]
    pub clues: Vec<ClueRecord>,
}

/// Source of categories and clue pools.
#[async_trait::async_trait]
pub trait CategoryApi: Send + Sync {
    /// Lists up to `count` candidate categories.
    async fn list_categories(&self, count: usize) -> Result<Vec<CategorySummary>, FetchError>;

    /// Fetches one category with its full clue pool.
    async fn get_category(&self, id: CategoryId) -> Result<CategoryRecord, FetchError>;
}

/// HTTP implementation of [`CategoryApi`].
#[derive(Debug, Clone)]
pub struct JeopardyApiClient {
    base_url: Url,
    client: reqwest::Client,
}

impl JeopardyApiClient {
    /// Creates a client rooted at `base_url`.
    ///
    /// A trailing slash is added when missing so endpoint paths resolve
    /// beneath the base rather than replacing its last segment.
    #[instrument]
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let mut normalized = base_url.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }

        let base_url = Url::parse(&normalized)
            .map_err(|e| ConfigError::new(format!("Invalid API URL '{}': {}", base_url, e)))?;

        debug!(base_url = %base_url, "Created clue service client");
        Ok(Self {
            base_url,
            client: reqwest::Client::new(),
        })
    }

    /// Returns the normalized base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str, key: &str, value: &str) -> Result<Url, FetchError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| FetchError::new(format!("Bad endpoint '{}': {}", path, e)))?;
        url.query_pairs_mut().append_pair(key, value);
        Ok(url)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        debug!(url = %url, "GET");
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            error!(url = %url, error = %e, "Request failed");
            FetchError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(url = %url, status = %status, "Clue service returned error status");
            return Err(FetchError::new(format!("{} returned {}", url, status)));
        }

        let body = response.json::<T>().await?;
        Ok(body)
    }
}

#[async_trait::async_trait]
impl CategoryApi for JeopardyApiClient {
    #[instrument(skip(self))]
    async fn list_categories(&self, count: usize) -> Result<Vec<CategorySummary>, FetchError> {
        let url = self.endpoint("categories", "count", &count.to_string())?;
        let categories: Vec<CategorySummary> = self.get_json(url).await?;
        debug!(received = categories.len(), "Listed categories");
        Ok(categories)
    }

    #[instrument(skip(self))]
    async fn get_category(&self, id: CategoryId) -> Result<CategoryRecord, FetchError> {
        let url = self.endpoint("category", "id", &id.to_string())?;
        let category: CategoryRecord = self.get_json(url).await?;
        debug!(title = %category.title, clues = category.clues.len(), "Fetched category");
        Ok(category)
    }
}

/// Failure talking to the clue service.
#[derive(Debug, Clone, Display, Error)]
#[display("Fetch error: {} at {}:{}", message, file, line)]
pub struct FetchError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl FetchError {
    /// Creates a new fetch error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::new(format!("Malformed response: {}", err))
        } else {
            Self::new(format!("HTTP error: {}", err))
        }
    }
}
