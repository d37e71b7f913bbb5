//! Client for the issue-analysis backend.
//!
//! The backend scans a repository's open issues and returns them enriched
//! with derived fields (`beginnerFriendly`, `difficulty`); the derivation
//! heuristics live server-side. This module only fetches and decodes.

use crate::models::{Difficulty, Issue};
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = concat!("focusfork/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The bearer credential was missing or rejected.
    #[error("analysis backend rejected the credential: {0}")]
    Authentication(String),
    /// Any other non-success response or transport failure.
    #[error("issue analysis failed: {0}")]
    BackendFailure(String),
}

impl From<reqwest::Error> for AnalysisError {
    fn from(error: reqwest::Error) -> Self {
        AnalysisError::BackendFailure(error.to_string())
    }
}

#[derive(Serialize)]
struct AnalysisRequest<'a> {
    owner: &'a str,
    repo: &'a str,
}

/// Repository metadata attached to each analyzed issue.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedRepository {
    pub name: String,
    pub full_name: String,
    pub stars: u64,
    /// Primary language; absent for e.g. documentation-only repositories.
    pub language: Option<String>,
}

/// One issue as returned by the analysis backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedIssue {
    pub title: String,
    pub body: Option<String>,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub assignee: Option<String>,
    pub labels: Vec<String>,
    pub comments: u64,
    pub repository: AnalyzedRepository,
    /// Derived by the backend from labels.
    pub beginner_friendly: bool,
    /// Derived by the backend.
    pub difficulty: Difficulty,
}

impl AnalyzedIssue {
    /// Converts into a list-item issue under the given id.
    pub fn into_issue(self, id: u64) -> Issue {
        Issue {
            id,
            title: self.title,
            repository: self.repository.name,
            difficulty: self.difficulty,
            language: self.repository.language.unwrap_or_default(),
            description: self.body.unwrap_or_default(),
            labels: self.labels,
            assignee: self.assignee,
            created_at: self.created_at.format("%Y-%m-%d").to_string(),
            stars: self.repository.stars,
            comments: self.comments,
        }
    }
}

#[derive(Deserialize)]
struct AnalysisResponse {
    issues: Vec<AnalyzedIssue>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the issue-analysis backend.
pub struct AnalysisClient {
    http: Client,
    endpoint: String,
    token: String,
}

impl AnalysisClient {
    /// Creates a client for the given endpoint and bearer credential.
    pub fn new(endpoint: &str, token: &str) -> Result<Self, AnalysisError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
            token: token.to_string(),
        })
    }

    /// Fetches the analyzed open issues of `owner/repo`.
    pub async fn fetch_issues(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<AnalyzedIssue>, AnalysisError> {
        tracing::debug!(owner, repo, "fetching analyzed issues");
        let response = self
            .http
            .post(self.endpoint.as_str())
            .bearer_auth(&self.token)
            .json(&AnalysisRequest { owner, repo })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|b| b.error)
                .unwrap_or_else(|_| format!("backend returned {status}"));
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    AnalysisError::Authentication(message)
                }
                _ => AnalysisError::BackendFailure(message),
            });
        }

        let parsed: AnalysisResponse = response.json().await?;
        tracing::debug!(count = parsed.issues.len(), "analysis backend responded");
        Ok(parsed.issues)
    }
}
