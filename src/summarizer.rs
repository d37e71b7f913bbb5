//! Summarization client for GitHub discussions.
//!
//! Validates a user-supplied discussion URL, issues exactly one request to
//! the summarization backend, and maps the response into a [`Discussion`]
//! record ready for the session feed. Validation failures never reach the
//! network; backend failures carry the message from the response body when
//! one is present.

use crate::models::{Discussion, AI_SUMMARIZED_TAG};
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// User-Agent string identifying this client
const USER_AGENT: &str = concat!("focusfork/", env!("CARGO_PKG_VERSION"));

/// Default timeout for HTTP requests
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum SummarizeError {
    /// The input is not a full GitHub discussion URL. Raised before any
    /// request is sent.
    #[error("invalid discussion URL: {0}")]
    InvalidInput(String),
    /// The backend rejected the request or could not be reached.
    #[error("summarization failed: {0}")]
    BackendFailure(String),
    /// A submission is already in flight on this client instance.
    #[error("a summarization request is already in progress")]
    RequestInFlight,
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            SummarizeError::BackendFailure("request timed out".to_string())
        } else {
            SummarizeError::BackendFailure(error.to_string())
        }
    }
}

/// A validated GitHub discussion location.
///
/// Only the full form `https://github.com/<owner>/<repo>/discussions/<id>`
/// is accepted. Bare numeric ids and repository URLs without a discussion
/// segment are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscussionLocator {
    owner: String,
    repository: String,
    number: u64,
}

impl DiscussionLocator {
    /// Parses and validates a discussion URL.
    pub fn parse(input: &str) -> Result<Self, SummarizeError> {
        let trimmed = input.trim();
        let parsed = Url::parse(trimmed)
            .map_err(|_| SummarizeError::InvalidInput(trimmed.to_string()))?;

        if parsed.scheme() != "https" {
            return Err(SummarizeError::InvalidInput(trimmed.to_string()));
        }
        let host_ok = parsed
            .host_str()
            .is_some_and(|host| host.eq_ignore_ascii_case("github.com"));
        if !host_ok || parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(SummarizeError::InvalidInput(trimmed.to_string()));
        }

        let segments: Vec<&str> = parsed
            .path_segments()
            .map(|s| s.collect())
            .unwrap_or_default();
        // A trailing slash yields one empty trailing segment; tolerate it.
        let segments: &[&str] = match segments.as_slice() {
            [rest @ .., ""] => rest,
            all => all,
        };

        let [owner, repository, marker, number] = segments else {
            return Err(SummarizeError::InvalidInput(trimmed.to_string()));
        };
        if *marker != "discussions" || owner.is_empty() || repository.is_empty() {
            return Err(SummarizeError::InvalidInput(trimmed.to_string()));
        }
        let number: u64 = number
            .parse()
            .map_err(|_| SummarizeError::InvalidInput(trimmed.to_string()))?;
        if number == 0 {
            return Err(SummarizeError::InvalidInput(trimmed.to_string()));
        }

        Ok(Self {
            owner: (*owner).to_string(),
            repository: (*repository).to_string(),
            number,
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    /// The canonical URL form submitted to the backend.
    pub fn canonical_url(&self) -> String {
        format!(
            "https://github.com/{}/{}/discussions/{}",
            self.owner, self.repository, self.number
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SummarizeRequest {
    discussion_url: String,
}

/// Structured summary returned by the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryPayload {
    pub title: String,
    pub repository: String,
    pub summary: String,
    pub participants: u64,
    pub last_activity: String,
    pub tags: Vec<String>,
    pub trending: bool,
    pub replies: u64,
}

#[derive(Deserialize)]
struct SummarizeResponse {
    success: bool,
    summary: Option<SummaryPayload>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Resets the in-flight flag when the submission resolves, including when
/// the pending future is dropped mid-request.
struct InFlightGuard<'a> {
    flag: &'a Cell<bool>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

/// Client for the summarization backend.
///
/// At most one submission is in flight per instance; further calls are
/// rejected with [`SummarizeError::RequestInFlight`] until the current one
/// resolves or is abandoned.
pub struct SummarizeClient {
    http: Client,
    endpoint: String,
    in_flight: Cell<bool>,
    id_seq: Cell<u64>,
}

impl SummarizeClient {
    /// Creates a client for the given backend endpoint.
    pub fn new(endpoint: &str) -> Result<Self, SummarizeError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        // Time-derived seed keeps synthesized ids clear of seeded ones;
        // each success increments it.
        let seed = Utc::now().timestamp_millis().max(1) as u64;
        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
            in_flight: Cell::new(false),
            id_seq: Cell::new(seed),
        })
    }

    /// Whether a submission is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.get()
    }

    /// Validates `raw` and submits it for summarization.
    ///
    /// Exactly one outbound request is made per call; invalid input fails
    /// before any request. On success the returned discussion carries a
    /// fresh unique id and the `ai-summarized` tag.
    pub async fn submit(&self, raw: &str) -> Result<Discussion, SummarizeError> {
        if self.in_flight.get() {
            return Err(SummarizeError::RequestInFlight);
        }
        let locator = DiscussionLocator::parse(raw)?;

        self.in_flight.set(true);
        let _guard = InFlightGuard {
            flag: &self.in_flight,
        };

        tracing::debug!(url = %locator.canonical_url(), "submitting discussion for summarization");
        let payload = self.request_summary(&locator).await?;
        Ok(self.build_discussion(payload))
    }

    async fn request_summary(
        &self,
        locator: &DiscussionLocator,
    ) -> Result<SummaryPayload, SummarizeError> {
        let body = SummarizeRequest {
            discussion_url: locator.canonical_url(),
        };
        let response = self
            .http
            .post(self.endpoint.as_str())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|b| b.error)
                .unwrap_or_else(|_| format!("backend returned {status}"));
            tracing::warn!(%status, "summarization backend rejected the request");
            return Err(SummarizeError::BackendFailure(message));
        }

        let parsed: SummarizeResponse = response.json().await?;
        match parsed.summary {
            Some(summary) if parsed.success => Ok(summary),
            _ => Err(SummarizeError::BackendFailure(
                "backend returned no summary".to_string(),
            )),
        }
    }

    fn build_discussion(&self, payload: SummaryPayload) -> Discussion {
        let id = self.id_seq.get();
        self.id_seq.set(id + 1);

        let mut tags = payload.tags;
        if !tags.iter().any(|t| t == AI_SUMMARIZED_TAG) {
            tags.push(AI_SUMMARIZED_TAG.to_string());
        }

        Discussion {
            id,
            title: payload.title,
            repository: payload.repository,
            summary: payload.summary,
            participants: payload.participants,
            last_activity: payload.last_activity,
            tags,
            trending: payload.trending,
            replies: payload.replies,
        }
    }
}
