//! tracker::github
//!
//! GitHub tracker implementation using the Issues REST API.
//!
//! # Design
//!
//! This module implements the `Tracker` trait for GitHub. A ticket lookup is
//! a single `GET /repos/{owner}/{repo}/issues/{number}` request; the fields
//! relog consumes (title, html_url, labels) are deserialized and converted
//! into [`TicketMetadata`].
//!
//! # Authentication
//!
//! An optional bearer token is sent when provided (the CLI reads it from
//! `GITHUB_TOKEN`). Unauthenticated requests work for public repositories
//! but are subject to much lower rate limits.
//!
//! # Rate Limiting
//!
//! GitHub has rate limits. This implementation returns
//! `TrackerError::RateLimited` when limits are hit and does not retry
//! (caller's responsibility).

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

use super::traits::{LabelInfo, TicketMetadata, Tracker, TrackerError};

/// Default GitHub API base URL.
const DEFAULT_API_BASE: &str = "https://api.github.com";

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = "relog-cli";

/// GitHub tracker implementation.
///
/// Implements the `Tracker` trait for GitHub using the Issues REST API.
pub struct GitHubTracker {
    /// HTTP client for making requests
    client: Client,
    /// Optional bearer token
    token: Option<String>,
    /// Repository owner (user or organization)
    owner: String,
    /// Repository name
    repo: String,
    /// API base URL (configurable for GitHub Enterprise)
    api_base: String,
}

// Custom Debug to avoid exposing the token
impl std::fmt::Debug for GitHubTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubTracker")
            .field("has_token", &self.token.is_some())
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl GitHubTracker {
    /// Create a new GitHub tracker.
    ///
    /// # Arguments
    ///
    /// * `token` - Optional personal access token
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    pub fn new(
        token: Option<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            token,
            owner: owner.into(),
            repo: repo.into(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Create a GitHub tracker with a custom API base URL.
    ///
    /// Use this for GitHub Enterprise installations
    /// (e.g. `https://github.example.com/api/v3`).
    pub fn with_api_base(
        token: Option<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            token,
            owner: owner.into(),
            repo: repo.into(),
            api_base: api_base.into(),
        }
    }

    /// Get the repository owner.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Get the repository name.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Build URL for an issue endpoint.
    fn issue_url(&self, number: &str) -> String {
        format!(
            "{}/repos/{}/{}/issues/{}",
            self.api_base, self.owner, self.repo, number
        )
    }

    /// Build common headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        if let Some(ref token) = self.token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token)).expect("Invalid token format"),
            );
        }
        headers
    }

    /// Handle API response, mapping errors appropriately.
    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: Response,
    ) -> Result<T, TrackerError> {
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| TrackerError::ApiError {
                status: status.as_u16(),
                message: format!("failed to parse response: {}", e),
            })
        } else {
            // Try to get the error message from the body
            let message = match response.json::<GitHubErrorResponse>().await {
                Ok(err) => err.message,
                Err(_) => "unknown error".to_string(),
            };

            Err(match status {
                StatusCode::UNAUTHORIZED => {
                    TrackerError::AuthFailed("invalid or expired token".into())
                }
                StatusCode::FORBIDDEN => {
                    TrackerError::AuthFailed(format!("permission denied: {}", message))
                }
                StatusCode::NOT_FOUND => TrackerError::NotFound(message),
                StatusCode::TOO_MANY_REQUESTS => TrackerError::RateLimited,
                _ if status.is_server_error() => TrackerError::ApiError {
                    status: status.as_u16(),
                    message: format!("GitHub server error: {}", message),
                },
                _ => TrackerError::ApiError {
                    status: status.as_u16(),
                    message,
                },
            })
        }
    }
}

/// GitHub issue payload (the fields relog consumes).
#[derive(Debug, Deserialize)]
struct GitHubIssue {
    title: String,
    html_url: String,
    #[serde(default)]
    labels: Vec<GitHubLabel>,
}

/// GitHub label payload. Descriptions are nullable in the API.
#[derive(Debug, Deserialize)]
struct GitHubLabel {
    name: String,
    #[serde(default)]
    description: Option<String>,
}

/// GitHub API error response body.
#[derive(Debug, Deserialize)]
struct GitHubErrorResponse {
    message: String,
}

impl From<GitHubIssue> for TicketMetadata {
    fn from(issue: GitHubIssue) -> Self {
        TicketMetadata {
            title: issue.title,
            url: issue.html_url,
            labels: issue
                .labels
                .into_iter()
                .map(|label| LabelInfo {
                    name: label.name,
                    description: label.description.unwrap_or_default(),
                })
                .collect(),
        }
    }
}

#[async_trait]
impl Tracker for GitHubTracker {
    fn name(&self) -> &'static str {
        "github"
    }

    async fn ticket(&self, number: &str) -> Result<TicketMetadata, TrackerError> {
        let url = self.issue_url(number);

        let response = self
            .client
            .get(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| TrackerError::NetworkError(e.to_string()))?;

        let issue: GitHubIssue = self.handle_response(response).await?;
        Ok(issue.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_url_layout() {
        let tracker = GitHubTracker::new(None, "acme", "widget");
        assert_eq!(
            tracker.issue_url("42"),
            "https://api.github.com/repos/acme/widget/issues/42"
        );
    }

    #[test]
    fn custom_api_base() {
        let tracker =
            GitHubTracker::with_api_base(None, "acme", "widget", "https://ghe.example.com/api/v3");
        assert_eq!(
            tracker.issue_url("7"),
            "https://ghe.example.com/api/v3/repos/acme/widget/issues/7"
        );
    }

    #[test]
    fn issue_converts_to_metadata() {
        let issue = GitHubIssue {
            title: "Fix the frobnicator".into(),
            html_url: "https://github.com/acme/widget/issues/42".into(),
            labels: vec![
                GitHubLabel {
                    name: "Subsystem: Core".into(),
                    description: Some("[subsystem]".into()),
                },
                GitHubLabel {
                    name: "Wontfix".into(),
                    description: None,
                },
            ],
        };

        let metadata: TicketMetadata = issue.into();
        assert_eq!(metadata.title, "Fix the frobnicator");
        assert_eq!(metadata.labels.len(), 2);
        assert_eq!(metadata.labels[1].description, "");
    }

    #[test]
    fn debug_does_not_leak_token() {
        let tracker = GitHubTracker::new(Some("ghp_secret".into()), "acme", "widget");
        let debug = format!("{:?}", tracker);
        assert!(!debug.contains("ghp_secret"));
        assert!(debug.contains("has_token: true"));
    }
}
