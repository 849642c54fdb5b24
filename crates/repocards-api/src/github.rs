use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

const GITHUB_API_BASE: &str = "https://api.github.com";

/// Every request identifies itself; GitHub rejects anonymous user agents.
const USER_AGENT: &str = "repocards/0.1.0";

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Repository not found: {0}")]
    NotFound(String),

    #[error("Authentication required")]
    AuthRequired,

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    ParseError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GitHubError>;

pub struct GitHubClient {
    client: reqwest::Client,
    token: Option<String>,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: Option<String>) -> Self {
        Self::with_base_url(token, GITHUB_API_BASE.to_string())
    }

    /// For GitHub Enterprise instances, and for pointing tests at a mock server
    pub fn with_base_url(token: Option<String>, base_url: String) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static(USER_AGENT),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            token,
            base_url,
        }
    }

    /// Get a repository by full name (e.g., "svvysh/helm")
    pub async fn get_repository(&self, repo: &str) -> Result<GitHubRepo> {
        let url = format!("{}/repos/{}", self.base_url, repo);

        let mut request = self.client.get(&url);

        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if response.status() == 404 {
            return Err(GitHubError::NotFound(repo.to_string()));
        }

        if response.status() == 401 {
            return Err(GitHubError::AuthRequired);
        }

        if response.status() == 429 {
            return Err(GitHubError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("GitHub returned status {} for {}", status, url);
            return Err(GitHubError::RequestFailed(format!(
                "Status {}: {}",
                status, body
            )));
        }

        let body = response.text().await?;
        let repo: GitHubRepo = serde_json::from_str(&body)?;
        Ok(repo)
    }

    /// Get the most recently created tag, if the repository has any.
    ///
    /// Asks for a single page of size 1; the first element is the newest tag.
    pub async fn get_latest_tag(&self, repo: &str) -> Result<Option<GitHubTag>> {
        let url = format!("{}/repos/{}/tags", self.base_url, repo);

        let mut request = self.client.get(&url).query(&[("per_page", "1")]);

        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if response.status() == 404 {
            return Err(GitHubError::NotFound(repo.to_string()));
        }

        if response.status() == 401 {
            return Err(GitHubError::AuthRequired);
        }

        if response.status() == 429 {
            return Err(GitHubError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("GitHub returned status {} for {}", status, url);
            return Err(GitHubError::RequestFailed(format!(
                "Status {}: {}",
                status, body
            )));
        }

        let body = response.text().await?;
        let mut tags: Vec<GitHubTag> = serde_json::from_str(&body)?;

        if tags.is_empty() {
            Ok(None)
        } else {
            Ok(Some(tags.remove(0)))
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub private: bool,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub default_branch: String,
    pub html_url: String,
    pub clone_url: String,
    pub ssh_url: String,
    #[serde(default)]
    pub visibility: Option<String>,
    pub license: Option<GitHubLicense>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub watchers_count: u32,
    pub forks_count: u32,
    pub open_issues_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pushed_at: DateTime<Utc>,
    pub owner: GitHubOwner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubLicense {
    pub key: String,
    pub name: String,
    pub spdx_id: Option<String>,
    pub url: Option<String>,
    pub node_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubOwner {
    pub login: String,
    pub id: u64,
    pub avatar_url: String,
    pub html_url: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubTag {
    pub name: String,
    pub commit: GitHubTagCommit,
    pub zipball_url: String,
    pub tarball_url: String,
    pub node_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubTagCommit {
    pub sha: String,
    pub url: String,
}
