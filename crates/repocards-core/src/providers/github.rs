// GitHub provider implementation - bridges the API client with RepoHost
use async_trait::async_trait;
use repocards_api::{GitHubClient, GitHubRepo};

use crate::{models::RepoInfo, providers::RepoHost, Error, Result};

/// Wrapper around GitHubClient that implements RepoHost
pub struct GitHubProvider {
    client: GitHubClient,
}

impl GitHubProvider {
    pub fn new(token: Option<String>) -> Self {
        Self {
            client: GitHubClient::new(token),
        }
    }

    pub fn with_base_url(token: Option<String>, base_url: String) -> Self {
        Self {
            client: GitHubClient::with_base_url(token, base_url),
        }
    }
}

#[async_trait]
impl RepoHost for GitHubProvider {
    async fn repo_info(&self, repo: &str) -> Result<RepoInfo> {
        let repo = self
            .client
            .get_repository(repo)
            .await
            .map_err(|e| Error::ApiError(e.to_string()))?;

        Ok(github_to_repo_info(repo))
    }

    async fn latest_tag(&self, repo: &str) -> Result<Option<String>> {
        let tag = self
            .client
            .get_latest_tag(repo)
            .await
            .map_err(|e| Error::ApiError(e.to_string()))?;

        Ok(tag.map(|t| t.name))
    }
}

/// Convert the GitHub API repo to the card-facing model
fn github_to_repo_info(gh: GitHubRepo) -> RepoInfo {
    RepoInfo {
        name: gh.name,
        description: gh.description,
        url: gh.html_url,
        // GitHub sends homepage as an empty string when unset
        homepage_url: gh.homepage.filter(|u| !u.is_empty()),
        stars: gh.stargazers_count,
        open_issues: gh.open_issues_count,
        language: gh.language,
        topics: gh.topics,
        // Short SPDX identifier when available, long license name otherwise
        license: gh.license.map(|l| l.spdx_id.unwrap_or(l.name)),
        pushed_at: gh.pushed_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use repocards_api::github::{GitHubLicense, GitHubOwner};

    fn sample_repo() -> GitHubRepo {
        GitHubRepo {
            id: 1,
            name: "helm".to_string(),
            full_name: "svvysh/helm".to_string(),
            private: false,
            description: Some("Spec runner".to_string()),
            homepage: Some(String::new()),
            default_branch: "main".to_string(),
            html_url: "https://github.com/svvysh/helm".to_string(),
            clone_url: "https://github.com/svvysh/helm.git".to_string(),
            ssh_url: "git@github.com:svvysh/helm.git".to_string(),
            visibility: Some("public".to_string()),
            license: Some(GitHubLicense {
                key: "mit".to_string(),
                name: "MIT License".to_string(),
                spdx_id: Some("MIT".to_string()),
                url: None,
                node_id: "MDc6TGljZW5zZTEz".to_string(),
            }),
            topics: vec!["cli".to_string()],
            language: Some("Rust".to_string()),
            stargazers_count: 42,
            watchers_count: 42,
            forks_count: 3,
            open_issues_count: 5,
            created_at: Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
            pushed_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            owner: GitHubOwner {
                login: "svvysh".to_string(),
                id: 2,
                avatar_url: "https://avatars.githubusercontent.com/u/2".to_string(),
                html_url: "https://github.com/svvysh".to_string(),
                kind: "User".to_string(),
            },
        }
    }

    #[test]
    fn conversion_prefers_spdx_id() {
        let info = github_to_repo_info(sample_repo());
        assert_eq!(info.license.as_deref(), Some("MIT"));
    }

    #[test]
    fn conversion_falls_back_to_license_name() {
        let mut repo = sample_repo();
        repo.license.as_mut().unwrap().spdx_id = None;
        let info = github_to_repo_info(repo);
        assert_eq!(info.license.as_deref(), Some("MIT License"));
    }

    #[test]
    fn conversion_treats_empty_homepage_as_unset() {
        let info = github_to_repo_info(sample_repo());
        assert!(info.homepage_url.is_none());

        let mut repo = sample_repo();
        repo.homepage = Some("https://svvy.sh".to_string());
        let info = github_to_repo_info(repo);
        assert_eq!(info.homepage_url.as_deref(), Some("https://svvy.sh"));
    }

    #[test]
    fn conversion_uses_push_time_not_update_time() {
        let info = github_to_repo_info(sample_repo());
        assert_eq!(
            info.pushed_at,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );
    }
}
