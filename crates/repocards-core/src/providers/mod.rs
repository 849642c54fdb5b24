// Trait seams between the enrichment pipeline and the upstream clients
pub mod github;
pub mod npm;

pub use github::GitHubProvider;
pub use npm::NpmProvider;

use crate::models::{PackageMetadata, RepoInfo};
use crate::Result;

/// Source-hosting side of a card: repository metadata and release tags.
///
/// A trait so the pipeline can be exercised against mocks; the real
/// implementation wraps the GitHub client.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepoHost: Send + Sync {
    async fn repo_info(&self, repo: &str) -> Result<RepoInfo>;

    /// Most recently created tag name, if the repository has any
    async fn latest_tag(&self, repo: &str) -> Result<Option<String>>;
}

/// Package-registry side of a card
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PackageRegistry: Send + Sync {
    async fn package_metadata(&self, package: &str) -> Result<PackageMetadata>;
}
