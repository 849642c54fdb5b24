use futures::future::join_all;
use tracing::{debug, error};

use crate::{
    config::Config,
    models::{npm_package_url, ProjectDescriptor, RepoCard, VersionSource},
    providers::{GitHubProvider, NpmProvider, PackageRegistry, RepoHost},
    Result,
};

/// Builds display cards for the project catalog.
///
/// One card per descriptor, input order preserved. The batch itself never
/// fails: an item whose lookups go wrong degrades to a descriptor-only
/// fallback card instead of taking the others down with it.
pub struct CardFetcher {
    host: Box<dyn RepoHost>,
    registry: Box<dyn PackageRegistry>,
}

impl CardFetcher {
    pub fn new(config: &Config) -> Self {
        Self {
            host: Box::new(GitHubProvider::with_base_url(
                config.github.token.clone(),
                config.github.api_url.clone(),
            )),
            registry: Box::new(NpmProvider::with_base_url(config.registry.url.clone())),
        }
    }

    /// Swap in alternative sources; tests use this with mocks
    pub fn with_sources(host: Box<dyn RepoHost>, registry: Box<dyn PackageRegistry>) -> Self {
        Self { host, registry }
    }

    /// Enrich every catalog entry concurrently
    ///
    /// Runs items in parallel because waiting is for serial programmers.
    pub async fn fetch_repo_cards(&self, descriptors: &[ProjectDescriptor]) -> Vec<RepoCard> {
        let cards = descriptors.iter().map(|descriptor| self.enrich(descriptor));
        join_all(cards).await
    }

    /// Per-item failure boundary: maps any error from the build to the
    /// minimal fallback card, so the contract "never fails" holds per item.
    async fn enrich(&self, descriptor: &ProjectDescriptor) -> RepoCard {
        match self.build_card(descriptor).await {
            Ok(card) => card,
            Err(err) => {
                error!("card build failed for {}: {}", descriptor.repo, err);
                RepoCard::fallback(descriptor)
            }
        }
    }

    // Repo info recovers locally and keeps the seed values; a failed tag or
    // registry lookup aborts the whole item into the fallback path above.
    async fn build_card(&self, descriptor: &ProjectDescriptor) -> Result<RepoCard> {
        let mut card = RepoCard::seed(descriptor);

        match self.host.repo_info(&descriptor.repo).await {
            Ok(info) => {
                // Display-name override still wins over the fetched name
                card.title = descriptor
                    .display_name
                    .clone()
                    .unwrap_or_else(|| info.name.clone());
                card.stars = Some(info.stars);
                card.last_updated = Some(info.pushed_at);
                card.github_url = Some(info.url);
                card.main_url = info.homepage_url;
                card.primary_language = info.language;
                card.license = info.license;
                card.open_issues = Some(info.open_issues);
                card.tags = info.topics;
            }
            Err(err) => {
                debug!("repo info unavailable for {}: {}", descriptor.repo, err);
            }
        }

        if let Some(tag) = self.host.latest_tag(&descriptor.repo).await? {
            card.version = Some(tag);
            card.version_source = Some(VersionSource::Git);
        }

        if let Some(ref package) = descriptor.npm {
            let metadata = self.registry.package_metadata(package).await?;
            // The registry's latest dist-tag beats the git tag
            if let Some(latest) = metadata.latest_version {
                card.version = Some(latest);
                card.version_source = Some(VersionSource::Npm);
            }
            card.npm_url = Some(npm_package_url(package));
        }

        if card.version.is_none() {
            card.unreleased = true;
            card.version_source = Some(VersionSource::Unreleased);
        }

        Ok(card)
    }
}
