use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Static catalog entry - names a project and where its metadata lives.
///
/// Author-maintained, fixed at build time. The enrichment pipeline only
/// reads these; everything dynamic ends up on the [`RepoCard`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    pub slug: String,
    /// GitHub repository as "owner/name"
    pub repo: String,
    /// npm package name, for projects published to the registry
    #[serde(default)]
    pub npm: Option<String>,
    pub description: String,
    /// Overrides the slug and the fetched repository name as the card title
    #[serde(default)]
    pub display_name: Option<String>,
}

impl ProjectDescriptor {
    pub fn new(slug: &str, repo: &str, description: &str) -> Self {
        Self {
            slug: slug.to_string(),
            repo: repo.to_string(),
            npm: None,
            description: description.to_string(),
            display_name: None,
        }
    }

    pub fn with_npm(mut self, package: &str) -> Self {
        self.npm = Some(package.to_string());
        self
    }

    pub fn with_display_name(mut self, name: &str) -> Self {
        self.display_name = Some(name.to_string());
        self
    }
}

/// Which upstream supplied the version string on a card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VersionSource {
    Npm,
    Git,
    Unreleased,
}

impl std::fmt::Display for VersionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionSource::Npm => write!(f, "npm"),
            VersionSource::Git => write!(f, "git"),
            VersionSource::Unreleased => write!(f, "unreleased"),
        }
    }
}

/// Display card - the star of the show
///
/// One card per catalog entry, rebuilt from live data on every site build.
/// Title and description always survive; everything else is best-effort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoCard {
    pub title: String,
    pub description: String,
    pub version: Option<String>,
    /// No version could be determined from any source
    #[serde(default)]
    pub unreleased: bool,
    pub version_source: Option<VersionSource>,
    pub stars: Option<u32>,
    /// Time of the last push, not GitHub's metadata `updated_at`
    pub last_updated: Option<DateTime<Utc>>,
    pub github_url: Option<String>,
    pub npm_url: Option<String>,
    pub main_url: Option<String>,
    pub primary_language: Option<String>,
    pub license: Option<String>,
    pub open_issues: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl RepoCard {
    /// Starting point for enrichment: descriptor data only, no version yet
    pub fn seed(descriptor: &ProjectDescriptor) -> Self {
        Self {
            title: descriptor
                .display_name
                .clone()
                .unwrap_or_else(|| descriptor.slug.clone()),
            description: descriptor.description.clone(),
            version: None,
            unreleased: false,
            version_source: Some(VersionSource::Unreleased),
            stars: None,
            last_updated: None,
            github_url: None,
            npm_url: None,
            main_url: None,
            primary_language: None,
            license: None,
            open_issues: None,
            tags: Vec::new(),
        }
    }

    /// Minimal card built from the descriptor alone, with links derived
    /// directly from the repo and package names. Carries no version fields.
    pub fn fallback(descriptor: &ProjectDescriptor) -> Self {
        Self {
            title: descriptor
                .display_name
                .clone()
                .unwrap_or_else(|| descriptor.slug.clone()),
            description: descriptor.description.clone(),
            version: None,
            unreleased: false,
            version_source: None,
            stars: None,
            last_updated: None,
            github_url: Some(github_repo_url(&descriptor.repo)),
            npm_url: descriptor.npm.as_deref().map(npm_package_url),
            main_url: None,
            primary_language: None,
            license: None,
            open_issues: None,
            tags: Vec::new(),
        }
    }
}

/// Repository metadata in card-facing form, converted from the raw API model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoInfo {
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub homepage_url: Option<String>,
    pub stars: u32,
    pub open_issues: u32,
    pub language: Option<String>,
    pub topics: Vec<String>,
    pub license: Option<String>,
    pub pushed_at: DateTime<Utc>,
}

/// Package metadata in card-facing form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageMetadata {
    pub name: String,
    pub description: Option<String>,
    pub latest_version: Option<String>,
}

pub fn github_repo_url(repo: &str) -> String {
    format!("https://github.com/{}", repo)
}

pub fn npm_package_url(package: &str) -> String {
    format!("https://npmjs.com/{}", package)
}
