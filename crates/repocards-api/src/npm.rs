use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

const NPM_REGISTRY_BASE: &str = "https://registry.npmjs.org";

const USER_AGENT: &str = "repocards/0.1.0";

#[derive(Error, Debug)]
pub enum NpmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    ParseError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NpmError>;

/// Client for the public npm registry.
///
/// The registry is anonymous; the GitHub token never travels here.
pub struct NpmClient {
    client: reqwest::Client,
    base_url: String,
}

impl NpmClient {
    pub fn new() -> Self {
        Self::with_base_url(NPM_REGISTRY_BASE.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        Self { client, base_url }
    }

    /// Fetch package metadata (description and dist-tags) by name
    pub async fn get_package(&self, name: &str) -> Result<NpmPackage> {
        let url = format!("{}/{}", self.base_url, Self::encode_package_name(name));

        let response = self.client.get(&url).send().await?;

        if response.status() == 404 {
            return Err(NpmError::NotFound(name.to_string()));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("npm registry returned status {} for {}", status, url);
            return Err(NpmError::RequestFailed(format!(
                "Status {}: {}",
                status, body
            )));
        }

        let body = response.text().await?;
        let package: NpmPackage = serde_json::from_str(&body)?;
        Ok(package)
    }

    /// Scoped packages keep the `@` but need the slash encoded:
    /// `@scope/name` -> `@scope%2Fname`
    fn encode_package_name(name: &str) -> String {
        if name.starts_with('@') {
            name.replace('/', "%2F")
        } else {
            name.to_string()
        }
    }
}

impl Default for NpmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpmPackage {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "dist-tags", default)]
    pub dist_tags: NpmDistTags,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NpmDistTags {
    pub latest: Option<String>,
}
