// npm provider implementation - bridges the registry client with PackageRegistry
use async_trait::async_trait;
use repocards_api::NpmClient;

use crate::{models::PackageMetadata, providers::PackageRegistry, Error, Result};

/// Wrapper around NpmClient that implements PackageRegistry
pub struct NpmProvider {
    client: NpmClient,
}

impl NpmProvider {
    pub fn new() -> Self {
        Self {
            client: NpmClient::new(),
        }
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: NpmClient::with_base_url(base_url),
        }
    }
}

impl Default for NpmProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PackageRegistry for NpmProvider {
    async fn package_metadata(&self, package: &str) -> Result<PackageMetadata> {
        let package = self
            .client
            .get_package(package)
            .await
            .map_err(|e| Error::ApiError(e.to_string()))?;

        Ok(PackageMetadata {
            name: package.name,
            description: package.description,
            latest_version: package.dist_tags.latest,
        })
    }
}
