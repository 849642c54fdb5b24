// API client implementations for the two upstream services
pub mod github;
pub mod npm;

// Re-export common types
pub use github::{GitHubClient, GitHubError, GitHubLicense, GitHubRepo, GitHubTag};
pub use npm::{NpmClient, NpmError, NpmPackage};
