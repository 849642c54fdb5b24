// Core business logic lives here - the brain of the operation
pub mod catalog;
pub mod config;
pub mod enrich;
pub mod error;
pub mod export;
pub mod models;
pub mod providers;

pub use config::Config;
pub use enrich::CardFetcher;
pub use error::Error;
pub use export::{ExportFormat, Exporter};
pub use models::{ProjectDescriptor, RepoCard, VersionSource};

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
