pub mod config;
pub mod error;
pub mod models;
pub mod github;
pub mod analysis;
pub mod api;
pub mod report;

pub use config::{ClientConfig, Config, ServerConfig};
pub use error::{Error, Result};
pub use github::{GitHubClient, ProfileSource, SnapshotSource};
pub use analysis::{ProfileAggregator, ProfilePipeline};
pub use models::DeveloperSummary;
