pub mod client;
pub mod snapshot;
pub mod source;

pub use client::GitHubClient;
pub use snapshot::SnapshotSource;
pub use source::ProfileSource;
