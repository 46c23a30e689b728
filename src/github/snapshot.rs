use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::github::source::ProfileSource;
use crate::models::{Event, GitHubUser, Repository};

pub const USER_FILE: &str = "user.json";
pub const REPOS_FILE: &str = "repos.json";
pub const EVENTS_FILE: &str = "events.json";

/// Saved API responses in a directory: `user.json`, `repos.json` and `events.json`.
///
/// The username passed to the fetch methods is ignored; the directory holds one profile.
pub struct SnapshotSource {
    dir: PathBuf,
}

impl SnapshotSource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    async fn read<T: DeserializeOwned>(&self, file: &str) -> Result<T> {
        let path = self.dir.join(file);
        tracing::debug!("Reading snapshot: {}", path.display());
        let bytes = tokio::fs::read(&path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl ProfileSource for SnapshotSource {
    async fn fetch_user(&self, _username: &str) -> Result<GitHubUser> {
        self.read(USER_FILE).await
    }

    async fn fetch_repos(&self, _username: &str) -> Result<Vec<Repository>> {
        self.read(REPOS_FILE).await
    }

    async fn fetch_events(&self, _username: &str) -> Result<Vec<Event>> {
        self.read(EVENTS_FILE).await
    }

    fn name(&self) -> &str {
        "snapshot"
    }
}
