use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Event, GitHubUser, Repository};

/// The three independent retrievals a summary is built from.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_user(&self, username: &str) -> Result<GitHubUser>;
    async fn fetch_repos(&self, username: &str) -> Result<Vec<Repository>>;
    async fn fetch_events(&self, username: &str) -> Result<Vec<Event>>;
    fn name(&self) -> &str;
}
