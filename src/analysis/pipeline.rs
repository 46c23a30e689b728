use std::sync::Arc;
use chrono::{DateTime, Utc};

use crate::analysis::aggregator::ProfileAggregator;
use crate::error::{Error, Result};
use crate::github::ProfileSource;
use crate::models::DeveloperSummary;

pub struct ProfilePipeline {
    source: Arc<dyn ProfileSource>,
    aggregator: ProfileAggregator,
}

impl ProfilePipeline {
    pub fn new(source: impl ProfileSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
            aggregator: ProfileAggregator::new(),
        }
    }

    pub async fn summarize(&self, username: &str) -> Result<DeveloperSummary> {
        self.summarize_at(username, Utc::now()).await
    }

    /// Fetches the profile, repositories and events concurrently and aggregates them
    /// against `now`. Any failed retrieval fails the whole summary.
    pub async fn summarize_at(
        &self,
        username: &str,
        now: DateTime<Utc>,
    ) -> Result<DeveloperSummary> {
        let username = username.trim();
        if username.is_empty() {
            return Err(Error::MissingParameter("username"));
        }
        if !is_valid_login(username) {
            return Err(Error::InvalidUsername(username.to_string()));
        }

        tracing::info!("Building summary for {} from {}", username, self.source.name());
        let (user, repos, events) = futures::try_join!(
            self.source.fetch_user(username),
            self.source.fetch_repos(username),
            self.source.fetch_events(username),
        )?;

        tracing::info!(
            "Fetched {} repositories and {} events for {}",
            repos.len(),
            events.len(),
            username
        );

        Ok(self.aggregator.aggregate(&user, &repos, &events, now))
    }
}

/// GitHub logins: 1 to 39 ASCII letters, digits or hyphens.
fn is_valid_login(username: &str) -> bool {
    username.len() <= 39 && username.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
