use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Statistics card for one developer, recomputed on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperSummary {
    pub name: String,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub created_at: Option<DateTime<Utc>>,
    pub top_languages: Vec<LanguageLevel>,
    pub commit_count: u32,
    pub pr_count: u32,
    pub repo_count: u32,
    pub star_count: u64,
    /// Events newer than one year ago. Approximate: the events feed is capped
    /// and only covers recent public activity.
    pub contributions_last_year: u32,
    pub top_repos: Vec<RepoStats>,
}

/// Share of repositories whose primary language is `name`, in whole percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageLevel {
    pub name: String,
    pub level: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoStats {
    pub name: String,
    pub stars: u32,
    pub forks: u32,
    pub watchers: u32,
}
