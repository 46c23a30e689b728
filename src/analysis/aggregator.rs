use chrono::{DateTime, Datelike, Duration, Months, Utc};

use crate::analysis::ranking::{top_n_by, FirstSeenCounter};
use crate::models::{DeveloperSummary, Event, GitHubUser, LanguageLevel, RepoStats, Repository};

pub const TOP_LANGUAGES: usize = 5;
pub const TOP_REPOS: usize = 5;

/// Turns a profile, its repositories and its recent events into a [`DeveloperSummary`].
///
/// Stateless: every call works only on its arguments, and the same inputs with the same
/// `now` always give the same summary.
pub struct ProfileAggregator {
    top_languages: usize,
    top_repos: usize,
}

impl ProfileAggregator {
    pub fn new() -> Self {
        Self {
            top_languages: TOP_LANGUAGES,
            top_repos: TOP_REPOS,
        }
    }

    pub fn aggregate(
        &self,
        user: &GitHubUser,
        repos: &[Repository],
        events: &[Event],
        now: DateTime<Utc>,
    ) -> DeveloperSummary {
        let commit_count: u32 = events.iter().map(Event::commit_count).sum();
        let pr_count = events.iter().filter(|e| e.is_pull_request()).count() as u32;

        let mut languages = FirstSeenCounter::new();
        let mut star_count: u64 = 0;
        let repo_stats: Vec<RepoStats> = repos
            .iter()
            .map(|repo| {
                if let Some(language) = repo.language.as_deref() {
                    languages.add(language);
                }
                star_count += u64::from(repo.stargazers_count);
                RepoStats {
                    name: repo.name.clone(),
                    stars: repo.stargazers_count,
                    forks: repo.forks_count,
                    watchers: repo.watchers_count,
                }
            })
            .collect();

        let top_languages = self.language_levels(languages, repos.len());
        let top_repos = top_n_by(repo_stats, self.top_repos, |r| r.stars);
        let contributions_last_year = count_since(events, one_year_before(now));

        tracing::debug!(
            login = %user.login,
            commits = commit_count,
            pull_requests = pr_count,
            repos = repos.len(),
            stars = star_count,
            "Aggregated profile"
        );

        DeveloperSummary {
            name: user.display_name().to_string(),
            avatar_url: user.avatar_url.clone(),
            bio: user.bio.clone(),
            company: user.company.clone(),
            location: user.location.clone(),
            public_repos: user.public_repos,
            followers: user.followers,
            following: user.following,
            created_at: user.created_at,
            top_languages,
            commit_count,
            pr_count,
            repo_count: repos.len() as u32,
            star_count,
            contributions_last_year,
            top_repos,
        }
    }

    fn language_levels(
        &self,
        languages: FirstSeenCounter,
        repo_count: usize,
    ) -> Vec<LanguageLevel> {
        if repo_count == 0 {
            return Vec::new();
        }

        top_n_by(languages.into_entries(), self.top_languages, |(_, count)| *count)
            .into_iter()
            .map(|(name, count)| LanguageLevel {
                name,
                level: ((count as f64 / repo_count as f64) * 100.0).round() as u32,
            })
            .collect()
    }
}

impl Default for ProfileAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Same day and time one calendar year earlier. Feb 29 has no counterpart in the
/// previous year and rolls forward to Mar 1.
pub fn one_year_before(now: DateTime<Utc>) -> DateTime<Utc> {
    let shifted = now
        .checked_sub_months(Months::new(12))
        .unwrap_or_else(|| now - Duration::days(365));

    if now.month() == 2 && now.day() == 29 {
        shifted + Duration::days(1)
    } else {
        shifted
    }
}

/// Events strictly newer than `cutoff`. Events without a timestamp are skipped.
fn count_since(events: &[Event], cutoff: DateTime<Utc>) -> u32 {
    events
        .iter()
        .filter(|e| e.created_at.is_some_and(|ts| ts > cutoff))
        .count() as u32
}
