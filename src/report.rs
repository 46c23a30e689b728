use clap::ValueEnum;

use crate::error::Result;
use crate::models::DeveloperSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Markdown,
    Json,
}

pub fn render(summary: &DeveloperSummary, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(summary)?,
        OutputFormat::Markdown => format_markdown(summary),
        OutputFormat::Text => format_text(summary),
    })
}

pub fn format_text(summary: &DeveloperSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n=== Developer Card: {} ===\n\n", summary.name));

    if let Some(ref bio) = summary.bio {
        output.push_str(&format!("{}\n", bio));
    }
    if let Some(ref company) = summary.company {
        output.push_str(&format!("Company: {}\n", company));
    }
    if let Some(ref location) = summary.location {
        output.push_str(&format!("Location: {}\n", location));
    }
    if let Some(created_at) = summary.created_at {
        output.push_str(&format!("Joined: {}\n", created_at.format("%Y-%m-%d")));
    }
    output.push_str(&format!(
        "Followers: {}  Following: {}  Public repos: {}\n\n",
        summary.followers, summary.following, summary.public_repos
    ));

    output.push_str(&format!("Commits: {}\n", summary.commit_count));
    output.push_str(&format!("Pull requests: {}\n", summary.pr_count));
    output.push_str(&format!("Repositories: {}\n", summary.repo_count));
    output.push_str(&format!("Stars: {}\n", summary.star_count));
    output.push_str(&format!(
        "Contributions (last year, approx.): {}\n",
        summary.contributions_last_year
    ));

    if !summary.top_languages.is_empty() {
        output.push_str("\nTop Languages:\n");
        for lang in &summary.top_languages {
            let bar = "#".repeat((lang.level as usize).div_ceil(5));
            output.push_str(&format!("  {:<16} {:>3}% {}\n", lang.name, lang.level, bar));
        }
    }

    if !summary.top_repos.is_empty() {
        output.push_str("\nTop Repositories:\n");
        for (rank, repo) in summary.top_repos.iter().enumerate() {
            output.push_str(&format!(
                "  {}. {} (stars: {}, forks: {}, watchers: {})\n",
                rank + 1,
                repo.name,
                repo.stars,
                repo.forks,
                repo.watchers
            ));
        }
    }

    output
}

pub fn format_markdown(summary: &DeveloperSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {}\n\n", summary.name));

    if let Some(ref bio) = summary.bio {
        output.push_str(&format!("> {}\n\n", bio));
    }

    output.push_str("## Activity\n\n");
    output.push_str("| Metric | Value |\n|--------|-------|\n");
    output.push_str(&format!("| Commits | {} |\n", summary.commit_count));
    output.push_str(&format!("| Pull Requests | {} |\n", summary.pr_count));
    output.push_str(&format!("| Repositories | {} |\n", summary.repo_count));
    output.push_str(&format!("| Stars | {} |\n", summary.star_count));
    output.push_str(&format!(
        "| Contributions (last year, approx.) | {} |\n",
        summary.contributions_last_year
    ));
    output.push_str(&format!("| Followers | {} |\n", summary.followers));

    if !summary.top_languages.is_empty() {
        output.push_str("\n## Top Languages\n\n");
        output.push_str("| Language | Share |\n|----------|-------|\n");
        for lang in &summary.top_languages {
            output.push_str(&format!("| {} | {}% |\n", lang.name, lang.level));
        }
    }

    if !summary.top_repos.is_empty() {
        output.push_str("\n## Top Repositories\n\n");
        output.push_str("| Repository | Stars | Forks | Watchers |\n");
        output.push_str("|------------|-------|-------|----------|\n");
        for repo in &summary.top_repos {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                repo.name, repo.stars, repo.forks, repo.watchers
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LanguageLevel, RepoStats};

    fn summary() -> DeveloperSummary {
        DeveloperSummary {
            name: "Mona Lisa".to_string(),
            avatar_url: String::new(),
            bio: Some("Builds things".to_string()),
            company: None,
            location: Some("Lisbon".to_string()),
            public_repos: 4,
            followers: 12,
            following: 3,
            created_at: None,
            top_languages: vec![LanguageLevel {
                name: "Rust".to_string(),
                level: 75,
            }],
            commit_count: 18,
            pr_count: 2,
            repo_count: 4,
            star_count: 31,
            contributions_last_year: 20,
            top_repos: vec![RepoStats {
                name: "engine".to_string(),
                stars: 30,
                forks: 2,
                watchers: 30,
            }],
        }
    }

    #[test]
    fn test_text_report() {
        let text = format_text(&summary());
        assert!(text.contains("=== Developer Card: Mona Lisa ==="));
        assert!(text.contains("Location: Lisbon"));
        assert!(!text.contains("Company:"));
        assert!(text.contains("Commits: 18"));
        assert!(text.contains("  Rust              75% ###############"));
        assert!(text.contains("1. engine (stars: 30, forks: 2, watchers: 30)"));
    }

    #[test]
    fn test_markdown_report() {
        let markdown = format_markdown(&summary());
        assert!(markdown.starts_with("# Mona Lisa\n\n> Builds things"));
        assert!(markdown.contains("| Stars | 31 |"));
        assert!(markdown.contains("| Rust | 75% |"));
        assert!(markdown.contains("| engine | 30 | 2 | 30 |"));
    }

    #[test]
    fn test_json_report_uses_wire_names() {
        let json = render(&summary(), OutputFormat::Json).unwrap();
        assert!(json.contains("\"contributionsLastYear\": 20"));
        assert!(json.contains("\"topRepos\""));
    }
}
