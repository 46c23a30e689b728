use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;

/// Profile resource from `GET /users/{username}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub avatar_url: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub public_repos: u32,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub followers: u32,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub following: u32,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub created_at: Option<DateTime<Utc>>,
}

impl GitHubUser {
    /// Display name, falling back to the login when the profile has none.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.login)
    }
}

/// Entry of `GET /users/{username}/repos`. Missing, null or mistyped fields read as
/// their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Repository {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub stargazers_count: u32,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub forks_count: u32,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub watchers_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_name_falls_back_to_login() {
        let user: GitHubUser = serde_json::from_value(json!({"login": "octocat"})).unwrap();
        assert_eq!(user.display_name(), "octocat");

        let user: GitHubUser =
            serde_json::from_value(json!({"login": "octocat", "name": ""})).unwrap();
        assert_eq!(user.display_name(), "octocat");

        let user: GitHubUser =
            serde_json::from_value(json!({"login": "octocat", "name": "The Octocat"})).unwrap();
        assert_eq!(user.display_name(), "The Octocat");
    }

    #[test]
    fn test_repository_tolerates_missing_fields() {
        let repo: Repository = serde_json::from_value(json!({
            "name": "hello-world",
            "language": null,
            "private": false
        }))
        .unwrap();

        assert_eq!(repo.name, "hello-world");
        assert!(repo.language.is_none());
        assert_eq!(repo.stargazers_count, 0);
        assert_eq!(repo.forks_count, 0);
        assert_eq!(repo.watchers_count, 0);
    }

    #[test]
    fn test_null_counter_does_not_fail_the_list() {
        let repos: Vec<Repository> = serde_json::from_value(json!([
            {"name": "ok", "language": "Go", "stargazers_count": 3, "forks_count": 1},
            {"name": "bad", "language": 42, "stargazers_count": null, "forks_count": "x"},
            {"name": null, "stargazers_count": 5}
        ]))
        .unwrap();

        assert_eq!(repos.len(), 3);
        assert_eq!(repos[0].stargazers_count, 3);
        assert_eq!(repos[1].stargazers_count, 0);
        assert_eq!(repos[1].forks_count, 0);
        assert!(repos[1].language.is_none());
        assert_eq!(repos[2].name, "");
        assert_eq!(repos[2].stargazers_count, 5);
    }

    #[test]
    fn test_user_with_null_fields() {
        let user: GitHubUser = serde_json::from_value(json!({
            "login": "octocat",
            "name": null,
            "avatar_url": null,
            "followers": null,
            "public_repos": "8",
            "created_at": "not a date"
        }))
        .unwrap();

        assert_eq!(user.display_name(), "octocat");
        assert_eq!(user.avatar_url, "");
        assert_eq!(user.followers, 0);
        assert_eq!(user.public_repos, 0);
        assert!(user.created_at.is_none());
    }
}
