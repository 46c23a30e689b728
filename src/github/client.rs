use async_trait::async_trait;
use reqwest::{header, Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::github::source::ProfileSource;
use crate::models::{Event, GitHubUser, Repository};

/// Unauthenticated-by-default GitHub REST client. Reads the first page of each
/// collection only.
pub struct GitHubClient {
    client: Client,
    base_url: Url,
    per_page: u32,
}

impl GitHubClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            Error::Config(format!("Invalid GitHub API URL {}: {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "Invalid GitHub API URL {}: not a base URL",
                config.base_url
            )));
        }

        let mut headers = header::HeaderMap::new();
        if let Some(token) = &config.token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!("devcard/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url,
            per_page: config.per_page,
        })
    }

    /// `{base}/users/{username}/{rest..}`. The username is pushed as a single
    /// percent-encoded segment, so it can never leave the `/users/` subtree.
    fn user_endpoint(&self, username: &str, rest: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("users").push(username).extend(rest);
        }
        url
    }

    pub fn user_url(&self, username: &str) -> Url {
        self.user_endpoint(username, &[])
    }

    pub fn repos_url(&self, username: &str) -> Url {
        let mut url = self.user_endpoint(username, &["repos"]);
        url.query_pairs_mut()
            .append_pair("per_page", &self.per_page.to_string())
            .append_pair("sort", "updated");
        url
    }

    pub fn events_url(&self, username: &str) -> Url {
        let mut url = self.user_endpoint(username, &["events"]);
        url.query_pairs_mut()
            .append_pair("per_page", &self.per_page.to_string());
        url
    }

    /// GETs `url` and decodes the body. A 404 maps to `UserNotFound` when
    /// `not_found_user` is given; any other non-success status is a `GitHubApi` error.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        what: &str,
        not_found_user: Option<&str>,
    ) -> Result<T> {
        tracing::debug!("Fetching: {}", url);
        let response = self.client.get(url).send().await?;

        if let (StatusCode::NOT_FOUND, Some(username)) = (response.status(), not_found_user) {
            return Err(Error::UserNotFound(username.to_string()));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi(format!(
                "Failed to fetch {}: {} - {}",
                what, status, body
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl ProfileSource for GitHubClient {
    async fn fetch_user(&self, username: &str) -> Result<GitHubUser> {
        tracing::info!("Fetching user: {}", username);
        self.get_json(
            self.user_url(username),
            &format!("user {}", username),
            Some(username),
        )
        .await
    }

    async fn fetch_repos(&self, username: &str) -> Result<Vec<Repository>> {
        tracing::info!("Fetching repositories for: {}", username);
        let repos: Vec<Repository> = self
            .get_json(
                self.repos_url(username),
                &format!("repositories of {}", username),
                None,
            )
            .await?;
        tracing::debug!("Received {} repositories", repos.len());
        Ok(repos)
    }

    async fn fetch_events(&self, username: &str) -> Result<Vec<Event>> {
        tracing::info!("Fetching events for: {}", username);
        let events: Vec<Event> = self
            .get_json(
                self.events_url(username),
                &format!("events of {}", username),
                None,
            )
            .await?;
        tracing::debug!("Received {} events", events.len());
        Ok(events)
    }

    fn name(&self) -> &str {
        "github"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_urls() {
        let client = GitHubClient::new(&ClientConfig::default()).unwrap();

        assert_eq!(
            client.user_url("octocat").as_str(),
            "https://api.github.com/users/octocat"
        );
        assert_eq!(
            client.repos_url("octocat").as_str(),
            "https://api.github.com/users/octocat/repos?per_page=100&sort=updated"
        );
        assert_eq!(
            client.events_url("octocat").as_str(),
            "https://api.github.com/users/octocat/events?per_page=100"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_and_prefix() {
        let config = ClientConfig {
            base_url: "http://localhost:9000/".to_string(),
            token: Some("ghp_example".to_string()),
            per_page: 30,
            timeout_secs: 5,
        };
        let client = GitHubClient::new(&config).unwrap();
        assert_eq!(
            client.events_url("someone").as_str(),
            "http://localhost:9000/users/someone/events?per_page=30"
        );

        let config = ClientConfig {
            base_url: "https://ghe.example.com/api/v3".to_string(),
            ..ClientConfig::default()
        };
        let client = GitHubClient::new(&config).unwrap();
        assert_eq!(
            client.user_url("someone").as_str(),
            "https://ghe.example.com/api/v3/users/someone"
        );
    }

    #[test]
    fn test_username_cannot_escape_users_path() {
        let client = GitHubClient::new(&ClientConfig::default()).unwrap();

        let repos = client.repos_url("../user");
        assert_eq!(repos.path(), "/users/..%2Fuser/repos");

        let request = client.client.get(repos).build().unwrap();
        assert!(request.url().path().starts_with("/users/"));
        assert_ne!(request.url().path(), "/user/repos");

        let user = client.user_url("a/b?c#d");
        assert_eq!(user.path(), "/users/a%2Fb%3Fc%23d");
        assert!(user.query().is_none());
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let config = ClientConfig {
            base_url: "not a url".to_string(),
            ..ClientConfig::default()
        };

        assert!(matches!(GitHubClient::new(&config), Err(Error::Config(_))));
    }

    #[test]
    fn test_token_with_newline_is_rejected() {
        let config = ClientConfig {
            token: Some("bad\ntoken".to_string()),
            ..ClientConfig::default()
        };

        assert!(matches!(
            GitHubClient::new(&config),
            Err(Error::InvalidHeader(_))
        ));
    }
}
