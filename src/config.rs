use crate::error::{Error, Result};
use std::env;
use std::str::FromStr;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub caps `per_page` at 100.
pub const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone)]
pub struct Config {
    pub github_api_url: String,
    pub github_token: Option<String>,
    pub per_page: u32,
    pub request_timeout_secs: u64,
    pub bind_address: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let github_api_url = env::var("GITHUB_API_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let github_token = env::var("GITHUB_TOKEN")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let per_page = parse_var("GITHUB_PER_PAGE", MAX_PER_PAGE)?.clamp(1, MAX_PER_PAGE);
        let request_timeout_secs = parse_var("REQUEST_TIMEOUT_SECS", 30)?;

        let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_var("PORT", 8000)?;

        Ok(Self {
            github_api_url,
            github_token,
            per_page,
            request_timeout_secs,
            bind_address,
            port,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_api_url: DEFAULT_API_URL.to_string(),
            github_token: None,
            per_page: MAX_PER_PAGE,
            request_timeout_secs: 30,
            bind_address: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| Error::Config(format!("{} is not a valid value: {:?}", name, value))),
        Err(_) => Ok(default),
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub per_page: u32,
    pub timeout_secs: u64,
}

impl From<&Config> for ClientConfig {
    fn from(config: &Config) -> Self {
        Self {
            base_url: config.github_api_url.clone(),
            token: config.github_token.clone(),
            per_page: config.per_page,
            timeout_secs: config.request_timeout_secs,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
}

impl From<&Config> for ServerConfig {
    fn from(config: &Config) -> Self {
        Self {
            address: config.bind_address.clone(),
            port: config.port,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}
