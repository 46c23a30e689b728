use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid username: {0:?}")]
    InvalidUsername(String),

    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Errors caused by the caller's input rather than by the upstream fetch.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::MissingParameter(_) | Error::InvalidUsername(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_missing_parameter_is_client_error() {
        assert!(Error::MissingParameter("username").is_client_error());
        assert!(Error::InvalidUsername("../user".to_string()).is_client_error());
        assert!(!Error::UserNotFound("ghost".to_string()).is_client_error());
        assert!(!Error::GitHubApi("500".to_string()).is_client_error());
    }
}
