/// Error types shared across the application
///
/// `FetchError` travels inside iced messages, so it is `Clone` and carries
/// rendered strings rather than the underlying error values.
use std::path::PathBuf;
use thiserror::Error;

/// Anything that can go wrong while loading the catalog or a product image
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed catalog: {0}")]
    Decode(String),
    #[error("image could not be decoded: {0}")]
    Image(String),
    #[error("background task failed: {0}")]
    Join(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::Status(status.as_u16()),
            None => FetchError::Http(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

impl From<tokio::task::JoinError> for FetchError {
    fn from(err: tokio::task::JoinError) -> Self {
        FetchError::Join(err.to_string())
    }
}

/// Configuration file problems
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_from_serde() {
        let err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let fetch: FetchError = err.into();
        assert!(matches!(fetch, FetchError::Decode(_)));
        assert!(fetch.to_string().starts_with("malformed catalog"));
    }

    #[test]
    fn test_status_message() {
        assert_eq!(
            FetchError::Status(503).to_string(),
            "server responded with status 503"
        );
    }
}
