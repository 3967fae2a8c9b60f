/// Network module
///
/// This module handles:
/// - Fetching the product catalog (catalog.rs)
/// - Downloading and downsizing product images (thumbnail.rs)

pub mod catalog;
pub mod thumbnail;

use std::time::Duration;
use tracing::warn;

/// Build the shared HTTP client
///
/// Falls back to a default client (without the timeout) if the builder
/// rejects the settings.
pub fn client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("catalog-browser/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|err| {
            warn!(%err, ?timeout, "http client builder failed, using defaults without timeout");
            reqwest::Client::new()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_with_timeout() {
        // Building must not need a running runtime; requests do
        let _client = client(Duration::from_secs(1));
    }
}
