use reqwest::Client;
use std::time::Duration;

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for upstream calls. One per pipeline run; do not share across runtimes.
#[must_use]
pub fn build_client() -> Client {
    Client::builder()
        .timeout(UPSTREAM_TIMEOUT)
        .build()
        .unwrap_or_else(|_| Client::new())
}
