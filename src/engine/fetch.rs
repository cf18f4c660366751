use reqwest::Client;
use std::time::Duration;

/// What came back from one page request. Failures are data, not errors:
/// the engine absorbs them and moves on.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Request succeeded and returned a non-blank body.
    Body(String),
    /// Request succeeded but the body was empty.
    Empty,
    /// Transport failure or non-success status, with a loggable reason.
    Failed(String),
}

/// HTTP transport seam. Implementations must never raise; network trouble
/// is reported through [`FetchOutcome::Failed`].
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome;
}

/// Production fetcher backed by reqwest, with a fixed per-request timeout.
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(timeout_sec: u64) -> Self {
        Self {
            client: Client::new(),
            timeout: Duration::from_secs(timeout_sec),
        }
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome {
        let response = match self.client.get(url).timeout(self.timeout).send().await {
            Ok(response) => response,
            Err(e) => return FetchOutcome::Failed(e.to_string()),
        };

        if !response.status().is_success() {
            return FetchOutcome::Failed(format!("status {}", response.status()));
        }

        match response.text().await {
            Ok(body) if body.trim().is_empty() => FetchOutcome::Empty,
            Ok(body) => FetchOutcome::Body(body),
            Err(e) => FetchOutcome::Failed(e.to_string()),
        }
    }
}
