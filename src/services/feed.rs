use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while fetching the customer feed
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Feed returned status {status} for {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Feed body from {url} is not valid UTF-8")]
    InvalidEncoding { url: String },
}

/// HTTP client for the line-delimited customer feed
///
/// Fetches the whole document in one request and splits it into lines.
/// Any transport failure is returned to the caller; there are no retries.
pub struct CustomerFeed {
    url: String,
    client: Client,
}

impl CustomerFeed {
    /// Create a feed client with the given request timeout
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::RequestError`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(url: impl Into<String>, timeout_secs: u64) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the feed and return its lines in order
    ///
    /// Lines are split on `\n` with any trailing `\r` removed.
    pub async fn fetch_lines(&self) -> Result<Vec<String>, FeedError> {
        tracing::debug!("Fetching customer feed from: {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Failed to fetch customer feed from {}: {}", self.url, status);
            return Err(FeedError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.bytes().await?;
        let text = std::str::from_utf8(&body).map_err(|_| FeedError::InvalidEncoding {
            url: self.url.clone(),
        })?;

        let lines: Vec<String> = text.lines().map(str::to_string).collect();

        tracing::info!("Fetched {} lines from customer feed", lines.len());

        Ok(lines)
    }
}
