use crate::remote::error::RemoteError;
use log::{debug, warn};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;

/// Attempts made for every remote resource before it is given up on.
pub const FETCH_ATTEMPTS: u32 = 3;

/// Retrieves the text published at a URL.
///
/// Implementations make a single attempt; retrying is done by [`fetch_with_retry`].
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, RemoteError>> + Send;
}

/// [`Fetcher`] over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RemoteError::ClientBuild)?;
        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, RemoteError> {
        debug!("Requesting {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RemoteError::NetworkRequest(url.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                return Err(if let Some(status) = e.status() {
                    RemoteError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    RemoteError::NetworkRequest(url.to_string(), e)
                });
            }
        };

        response
            .text()
            .await
            .map_err(|e| RemoteError::NetworkRequest(url.to_string(), e))
    }
}

/// Fetches `url`, trying up to `attempts` times (at least once).
///
/// Each attempt is independent. After the last failure the error is wrapped in
/// [`RemoteError::RetriesExhausted`].
pub async fn fetch_with_retry<F: Fetcher>(
    fetcher: &F,
    url: &str,
    attempts: u32,
) -> Result<String, RemoteError> {
    let attempts = attempts.max(1);
    let mut attempt = 1;
    loop {
        match fetcher.fetch(url).await {
            Ok(text) => return Ok(text),
            Err(e) if attempt < attempts => {
                warn!(
                    "Retrieval error on {} (attempt {}/{}): {}. Trying again",
                    url, attempt, attempts, e
                );
                attempt += 1;
            }
            Err(e) => {
                warn!("Retrieval error on {}, giving up after {} attempts: {}", url, attempts, e);
                return Err(RemoteError::RetriesExhausted {
                    url: url.to_string(),
                    attempts,
                    source: Box::new(e),
                });
            }
        }
    }
}
