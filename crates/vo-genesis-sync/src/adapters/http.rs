//! # HTTP Adapter
//!
//! reqwest-backed implementation of [`HttpFetcher`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::ports::{FetchError, HttpFetcher};

/// [`HttpFetcher`] backed by a shared reqwest client.
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    /// Build a fetcher with the given timeouts.
    pub fn new(request_timeout: Duration, connect_timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| FetchError::Transport {
                url: String::new(),
                message: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }

    fn transport_error(url: &str, e: &reqwest::Error) -> FetchError {
        let message = if e.is_connect() {
            format!("cannot connect: {e}")
        } else if e.is_timeout() {
            format!("timed out: {e}")
        } else {
            e.to_string()
        };
        FetchError::Transport {
            url: url.to_string(),
            message,
        }
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Self::transport_error(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Self::transport_error(url, &e))?;
        Ok(body.to_vec())
    }
}
