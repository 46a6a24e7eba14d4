//! # Outbound Ports
//!
//! The HTTP capability the acquisition protocol depends on, plus the mock
//! used by the test suites.

use std::collections::HashMap;
use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;

/// HTTP fetch failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport-level failure (connect, timeout, protocol).
    #[error("request to {url} failed: {message}")]
    Transport {
        /// Requested URL.
        url: String,
        /// Underlying failure description.
        message: String,
    },

    /// The endpoint answered with a non-success status.
    #[error("request to {url} returned status {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
}

/// Fetches a URL and returns the raw response body.
///
/// The protocol layer decodes bodies itself so that malformed payloads can
/// be reported with the raw text attached.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// GET `url` and return the response body bytes.
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

// =============================================================================
// Mock Implementation for Testing
// =============================================================================

/// Scripted [`HttpFetcher`] for tests, keyed by exact URL.
///
/// Queued responses pop in order and the last one repeats, mirroring
/// [`shared_types::MockCommandExecutor`].
#[derive(Default)]
pub struct MockFetcher {
    responses: Mutex<HashMap<String, VecDeque<Result<Vec<u8>, FetchError>>>>,
}

impl MockFetcher {
    /// Create an empty mock; unmatched URLs fail the test.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response body for `url`.
    pub fn stub(&self, url: &str, body: impl Into<Vec<u8>>) {
        self.responses
            .lock()
            .expect("mock lock")
            .entry(url.to_string())
            .or_default()
            .push_back(Ok(body.into()));
    }

    /// Queue a fetch failure for `url`.
    pub fn stub_error(&self, url: &str, error: FetchError) {
        self.responses
            .lock()
            .expect("mock lock")
            .entry(url.to_string())
            .or_default()
            .push_back(Err(error));
    }
}

#[async_trait]
impl HttpFetcher for MockFetcher {
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut responses = self.responses.lock().expect("mock lock");
        let queue = responses
            .get_mut(url)
            .unwrap_or_else(|| panic!("no stub registered for URL: {url}"));
        if queue.len() > 1 {
            queue.pop_front().expect("nonempty queue")
        } else {
            queue
                .front()
                .cloned()
                .unwrap_or_else(|| panic!("stub {url:?} has no responses"))
        }
    }
}
