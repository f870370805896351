//! HTTP client abstraction for testability
//!
//! Both external services (routing and geocoding) are plain JSON-over-GET
//! APIs. They talk to the network through [`AsyncHttpClient`] so tests can
//! substitute canned responses.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, trace, warn};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default User-Agent string for HTTP requests.
///
/// Nominatim's usage policy rejects requests that do not identify the
/// application.
pub const DEFAULT_USER_AGENT: &str = concat!("walkflag/", env!("CARGO_PKG_VERSION"));

/// Errors that can occur during an HTTP exchange.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HttpError {
    /// The client could not be constructed
    #[error("Failed to create HTTP client: {0}")]
    Build(String),
    /// Connection, timeout or other transport failure
    #[error("Request failed: {0}")]
    Request(String),
    /// The server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
    /// The response body could not be read
    #[error("Failed to read response: {0}")]
    Body(String),
}

/// Trait for asynchronous HTTP client operations.
pub trait AsyncHttpClient: Send + Sync {
    /// Performs an async HTTP GET request.
    ///
    /// # Returns
    ///
    /// The response body as bytes, or an error for transport failures and
    /// non-success status codes.
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, HttpError>> + Send;
}

/// Async HTTP client implementation using reqwest.
#[derive(Clone)]
pub struct AsyncReqwestClient {
    client: reqwest::Client,
}

impl AsyncReqwestClient {
    /// Creates a new client with the default timeout and User-Agent.
    pub fn new() -> Result<Self, HttpError> {
        Self::with_options(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Creates a new client with a custom timeout and User-Agent.
    pub fn with_options(timeout: Duration, user_agent: &str) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .build()
            .map_err(|e| HttpError::Build(e.to_string()))?;

        Ok(Self { client })
    }
}

impl AsyncHttpClient for AsyncReqwestClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        trace!(url = url, "HTTP GET request starting");

        let response = match self.client.get(url).send().await {
            Ok(resp) => {
                debug!(
                    url = url,
                    status = resp.status().as_u16(),
                    "HTTP response received"
                );
                resp
            }
            Err(e) => {
                warn!(
                    url = url,
                    error = %e,
                    is_connect = e.is_connect(),
                    is_timeout = e.is_timeout(),
                    "HTTP request failed"
                );
                return Err(HttpError::Request(e.to_string()));
            }
        };

        if !response.status().is_success() {
            return Err(HttpError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        match response.bytes().await {
            Ok(bytes) => {
                trace!(url = url, bytes = bytes.len(), "HTTP response body read");
                Ok(bytes.to_vec())
            }
            Err(e) => Err(HttpError::Body(e.to_string())),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Mock async HTTP client for testing.
    ///
    /// Replays queued responses in order, repeating the last one once the
    /// queue is down to a single entry, and records every requested URL.
    pub struct MockAsyncHttpClient {
        responses: Mutex<VecDeque<Result<Vec<u8>, HttpError>>>,
        requests: Mutex<Vec<String>>,
    }

    impl MockAsyncHttpClient {
        pub fn new(response: Result<Vec<u8>, HttpError>) -> Self {
            Self::with_sequence(vec![response])
        }

        pub fn json(body: &str) -> Self {
            Self::new(Ok(body.as_bytes().to_vec()))
        }

        pub fn with_sequence(responses: Vec<Result<Vec<u8>, HttpError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl AsyncHttpClient for MockAsyncHttpClient {
        async fn get(&self, url: &str) -> Result<Vec<u8>, HttpError> {
            self.requests.lock().unwrap().push(url.to_string());

            let mut responses = self.responses.lock().unwrap();
            if responses.len() > 1 {
                responses.pop_front().unwrap()
            } else {
                responses
                    .front()
                    .cloned()
                    .unwrap_or(Err(HttpError::Request("no response queued".to_string())))
            }
        }
    }

    #[tokio::test]
    async fn test_mock_async_client_success() {
        let mock = MockAsyncHttpClient::new(Ok(vec![1, 2, 3, 4]));

        let result = mock.get("http://example.com").await;
        assert_eq!(result.unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(mock.requests(), vec!["http://example.com".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_async_client_error() {
        let mock = MockAsyncHttpClient::new(Err(HttpError::Status {
            status: 503,
            url: "http://example.com".to_string(),
        }));

        let result = mock.get("http://example.com").await;
        assert!(matches!(result, Err(HttpError::Status { status: 503, .. })));
    }

    #[tokio::test]
    async fn test_mock_async_client_sequence() {
        let mock = MockAsyncHttpClient::with_sequence(vec![
            Ok(b"first".to_vec()),
            Ok(b"second".to_vec()),
        ]);

        assert_eq!(mock.get("a").await.unwrap(), b"first");
        assert_eq!(mock.get("b").await.unwrap(), b"second");
        assert_eq!(mock.get("c").await.unwrap(), b"second");
        assert_eq!(mock.requests().len(), 3);
    }

    #[test]
    fn test_default_user_agent_identifies_app() {
        assert!(DEFAULT_USER_AGENT.starts_with("walkflag/"));
    }

    #[test]
    fn test_reqwest_client_builds() {
        assert!(AsyncReqwestClient::new().is_ok());
    }

    #[test]
    fn test_status_error_message() {
        let e = HttpError::Status {
            status: 429,
            url: "https://nominatim.example/reverse".to_string(),
        };
        assert_eq!(e.to_string(), "HTTP 429 from https://nominatim.example/reverse");
    }
}
