use crate::{FetchRequest, RelayError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Transport boundary for metadata requests.
///
/// Any failure (connection error, timeout, non-2xx status, empty body) is
/// reported as `None`. Implementations never return errors to the caller.
#[async_trait]
pub trait FetchGateway: Send + Sync {
    async fn fetch(&self, request: &FetchRequest) -> Option<Vec<u8>>;
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("art-relay/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 10,
        }
    }
}

impl FetcherConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Result<Self, RelayError> {
        Self::new_with_config(&FetcherConfig::default())
    }

    pub fn new_with_config(config: &FetcherConfig) -> Result<Self, RelayError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| RelayError::Config(format!("failed to create HTTP client: {e}")))?;

        debug!("Fetcher initialized");
        Ok(Fetcher { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FetchGateway for Fetcher {
    #[instrument(level = "debug", skip(self, request), fields(url = %request.url))]
    async fn fetch(&self, request: &FetchRequest) -> Option<Vec<u8>> {
        let mut builder = self.client.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                if e.is_timeout() {
                    warn!(error = %e, "Metadata request timed out");
                } else {
                    warn!(error = %e, "Failed to send metadata request");
                }
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Metadata endpoint returned error status");
            return None;
        }

        match response.bytes().await {
            Ok(body) if body.is_empty() => {
                debug!("Metadata endpoint returned empty body");
                None
            }
            Ok(body) => {
                debug!(content_length = body.len(), "Fetched metadata");
                Some(body.to_vec())
            }
            Err(e) => {
                warn!(error = %e, "Failed to read metadata response body");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher() -> Fetcher {
        Fetcher::new_with_config(&FetcherConfig {
            timeout_secs: 1,
            ..FetcherConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_success_with_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/submissions/7/view"))
            .and(header("X-Weasyl-API-Key", "k"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"title\":\"t\"}"))
            .mount(&server)
            .await;

        let request = FetchRequest::get(format!("{}/api/submissions/7/view", server.uri()))
            .with_header("X-Weasyl-API-Key", "k");
        let body = fetcher().fetch(&request).await.unwrap();
        assert_eq!(body, b"{\"title\":\"t\"}");
    }

    #[tokio::test]
    async fn test_error_status_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("{\"error\":\"challenge\"}"))
            .mount(&server)
            .await;

        let request = FetchRequest::get(format!("{}/submission/1", server.uri()));
        assert!(fetcher().fetch(&request).await.is_none());
    }

    #[tokio::test]
    async fn test_empty_body_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let request = FetchRequest::get(format!("{}/submission/1", server.uri()));
        assert!(fetcher().fetch(&request).await.is_none());
    }

    #[tokio::test]
    async fn test_timeout_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("{}")
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let request = FetchRequest::get(format!("{}/submission/1", server.uri()));
        assert!(fetcher().fetch(&request).await.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_none() {
        let request = FetchRequest::get("http://127.0.0.1:1/submission/1");
        assert!(fetcher().fetch(&request).await.is_none());
    }
}
