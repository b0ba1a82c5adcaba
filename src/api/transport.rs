use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::error::OffError;

/// The slice of an HTTP response the lookup client actually consumes.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The one network capability the client depends on. Injected so tests can
/// substitute a canned transport without touching the network.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: Url) -> Result<RawResponse, OffError>;
}

/// reqwest-backed transport used by the CLI.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, OffError> {
        let http = Client::builder()
            .user_agent(concat!("off-cli/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: Url) -> Result<RawResponse, OffError> {
        let response = self.http.get(url).send().await.map_err(map_reqwest)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_reqwest)?;

        Ok(RawResponse { status, body })
    }
}

fn map_reqwest(e: reqwest::Error) -> OffError {
    if e.is_timeout() {
        OffError::Timeout
    } else {
        OffError::Network(e)
    }
}
