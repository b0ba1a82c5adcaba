pub mod product;
pub mod search;
pub mod transport;
pub mod wire;

use std::time::Duration;
use url::Url;

use crate::config::AppConfig;
use crate::error::OffError;
use crate::model::{Lookup, SearchResult};

use self::transport::{HttpTransport, Transport};

/// Client for the Open Food Facts HTTP API.
///
/// Every operation issues exactly one GET and keeps no state beyond the base
/// URL. A failed call never poisons a later one; callers retry by calling
/// again with the same input.
pub struct OffClient<T: Transport = HttpTransport> {
    transport: T,
    base_url: Url,
}

impl OffClient {
    pub fn new(config: &AppConfig) -> Result<Self, OffError> {
        let transport = HttpTransport::new(Duration::from_millis(config.timeout_ms))?;
        let base_url = Url::parse(&config.base_url())
            .map_err(|e| OffError::Config(format!("Invalid base URL: {}", e)))?;

        Ok(Self {
            transport,
            base_url,
        })
    }
}

impl<T: Transport> OffClient<T> {
    /// Client with a caller-supplied transport. Used by tests.
    pub fn with_transport(transport: T, base_url: Url) -> Self {
        Self {
            transport,
            base_url,
        }
    }

    /// Look up a single product by barcode.
    ///
    /// `Ok(Lookup::NotFound)` means the barcode is not in the database; that
    /// is a successful call with a negative answer, not an error.
    pub async fn product_by_barcode(&self, barcode: &str) -> Result<Lookup, OffError> {
        let barcode = barcode.trim();
        if barcode.is_empty() {
            return Err(OffError::InvalidInput);
        }

        let url = product::build_product_url(&self.base_url, barcode)?;
        tracing::debug!(%url, "Fetching product");

        let response = self.transport.get(url).await?;
        if !response.is_success() {
            return Err(OffError::UpstreamHttp(response.status));
        }

        product::parse_lookup(&response.body, barcode)
    }

    /// Free-text product search against the legacy search endpoint.
    ///
    /// An empty query is the "nothing typed yet" state and yields an empty
    /// result without touching the network.
    pub async fn search(&self, query: &str) -> Result<SearchResult, OffError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(SearchResult {
                query: String::new(),
                count: None,
                hits: Vec::new(),
            });
        }

        let url = search::build_search_url(&self.base_url, query)?;
        tracing::debug!(%url, "Searching products");

        let response = self.transport.get(url).await?;
        if !response.is_success() {
            return Err(OffError::UpstreamHttp(response.status));
        }

        search::parse_search(&response.body, query)
    }
}
