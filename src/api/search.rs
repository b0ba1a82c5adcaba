use url::Url;

use crate::error::OffError;
use crate::model::{SearchHit, SearchResult};

use super::wire::{coerce_number, SearchEnvelope, WireSearchEntry};

/// Fixed upstream page size, bounding response size and latency.
pub const PAGE_SIZE: u32 = 25;

/// Build the legacy free-text search URL with the simple-search flag set.
pub fn build_search_url(base_url: &Url, query: &str) -> Result<Url, OffError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| OffError::Config(format!("Base URL cannot carry a path: {}", base_url)))?
        .extend(["cgi", "search.pl"]);
    url.query_pairs_mut()
        .append_pair("search_terms", query)
        .append_pair("search_simple", "1")
        .append_pair("action", "process")
        .append_pair("json", "1")
        .append_pair("page_size", &PAGE_SIZE.to_string());
    Ok(url)
}

/// Parse a search response body, dropping entries without a barcode or a
/// name. Upstream order is preserved; there is no client-side re-ranking.
pub fn parse_search(body: &str, query: &str) -> Result<SearchResult, OffError> {
    let envelope: SearchEnvelope =
        serde_json::from_str(body).map_err(|e| OffError::MalformedResponse(e.to_string()))?;

    let count = coerce_number(envelope.count.as_ref()).map(|n| n as u32);
    let hits: Vec<SearchHit> = envelope
        .products
        .into_iter()
        .filter_map(WireSearchEntry::into_hit)
        .collect();

    Ok(SearchResult {
        query: query.to_string(),
        count,
        hits,
    })
}
