use url::Url;

use crate::error::OffError;
use crate::model::Lookup;

use super::wire::ProductEnvelope;

/// Build the v2 product endpoint URL, percent-encoding the barcode into the
/// path segment.
pub fn build_product_url(base_url: &Url, barcode: &str) -> Result<Url, OffError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| OffError::Config(format!("Base URL cannot carry a path: {}", base_url)))?
        .extend(["api", "v2", "product"])
        .push(&format!("{barcode}.json"));
    Ok(url)
}

/// Map a product envelope body to a lookup outcome. Upstream signals
/// existence with `status`: 1 means found, anything else means the barcode
/// is not in the database.
pub fn parse_lookup(body: &str, barcode: &str) -> Result<Lookup, OffError> {
    let envelope: ProductEnvelope =
        serde_json::from_str(body).map_err(|e| OffError::MalformedResponse(e.to_string()))?;

    if envelope.status != 1 {
        tracing::debug!(
            barcode,
            status_verbose = envelope.status_verbose.as_deref().unwrap_or(""),
            "Product not in Open Food Facts"
        );
        return Ok(Lookup::NotFound);
    }

    let Some(product) = envelope.product else {
        // status 1 without a payload has no product to show
        return Ok(Lookup::NotFound);
    };

    let code = envelope
        .code
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| barcode.to_string());

    Ok(Lookup::Found(product.into_record(code)))
}
