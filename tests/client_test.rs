use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::Mutex;
use url::Url;

use off_cli::api::transport::{RawResponse, Transport};
use off_cli::api::OffClient;
use off_cli::error::OffError;
use off_cli::model::Lookup;

/// Transport fake that records every request and replays canned responses.
#[derive(Clone, Default)]
struct RecordingTransport {
    responses: Arc<Mutex<VecDeque<Result<RawResponse, OffError>>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl RecordingTransport {
    fn with_responses(responses: Vec<Result<RawResponse, OffError>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::from(responses))),
            ..Default::default()
        }
    }

    fn response(status: u16, body: &str) -> Result<RawResponse, OffError> {
        Ok(RawResponse {
            status,
            body: body.to_string(),
        })
    }

    async fn requests(&self) -> Vec<String> {
        self.requests.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, url: Url) -> Result<RawResponse, OffError> {
        self.requests.lock().await.push(url.to_string());
        let mut guard = self.responses.lock().await;
        guard
            .pop_front()
            .unwrap_or_else(|| RecordingTransport::response(200, "{}"))
    }
}

fn client_with(transport: RecordingTransport) -> OffClient<RecordingTransport> {
    let base_url = Url::parse("https://world.openfoodfacts.org").unwrap();
    OffClient::with_transport(transport, base_url)
}

const FOUND_BODY: &str = r#"{
    "status": 1,
    "status_verbose": "product found",
    "code": "0123456789012",
    "product": {
        "product_name": "Crunchy Granola",
        "brands": "Acme Foods",
        "quantity": "500 g",
        "image_url": "https://images.openfoodfacts.org/xyz/front.jpg",
        "nutriments": {
            "sugars_100g": 18.2,
            "carbohydrates_100g": "61.4",
            "salt_100g": 0.3,
            "energy-kcal_100g": 420,
            "energy-kcal_serving": 168
        }
    }
}"#;

#[tokio::test]
async fn test_empty_input_issues_no_request() {
    let transport = RecordingTransport::default();
    let client = client_with(transport.clone());

    let err = client.product_by_barcode("   ").await.unwrap_err();
    assert!(matches!(err, OffError::InvalidInput));

    let result = client.search("\t \n").await.unwrap();
    assert!(result.hits.is_empty());
    assert_eq!(result.count, None);

    assert!(transport.requests().await.is_empty());
}

#[tokio::test]
async fn test_lookup_maps_status_one_to_found() {
    let transport =
        RecordingTransport::with_responses(vec![RecordingTransport::response(200, FOUND_BODY)]);
    let client = client_with(transport.clone());

    let outcome = client.product_by_barcode("0123456789012").await.unwrap();
    let record = match outcome {
        Lookup::Found(record) => record,
        Lookup::NotFound => panic!("expected a found product"),
    };

    assert_eq!(record.code, "0123456789012");
    assert_eq!(record.name.as_deref(), Some("Crunchy Granola"));
    assert_eq!(record.brand.as_deref(), Some("Acme Foods"));
    assert_eq!(record.quantity.as_deref(), Some("500 g"));
    assert_eq!(record.nutriments.sugars_per_100g, Some(18.2));
    // numeric string upstream still coerces
    assert_eq!(record.nutriments.carbs_per_100g, Some(61.4));
    assert_eq!(record.nutriments.kcal_per_100g, Some(420.0));
    assert_eq!(record.nutriments.kcal_per_serving, Some(168.0));

    let requests = transport.requests().await;
    assert_eq!(
        requests,
        vec!["https://world.openfoodfacts.org/api/v2/product/0123456789012.json".to_string()]
    );
}

#[tokio::test]
async fn test_lookup_maps_status_zero_to_not_found() {
    let body = r#"{"status":0,"status_verbose":"product not found","code":"0000000000000"}"#;
    let transport =
        RecordingTransport::with_responses(vec![RecordingTransport::response(200, body)]);
    let client = client_with(transport);

    let outcome = client.product_by_barcode("0000000000000").await.unwrap();
    assert_eq!(outcome, Lookup::NotFound);
}

#[tokio::test]
async fn test_non_success_status_fails_both_operations() {
    let transport = RecordingTransport::with_responses(vec![
        RecordingTransport::response(500, "server error"),
        RecordingTransport::response(500, "server error"),
    ]);
    let client = client_with(transport);

    let err = client.product_by_barcode("0123456789012").await.unwrap_err();
    assert!(matches!(err, OffError::UpstreamHttp(500)));

    let err = client.search("yogurt").await.unwrap_err();
    assert!(matches!(err, OffError::UpstreamHttp(500)));
}

#[tokio::test]
async fn test_search_filters_entries_without_code_or_name() {
    let body = r#"{
        "count": 4,
        "products": [
            {"code": "111", "product_name": "Greek Yogurt", "brands": "Acme"},
            {"product_name": "Missing Barcode"},
            {"code": "222"},
            {"code": 333, "product_name_en": "Plain Yogurt"}
        ]
    }"#;
    let transport =
        RecordingTransport::with_responses(vec![RecordingTransport::response(200, body)]);
    let client = client_with(transport.clone());

    let result = client.search("yogurt").await.unwrap();

    assert_eq!(result.query, "yogurt");
    assert_eq!(result.count, Some(4));
    let codes: Vec<&str> = result.hits.iter().map(|h| h.code.as_str()).collect();
    assert_eq!(codes, vec!["111", "333"]);
    assert_eq!(result.hits[1].name, "Plain Yogurt");

    let requests = transport.requests().await;
    assert_eq!(requests.len(), 1);
    assert!(requests[0].contains("search_terms=yogurt"));
    assert!(requests[0].contains("search_simple=1"));
    assert!(requests[0].contains("page_size=25"));
}

#[tokio::test]
async fn test_unparseable_nutriment_becomes_unknown() {
    let body = r#"{
        "status": 1,
        "product": {
            "product_name": "Mystery Snack",
            "nutriments": {
                "sugars_100g": "not-a-number",
                "salt_100g": 0.1
            }
        }
    }"#;
    let transport =
        RecordingTransport::with_responses(vec![RecordingTransport::response(200, body)]);
    let client = client_with(transport);

    let outcome = client.product_by_barcode("555").await.unwrap();
    let record = match outcome {
        Lookup::Found(record) => record,
        Lookup::NotFound => panic!("expected a found product"),
    };

    assert_eq!(record.nutriments.sugars_per_100g, None);
    assert_eq!(record.nutriments.salt_per_100g, Some(0.1));
}

#[tokio::test]
async fn test_repeated_lookup_is_idempotent() {
    let transport = RecordingTransport::with_responses(vec![
        RecordingTransport::response(200, FOUND_BODY),
        RecordingTransport::response(200, FOUND_BODY),
    ]);
    let client = client_with(transport.clone());

    let first = client.product_by_barcode("0123456789012").await.unwrap();
    let second = client.product_by_barcode("0123456789012").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(transport.requests().await.len(), 2);
}

#[tokio::test]
async fn test_failure_does_not_block_retry() {
    let transport = RecordingTransport::with_responses(vec![
        RecordingTransport::response(503, "unavailable"),
        RecordingTransport::response(200, FOUND_BODY),
    ]);
    let client = client_with(transport);

    let err = client.product_by_barcode("0123456789012").await.unwrap_err();
    assert!(matches!(err, OffError::UpstreamHttp(503)));

    let outcome = client.product_by_barcode("0123456789012").await.unwrap();
    assert!(matches!(outcome, Lookup::Found(_)));
}

#[tokio::test]
async fn test_transport_error_surfaces_as_failure() {
    let transport = RecordingTransport::with_responses(vec![Err(OffError::Timeout)]);
    let client = client_with(transport);

    let err = client.product_by_barcode("0123456789012").await.unwrap_err();
    assert!(matches!(err, OffError::Timeout));
}

#[tokio::test]
async fn test_malformed_body_surfaces_as_malformed_response() {
    let transport = RecordingTransport::with_responses(vec![RecordingTransport::response(
        200,
        "<html>maintenance</html>",
    )]);
    let client = client_with(transport);

    let err = client.product_by_barcode("0123456789012").await.unwrap_err();
    assert!(matches!(err, OffError::MalformedResponse(_)));
}
