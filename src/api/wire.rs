use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::model::{Nutriments, ProductRecord, SearchHit};

/// Top-level envelope of `GET /api/v2/product/{barcode}.json`.
/// `status` is 1 when the barcode exists, 0 when it does not.
#[derive(Debug, Deserialize)]
pub struct ProductEnvelope {
    #[serde(default)]
    pub status: i64,
    #[serde(default)]
    pub status_verbose: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub product: Option<WireProduct>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireProduct {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub brands: Option<String>,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub nutriments: HashMap<String, Value>,
}

impl WireProduct {
    pub fn into_record(self, code: String) -> ProductRecord {
        let nutriments = Nutriments {
            sugars_per_100g: coerce_number(self.nutriments.get("sugars_100g")),
            carbs_per_100g: coerce_number(self.nutriments.get("carbohydrates_100g")),
            salt_per_100g: coerce_number(self.nutriments.get("salt_100g")),
            kcal_per_100g: coerce_number(self.nutriments.get("energy-kcal_100g")),
            kcal_per_serving: coerce_number(self.nutriments.get("energy-kcal_serving")),
        };

        ProductRecord {
            code,
            name: non_empty(self.product_name),
            brand: non_empty(self.brands),
            quantity: non_empty(self.quantity),
            image_url: non_empty(self.image_url),
            nutriments,
        }
    }
}

/// Envelope of the legacy `/cgi/search.pl` endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub count: Option<Value>,
    #[serde(default)]
    pub products: Vec<WireSearchEntry>,
}

/// One search entry. The barcode arrives as a string or a bare number
/// depending on the product, and the name may live under either of two
/// locale-dependent keys.
#[derive(Debug, Default, Deserialize)]
pub struct WireSearchEntry {
    #[serde(default)]
    pub code: Option<Value>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub product_name_en: Option<String>,
    #[serde(default)]
    pub brands: Option<String>,
}

impl WireSearchEntry {
    /// A usable hit needs a barcode and at least one populated name key.
    /// Anything else is dropped.
    pub fn into_hit(self) -> Option<SearchHit> {
        let code = coerce_code(self.code.as_ref())?;
        let name = non_empty(self.product_name).or_else(|| non_empty(self.product_name_en))?;

        Some(SearchHit {
            code,
            name,
            brand: non_empty(self.brands),
        })
    }
}

/// Coerce an upstream numeric field to a finite f64. Open Food Facts serves
/// these as JSON numbers or as numeric strings depending on the product.
pub fn coerce_number(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Coerce an upstream barcode to a non-empty string.
pub fn coerce_code(value: Option<&Value>) -> Option<String> {
    let code = match value? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!code.is_empty()).then_some(code)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
