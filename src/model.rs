use serde::{Deserialize, Serialize};

/// A product normalized from the detail-lookup response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub code: String,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub quantity: Option<String>,
    pub image_url: Option<String>,
    pub nutriments: Nutriments,
}

/// Per-100g and per-serving nutrient values. `None` means the upstream
/// value was missing or not a finite number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutriments {
    pub sugars_per_100g: Option<f64>,
    pub carbs_per_100g: Option<f64>,
    pub salt_per_100g: Option<f64>,
    pub kcal_per_100g: Option<f64>,
    pub kcal_per_serving: Option<f64>,
}

/// Outcome of a barcode lookup. `NotFound` is a successful call with a
/// negative answer, distinct from the error path.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(ProductRecord),
    NotFound,
}

/// A single entry from the free-text search endpoint, which carries far
/// fewer fields than a direct product lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub code: String,
    pub name: String,
    pub brand: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub query: String,
    pub count: Option<u32>,
    pub hits: Vec<SearchHit>,
}
