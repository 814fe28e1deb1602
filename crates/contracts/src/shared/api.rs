use serde::{Deserialize, Serialize};

use crate::domain::product::Product;
use crate::enums::AlcoholContent;

/// Create/update body for `POST/PUT /api/productsv2`.
///
/// Same shape as [`Product`] minus the server-assigned id. Price is parsed
/// from the form before it gets here; the API rejects non-integer prices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductPayload {
    pub name: String,
    pub brand: String,
    pub suitable_for: String,
    pub alcohol_content: AlcoholContent,
    pub price: i64,
    pub image_url: String,
    pub external_url: String,
    pub ingredients: String,
}

impl From<&Product> for ProductPayload {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            brand: product.brand.clone(),
            suitable_for: product.suitable_for.clone(),
            alcohol_content: product.alcohol_content,
            price: product.price,
            image_url: product.image_url.clone(),
            external_url: product.external_url.clone(),
            ingredients: product.ingredients.clone(),
        }
    }
}

/// Error body the catalog API returns on a failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

impl ApiErrorBody {
    /// Pull the human-readable message out of a raw response body, if any
    pub fn message_from_body(body: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .map(|e| e.error)
    }
}
