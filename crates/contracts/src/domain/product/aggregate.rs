use serde::{Deserialize, Serialize};

use crate::enums::AlcoholContent;
use crate::shared::api::ProductPayload;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Catalog record
// ============================================================================

/// A cosmetics product as the catalog API returns it.
///
/// Prices are whole Rupiah, so an integer field. `updated_at` is optional:
/// older API deployments do not send it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub suitable_for: String,
    pub alcohol_content: AlcoholContent,
    pub price: i64,
    pub image_url: String,
    pub external_url: String,
    pub ingredients: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Product {
    /// Apply an accepted create/update payload to the local copy
    pub fn update(&mut self, payload: &ProductPayload) {
        self.name = payload.name.clone();
        self.brand = payload.brand.clone();
        self.suitable_for = payload.suitable_for.clone();
        self.alcohol_content = payload.alcohol_content;
        self.price = payload.price;
        self.image_url = payload.image_url.clone();
        self.external_url = payload.external_url.clone();
        self.ingredients = payload.ingredients.clone();
        self.updated_at = Some(chrono::Utc::now());
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Nama produk tidak boleh kosong".into());
        }
        if self.brand.trim().is_empty() {
            return Err("Brand tidak boleh kosong".into());
        }
        if self.price <= 0 {
            return Err("Harga harus lebih dari 0".into());
        }
        if self.ingredients.trim().is_empty() {
            return Err("Komposisi tidak boleh kosong".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: ProductId::new(7),
            name: "Niacinamide Serum".to_string(),
            brand: "Somethinc".to_string(),
            suitable_for: "Semua jenis kulit".to_string(),
            alcohol_content: AlcoholContent::No,
            price: 150_000,
            image_url: "https://example.com/serum.jpg".to_string(),
            external_url: "https://tokopedia.com/serum".to_string(),
            ingredients: "Aqua, Niacinamide".to_string(),
            updated_at: None,
        }
    }

    #[test]
    fn test_validate_accepts_sample() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_price() {
        let mut product = sample();
        product.price = 0;
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_deserializes_api_row_without_updated_at() {
        let json = r#"{
            "id": 3,
            "name": "Toner",
            "brand": "Avoskin",
            "suitable_for": "Kulit kering",
            "alcohol_content": "no",
            "price": 99000,
            "image_url": "https://example.com/t.jpg",
            "external_url": "https://shopee.co.id/t",
            "ingredients": "Aqua, Glycerin"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(3));
        // legacy lowercase flag normalizes on read
        assert_eq!(product.alcohol_content, AlcoholContent::No);
        assert_eq!(product.updated_at, None);
    }
}
