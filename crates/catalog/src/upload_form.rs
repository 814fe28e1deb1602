//! The product upload/edit wizard: four sections of data entry over the
//! generic form engine, and payload assembly once every section is complete.

use once_cell::sync::Lazy;
use thiserror::Error;

use contracts::domain::product::Product;
use contracts::enums::AlcoholContent;
use contracts::shared::api::ProductPayload;
use form_engine::{FieldStore, FormEngine, SectionDef, SectionId, SectionTable};

// Field names as the catalog API knows them
pub const F_NAME: &str = "name";
pub const F_BRAND: &str = "brand";
pub const F_SUITABLE_FOR: &str = "suitable_for";
pub const F_ALCOHOL_CONTENT: &str = "alcohol_content";
pub const F_PRICE: &str = "price";
pub const F_IMAGE_URL: &str = "image_url";
pub const F_EXTERNAL_URL: &str = "external_url";
pub const F_INGREDIENTS: &str = "ingredients";

pub const SECTION_INFO: SectionId = 1;
pub const SECTION_DETAIL: SectionId = 2;
pub const SECTION_LINKS: SectionId = 3;
pub const SECTION_INGREDIENTS: SectionId = 4;

/// Detail section needs more than non-empty fields: the price must be a
/// positive integer and the alcohol flag must be one of the known values.
fn detail_section_valid(fields: &FieldStore) -> Result<bool, String> {
    let price_ok = fields
        .get_trimmed(F_PRICE)
        .parse::<i64>()
        .map(|p| p > 0)
        .unwrap_or(false);
    let alcohol_ok = AlcoholContent::from_code(fields.get(F_ALCOHOL_CONTENT)).is_some();
    Ok(price_ok && alcohol_ok)
}

static UPLOAD_SECTIONS: Lazy<SectionTable> = Lazy::new(|| {
    SectionTable::new(vec![
        SectionDef::new(SECTION_INFO, "Info Produk", &[F_NAME, F_BRAND]),
        SectionDef::new(
            SECTION_DETAIL,
            "Detail Tambahan",
            &[F_SUITABLE_FOR, F_ALCOHOL_CONTENT, F_PRICE],
        )
        .with_validator(detail_section_valid),
        SectionDef::new(SECTION_LINKS, "Link Produk", &[F_IMAGE_URL, F_EXTERNAL_URL]),
        SectionDef::new(SECTION_INGREDIENTS, "Komposisi Bahan", &[F_INGREDIENTS]),
    ])
    .expect("upload section table is valid")
});

/// Section table of the upload wizard
pub fn upload_sections() -> SectionTable {
    UPLOAD_SECTIONS.clone()
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("form is not complete yet")]
    Incomplete,

    #[error("invalid price: {0:?}")]
    InvalidPrice(String),

    #[error("invalid alcohol content: {0:?}")]
    InvalidAlcohol(String),
}

/// One upload or edit session of the product wizard
#[derive(Debug, Clone)]
pub struct ProductForm {
    engine: FormEngine,
}

impl ProductForm {
    /// Blank form for a new product
    pub fn new() -> Self {
        Self {
            engine: FormEngine::new(upload_sections()),
        }
    }

    /// Form prefilled from an existing record, for the edit dialog
    pub fn for_edit(product: &Product) -> Self {
        let mut form = Self::new();
        form.engine.set_field(F_NAME, &product.name);
        form.engine.set_field(F_BRAND, &product.brand);
        form.engine.set_field(F_SUITABLE_FOR, &product.suitable_for);
        form.engine
            .set_field(F_ALCOHOL_CONTENT, product.alcohol_content.code());
        form.engine.set_field(F_PRICE, &product.price.to_string());
        form.engine.set_field(F_IMAGE_URL, &product.image_url);
        form.engine.set_field(F_EXTERNAL_URL, &product.external_url);
        form.engine.set_field(F_INGREDIENTS, &product.ingredients);
        form
    }

    pub fn set_field(&mut self, name: &str, value: &str) {
        self.engine.set_field(name, value);
    }

    /// Clear the form, as after a reset click or a successful submission
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    pub fn engine(&self) -> &FormEngine {
        &self.engine
    }

    pub fn is_submittable(&self) -> bool {
        self.engine.is_submittable()
    }

    pub fn progress_percent(&self) -> u8 {
        self.engine.progress_percent()
    }

    /// Build the create/update body from the current field values.
    ///
    /// Only valid on a complete form; the price and alcohol fields are parsed
    /// again here so a payload can never carry values the API would reject.
    pub fn payload(&self) -> Result<ProductPayload, PayloadError> {
        if !self.engine.is_submittable() {
            return Err(PayloadError::Incomplete);
        }

        let fields = self.engine.fields();

        let raw_price = fields.get_trimmed(F_PRICE);
        let price = raw_price
            .parse::<i64>()
            .map_err(|_| PayloadError::InvalidPrice(raw_price.to_string()))?;

        let raw_alcohol = fields.get(F_ALCOHOL_CONTENT);
        let alcohol_content = AlcoholContent::from_code(raw_alcohol)
            .ok_or_else(|| PayloadError::InvalidAlcohol(raw_alcohol.to_string()))?;

        log::debug!("form {}: assembling product payload", self.engine.session_id());

        Ok(ProductPayload {
            name: fields.get_trimmed(F_NAME).to_string(),
            brand: fields.get_trimmed(F_BRAND).to_string(),
            suitable_for: fields.get_trimmed(F_SUITABLE_FOR).to_string(),
            alcohol_content,
            price,
            image_url: fields.get_trimmed(F_IMAGE_URL).to_string(),
            external_url: fields.get_trimmed(F_EXTERNAL_URL).to_string(),
            ingredients: fields.get_trimmed(F_INGREDIENTS).to_string(),
        })
    }
}

impl Default for ProductForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::product::ProductId;

    fn fill_first_three_sections(form: &mut ProductForm) {
        form.set_field(F_NAME, "Niacinamide Serum");
        form.set_field(F_BRAND, "Somethinc");
        form.set_field(F_SUITABLE_FOR, "Semua jenis kulit");
        form.set_field(F_ALCOHOL_CONTENT, "No");
        form.set_field(F_PRICE, "150000");
        form.set_field(F_IMAGE_URL, "https://example.com/serum.jpg");
        form.set_field(F_EXTERNAL_URL, "https://tokopedia.com/serum");
    }

    #[test]
    fn test_three_of_four_sections_is_75_percent() {
        let mut form = ProductForm::new();
        fill_first_three_sections(&mut form);

        assert_eq!(form.progress_percent(), 75);
        assert!(!form.is_submittable());
        assert_eq!(form.payload(), Err(PayloadError::Incomplete));

        form.set_field(F_INGREDIENTS, "Aqua");
        assert_eq!(form.progress_percent(), 100);
        assert!(form.is_submittable());
    }

    #[test]
    fn test_negative_price_blocks_detail_section() {
        let mut form = ProductForm::new();
        fill_first_three_sections(&mut form);
        form.set_field(F_INGREDIENTS, "Aqua");
        assert!(form.is_submittable());

        form.set_field(F_PRICE, "-5");
        assert!(!form.engine().completion_state().contains(&SECTION_DETAIL));
        assert!(!form.is_submittable());
        assert_eq!(form.progress_percent(), 75);
    }

    #[test]
    fn test_unknown_alcohol_value_blocks_detail_section() {
        let mut form = ProductForm::new();
        fill_first_three_sections(&mut form);
        form.set_field(F_ALCOHOL_CONTENT, "maybe");
        assert!(!form.engine().completion_state().contains(&SECTION_DETAIL));
    }

    #[test]
    fn test_payload_normalizes_and_parses() {
        let mut form = ProductForm::new();
        fill_first_three_sections(&mut form);
        form.set_field(F_ALCOHOL_CONTENT, "no"); // legacy casing from old rows
        form.set_field(F_INGREDIENTS, "  Aqua, Niacinamide  ");

        let payload = form.payload().unwrap();
        assert_eq!(payload.price, 150_000);
        assert_eq!(payload.alcohol_content, AlcoholContent::No);
        assert_eq!(payload.ingredients, "Aqua, Niacinamide");
    }

    #[test]
    fn test_for_edit_prefills_complete_form() {
        let product = Product {
            id: ProductId::new(1),
            name: "Toner".to_string(),
            brand: "Avoskin".to_string(),
            suitable_for: "Kulit kering".to_string(),
            alcohol_content: AlcoholContent::Yes,
            price: 99_000,
            image_url: "https://example.com/t.jpg".to_string(),
            external_url: "https://shopee.co.id/t".to_string(),
            ingredients: "Aqua, Glycerin".to_string(),
            updated_at: None,
        };

        let form = ProductForm::for_edit(&product);
        assert!(form.is_submittable());
        assert_eq!(form.payload().unwrap(), ProductPayload::from(&product));
    }

    #[test]
    fn test_reset_returns_to_blank() {
        let mut form = ProductForm::new();
        fill_first_three_sections(&mut form);
        form.reset();
        assert_eq!(form.progress_percent(), 0);
        assert_eq!(form.engine().fields().get(F_NAME), "");
    }
}
