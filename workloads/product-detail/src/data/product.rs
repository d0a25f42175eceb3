//! Product wire shapes and the raw-to-display field mapping.

use serde::Deserialize;

/// Product object as the catalog API returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProduct {
    pub id: String,
    pub title: String,
    pub brand: String,
    pub price: u64,
    pub rating: f64,
    pub total_reviews: u64,
    pub availability: String,
    pub description: String,
    pub style: String,
    pub image_url: String,
}

/// Detail response body: the primary product plus its recommendations.
///
/// Similar-product entries share the product shape and never carry their own
/// `similar_products`, so the field defaults to empty.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProductDetail {
    #[serde(flatten)]
    pub product: RawProduct,
    #[serde(default)]
    pub similar_products: Vec<RawProduct>,
}

/// Display-shaped product record.
///
/// Every field comes from the matching raw field through [`From`], the one
/// mapping shared by the primary product and each similar entry. Records are
/// never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: String,
    pub title: String,
    pub brand: String,
    pub price: u64,
    pub rating: f64,
    pub total_reviews: u64,
    pub availability: String,
    pub description: String,
    pub style: String,
    pub image_url: String,
}

impl From<RawProduct> for ProductRecord {
    fn from(raw: RawProduct) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            brand: raw.brand,
            price: raw.price,
            rating: raw.rating,
            total_reviews: raw.total_reviews,
            availability: raw.availability,
            description: raw.description,
            style: raw.style,
            image_url: raw.image_url,
        }
    }
}

impl ProductRecord {
    /// Price formatted for display, e.g. "RS 999/-".
    pub fn price_display(&self) -> String {
        format!("RS {}/-", self.price)
    }
}
