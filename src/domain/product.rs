use chrono::NaiveDateTime;

use crate::domain::product_review::ProductReview;

/// Domain representation of a catalog product.
#[derive(Debug, Clone)]
pub struct Product {
    /// Unique identifier assigned by storage on first insert.
    pub id: i32,
    /// Human-readable title, fixed at creation.
    pub title: String,
    /// Longer description shown to users.
    pub description: String,
    /// Current price of the product.
    pub price: f64,
    /// Timestamp for when the product was registered.
    pub registered_at: NaiveDateTime,
    /// Reviews attached to the product. Populated only by detail lookups;
    /// empty for summary reads.
    pub reviews: Vec<ProductReview>,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
    /// Timestamp captured when the payload was created.
    pub registered_at: NaiveDateTime,
}

impl NewProduct {
    /// Build a new product payload, capturing the current timestamp.
    pub fn new(title: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            price,
            registered_at: chrono::Utc::now().naive_utc(),
        }
    }
}

/// Replacement values applied when updating an existing product.
///
/// Carries the full new value for every mutable field; the repository
/// issues one explicit write from it, without tracking what changed.
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    pub description: String,
    pub price: f64,
}

impl UpdateProduct {
    pub fn new(description: impl Into<String>, price: f64) -> Self {
        Self {
            description: description.into(),
            price,
        }
    }
}
