use chrono::NaiveDateTime;

/// Domain representation of a review left on a product.
#[derive(Debug, Clone)]
pub struct ProductReview {
    /// Unique identifier assigned by storage on first insert.
    pub id: i32,
    /// Name of the reviewer.
    pub author: String,
    /// Score given by the reviewer.
    pub rating: i32,
    /// Free-text commentary.
    pub comments: String,
    /// Timestamp for when the review was registered.
    pub registered_at: NaiveDateTime,
    /// Identifier of the reviewed product.
    pub product_id: i32,
}

/// Payload required to insert a new review. Reviews are immutable after
/// creation, so there is no update counterpart.
#[derive(Debug, Clone)]
pub struct NewProductReview {
    pub author: String,
    pub rating: i32,
    pub comments: String,
    pub registered_at: NaiveDateTime,
    pub product_id: i32,
}

impl NewProductReview {
    /// Build a new review payload, capturing the current timestamp.
    pub fn new(
        author: impl Into<String>,
        rating: i32,
        comments: impl Into<String>,
        product_id: i32,
    ) -> Self {
        Self {
            author: author.into(),
            rating,
            comments: comments.into(),
            registered_at: chrono::Utc::now().naive_utc(),
            product_id,
        }
    }
}
