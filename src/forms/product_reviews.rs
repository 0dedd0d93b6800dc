use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::domain::product_review::NewProductReview;

/// Maximum allowed length for a review author, matching the column limit.
const AUTHOR_MAX_LEN: usize = 50;
const AUTHOR_MAX_LEN_VALIDATOR: u64 = AUTHOR_MAX_LEN as u64;

/// Accepted rating range.
const RATING_MIN: i32 = 0;
const RATING_MAX: i32 = 10;

/// Body accepted by the review creation endpoint. Serialized back to the
/// client verbatim in the 201 response.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddProductReviewForm {
    #[validate(length(max = AUTHOR_MAX_LEN_VALIDATOR))]
    pub author: String,
    #[validate(range(min = RATING_MIN, max = RATING_MAX))]
    pub rating: i32,
    pub comments: String,
}

impl AddProductReviewForm {
    /// Validates the payload into a domain `NewProductReview` bound to
    /// `product_id`.
    pub fn to_new_review(&self, product_id: i32) -> Result<NewProductReview, ValidationErrors> {
        self.validate()?;

        Ok(NewProductReview::new(
            self.author.as_str(),
            self.rating,
            self.comments.as_str(),
            product_id,
        ))
    }
}
